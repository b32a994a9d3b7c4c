//! Concurrent token stream
//!
//! [`lex`] runs a [`SExprLexer`] on its own thread and hands tokens to the
//! consumer through an ordered channel, so parsing can begin before lexing
//! has finished. The producer is the only sender and closes the channel when
//! input runs out.

use super::sexpr_lexer::SExprLexer;
use super::token::Token;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::thread::{self, JoinHandle};

/// Settings for the concurrent lexer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Channel capacity between lexer and consumer
    ///
    /// `None` is unbounded and the producer never blocks. `Some(n)` bounds
    /// the channel, so the producer waits whenever `n` tokens are pending;
    /// `Some(0)` makes every send a rendezvous with the consumer.
    pub channel_capacity: Option<usize>,
}

impl LexerConfig {
    /// Config with a bounded channel of the given capacity
    pub fn bounded(capacity: usize) -> Self {
        LexerConfig {
            channel_capacity: Some(capacity),
        }
    }
}

enum TokenSender {
    Unbounded(Sender<Result<Token>>),
    Bounded(SyncSender<Result<Token>>),
}

impl TokenSender {
    /// Returns false once the consumer has hung up
    fn send(&self, item: Result<Token>) -> bool {
        match self {
            TokenSender::Unbounded(tx) => tx.send(item).is_ok(),
            TokenSender::Bounded(tx) => tx.send(item).is_ok(),
        }
    }
}

/// Receiving end of a concurrent lexer
///
/// Yields tokens in exactly source order. `next` blocks until the producer
/// has a token ready and returns `None` once it has closed the channel.
pub struct TokenStream {
    name: String,
    receiver: Receiver<Result<Token>>,
    producer: Option<JoinHandle<()>>,
}

impl TokenStream {
    /// Name the stream was created with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Drains the stream into a vector, stopping at the first error
    ///
    /// This waits for the producer to finish, so it gives up the overlap
    /// between lexing and consuming.
    pub fn collect_tokens(self) -> Result<Vec<Token>> {
        self.collect()
    }
}

impl Iterator for TokenStream {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Ok(item) = self.receiver.recv() {
            return Some(item);
        }

        // Channel closed: the producer either finished or panicked
        let producer = self.producer.take()?;
        match producer.join() {
            Ok(()) => None,
            Err(_) => {
                tracing::warn!(name = %self.name, "lexer thread panicked");
                Some(Err(Error::ProducerFailed {
                    name: self.name.clone(),
                }))
            }
        }
    }
}

/// Starts lexing `input` on a background thread with an unbounded channel
pub fn lex(name: impl Into<String>, input: impl Into<String>) -> TokenStream {
    lex_with_config(name, input, &LexerConfig::default())
}

/// Starts lexing `input` on a background thread
pub fn lex_with_config(
    name: impl Into<String>,
    input: impl Into<String>,
    config: &LexerConfig,
) -> TokenStream {
    let name = name.into();
    let input = input.into();

    let producer_name = name.clone();
    spawn_producer(name, config, move |sender| {
        produce(
            &producer_name,
            SExprLexer::new(producer_name.as_str(), &input),
            &sender,
        );
    })
}

/// Validates `bytes` as UTF-8, then starts lexing them like [`lex`]
pub fn lex_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Result<TokenStream> {
    let input = String::from_utf8(bytes.into()).map_err(|e| Error::InvalidEncoding {
        offset: e.utf8_error().valid_up_to(),
    })?;
    Ok(lex(name, input))
}

/// Opens the channel and runs `producer` on its own thread
///
/// The channel closes when `producer` returns or unwinds and drops its sender.
fn spawn_producer<F>(name: String, config: &LexerConfig, producer: F) -> TokenStream
where
    F: FnOnce(TokenSender) + Send + 'static,
{
    let (sender, receiver) = match config.channel_capacity {
        None => {
            let (tx, rx) = mpsc::channel();
            (TokenSender::Unbounded(tx), rx)
        }
        Some(capacity) => {
            let (tx, rx) = mpsc::sync_channel(capacity);
            (TokenSender::Bounded(tx), rx)
        }
    };

    let producer = thread::spawn(move || producer(sender));

    TokenStream {
        name,
        receiver,
        producer: Some(producer),
    }
}

/// Sends every item from `tokens` in order
///
/// Returns false if the consumer hung up before the input ran out.
fn produce<I>(name: &str, tokens: I, sender: &TokenSender) -> bool
where
    I: IntoIterator<Item = Result<Token>>,
{
    let span = tracing::debug_span!("lex", name = %name);
    let _guard = span.enter();
    tracing::debug!("lexer started");

    let mut count = 0usize;
    for item in tokens {
        if item.is_ok() {
            count += 1;
        }
        if !sender.send(item) {
            tracing::debug!(tokens = count, "consumer hung up, lexer stopping");
            return false;
        }
    }

    tracing::debug!(tokens = count, "lexer finished");
    true
}
