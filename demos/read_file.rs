//! Reads S-expressions from a file (or stdin) and prints each top-level form.
//!
//! Usage: cargo run --example read_file -- [--json] [PATH]

use anyhow::{Context, Result};
use sexpr_read::read_all;
use std::io::Read;

fn main() -> Result<()> {
    let mut json = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            path = Some(arg);
        }
    }

    let (name, source) = match path {
        Some(path) => {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path))?;
            (path, source)
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            ("<stdin>".to_string(), source)
        }
    };

    let forms = read_all(&name, &source).with_context(|| format!("failed to parse {}", name))?;

    for form in &forms {
        if json {
            println!("{}", serde_json::to_string_pretty(form)?);
        } else {
            println!("{}", form);
        }
    }

    Ok(())
}
