use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sexpr_read::{lex, Lexer, Parser};

fn sample_source() -> String {
    let form = "(define (fib n)\n  (if (< n 2)\n      n\n      (+ (fib (- n 1)) (fib (- n 2)))))\n";
    format!("(program\n{})", form.repeat(200))
}

fn lexer_benchmark(c: &mut Criterion) {
    let source = sample_source();

    c.bench_function("tokenize lazily", |b| {
        b.iter(|| Lexer::new("bench", black_box(&source)).scan_tokens().unwrap())
    });

    c.bench_function("tokenize on a thread", |b| {
        b.iter(|| lex("bench", black_box(source.as_str())).collect_tokens().unwrap())
    });
}

fn parser_benchmark(c: &mut Criterion) {
    let source = sample_source();

    c.bench_function("parse lazily", |b| {
        b.iter(|| {
            Parser::new(Lexer::new("bench", black_box(&source)))
                .parse_top_level()
                .unwrap()
        })
    });

    c.bench_function("parse streamed", |b| {
        b.iter(|| {
            Parser::new(lex("bench", black_box(source.as_str())))
                .parse_top_level()
                .unwrap()
        })
    });
}

criterion_group!(benches, lexer_benchmark, parser_benchmark);
criterion_main!(benches);
