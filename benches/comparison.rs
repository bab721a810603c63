//! Comparison benchmarks: downup vs pulldown-cmark
//!
//! Run with: cargo bench --bench comparison
//!
//! The two do not accept the same grammar, so these numbers compare cost on
//! the constructs both understand, not output equality.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Sample documents restricted to constructs both parsers render
mod samples {
    pub const SMALL: &str = r#"# Heading

This is a paragraph with *emphasis* and **strong** text.

- Item 1
- Item 2
- Item 3

`inline code` and [a link](https://example.com).
"#;

    pub fn medium() -> String {
        let section = r#"## Section

Text with *emphasis*, **strong** and `code`, plus a [link](https://example.com)
and an image ![alt](./img.png).

- one
- two

> quoted *text*

"#;
        section.repeat(20)
    }
}

fn parse_downup(input: &str) -> String {
    downup::to_html(input).unwrap_or_default()
}

fn parse_pulldown(input: &str) -> String {
    use pulldown_cmark::{Options, Parser, html};

    let parser = Parser::new_ext(input, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES);
    let mut out = String::with_capacity(input.len() * 2);
    html::push_html(&mut out, parser);
    out
}

fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let medium = samples::medium();
    let inputs = [("small", samples::SMALL), ("medium", medium.as_str())];

    for (name, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("downup", name), input, |b, input| {
            b.iter(|| parse_downup(black_box(input)))
        });
        group.bench_with_input(BenchmarkId::new("pulldown-cmark", name), input, |b, input| {
            b.iter(|| parse_pulldown(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_comparison);
criterion_main!(benches);
