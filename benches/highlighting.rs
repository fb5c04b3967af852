//! Benchmarks for syntax highlighting and inline rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use inklet::highlight::highlight;
use inklet::inline::render_inline;
use inklet::styled::Rgb;

const PYTHON_SNIPPET: &str = r#"
import sys

class Greeter:
    def __init__(self, name):
        self.name = name  # remembered

    def greet(self, times=3):
        for i in range(times):
            print(f"hello {self.name}", i + 0.5)
"#;

fn bench_highlight_python(c: &mut Criterion) {
    c.bench_function("highlight_python", |b| {
        b.iter(|| highlight(black_box(PYTHON_SNIPPET), Some("python"), true))
    });
}

fn bench_highlight_csv(c: &mut Criterion) {
    let csv = "name,count,price\nwidget,3,9.99\ngadget,7,1.25";
    c.bench_function("highlight_csv", |b| {
        b.iter(|| highlight(black_box(csv), Some("csv"), true))
    });
}

fn bench_inline_mixed(c: &mut Criterion) {
    let text = "Some **bold** text with `code` and a [link](https://example.com) too";
    let bg = Rgb::new(40, 44, 52);
    c.bench_function("inline_mixed", |b| {
        b.iter(|| render_inline(black_box(text), bg))
    });
}

criterion_group!(
    benches,
    bench_highlight_python,
    bench_highlight_csv,
    bench_inline_mixed
);
criterion_main!(benches);
