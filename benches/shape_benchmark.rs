//! Benchmarks for direction correction and glyph reshaping.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mustakhrij::shape::{fix, reshape};

const SAMPLE: &str = "المادة الأولى: يقصد بالألفاظ والعبارات الآتية المعاني المبينة أمام كل منها\n\
     المادة الثانية: تسري أحكام هذا النظام على الشركات التي تؤسس في المملكة\n\
     Article 3: mixed Latin and عربية content on one line\n\
     A plain Latin line that passes through untouched";

fn bench_fix(c: &mut Criterion) {
    c.bench_function("direction_fix", |b| {
        b.iter(|| fix(black_box(SAMPLE)));
    });
}

fn bench_reshape(c: &mut Criterion) {
    c.bench_function("glyph_reshape", |b| {
        b.iter(|| reshape(black_box(SAMPLE)));
    });
}

criterion_group!(benches, bench_fix, bench_reshape);
criterion_main!(benches);
