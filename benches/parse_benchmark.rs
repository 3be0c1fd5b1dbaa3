//! Benchmarks for the extraction hot paths.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic resume text; no OCR, NER model or
//! embedding encoder is involved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unresume::extract::{extract_contacts, extract_links, parse_experience};
use unresume::{normalize, ResumeParser, Segmenter};

/// Builds a synthetic resume with the given number of experience blocks.
fn synthetic_resume(jobs: usize) -> String {
    let mut text = String::from(
        "Jane Doe\nSenior Engineer\njane.doe@example.com | +1 555-123-4567\n\
         https://www.linkedin.com/in/janedoe | https://github.com/janedoe\n\nEXPERIENCE\n",
    );
    for i in 0..jobs {
        text.push_str(&format!(
            "Engineer, Company {}\nJan {} - Dec {}\n- built service {}\n- improved latency by {}%\n\n",
            i,
            2010 + i,
            2011 + i,
            i,
            i + 1
        ));
    }
    text.push_str("EDUCATION\nB.Sc Computer Science, MIT, 2009\nM.Sc Computer Science, MIT, 2011\n");
    text
}

fn bench_normalize(c: &mut Criterion) {
    let raw = synthetic_resume(20);

    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&raw)));
    });
}

fn bench_segment(c: &mut Criterion) {
    let text = normalize(&synthetic_resume(20));
    let segmenter = Segmenter::default();

    c.bench_function("segment", |b| {
        b.iter(|| segmenter.segment(black_box(&text)));
    });
}

fn bench_extractors(c: &mut Criterion) {
    let text = normalize(&synthetic_resume(20));
    let segmenter = Segmenter::default();
    let sections = segmenter.segment(&text);
    let experience = sections.get("EXPERIENCE").unwrap_or("").to_string();

    c.bench_function("extract_contacts", |b| {
        b.iter(|| extract_contacts(black_box(&text), true));
    });

    c.bench_function("extract_links", |b| {
        b.iter(|| extract_links(black_box(&text)));
    });

    c.bench_function("parse_experience", |b| {
        b.iter(|| parse_experience(black_box(&experience)));
    });
}

fn bench_parse_text(c: &mut Criterion) {
    let parser = ResumeParser::new();
    let mut group = c.benchmark_group("parse_text");

    for jobs in [1, 10, 50].iter() {
        let text = synthetic_resume(*jobs);
        group.bench_function(format!("{}_jobs", jobs), |b| {
            b.iter(|| parser.parse_text(black_box(&text)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_segment,
    bench_extractors,
    bench_parse_text,
);
criterion_main!(benches);
