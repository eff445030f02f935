use criterion::{Criterion, criterion_group, criterion_main};
use texparse_engine::{Argument, Element, Text, parse};
mod common;

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_tex_content(100);
    group.bench_function("flat_document", |b| {
        b.iter(|| {
            let root = parse(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(root);
        });
    });

    let nested = common::generate_nested_environments(50);
    group.bench_function("nested_environments", |b| {
        b.iter(|| {
            let root = parse(std::hint::black_box(&nested)).unwrap();
            std::hint::black_box(root);
        });
    });

    group.finish();
}

fn bench_serialize_after_edit(c: &mut Criterion) {
    let content = common::generate_tex_content(100);
    let root = parse(&content).unwrap();

    c.bench_function("serialize_untouched", |b| {
        b.iter(|| std::hint::black_box(root.string()));
    });

    c.bench_function("serialize_after_arg_edit", |b| {
        b.iter(|| {
            let mut edited = root.clone();
            if let Some(section) = edited.find_command_mut("section") {
                section.replace_arg(0, Argument::braced(vec![Text::new("Renamed").into()]));
            }
            std::hint::black_box(edited.string())
        });
    });
}

fn bench_queries(c: &mut Criterion) {
    let content = common::generate_tex_content(100);
    let root = parse(&content).unwrap();

    c.bench_function("find_commands", |b| {
        b.iter(|| std::hint::black_box(root.find_commands("item").len()));
    });
}

criterion_group!(
    benches,
    bench_parse_document,
    bench_serialize_after_edit,
    bench_queries
);
criterion_main!(benches);
