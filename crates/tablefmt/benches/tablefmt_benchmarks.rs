use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use tablefmt::{Color, FontAlign, FontStyle, Format, RenderOptions, Table, merge, resolve, wrap};

const SAMPLE_PARAGRAPH: &str =
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt.";

fn full_format() -> Format {
    Format::new()
        .width(12)
        .padding(1)
        .margin(0)
        .color(Color::White)
        .background_color(Color::Blue)
        .font_style([FontStyle::Bold, FontStyle::Underline])
        .font_align(FontAlign::Center)
        .border("=")
        .corner("*")
        .column_separator("|")
}

fn sample_table(rows: usize) -> Table {
    let mut table = Table::new();
    table.add_row(["Name", "Description", "Count"]);
    for i in 0..rows {
        table.add_row([format!("item-{i}"), SAMPLE_PARAGRAPH.to_string(), i.to_string()]);
    }
    table.update_format(|f| f.color(Color::White));
    table[0].update_format(|f| f.font_style([FontStyle::Bold]).font_align(FontAlign::Center));
    table
}

fn bench_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("tablefmt/formats");

    let primary = Format::new().width(5).font_color(Color::Red);
    let secondary = full_format();

    group.bench_function("merge", |b| {
        b.iter(|| black_box(merge(black_box(&primary), black_box(&secondary))));
    });

    group.bench_function("resolve_chain", |b| {
        let cell = Format::new().background_color(Color::Yellow);
        b.iter(|| black_box(resolve::resolve([&cell, &primary, &secondary])));
    });

    group.bench_function("resolve_empty", |b| {
        b.iter(|| black_box(Format::new().resolve()));
    });

    group.finish();
}

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("tablefmt/wrap");
    group.throughput(Throughput::Bytes(SAMPLE_PARAGRAPH.len() as u64));

    for width in [4usize, 16, 80] {
        group.bench_function(format!("paragraph_w{width}"), |b| {
            b.iter(|| black_box(wrap(black_box(SAMPLE_PARAGRAPH), width)));
        });
    }

    group.bench_function("long_word_w3", |b| {
        let word = "x".repeat(200);
        b.iter(|| black_box(wrap(&word, 3)));
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("tablefmt/render");

    for rows in [3usize, 30] {
        let table = sample_table(rows);
        group.bench_function(format!("plain_{rows}_rows"), |b| {
            b.iter(|| black_box(table.render_plain()));
        });
        group.bench_function(format!("colored_{rows}_rows"), |b| {
            b.iter(|| black_box(table.render(RenderOptions::colored())));
        });
    }

    let mut narrow = sample_table(10);
    narrow.update_format(|f| f.width(10));
    group.bench_function("wrapped_10_rows", |b| {
        b.iter(|| black_box(narrow.render_plain()));
    });

    group.finish();
}

criterion_group!(tablefmt_benches, bench_formats, bench_wrap, bench_render);
criterion_main!(tablefmt_benches);
