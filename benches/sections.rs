use criterion::{black_box, criterion_group, criterion_main, Criterion};
use subway_graph::models::{Distance, LineId, Section, SectionId, Sections, StationId};

const LINE: LineId = LineId(1);

/// Path 1 -> 2 -> ... -> count+1, stored in reverse order
fn long_line(count: u64) -> Sections {
    let edges = (1..=count)
        .rev()
        .map(|n| {
            Section::new(LINE, StationId(n), StationId(n + 1), Distance::new(10).expect("Valid distance"))
                .with_id(SectionId(n))
        })
        .collect();
    Sections::from_edges(LINE, edges).expect("Single line")
}

fn benchmark_sections(c: &mut Criterion) {
    let sections = long_line(200);
    let split = Section::new(LINE, StationId(100), StationId(10_000), Distance::new(3).expect("Valid distance"));

    c.bench_function("sorted_stations", |b| {
        b.iter(|| black_box(&sections).sorted_stations());
    });

    c.bench_function("insert_split", |b| {
        b.iter(|| black_box(&sections).insert(black_box(split.clone())));
    });

    c.bench_function("delete_interior_station", |b| {
        b.iter(|| black_box(&sections).delete_station(black_box(StationId(100))));
    });
}

criterion_group!(benches, benchmark_sections);
criterion_main!(benches);
