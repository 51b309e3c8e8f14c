use criterion::{black_box, criterion_group, criterion_main, Criterion};
use subway_path::{Line, PathFinder, Station, StationId, SubwayGraph};

const GRID: u64 = 20;

fn station_at(row: u64, col: u64) -> Station {
    let id = row * GRID + col + 1;
    Station::with_id(StationId(id), format!("R{row}C{col}")).expect("valid name")
}

/// One line per row and per column of a `GRID` x `GRID` station grid
fn build_grid_lines() -> Vec<Line> {
    let mut lines = Vec::new();
    for row in 0..GRID {
        let mut line = Line::new(format!("Row {row}"), "bg-blue-300", station_at(row, 0), station_at(row, 1), 3)
            .expect("valid line");
        for col in 1..GRID - 1 {
            line.insert_section(station_at(row, col), station_at(row, col + 1), 3)
                .expect("extends down terminal");
        }
        lines.push(line);
    }
    for col in 0..GRID {
        let mut line = Line::new(format!("Col {col}"), "bg-red-300", station_at(0, col), station_at(1, col), 4)
            .expect("valid line")
            .with_surcharge(u32::try_from(col * 10).expect("small surcharge"));
        for row in 1..GRID - 1 {
            line.insert_section(station_at(row, col), station_at(row + 1, col), 4)
                .expect("extends down terminal");
        }
        lines.push(line);
    }
    lines
}

fn benchmark_path_finding(c: &mut Criterion) {
    let lines = build_grid_lines();
    let finder = PathFinder::default();
    let source = StationId(1);
    let target = StationId(GRID * GRID);

    c.bench_function("build_graph", |b| {
        b.iter(|| SubwayGraph::from_lines(black_box(&lines)));
    });

    // The full query, graph rebuild included
    c.bench_function("find_path_corner_to_corner", |b| {
        b.iter(|| finder.find_path(black_box(&lines), source, target, black_box(30)));
    });
}

criterion_group!(benches, benchmark_path_finding);
criterion_main!(benches);
