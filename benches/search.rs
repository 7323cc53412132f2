use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazysp::{astar, dijkstra};

const WIDTH: i64 = 64;
const HEIGHT: i64 = 64;

fn grid_steps(&(x, y): &(i64, i64), traversed: &u64) -> Vec<((i64, i64), u64)> {
    [(0, -1), (1, 0), (0, 1), (-1, 0)]
        .iter()
        .filter_map(|&(dx, dy)| {
            let (nx, ny) = (x + dx, y + dy);
            (nx >= 0 && ny >= 0 && nx < WIDTH && ny < HEIGHT).then(|| ((nx, ny), traversed + 1))
        })
        .collect()
}

fn grid_steps_guided(state: &(i64, i64), traversed: &u64) -> Vec<((i64, i64), u64, u64)> {
    grid_steps(state, traversed)
        .into_iter()
        .map(|(next, traversed)| {
            let manhattan = ((WIDTH - 1 - next.0).abs() + (HEIGHT - 1 - next.1).abs()) as u64;
            (next, traversed, traversed + manhattan)
        })
        .collect()
}

fn bench_grid_search(c: &mut Criterion) {
    let goal = (WIDTH - 1, HEIGHT - 1);

    c.bench_function("dijkstra_grid_cost", |b| {
        b.iter(|| dijkstra::shortest_path_cost(black_box((0, 0)), grid_steps, goal).unwrap())
    });

    c.bench_function("dijkstra_grid_path", |b| {
        b.iter(|| dijkstra::shortest_path(black_box((0, 0)), grid_steps, goal).unwrap())
    });

    c.bench_function("dijkstra_grid_full_map", |b| {
        b.iter(|| dijkstra::shortest_paths(black_box((0, 0)), grid_steps))
    });

    c.bench_function("astar_grid_cost", |b| {
        b.iter(|| astar::shortest_path_cost(black_box((0, 0)), grid_steps_guided, goal).unwrap())
    });
}

criterion_group!(benches, bench_grid_search);
criterion_main!(benches);
