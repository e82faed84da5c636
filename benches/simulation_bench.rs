use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scene2d::{
    find_collision,
    forces::{NewtonianGravity, UniformGravity},
    responses::{elastic, halt},
    shapes::{rectangle, regular_polygon},
    Body, BodyTag, Scene, SceneConfig, Vec2,
};

// --- Helper for a row of boxes dropping onto one floor ---
fn run_falling_boxes_bench(scene: &mut Scene, num_boxes: usize) {
    let floor = scene.add_body(
        Body::static_body(rectangle(Vec2::new(0.0, -1.0), num_boxes as f64 * 2.0 + 10.0, 2.0), BodyTag::Platform)
            .unwrap(),
    );

    let mut falling = Vec::with_capacity(num_boxes);
    for i in 0..num_boxes {
        let x = i as f64 * 2.0 - num_boxes as f64;
        let y = 2.0 + (i % 7) as f64; // Staggered heights
        let body = Body::new(rectangle(Vec2::new(x, y), 1.0, 1.0), 1.0, BodyTag::Obstacle).unwrap();
        let handle = scene.add_body(body);
        scene.register_collision(handle, floor, halt());
        falling.push(handle);
    }
    scene.register_force(&falling, UniformGravity::new(10.0));

    // Simulate for a fixed number of steps
    let dt = 1.0 / 60.0;
    let steps = 60;
    for _ in 0..steps {
        scene.tick(black_box(dt));
    }
}

// --- Helper for an n-body cluster where every pair attracts and bounces ---
fn run_cluster_bench(scene: &mut Scene, num_bodies: usize) {
    let mut handles = Vec::with_capacity(num_bodies);
    for i in 0..num_bodies {
        let angle = i as f64 * std::f64::consts::TAU / num_bodies as f64;
        let center = Vec2::new(angle.cos(), angle.sin()) * 40.0;
        let body = Body::new(regular_polygon(center, 2.0, 6), 1.0, BodyTag::Obstacle).unwrap();
        handles.push(scene.add_body(body));
    }

    for (i, &a) in handles.iter().enumerate() {
        for &b in &handles[i + 1..] {
            scene.register_force(&[a, b], NewtonianGravity::new(50.0));
            scene.register_collision(a, b, elastic(0.8));
        }
    }

    let dt = 1.0 / 60.0;
    let steps = 30;
    for _ in 0..steps {
        scene.tick(black_box(dt));
    }
}

// Benchmark for boxes falling onto a shared floor
fn bench_falling_boxes(c: &mut Criterion) {
    let mut group = c.benchmark_group("falling_boxes");

    for num_boxes in [10, 100, 500].iter() {
        group.bench_with_input(criterion::BenchmarkId::from_parameter(num_boxes), num_boxes, |b, &n| {
            b.iter(|| {
                let mut scene = Scene::new();
                run_falling_boxes_bench(&mut scene, black_box(n));
            });
        });
    }
    group.finish();
}

// Benchmark for the all-pairs cluster, with and without the AABB prefilter
fn bench_cluster(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster");

    for broad_phase in [true, false] {
        for num_bodies in [10, 40].iter() {
            let id = format!("{}/{}", if broad_phase { "aabb" } else { "sat_only" }, num_bodies);
            group.bench_function(id, |b| {
                b.iter(|| {
                    let mut scene = Scene::with_config(SceneConfig {
                        broad_phase,
                        ..SceneConfig::default()
                    });
                    run_cluster_bench(&mut scene, black_box(*num_bodies));
                });
            });
        }
    }
    group.finish();
}

// Benchmark for the narrow phase alone
fn bench_sat_pairs(c: &mut Criterion) {
    let a = Body::new(regular_polygon(Vec2::ZERO, 10.0, 20), 1.0, BodyTag::Player).unwrap();
    let overlapping = Body::new(regular_polygon(Vec2::new(12.0, 3.0), 10.0, 20), 1.0, BodyTag::Obstacle).unwrap();
    let apart = Body::static_body(rectangle(Vec2::new(50.0, 0.0), 10.0, 10.0), BodyTag::Wall).unwrap();

    c.bench_function("sat/overlapping_20gons", |b| {
        b.iter(|| find_collision(black_box(&a), black_box(&overlapping)))
    });
    c.bench_function("sat/separated", |b| b.iter(|| find_collision(black_box(&a), black_box(&apart))));
}

criterion_group!(benches, bench_falling_boxes, bench_cluster, bench_sat_pairs);
criterion_main!(benches);
