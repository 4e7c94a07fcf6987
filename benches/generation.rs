use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dockwrap::generator::render_module;
use dockwrap::spec::{build_commands, load_spec};
use std::path::Path;

fn bench_generation(c: &mut Criterion) {
    let root = load_spec(Path::new("specs/docker.yaml")).expect("load docker metadata");
    let commands = build_commands(&root);

    c.bench_function("flatten_docker_tree", |b| {
        b.iter(|| black_box(build_commands(black_box(&root))))
    });

    c.bench_function("render_docker_module", |b| {
        b.iter(|| {
            black_box(
                render_module("specs/docker.yaml", "src/docker.rs", black_box(&commands))
                    .expect("render"),
            )
        })
    });
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
