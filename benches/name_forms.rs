use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gocrud_gen::{EntityName, NameForms, TemplateRegistry, generate, render};
use tempfile::TempDir;

const NAMES: [&str; 4] = ["A", "SbsFee", "HTTPServerConfig", "DeliveryZoneScheduleOverrideV2"];

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_forms");

    for name in NAMES {
        let entity = EntityName::new(name).unwrap();
        group.bench_with_input(BenchmarkId::new("derive", name), &entity, |b, entity| {
            b.iter(|| NameForms::derive(black_box(entity)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let forms = NameForms::derive(&EntityName::new("SbsFee").unwrap());
    let registry = TemplateRegistry::default();

    for task in registry.tasks() {
        group.bench_with_input(BenchmarkId::new("body", &task.name), task, |b, task| {
            b.iter(|| render(black_box(&task.body_template), &forms).unwrap())
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let forms = NameForms::derive(&EntityName::new("SbsFee").unwrap());
    let registry = TemplateRegistry::default();

    c.bench_function("generate_fresh_tree", |b| {
        b.iter_with_setup(
            || TempDir::new().unwrap(),
            |dir| generate(dir.path(), &forms, &registry).unwrap(),
        )
    });

    let warm = TempDir::new().unwrap();
    generate(warm.path(), &forms, &registry).unwrap();
    c.bench_function("generate_all_skipped", |b| {
        b.iter(|| generate(black_box(warm.path()), &forms, &registry).unwrap())
    });
}

criterion_group!(benches, bench_derive, bench_render, bench_generate);
criterion_main!(benches);
