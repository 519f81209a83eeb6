use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use elliptic_curve_explorer::core::SampleDomain;
use elliptic_curve_explorer::{
    mod_point_add, point_add, sample_real_curve, scan_modular_curve, AppState, CurveParams,
    FieldModulus, ModPoint,
};
use glam::DVec2;
use std::hint::black_box;

fn bench_real_sampling(c: &mut Criterion) {
    let params = CurveParams::new(-1.0, 1.0);
    let mut group = c.benchmark_group("real_sampling");

    for &step in &[0.01f64, 0.001f64] {
        let domain = SampleDomain {
            step,
            ..SampleDomain::default()
        };
        group.bench_with_input(
            BenchmarkId::new("sample_real_curve", domain.sample_count()),
            &domain,
            |b, domain| b.iter(|| black_box(sample_real_curve(&params, black_box(domain)))),
        );
    }

    group.finish();
}

fn bench_modular_scan(c: &mut Criterion) {
    let params = CurveParams::new(2.0, 3.0);
    let mut group = c.benchmark_group("modular_scan");

    for &p in &[97i64, 251, 499] {
        let Ok(modulus) = FieldModulus::new(p, 500) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("scan", p), &modulus, |b, &modulus| {
            b.iter(|| {
                let points = scan_modular_curve(&params, black_box(modulus)).expect("Scan");
                black_box(points.len())
            })
        });
    }

    group.finish();
}

fn bench_point_addition(c: &mut Criterion) {
    let params = CurveParams::new(-1.0, 1.0);
    c.bench_function("point_add_real", |b| {
        b.iter(|| {
            black_box(point_add(
                black_box(DVec2::new(0.0, 1.0)),
                black_box(DVec2::new(1.0, 1.0)),
                &params,
            ))
        })
    });

    let field_params = CurveParams::new(2.0, 3.0);
    let modulus = FieldModulus::new(97, 500).expect("gültiger Modulus");
    c.bench_function("point_add_mod_97", |b| {
        b.iter(|| {
            black_box(mod_point_add(
                black_box(ModPoint::new(3, 6)),
                black_box(ModPoint::new(80, 10)),
                &field_params,
                modulus,
            ))
        })
    });
}

fn bench_scene_build(c: &mut Criterion) {
    let mut state = AppState::new();
    state.selection.p = Some(DVec2::new(0.0, 1.0));
    state.selection.q = Some(DVec2::new(1.0, 1.0));

    c.bench_function("render_scene_real", |b| {
        b.iter(|| {
            let scene = elliptic_curve_explorer::app::build_render_scene(black_box(&state));
            black_box(scene.draw_list.len())
        })
    });
}

criterion_group!(
    core_benches,
    bench_real_sampling,
    bench_modular_scan,
    bench_point_addition,
    bench_scene_build
);
criterion_main!(core_benches);
