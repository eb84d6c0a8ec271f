//! Benchmarks for hairsim strand simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use hairsim::*;

fn bench_strand_inextensible(c: &mut Criterion) {
    c.bench_function("strand_32_particles_inextensible_100_steps", |b| {
        b.iter(|| {
            let card = HairCard { length: 0.3, width: 0.05, segments: 31 };
            let mut strand: Strand<f32> = card
                .build(
                    Vec3::new(0.0, 1.5, 0.0),
                    Vec3::new(1.0, 0.0, 0.0),
                    StrandParams::default(),
                    IntegrationMode::Inextensible,
                )
                .unwrap();
            for _ in 0..100 {
                strand.step(0.01, &[], &mut NoOpStepObserver);
            }
            strand.positions()
        });
    });
}

fn bench_strand_mass_spring_with_spheres(c: &mut Criterion) {
    let spheres = [
        CollisionSphere::new(Vec3::new(0.0f32, 1.3, 0.0), 0.2),
        CollisionSphere::new(Vec3::new(0.1f32, 1.1, 0.0), 0.1),
    ];
    c.bench_function("strand_32_particles_mass_spring_2_spheres_100_steps", |b| {
        b.iter(|| {
            let card = HairCard { length: 0.3, width: 0.05, segments: 31 };
            let mut strand: Strand<f32> = card
                .build(
                    Vec3::new(0.0, 1.5, 0.0),
                    Vec3::new(0.0, -1.0, 0.0),
                    StrandParams::default(),
                    IntegrationMode::MassSpring,
                )
                .unwrap();
            for _ in 0..100 {
                strand.step(0.01, &spheres, &mut NoOpStepObserver);
            }
            strand.positions()
        });
    });
}

fn bench_head(c: &mut Criterion) {
    c.bench_function("head_200_cards_60_steps", |b| {
        b.iter(|| {
            let vertices: std::vec::Vec<_> = (0..200)
                .map(|i| {
                    let a = i as f32 * 0.0314;
                    Vec3::new(0.2 * a.cos(), 0.15, 0.2 * a.sin())
                })
                .collect();
            let mut head = RigidAttachment::new(vertices, Pose::from_translation(Vec3::new(0.0, 1.5, 0.0)));
            let card = HairCard::default();
            for v in 0..200 {
                head.grow_strand(
                    v,
                    &card,
                    Vec3::new(0.0, -1.0, 0.0),
                    StrandParams::default(),
                    IntegrationMode::Inextensible,
                )
                .unwrap();
            }
            head.add_collision_sphere(Vec3::new(0.0, 1.5, 0.0), 0.2);
            for _ in 0..60 {
                head.rotate_y(0.02);
                head.step(0.01, &mut NoOpStepObserver);
            }
            head.strand(0).map(|s| s.positions())
        });
    });
}

criterion_group!(benches, bench_strand_inextensible, bench_strand_mass_spring_with_spheres, bench_head);
criterion_main!(benches);
