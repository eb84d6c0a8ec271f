use hairsim::{
    HairCard, IntegrationMode, NoOpStepObserver, Pose, RigidAttachment, Strand, StrandParams, Vec3,
};

#[test]
fn strand_deterministic() {
    let results: Vec<_> = (0..10).map(|_| {
        let mut strand: Strand<f32> = HairCard::default()
            .build(
                Vec3::new(0.0, 1.5, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                StrandParams::default(),
                IntegrationMode::Inextensible,
            )
            .unwrap();
        for _ in 0..500 {
            strand.step(0.01, &[], &mut NoOpStepObserver);
        }
        strand.positions()
    }).collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn attachment_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let mut head: RigidAttachment<f64> = RigidAttachment::new(
            vec![Vec3::new(0.1, 0.2, 0.0), Vec3::new(-0.1, 0.2, 0.0)],
            Pose::from_translation(Vec3::new(0.0, 1.5, 0.0)),
        );
        let card = HairCard::default();
        for vertex in 0..2 {
            head.grow_strand(
                vertex,
                &card,
                Vec3::new(0.0, -1.0, 0.0),
                StrandParams::default(),
                IntegrationMode::MassSpring,
            )
            .unwrap();
        }
        head.add_collision_sphere(Vec3::new(0.0, 1.5, 0.0), 0.2);
        for frame in 0..120 {
            head.rotate_y(0.01);
            if frame % 2 == 0 {
                head.translate(Vec3::new(0.0, 0.0, 0.005));
            }
            head.step(0.01, &mut NoOpStepObserver);
        }
        head.strands().iter().map(|s| s.positions()).collect::<Vec<_>>()
    }).collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}
