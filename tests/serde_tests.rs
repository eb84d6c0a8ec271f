use hairsim::{
    CollisionSphere, HairCard, IntegrationMode, Pose, Rot3, StrandParams, Vec3,
};

#[test]
fn params_and_mode_load_from_json() {
    let params: StrandParams<f32> = serde_json::from_str(
        r#"{"damping":3.0,"stiffness":400.0,"gravity":-10.0,"mass":0.02,"rest_distance":0.01}"#,
    )
    .unwrap();
    assert_eq!(params, StrandParams::new().with_stiffness(400.0));
    assert!(params.validate().is_ok());

    let mode: IntegrationMode = serde_json::from_str(r#""MassSpring""#).unwrap();
    assert_eq!(mode, IntegrationMode::MassSpring);
}

#[test]
fn head_preset_survives_json() {
    let mut pose = Pose::from_translation(Vec3::new(0.0f64, 1.5, 0.0));
    pose.rotate(Rot3::from_rotation_y(0.3));
    let mut sphere = CollisionSphere::new(Vec3::new(0.0, 1.5, 0.0), 0.2);
    sphere.translate(Vec3::new(0.1, 0.0, 0.0));
    let card = HairCard::<f64>::default();

    let json = serde_json::to_string(&(pose, sphere, card)).unwrap();
    let (p, s, c): (Pose<f64>, CollisionSphere<f64>, HairCard<f64>) =
        serde_json::from_str(&json).unwrap();

    assert_eq!(p, pose);
    assert_eq!(s, sphere);
    assert_eq!(s.initial_center(), Vec3::new(0.0, 1.5, 0.0));
    assert_eq!(c, card);
}
