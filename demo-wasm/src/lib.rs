use hairsim::{
    HairCard, IntegrationMode, NoOpStepObserver, Pose, RigidAttachment, StrandParams, Vec3,
};
use wasm_bindgen::prelude::*;

/// Fixed-step accumulator: frame time is clamped, accumulated and drained in
/// `dt`-sized steps.
pub struct FixedStep {
    dt: f32,
    max_frame: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(dt: f32, max_frame: f32) -> Self {
        FixedStep { dt, max_frame, accumulator: 0.0 }
    }

    /// Number of steps to run for a frame that took `elapsed` seconds.
    /// A non-finite frame time counts as zero.
    pub fn advance(&mut self, elapsed: f32) -> usize {
        let elapsed = if elapsed.is_finite() { elapsed } else { 0.0 };
        self.accumulator += elapsed.clamp(0.0, self.max_frame);
        let mut steps = 0;
        while self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            steps += 1;
        }
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

fn mode_from(code: u32) -> IntegrationMode {
    match code {
        0 => IntegrationMode::MassSpring,
        _ => IntegrationMode::Inextensible,
    }
}

// ---- Head Demo ----

#[wasm_bindgen]
pub struct HeadDemo {
    head: RigidAttachment<f32>,
    clock: FixedStep,
}

#[wasm_bindgen]
impl HeadDemo {
    /// A ring of `cards` hair cards around the crown of a head at (0, 1.5, 0),
    /// with one collision sphere standing in for the skull.
    #[wasm_bindgen(constructor)]
    pub fn new(cards: usize) -> Result<HeadDemo, JsError> {
        let cards = cards.max(1);
        let vertices = (0..cards)
            .map(|i| {
                let a = i as f32 * core::f32::consts::TAU / cards as f32;
                Vec3::new(0.18 * a.cos(), 0.1, 0.18 * a.sin())
            })
            .collect();
        let mut head = RigidAttachment::new(vertices, Pose::from_translation(Vec3::new(0.0, 1.5, 0.0)));

        let card = HairCard::default();
        for v in 0..cards {
            head.grow_strand(
                v,
                &card,
                Vec3::new(0.0, -1.0, 0.0),
                StrandParams::default(),
                IntegrationMode::default(),
            )
            .map_err(|e| JsError::new(&e.to_string()))?;
        }
        head.add_collision_sphere(Vec3::new(0.0, 1.5, 0.0), 0.2);

        Ok(HeadDemo { head, clock: FixedStep::new(0.01, 0.1) })
    }

    /// Run as many fixed steps as `elapsed` seconds of frame time allow.
    pub fn update(&mut self, elapsed: f32) {
        let dt = self.clock.dt();
        for _ in 0..self.clock.advance(elapsed) {
            self.head.step(dt, &mut NoOpStepObserver);
        }
    }

    pub fn move_head(&mut self, dx: f32, dy: f32, dz: f32) {
        self.head.translate(Vec3::new(dx, dy, dz));
    }

    pub fn rotate_head(&mut self, radians: f32) {
        self.head.rotate_y(radians);
    }

    pub fn set_params(
        &mut self,
        damping: f32,
        stiffness: f32,
        gravity: f32,
        mass: f32,
        rest_distance: f32,
    ) -> Result<(), JsError> {
        let params = StrandParams::new()
            .with_damping(damping)
            .with_stiffness(stiffness)
            .with_gravity(gravity)
            .with_mass(mass)
            .with_rest_distance(rest_distance);
        self.head
            .try_set_params(params)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// 0 = mass-spring, anything else = inextensible.
    pub fn change_mode(&mut self, mode: u32) {
        self.head.change_mode(mode_from(mode));
    }

    pub fn restart(&mut self) {
        let params = self
            .head
            .strands()
            .first()
            .map(|s| *s.params())
            .unwrap_or_default();
        self.head.restart(params);
    }

    pub fn strand_count(&self) -> usize {
        self.head.strand_count()
    }

    /// Render strip of strand `index` as flat world-space
    /// [x0, y0, z0, x1, y1, z1, ...], two vertices per particle.
    pub fn strip(&self, index: usize) -> Result<Vec<f32>, JsError> {
        let strand = self.head.strand(index).map_err(|e| JsError::new(&e.to_string()))?;
        let mut out = Vec::with_capacity(strand.len() * 6);
        for p in strand.particles() {
            let (a, b) = p.strip_vertices();
            out.extend_from_slice(&[a.x, a.y, a.z, b.x, b.y, b.z]);
        }
        Ok(out)
    }

    /// Returns flat [cx, cy, cz, r, ...] for every collision sphere.
    pub fn spheres(&self) -> Vec<f32> {
        self.head
            .spheres()
            .iter()
            .flat_map(|s| [s.center.x, s.center.y, s.center.z, s.radius])
            .collect()
    }
}
