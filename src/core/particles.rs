// Ambient particle simulation.
//
// Platform-free: the browser front-end feeds pointer positions in and hands a
// [`Painter`] to [`ParticleField::paint`]; host tests drive the same code with
// a recording painter.

use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Drawing surface used by the field. Colors are RGB, opacities in \[0, 1\].
pub trait Painter {
    fn clear(&mut self, width: f32, height: f32);
    /// Soft radial disc fading from `opacity` at the center to 0 at `radius`.
    fn glow(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], opacity: f32);
    /// Solid disc with flat opacity.
    fn dot(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], opacity: f32);
    fn line(&mut self, from: Vec2, to: Vec2, opacity: f32);
}

/// Tunables for a [`ParticleField`]. `Default` matches the landing page.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub area_per_particle: f32,
    pub max_particles: usize,
    pub interaction_radius: f32,
    pub repulsion_strength: f32,
    pub connection_distance: f32,
    pub connection_max_opacity: f32,
    pub palette: &'static [[u8; 3]],
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            area_per_particle: PARTICLE_AREA_DIVISOR,
            max_particles: PARTICLE_MAX_COUNT,
            interaction_radius: INTERACTION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            connection_distance: CONNECTION_DISTANCE,
            connection_max_opacity: CONNECTION_MAX_OPACITY,
            palette: &PARTICLE_PALETTE,
        }
    }
}

impl FieldParams {
    /// Number of particles for a surface of the given size.
    pub fn count_for(&self, width: u32, height: u32) -> usize {
        let area = width as f64 * height as f64;
        let n = (area / self.area_per_particle as f64).floor() as usize;
        n.min(self.max_particles)
    }
}

/// min(100, floor(width * height / 12000))
pub fn particle_count(width: u32, height: u32) -> usize {
    FieldParams::default().count_for(width, height)
}

/// Wrap a coordinate onto a torus of the given extent; result is in [0, extent).
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if extent.is_nan() || extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Displacement pushing a particle at `at` away from `pointer`.
///
/// Zero at or beyond `radius`; grows linearly to `strength` at the pointer.
/// A particle sitting exactly on the pointer is pushed along +x.
#[inline]
pub fn repulsion(at: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let delta = at - pointer;
    let distance = delta.length();
    if distance >= radius {
        return Vec2::ZERO;
    }
    let force = (radius - distance) / radius * strength;
    let angle = delta.y.atan2(delta.x);
    Vec2::new(angle.cos(), angle.sin()) * force
}

/// All unordered index pairs (i < j) of `n` items, each exactly once.
pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub base_size: f32,
    pub size: f32,
    pub color: [u8; 3],
    pub opacity: f32,
    pub phase: f32,
    pub phase_speed: f32,
}

impl Particle {
    /// Random particle somewhere inside a `width` x `height` surface.
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32, palette: &[[u8; 3]]) -> Self {
        let size = PARTICLE_SIZE_MIN + rng.gen::<f32>() * (PARTICLE_SIZE_MAX - PARTICLE_SIZE_MIN);
        let velocity = Vec2::new(
            (rng.gen::<f32>() * 2.0 - 1.0) * PARTICLE_SPEED_MAX,
            (rng.gen::<f32>() * 2.0 - 1.0) * PARTICLE_SPEED_MAX,
        );
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity,
            base_size: size,
            size,
            color: palette.choose(rng).copied().unwrap_or(CONNECTION_RGB),
            opacity: PARTICLE_OPACITY_MIN
                + rng.gen::<f32>() * (PARTICLE_OPACITY_MAX - PARTICLE_OPACITY_MIN),
            phase: rng.gen::<f32>() * TAU,
            phase_speed: PHASE_SPEED_MIN + rng.gen::<f32>() * (PHASE_SPEED_MAX - PHASE_SPEED_MIN),
        }
    }
}

/// A line between two nearby particles, by index into [`ParticleField::particles`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub opacity: f32,
}

pub struct ParticleField {
    pub params: FieldParams,
    particles: Vec<Particle>,
    width: u32,
    height: u32,
    pointer: Option<Vec2>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams, width: u32, height: u32, seed: u64) -> Self {
        let mut field = Self {
            params,
            particles: Vec::new(),
            width,
            height,
            pointer: None,
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Replace the whole particle set for a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    fn populate(&mut self) {
        let count = self.params.count_for(self.width, self.height);
        let (w, h) = (self.width as f32, self.height as f32);
        let palette = self.params.palette;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(&mut self.rng, w, h, palette));
        }
        self.particles = particles;
    }

    /// Advance every particle by one frame: pulse, pointer push, drift, wrap.
    pub fn step(&mut self) {
        let (w, h) = (self.width as f32, self.height as f32);
        let radius = self.params.interaction_radius;
        let strength = self.params.repulsion_strength;
        let pointer = self.pointer;
        for p in &mut self.particles {
            p.phase = (p.phase + p.phase_speed).rem_euclid(TAU);
            p.size = p.base_size + SIZE_PULSE_AMPLITUDE * p.phase.sin();
            if let Some(ptr) = pointer {
                p.position += repulsion(p.position, ptr, radius, strength);
            }
            p.position += p.velocity;
            p.position.x = wrap_coord(p.position.x, w);
            p.position.y = wrap_coord(p.position.y, h);
        }
    }

    /// Pairs closer than the connection distance. O(n²) over all pairs.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let threshold = self.params.connection_distance;
        let max_opacity = self.params.connection_max_opacity;
        pairs(self.particles.len()).filter_map(move |(i, j)| {
            let d = self.particles[i].position.distance(self.particles[j].position);
            (d < threshold).then(|| Connection {
                from: i,
                to: j,
                opacity: (1.0 - d / threshold) * max_opacity,
            })
        })
    }

    pub fn paint<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.width as f32, self.height as f32);
        for p in &self.particles {
            let radius = p.size.max(0.0);
            painter.glow(p.position, radius * GLOW_RADIUS_MULTIPLIER, p.color, p.opacity);
            painter.dot(p.position, radius, p.color, p.opacity);
        }
        for c in self.connections() {
            painter.line(self.particles[c.from].position, self.particles[c.to].position, c.opacity);
        }
    }

    /// One animation frame.
    pub fn frame<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        self.step();
        self.paint(painter);
    }
}
