// Shared tuning constants for the particle field and the photo mural.
// Pixel units are CSS pixels; "per frame" means per animation frame.

// ---------------- Particle field ----------------

// Canvas area (px²) per particle, and the hard cap on the particle count
pub const PARTICLE_AREA_DIVISOR: f32 = 12_000.0;
pub const PARTICLE_MAX_COUNT: usize = 100;

// Spawn ranges (half-open)
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 4.0;
pub const PARTICLE_SPEED_MAX: f32 = 0.25; // per axis, symmetric around 0
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_MAX: f32 = 0.7;
pub const PHASE_SPEED_MIN: f32 = 0.01;
pub const PHASE_SPEED_MAX: f32 = 0.03;

// Size pulse: current = base + amplitude * sin(phase)
pub const SIZE_PULSE_AMPLITUDE: f32 = 0.5;

// Glow disc radius relative to the core radius
pub const GLOW_RADIUS_MULTIPLIER: f32 = 3.0;

// Pointer repulsion
pub const INTERACTION_RADIUS: f32 = 150.0;
pub const REPULSION_STRENGTH: f32 = 2.0; // max displacement per frame at distance 0

// Connection pass
pub const CONNECTION_DISTANCE: f32 = 120.0;
pub const CONNECTION_MAX_OPACITY: f32 = 0.15;
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;
pub const CONNECTION_RGB: [u8; 3] = [255, 255, 255];

// Yellow, orange, red, white
pub const PARTICLE_PALETTE: [[u8; 3]; 4] = [
    [232, 185, 49],
    [225, 106, 47],
    [196, 32, 33],
    [255, 255, 255],
];

// ---------------- Photo mural ----------------

// Initial placement keeps tiles this far inside the container edges
pub const TILE_MARGIN: f32 = 10.0;

// How far a dragged tile may leave the container, per input kind
pub const MOUSE_DRAG_OVERLAP: f32 = 20.0;
pub const TOUCH_DRAG_OVERLAP: f32 = 10.0;

// Pick-up feedback (rotation jitter is ± degrees)
pub const MOUSE_PICKUP_JITTER_DEG: f32 = 3.0;
pub const TOUCH_PICKUP_JITTER_DEG: f32 = 2.0;
pub const MOUSE_PICKUP_SCALE: f32 = 1.1;
pub const TOUCH_PICKUP_SCALE: f32 = 1.08;

// Responsive breakpoints (inclusive upper bounds of the viewport width)
pub const PHONE_MAX_WIDTH: f32 = 480.0;
pub const TABLET_MAX_WIDTH: f32 = 768.0;

// Jitter as a fraction of the cell size, and max |rotation| in degrees
pub const MOBILE_JITTER_FACTOR: f32 = 0.3;
pub const DESKTOP_JITTER_FACTOR: f32 = 0.6;
pub const MOBILE_MAX_ROTATION_DEG: f32 = 12.0;
pub const DESKTOP_MAX_ROTATION_DEG: f32 = 20.0;

// ---------------- Hero parallax ----------------

// Full travel of the hero model across the hero section, in px
pub const PARALLAX_TRAVEL: f32 = 20.0;
