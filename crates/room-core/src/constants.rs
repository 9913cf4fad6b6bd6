// Shared geometry and tuning constants used by both web and native frontends.

// Room box in room units (1 unit = 1 m)
pub const ROOM_WIDTH: f32 = 7.0;
pub const ROOM_DEPTH: f32 = 5.5;
pub const ROOM_HEIGHT: f32 = 3.8;

// Isometric camera: fixed 30 degree convention
pub const ISO_ANGLE_RAD: f32 = std::f32::consts::FRAC_PI_6;

// Projection framing
pub const LOADER_SCALE_FRACTION: f32 = 0.07; // of min(viewport w, h)
pub const LOADER_CENTER: [f32; 2] = [0.5, 0.54]; // room origin position as viewport fraction
pub const ILLUSTRATION_SCALE_FRACTION: f32 = 0.06;
pub const ILLUSTRATION_ANCHOR_SCREEN: [f32; 2] = [0.5, 0.5];

// Render target
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Palette (sRGB)
pub const ACCENT_RGB: [u8; 3] = [194, 164, 126]; // gold
pub const BACKGROUND_RGB: [u8; 3] = [10, 10, 8];

// Pen tip glow: inner dot and outer halo
pub const PEN_TIP_INNER_RADIUS: f32 = 3.0;
pub const PEN_TIP_INNER_ALPHA: f32 = 0.7;
pub const PEN_TIP_OUTER_RADIUS: f32 = 8.0;
pub const PEN_TIP_OUTER_ALPHA: f32 = 0.15;

// Dimension/reference lines
pub const DASH_PATTERN: [f32; 2] = [3.0, 4.0];
pub const DASH_LINE_WIDTH: f32 = 0.6;

// Corner markers
pub const CROSS_DEFAULT_SIZE: f32 = 4.0;
pub const CROSS_ALPHA: f32 = 0.35;
pub const CROSS_LINE_WIDTH: f32 = 0.6;

// Dust
pub const DUST_PARTICLE_COUNT: usize = 50;
pub const DUST_SEED: u64 = 0x1A7A_2024;
pub const DUST_RESPAWN_MARGIN: f32 = 0.02; // how far past the band a particle may travel
pub const DUST_MAX_STEP_SEC: f32 = 0.1; // cap a single particle advance (scroll gaps)

// Scroll trigger defaults (viewport fractions)
pub const SCROLL_START_FRACTION: f32 = 0.8;
pub const SCROLL_END_FRACTION: f32 = 0.2;
