// Shared sphere tuning constants used by the core engine and the web frontend.

// Geometry
pub const DEFAULT_RADIUS: f32 = 180.0; // sphere radius in surface pixels
pub const DEFAULT_FOCAL_LENGTH: f32 = 500.0; // keeps perspective distortion mild
pub const BASE_ANGULAR_STEP: f32 = std::f32::consts::PI / 1440.0; // radians per unit of cumulative angle
pub const LAYOUT_JITTER: f32 = 10.0; // max per-axis offset added at creation

// Motion
pub const DEFAULT_DAMPING: f32 = 0.98;
pub const DEFAULT_MAX_SPEED: f32 = 1.5;
pub const DEFAULT_AUTO_ROTATION_SPEED: f32 = 0.2;
pub const REST_VELOCITY_THRESHOLD: f32 = 0.05; // below this an axis is considered at rest
pub const AUTO_ROTATION_AXIS_A: f32 = 0.005; // horizontal tumble component
pub const AUTO_ROTATION_AXIS_B: f32 = 0.002; // vertical tumble component
pub const DRAG_SENSITIVITY: f32 = 0.05; // velocity per pixel of pointer travel
pub const FRAME_REFERENCE_MS: f64 = 16.0; // elapsed time is normalized to this frame length

// Zoom
pub const WHEEL_ZOOM_RATE: f32 = 0.0005;
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 1.5;

// Speed adjustment
pub const SPEED_UP_FACTOR: f32 = 1.5;
pub const SLOW_DOWN_FACTOR: f32 = 0.75;
pub const SPEED_MULTIPLIER_MIN: f32 = 0.1;
pub const SPEED_MULTIPLIER_MAX: f32 = 2.0;
pub const AUTO_SPEED_MIN: f32 = 0.1;
pub const AUTO_SPEED_MAX: f32 = 1.0;

// Projection
pub const OPACITY_MIN: f32 = 0.3;
pub const DISPLAY_SCALE_MIN: f32 = 0.7;
pub const DISPLAY_SCALE_MAX: f32 = 1.3;
pub const DEPTH_INDEX_SCALE: f32 = 20.0; // spreads depth across a wide stacking range
pub const GLOW_BLUR_MAX_PX: f32 = 4.0;
pub const GLOW_ALPHA_MAX: f32 = 0.4;

// Surface transitions (milliseconds)
pub const MOTION_TRANSITION_MS: u32 = 150;
pub const COLOR_TRANSITION_MS: u32 = 500;

// Typography
pub const DEFAULT_MIN_FONT_SIZE: f32 = 12.0;
pub const DEFAULT_MAX_FONT_SIZE: f32 = 30.0;

// Jitter seed used when the host does not provide one
pub const DEFAULT_LAYOUT_SEED: u64 = 42;

// Click feedback
pub const CLICK_PULSE_SCALE: f32 = 1.2; // extra scale on top of the projected one
pub const CLICK_PULSE_MS: f32 = 300.0;
