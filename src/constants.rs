/// Motion coupling and interaction tuning constants.
///
/// These express intended behavior (coupling gains, smoothing fractions,
/// clamp limits) and keep magic numbers out of the scene table.
// Reference frame rate for the optional time-scaled smoothing mode
pub const REFERENCE_FPS: f32 = 60.0;

// Camera coupling (pointer sway + scroll dolly)
pub const CAMERA_POINTER_X_GAIN: f32 = 6.0;
pub const CAMERA_POINTER_Y_GAIN: f32 = 3.0;
pub const CAMERA_BASE_X: f32 = 1.0;
pub const CAMERA_FOLLOW_FACTOR: f32 = 0.2; // per-frame fraction toward target
pub const CAMERA_BASE_Z: f32 = 10.0;
pub const CAMERA_SCROLL_DOLLY: f32 = -20.0; // z travels with scroll, unclamped

// Model coupling (rotation chases the pointer, y drops with scroll)
pub const MODEL_YAW_GAIN: f32 = 2.0;
pub const MODEL_PITCH_GAIN: f32 = -2.0;
pub const MODEL_ROLL_GAIN: f32 = 0.5;
pub const MODEL_YAW_FACTOR: f32 = 0.2;
pub const MODEL_PITCH_FACTOR: f32 = 0.2;
pub const MODEL_ROLL_FACTOR: f32 = 0.4;
pub const MODEL_BASE_Y: f32 = -1.0;
pub const MODEL_SCROLL_DROP: f32 = 5.0;

// Letter sprites
pub const LETTER_POINTER_X_GAIN: f32 = 2.0;
pub const LETTER_POINTER_Y_GAIN: f32 = 1.5;
pub const LETTER_SCROLL_DROP: f32 = -5.0;
pub const LETTER_FOLLOW_FACTOR: f32 = 0.1;
pub const LETTER_HOVER_SCALE: f32 = 0.8;
pub const LETTER_SCALE_FACTOR: f32 = 0.05;

// Rainbow torus spin, radians added per frame
pub const RAINBOW_SPIN_PER_FRAME: f32 = 0.01;

// Picking
pub const PICK_SPHERE_RADIUS: f32 = 1.0;

// Camera projection shared by rendering and picking
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

// Custom cursor layer
pub const TRAIL_FOLLOW_FACTOR: f32 = 0.15; // per-frame fraction toward the pointer
pub const PARTICLES_PER_CLICK: usize = 10;
pub const PARTICLE_FADE_PER_FRAME: f32 = 0.05;
pub const PARTICLE_SPREAD: f32 = 6.0; // velocity span, px per frame
pub const PARTICLE_SIZE_MIN: f32 = 2.0;
pub const PARTICLE_SIZE_SPAN: f32 = 6.0;

// Content blocks
pub const SLIDER_MAX: f32 = 100.0;
pub const GALLERY_COLUMNS: usize = 3;
pub const GALLERY_COLUMN_SPACING: f32 = 4.0;
pub const GALLERY_ROW_SPACING: f32 = 3.0;

// Grid helper
pub const GRID_SIZE: f32 = 90.0;
pub const GRID_DIVISIONS: u32 = 10;
