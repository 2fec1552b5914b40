//! Tuning constants and runtime configuration defaults

// Canvas and rasterization settings
/// Output image width and height in pixels
pub const CANVAS_RESOLUTION: usize = 1800;
/// Half-extent of the square world view; the canvas spans [-extent, extent]
pub const VIEW_EXTENT: f64 = 1.2;
/// Supersample grid dimension per pixel axis for coverage estimation
pub const SUPERSAMPLE_GRID: usize = 3;
/// Number of line segments each quadratic arc is flattened into
pub const CURVE_SEGMENTS: usize = 24;

// Palette (RGB)
/// Canvas background
pub const COLOR_BACKGROUND: [u8; 3] = [255, 255, 255];
/// Face ellipse
pub const COLOR_FACE: [u8; 3] = [0, 102, 204];
/// Outer cell shapes
pub const COLOR_OUTER: [u8; 3] = [229, 0, 18];
/// Eye disc
pub const COLOR_EYE_WHITE: [u8; 3] = [255, 255, 255];
/// Iris disc
pub const COLOR_EYE_IRIS: [u8; 3] = [0, 102, 204];
/// Mouth patch
pub const COLOR_MOUTH: [u8; 3] = [255, 255, 255];

// Compositing order, higher layers draw over lower ones
/// Face layer
pub const LAYER_FACE: u8 = 1;
/// Mouth layer
pub const LAYER_MOUTH: u8 = 2;
/// Outer cell layer
pub const LAYER_OUTER: u8 = 3;
/// Eye disc layer
pub const LAYER_EYE: u8 = 4;
/// Iris disc layer
pub const LAYER_IRIS: u8 = 5;

// Face geometry
/// Minimum face width/height in canvas units
pub const FACE_SIZE_MIN: f64 = 0.7;
/// Maximum face width/height in canvas units
pub const FACE_SIZE_MAX: f64 = 1.2;

// Mouth geometry
/// Mouth center in world coordinates
pub const MOUTH_CENTER: [f64; 2] = [0.0, 0.1];
/// Minimum mouth width
pub const MOUTH_WIDTH_MIN: f64 = 0.22;
/// Maximum mouth width
pub const MOUTH_WIDTH_MAX: f64 = 0.27;
/// Minimum mouth height
pub const MOUTH_HEIGHT_MIN: f64 = 0.35;
/// Maximum mouth height
pub const MOUTH_HEIGHT_MAX: f64 = 0.5;
/// Minimum dip of the upper lip curve
pub const MOUTH_CURVE_DEPTH_MIN: f64 = 0.03;
/// Maximum dip of the upper lip curve
pub const MOUTH_CURVE_DEPTH_MAX: f64 = 0.07;
/// Scale applied to the lower-lip half-height at the bottom dip vertex
pub const MOUTH_BOTTOM_SCALE: f64 = 1.1;

// Outer-shape ring placement
/// Base radius coefficient before the area-preserving count correction
pub const BASE_RADIUS_SCALE: f64 = 0.18;
/// Shape count at which the base radius equals `BASE_RADIUS_SCALE`
pub const REFERENCE_SHAPE_COUNT: f64 = 12.0;
/// Radial position jitter fraction
pub const RANGE_JITTER: f64 = 0.2;
/// Shape radius jitter fraction
pub const SIZE_JITTER: f64 = 0.23;
/// Ellipse axis jitter fraction
pub const ASPECT_JITTER: f64 = 0.25;
/// Probability of a slot emitting a stacked snowman pair
pub const SNOWMAN_PROBABILITY: f64 = 0.15;
/// Probability of a plain circle in non-snowman slots
pub const CIRCLE_PROBABILITY: f64 = 0.7;
/// Upper snowman circle radius as a fraction of the slot radius
pub const SNOWMAN_UPPER_SCALE: f64 = 0.9;
/// Lower snowman circle radius as a fraction of the slot radius
pub const SNOWMAN_LOWER_SCALE: f64 = 0.7;
/// Vertical gap between snowman circle centers as a fraction of the slot radius
pub const SNOWMAN_GAP_SCALE: f64 = 1.1;

// Eye placement
/// Fraction of the way each eye is pulled from its cell toward the origin
pub const EYE_PULL: f64 = 0.1;
/// Absolute positional jitter applied per eye axis
pub const EYE_JITTER: f64 = 0.02;
/// Eye disc radius as a fraction of the cell radius
pub const EYE_RADIUS_SCALE: f64 = 0.5;
/// Iris radius as a fraction of the eye radius
pub const IRIS_RADIUS_SCALE: f64 = 0.5;
/// Iris center offset as a fraction of the eye radius
pub const IRIS_OFFSET_SCALE: f64 = 0.4;

// Seeding and defaults
/// Largest seed drawn when the caller does not supply one
pub const MAX_RANDOM_SEED: u64 = 999_999_999;
/// Default number of outer cell shapes
pub const DEFAULT_OUTER_SHAPE_COUNT: usize = 12;
/// Default number of eyes
pub const DEFAULT_EYE_COUNT: usize = 5;

// Output settings
/// Prefix of generated image filenames
pub const OUTPUT_PREFIX: &str = "cellface";
