//! Single source of truth for shared game constants.
//! `GameConfig::default()` is built from these values.

/// Side length of the square footprint grid (x and z both in 0..GRID_SIZE).
pub const GRID_SIZE: u8 = 3;

/// Number of distinct (x, z) footprints on the grid (3x3).
pub const FOOTPRINT_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Number of layers the generator stacks (ground, middle, top).
pub const LAYER_COUNT: usize = 3;

/// Smallest base-layer cube count the generator draws.
pub const BASE_LAYER_MIN: u32 = 4;

/// Largest base-layer cube count the generator draws.
pub const BASE_LAYER_MAX: u32 = 9;

/// Questions per game. Answering the last one correctly is a victory.
pub const MAX_QUESTIONS: u32 = 10;

/// Score awarded for each correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Radians of rotation per pixel of horizontal drag.
pub const ROTATION_SENSITIVITY: f32 = 0.01;

/// Orientation every new question is displayed at, in degrees.
pub const START_ANGLE_DEGREES: f32 = 315.0;

/// Delay before the victory screen appears (milliseconds). Cosmetic only.
pub const VICTORY_DELAY_MS: u32 = 600;
