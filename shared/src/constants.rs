pub const STORAGE_KEY: &str = "wheelSectors";

pub const MIN_SEGMENTS: usize = 3;
pub const TOTAL_WEIGHT: f64 = 100.0;
pub const WEIGHT_TOLERANCE: f64 = 0.1;
pub const MAX_LABEL_LENGTH: usize = 64;

pub const NEW_SEGMENT_LABEL: &str = "New segment";
pub const NEW_SEGMENT_WEIGHT: f64 = 12.5;
pub const SEGMENT_ID_PREFIX: &str = "sector-";

// Animation timing for the wheel page
pub const SPIN_DURATION_MS: u32 = 5000;
pub const CONFETTI_DURATION_MS: u32 = 3000;
pub const FULL_ROTATIONS: u32 = 5;

pub const INSUFFICIENT_SEGMENTS_ERROR: &str = "The wheel needs at least 3 segments";
pub const PROBABILITY_MISMATCH_ERROR: &str = "Total probability must be 100%";
pub const SAVE_SUCCESS_MESSAGE: &str = "Settings saved!";
pub const RESET_SUCCESS_MESSAGE: &str = "Restored the default settings";
pub const STORAGE_UNAVAILABLE_ERROR: &str = "Browser storage is not available";
