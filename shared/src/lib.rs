pub mod constants;
pub mod editor;
pub mod rotation;
pub mod segment;
pub mod selector;
pub mod shared_wheel_game;
pub mod storage;
pub mod validation;

pub use segment::{Configuration, Segment, SegmentColor};
pub use selector::{select, select_index, DrawSource, RngDraws, SpinOutcome};
pub use validation::{validate, ValidationError};
