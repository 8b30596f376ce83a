pub mod form_state;
pub mod use_wheel;

pub use form_state::*;
pub use use_wheel::*;
