pub mod confetti;
pub mod segment_card;
pub mod spin_button;
pub mod wheel_canvas;
pub mod win_modal;

pub use confetti::Confetti;
pub use segment_card::SegmentCard;
pub use spin_button::SpinButton;
pub use wheel_canvas::WheelCanvas;
pub use win_modal::WinModal;
