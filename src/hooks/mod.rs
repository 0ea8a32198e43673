pub mod use_confetti;

pub use use_confetti::use_confetti;
