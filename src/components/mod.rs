// UI Components

pub mod confetti;
pub mod mobile_mockup;
pub mod profile_card;

pub use confetti::Confetti;
pub use mobile_mockup::MobileMockup;
pub use profile_card::ProfileCard;
