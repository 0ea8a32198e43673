//! Static content shown on the mockup's profile card

/// Everything the profile card displays. Kept apart from the markup so the
/// card template stays free of literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileContent {
    pub avatar_url: &'static str,
    /// Shown by the browser in place of the avatar if it fails to load
    pub avatar_alt: &'static str,
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

pub const PROFILE: ProfileContent = ProfileContent {
    avatar_url: "https://avatars.githubusercontent.com/kexiZeroing",
    avatar_alt: "Kexi Dang's profile picture",
    heading: "Hello World",
    lines: &[
        "- Patient with yourself, be forgiving with yourself.",
        "- I'm a great developer, but I still need to Google how to restart my new iPhone. I did manage to take a few screenshots of my home screen in the process.",
        "- Social media cares more about what's hot and being talked about instead of what can actually get you a job.",
    ],
};

impl Default for ProfileContent {
    fn default() -> Self {
        PROFILE
    }
}
