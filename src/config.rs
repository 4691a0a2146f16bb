// Contact form target. The landing page posts back to its own origin.
#[cfg(debug_assertions)]
pub fn contact_endpoint() -> &'static str {
    "http://localhost:3001/"  // Development form handler when running locally
}

#[cfg(not(debug_assertions))]
pub fn contact_endpoint() -> &'static str {
    "/"  // Production: same origin
}

/// Height of the fixed header, used when aligning scroll targets.
pub const HEADER_HEIGHT: f64 = 80.0;

// Demo animation timings (milliseconds)
pub const TYPING_INTERVAL_MS: u32 = 50;
pub const SUGGESTION_DELAY_MS: u32 = 500;
pub const SCORES_DELAY_MS: u32 = 400;
pub const SCORE_STAGGER_MS: u32 = 300;
pub const SCORE_FILL_DELAY_MS: u32 = 200;
pub const DEMO_DWELL_MS: u32 = 8_000;
pub const DEMO_VISIBILITY_THRESHOLD: f64 = 0.5;

pub const DEMO_TEXT: &str =
    "Hey @glowwithmia! We loved your skincare routine video. Can we feature it in our spring campaign?";

/// Feedback rows shown under the demo. `None` means the row has no fill target.
pub const DEMO_FEEDBACK: &[(&str, Option<&str>)] = &[
    ("Tone match", Some("92")),
    ("Rights clarity", Some("88")),
    ("Creator friendliness", Some("95")),
];

// Accordion
pub const ACCORDION_SCROLL_DELAY_MS: u32 = 300;

// Contact form
pub const SUCCESS_BANNER_MS: u32 = 5_000;
pub const TEXTAREA_MAX_HEIGHT: i32 = 400;

// Scroll & navigation
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px";
pub const REVEAL_MARKERS: &[&str] = &["reveal", "reveal-fade", "reveal-scale", "reveal-left", "reveal-right"];
pub const SCROLLED_OFFSET: f64 = 50.0;
pub const SECTION_LOOKAHEAD: f64 = 100.0;
pub const ANCHOR_MARGIN: f64 = 20.0;
