//! Site-wide tunables.

pub const NAV_SCROLLED_AFTER_PX: f64 = 50.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;
pub const HEADER_SCROLL_OFFSET_PX: f64 = 70.0;

// Reveals fire once 15% of the element is visible, with the viewport bottom
// pulled up 50px so the element is properly on screen first.
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_MARGIN_PX: i32 = -50;
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const PROGRESS_THRESHOLD: f64 = 0.5;

pub const COUNT_UP_DEFAULT_MS: u32 = 2000;
pub const WIDTH_GROW_MS: u32 = 1500;
pub const SCROLL_POLL_MS: u32 = 80;

pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1500;
pub const NEWSLETTER_SUBMIT_DELAY_MS: u32 = 1000;
pub const REGISTRATION_SUBMIT_DELAY_MS: u32 = 2000;
pub const BANNER_DISMISS_MS: u32 = 5000;
