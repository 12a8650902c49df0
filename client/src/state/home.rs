//! Home page banner rotation.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

pub const BANNER_INTERVAL_MS: u32 = 5_000;

/// A promotional slide on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Banner {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const BANNERS: [Banner; 3] = [
    Banner { title: "Drive away today", subtitle: "Hundreds of vehicles from trusted local rental companies." },
    Banner { title: "Add a driver", subtitle: "Book an experienced driver with any vehicle." },
    Banner { title: "Going intercity?", subtitle: "Plan trips between cities with a single booking." },
];

/// Index of the slide after `current`, wrapping to the first.
pub fn next_banner(current: usize, count: usize) -> usize {
    if count == 0 { 0 } else { (current + 1) % count }
}
