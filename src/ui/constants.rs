// UI fixtures shared across screens

/// Header tagline shown next to the app name.
pub const TAGLINE: &str = "your skin deserves the best";

/// Tip-of-the-day rotation. Indexed by local day-of-year so the tip is
/// stable within a day and changes at the date rollover.
pub const TIPS: &[&str] = &[
    "Apply sunscreen even on cloudy days. UV rays pass right through the clouds!",
    "Wait a minute between serum and moisturizer so each layer absorbs fully.",
    "Evening cleansing removes the sunscreen and pollution the day left behind.",
    "Retinol and strong exfoliants belong in the evening routine, never under the sun.",
    "Drink water: hydration shows up on your skin before anywhere else.",
];

/// Pick the tip for a day-of-year ordinal (1-based, as chrono reports it).
pub fn tip_for_day(ordinal: u32) -> &'static str {
    TIPS[ordinal as usize % TIPS.len()]
}
