//! Rotating pick-me-up quotes for the arcade landing page.

/// Fixed rotation, in display order. Selection is by wall-clock second,
/// so all instances serve the same quote at the same moment.
pub const QUOTES: [&str; 4] = [
    "慢慢来，心会跟上。",
    "今天也要好好休息。",
    "深呼吸，然后重新开始。",
    "去喝一杯水，奖励一下自己。",
];

/// Quote for a given Unix timestamp: `unix_secs mod 4` indexes the rotation.
pub fn quote_at(unix_secs: i64) -> &'static str {
    QUOTES[unix_secs.rem_euclid(QUOTES.len() as i64) as usize]
}
