//! Tag color palette.

use rand::Rng;

/// Fixed palette for tag colors.
pub const TAG_COLORS: &[&str] = &[
    "#ef4444", // Red
    "#f97316", // Orange
    "#eab308", // Yellow
    "#22c55e", // Green
    "#06b6d4", // Cyan
    "#3b82f6", // Blue
    "#8b5cf6", // Purple
    "#ec4899", // Pink
];

/// Pick a random palette color. Assigned once per tag at creation; the tag
/// keeps it for life.
pub fn random_tag_color() -> &'static str {
    let index = rand::thread_rng().gen_range(0..TAG_COLORS.len());
    TAG_COLORS[index]
}
