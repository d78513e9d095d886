use tracing::debug;

use crate::text::{reshape, strip_emoji_and_isolates, to_visual};

/// Configuration for display reshaping
#[derive(Debug, Clone)]
pub struct ReshapeConfig {
    /// Rounds of shape-then-reorder. Two rounds stabilize compound letters
    /// across nested embedding levels; other values change visual output.
    pub passes: usize,
}

impl Default for ReshapeConfig {
    fn default() -> Self {
        Self { passes: 2 }
    }
}

/// Prepare normalized text for a renderer with no shaping or bidi support.
///
/// Each pass substitutes contextual letter forms, strips emoji and directional
/// isolates, and reorders to visual order.
pub fn reshape_for_display(text: &str, config: &ReshapeConfig) -> String {
    let mut out = text.to_string();
    for pass in 0..config.passes {
        out = reshape(&out);
        out = to_visual(&strip_emoji_and_isolates(&out));
        debug!("Reshape pass {} produced {} chars", pass + 1, out.chars().count());
    }
    out
}
