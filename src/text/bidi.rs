use std::sync::LazyLock;

use regex::Regex;
use unicode_bidi::BidiInfo;

/// LEFT-TO-RIGHT ISOLATE and POP DIRECTIONAL ISOLATE, which chat exports wrap
/// around mentions and links
static DIRECTIONAL_ISOLATES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{2066}\x{2069}]+").expect("valid regex"));

/// Emoji sequences: flags, keycaps, and pictographs with their modifier,
/// variation selector and ZWJ chains
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\p{Regional_Indicator}{2}",
        r"|[0-9#*]\x{FE0F}?\x{20E3}",
        r"|\p{Extended_Pictographic}[\x{FE0F}\p{Emoji_Modifier}]*",
        r"(?:\x{200D}\p{Extended_Pictographic}[\x{FE0F}\p{Emoji_Modifier}]*)*",
        r"|[\x{FE0F}\p{Emoji_Modifier}]+",
    ))
    .expect("valid regex")
});

/// Replace each run of directional isolates with a space, then each emoji
/// sequence with a space
pub fn strip_emoji_and_isolates(text: &str) -> String {
    let spaced = DIRECTIONAL_ISOLATES.replace_all(text, " ");
    EMOJI.replace_all(&spaced, " ").into_owned()
}

/// Convert logical order to visual order for a left-to-right glyph layout.
///
/// Paragraph direction comes from the first strong character. Right-to-left
/// runs are reversed with their paired brackets mirrored.
pub fn to_visual(text: &str) -> String {
    let info = BidiInfo::new(text, None);
    let mut out = String::with_capacity(text.len());

    for para in &info.paragraphs {
        let (levels, runs) = info.visual_runs(para, para.range.clone());
        for run in runs {
            let segment = &text[run.clone()];
            if levels[run.start].is_rtl() {
                out.extend(segment.chars().rev().map(mirror));
            } else {
                out.push_str(segment);
            }
        }
    }

    out
}

fn mirror(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '«' => '»',
        '»' => '«',
        '‹' => '›',
        '›' => '‹',
        _ => c,
    }
}
