use unicode_normalization::UnicodeNormalization;

const ZWNJ: char = '\u{200c}';

/// Which canonicalization rules the normalizer applies
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Fold Arabic letter variants onto their Persian forms
    pub unify_characters: bool,
    /// Rewrite ASCII digits as Persian digits
    pub persian_digits: bool,
    /// Drop harakat and tatweel
    pub remove_diacritics: bool,
    /// Strip invisible marks and tidy ZWNJ placement
    pub clean_zero_width: bool,
    /// Collapse whitespace runs to one space and trim
    pub collapse_whitespace: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            unify_characters: true,
            persian_digits: true,
            remove_diacritics: true,
            clean_zero_width: true,
            collapse_whitespace: true,
        }
    }
}

/// Persian orthographic normalizer, shared by stopwords and the corpus
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Canonicalize `text`. Idempotent.
    pub fn normalize(&self, text: &str) -> String {
        let folded: String = fold_presentation_forms(text).nfc().collect();

        let mut out = String::with_capacity(folded.len());
        for c in folded.chars() {
            if self.config.remove_diacritics && is_diacritic(c) {
                continue;
            }
            if self.config.clean_zero_width && is_invisible(c) {
                continue;
            }
            out.push(self.map_char(c));
        }

        if self.config.clean_zero_width {
            out = tidy_zwnj(&out);
        }
        if self.config.collapse_whitespace {
            out = out.split_whitespace().collect::<Vec<_>>().join(" ");
        }
        out
    }

    fn map_char(&self, c: char) -> char {
        if self.config.unify_characters {
            match c {
                'ك' => return 'ک',
                'ي' | 'ى' => return 'ی',
                'ە' => return 'ه',
                '٠'..='٩' => return shift_digit(c, '٠', '۰'),
                _ => {}
            }
        }
        if self.config.persian_digits && c.is_ascii_digit() {
            return shift_digit(c, '0', '۰');
        }
        c
    }
}

fn shift_digit(c: char, from_zero: char, to_zero: char) -> char {
    char::from_u32(to_zero as u32 + (c as u32 - from_zero as u32)).unwrap_or(c)
}

/// Presentation forms decompose back to base letters under NFKC
fn fold_presentation_forms(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_presentation_form(c) {
            out.extend(std::iter::once(c).nfkc());
        } else {
            out.push(c);
        }
    }
    out
}

fn is_presentation_form(c: char) -> bool {
    matches!(c, '\u{fb50}'..='\u{fdff}' | '\u{fe70}'..='\u{fefe}')
}

fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064b}'..='\u{0652}' | '\u{0670}' | '\u{0640}')
}

fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200b}' | '\u{200e}' | '\u{200f}' | '\u{feff}')
}

/// Collapse ZWNJ runs and drop any that do not sit between two non-space chars
fn tidy_zwnj(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c != ZWNJ {
            out.push(c);
            continue;
        }
        if out.ends_with(ZWNJ) {
            continue;
        }
        let prev_ok = out.chars().next_back().is_some_and(|p| !p.is_whitespace());
        let next_ok = chars[i + 1..]
            .iter()
            .find(|&&n| n != ZWNJ)
            .is_some_and(|n| !n.is_whitespace());
        if prev_ok && next_ok {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unify_arabic_letters() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("كتاب علي"), "کتاب علی");
    }

    #[test]
    fn test_digits_become_persian() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("123 ٤٥"), "۱۲۳ ۴۵");

        let keep_ascii = Normalizer::new(NormalizerConfig {
            persian_digits: false,
            ..Default::default()
        });
        assert_eq!(keep_ascii.normalize("123"), "123");
    }

    #[test]
    fn test_remove_diacritics_and_tatweel() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("كَتَبَ"), "کتب");
        assert_eq!(n.normalize("سـلام"), "سلام");
    }

    #[test]
    fn test_zero_width_cleanup() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("می\u{200c}\u{200c}روم"), "می\u{200c}روم");
        assert_eq!(n.normalize("\u{200c}سلام \u{200c}دنیا\u{200c}"), "سلام دنیا");
        assert_eq!(n.normalize("a\u{200b}b\u{200f}"), "ab");
    }

    #[test]
    fn test_presentation_forms_fold_to_base() {
        let n = Normalizer::default();
        // isolated/initial/final presentation forms of س ل ا م
        assert_eq!(n.normalize("\u{feb3}\u{fefc}\u{fee1}"), "سلام");
    }

    #[test]
    fn test_collapse_whitespace() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("  cat   sat\n"), "cat sat");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let n = Normalizer::default();
        let inputs = ["كتابِ من 12", " \u{200c}می\u{200c}\u{200c}روم ", "ﻻ ﺳﻼﻡ", "plain text"];
        for input in inputs {
            let once = n.normalize(input);
            assert_eq!(n.normalize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_directional_isolates_survive() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("\u{2066}abc\u{2069}"), "\u{2066}abc\u{2069}");
    }
}
