//! Contextual letter-form substitution for Arabic-script text.
//!
//! Each joining letter is replaced with its isolated, initial, medial or final
//! presentation form so that a renderer without a shaping engine still draws
//! connected script. Output presentation forms are non-joining themselves, so
//! reshaping already-shaped text changes nothing.

const LAM: char = '\u{0644}';

/// Presentation forms of one letter. Right-joining letters have no initial or
/// medial form; non-joining letters (hamza) only have an isolated one.
#[derive(Debug, Clone, Copy)]
struct Forms {
    isolated: char,
    final_: Option<char>,
    initial: Option<char>,
    medial: Option<char>,
}

const fn dual(isolated: char, final_: char, initial: char, medial: char) -> Forms {
    Forms {
        isolated,
        final_: Some(final_),
        initial: Some(initial),
        medial: Some(medial),
    }
}

const fn right(isolated: char, final_: char) -> Forms {
    Forms {
        isolated,
        final_: Some(final_),
        initial: None,
        medial: None,
    }
}

fn forms(c: char) -> Option<Forms> {
    let f = match c {
        'ء' => Forms {
            isolated: '\u{fe80}',
            final_: None,
            initial: None,
            medial: None,
        },
        'آ' => right('\u{fe81}', '\u{fe82}'),
        'أ' => right('\u{fe83}', '\u{fe84}'),
        'ؤ' => right('\u{fe85}', '\u{fe86}'),
        'إ' => right('\u{fe87}', '\u{fe88}'),
        'ئ' => dual('\u{fe89}', '\u{fe8a}', '\u{fe8b}', '\u{fe8c}'),
        'ا' => right('\u{fe8d}', '\u{fe8e}'),
        'ب' => dual('\u{fe8f}', '\u{fe90}', '\u{fe91}', '\u{fe92}'),
        'ة' => right('\u{fe93}', '\u{fe94}'),
        'ت' => dual('\u{fe95}', '\u{fe96}', '\u{fe97}', '\u{fe98}'),
        'ث' => dual('\u{fe99}', '\u{fe9a}', '\u{fe9b}', '\u{fe9c}'),
        'ج' => dual('\u{fe9d}', '\u{fe9e}', '\u{fe9f}', '\u{fea0}'),
        'ح' => dual('\u{fea1}', '\u{fea2}', '\u{fea3}', '\u{fea4}'),
        'خ' => dual('\u{fea5}', '\u{fea6}', '\u{fea7}', '\u{fea8}'),
        'د' => right('\u{fea9}', '\u{feaa}'),
        'ذ' => right('\u{feab}', '\u{feac}'),
        'ر' => right('\u{fead}', '\u{feae}'),
        'ز' => right('\u{feaf}', '\u{feb0}'),
        'س' => dual('\u{feb1}', '\u{feb2}', '\u{feb3}', '\u{feb4}'),
        'ش' => dual('\u{feb5}', '\u{feb6}', '\u{feb7}', '\u{feb8}'),
        'ص' => dual('\u{feb9}', '\u{feba}', '\u{febb}', '\u{febc}'),
        'ض' => dual('\u{febd}', '\u{febe}', '\u{febf}', '\u{fec0}'),
        'ط' => dual('\u{fec1}', '\u{fec2}', '\u{fec3}', '\u{fec4}'),
        'ظ' => dual('\u{fec5}', '\u{fec6}', '\u{fec7}', '\u{fec8}'),
        'ع' => dual('\u{fec9}', '\u{feca}', '\u{fecb}', '\u{fecc}'),
        'غ' => dual('\u{fecd}', '\u{fece}', '\u{fecf}', '\u{fed0}'),
        'ف' => dual('\u{fed1}', '\u{fed2}', '\u{fed3}', '\u{fed4}'),
        'ق' => dual('\u{fed5}', '\u{fed6}', '\u{fed7}', '\u{fed8}'),
        'ك' => dual('\u{fed9}', '\u{feda}', '\u{fedb}', '\u{fedc}'),
        'ل' => dual('\u{fedd}', '\u{fede}', '\u{fedf}', '\u{fee0}'),
        'م' => dual('\u{fee1}', '\u{fee2}', '\u{fee3}', '\u{fee4}'),
        'ن' => dual('\u{fee5}', '\u{fee6}', '\u{fee7}', '\u{fee8}'),
        'ه' => dual('\u{fee9}', '\u{feea}', '\u{feeb}', '\u{feec}'),
        'و' => right('\u{feed}', '\u{feee}'),
        'ى' => right('\u{feef}', '\u{fef0}'),
        'ي' => dual('\u{fef1}', '\u{fef2}', '\u{fef3}', '\u{fef4}'),
        'پ' => dual('\u{fb56}', '\u{fb57}', '\u{fb58}', '\u{fb59}'),
        'چ' => dual('\u{fb7a}', '\u{fb7b}', '\u{fb7c}', '\u{fb7d}'),
        'ژ' => right('\u{fb8a}', '\u{fb8b}'),
        'ک' => dual('\u{fb8e}', '\u{fb8f}', '\u{fb90}', '\u{fb91}'),
        'گ' => dual('\u{fb92}', '\u{fb93}', '\u{fb94}', '\u{fb95}'),
        'ۀ' => right('\u{fba4}', '\u{fba5}'),
        'ی' => dual('\u{fbfc}', '\u{fbfd}', '\u{fbfe}', '\u{fbff}'),
        _ => return None,
    };
    Some(f)
}

/// (isolated, final) ligature for lam followed by an alef variant
fn lam_alef(next: char) -> Option<(char, char)> {
    match next {
        'آ' => Some(('\u{fef5}', '\u{fef6}')),
        'أ' => Some(('\u{fef7}', '\u{fef8}')),
        'إ' => Some(('\u{fef9}', '\u{fefa}')),
        'ا' => Some(('\u{fefb}', '\u{fefc}')),
        _ => None,
    }
}

/// Tatweel and ZWJ connect to both neighbours without changing shape
fn is_join_causing(c: char) -> bool {
    matches!(c, '\u{0640}' | '\u{200d}')
}

/// Combining marks sit on a letter and do not interrupt joining
fn is_transparent(c: char) -> bool {
    matches!(
        c,
        '\u{0610}'..='\u{061a}'
            | '\u{064b}'..='\u{065f}'
            | '\u{0670}'
            | '\u{06d6}'..='\u{06dc}'
            | '\u{06df}'..='\u{06e4}'
            | '\u{06e7}'
            | '\u{06e8}'
            | '\u{06ea}'..='\u{06ed}'
    )
}

fn joins_forward(c: char) -> bool {
    is_join_causing(c) || forms(c).is_some_and(|f| f.initial.is_some())
}

fn joins_backward(c: char) -> bool {
    is_join_causing(c) || forms(c).is_some_and(|f| f.final_.is_some())
}

fn prev_visible(chars: &[char], i: usize) -> Option<char> {
    chars[..i].iter().rev().copied().find(|&c| !is_transparent(c))
}

fn next_visible(chars: &[char], i: usize) -> Option<char> {
    chars[i + 1..].iter().copied().find(|&c| !is_transparent(c))
}

/// Replace each joining letter with the presentation form for its position
pub fn reshape(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let Some(f) = forms(c) else {
            out.push(c);
            i += 1;
            continue;
        };

        let joins_prev = f.final_.is_some() && prev_visible(&chars, i).is_some_and(joins_forward);

        if c == LAM {
            if let Some((isolated, final_)) = chars.get(i + 1).and_then(|&n| lam_alef(n)) {
                out.push(if joins_prev { final_ } else { isolated });
                i += 2;
                continue;
            }
        }

        let joins_next = f.initial.is_some() && next_visible(&chars, i).is_some_and(joins_backward);
        let shaped = match (joins_prev, joins_next) {
            (true, true) => f.medial,
            (false, true) => f.initial,
            (true, false) => f.final_,
            (false, false) => None,
        };
        out.push(shaped.unwrap_or(f.isolated));
        i += 1;
    }

    out
}
