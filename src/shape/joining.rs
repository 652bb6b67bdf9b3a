//! Contextual letter-form selection for Arabic text.
//!
//! Maps each Arabic letter to its isolated, initial, medial, or final
//! presentation form (Arabic Presentation Forms-B, U+FE70–U+FEFF) based on
//! joining adjacency. Harakat and other combining marks are transparent to
//! joining; the mandatory lam-alef ligatures are applied. Characters the
//! table does not cover pass through unchanged.

const TATWEEL: char = '\u{0640}';
const LAM: char = '\u{0644}';

/// Presentation forms of one Arabic letter.
///
/// Right-joining letters (alef, dal, thal, reh, zain, waw, ...) carry no
/// initial or medial form.
#[derive(Debug, Clone, Copy)]
struct Forms {
    isolated: char,
    final_: char,
    initial: Option<char>,
    medial: Option<char>,
}

impl Forms {
    const fn dual(isolated: char, final_: char, initial: char, medial: char) -> Self {
        Self {
            isolated,
            final_,
            initial: Some(initial),
            medial: Some(medial),
        }
    }

    const fn right(isolated: char, final_: char) -> Self {
        Self {
            isolated,
            final_,
            initial: None,
            medial: None,
        }
    }

    fn select(&self, prev_connects: bool, next_connects: bool) -> char {
        match (prev_connects, next_connects) {
            (false, false) => self.isolated,
            (false, true) => self.initial.unwrap_or(self.isolated),
            (true, false) => self.final_,
            (true, true) => self.medial.unwrap_or(self.final_),
        }
    }

    /// Whether the letter connects to the following letter.
    fn joins_forward(&self) -> bool {
        self.medial.is_some()
    }
}

/// Presentation forms for the letters of the base Arabic block.
fn forms(c: char) -> Option<Forms> {
    let f = match c {
        '\u{0621}' => Forms::right('\u{FE80}', '\u{FE80}'), // hamza
        '\u{0622}' => Forms::right('\u{FE81}', '\u{FE82}'), // alef madda
        '\u{0623}' => Forms::right('\u{FE83}', '\u{FE84}'), // alef hamza above
        '\u{0624}' => Forms::right('\u{FE85}', '\u{FE86}'), // waw hamza
        '\u{0625}' => Forms::right('\u{FE87}', '\u{FE88}'), // alef hamza below
        '\u{0626}' => Forms::dual('\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'), // yeh hamza
        '\u{0627}' => Forms::right('\u{FE8D}', '\u{FE8E}'), // alef
        '\u{0628}' => Forms::dual('\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'), // beh
        '\u{0629}' => Forms::right('\u{FE93}', '\u{FE94}'), // teh marbuta
        '\u{062A}' => Forms::dual('\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'), // teh
        '\u{062B}' => Forms::dual('\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'), // theh
        '\u{062C}' => Forms::dual('\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'), // jeem
        '\u{062D}' => Forms::dual('\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'), // hah
        '\u{062E}' => Forms::dual('\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'), // khah
        '\u{062F}' => Forms::right('\u{FEA9}', '\u{FEAA}'), // dal
        '\u{0630}' => Forms::right('\u{FEAB}', '\u{FEAC}'), // thal
        '\u{0631}' => Forms::right('\u{FEAD}', '\u{FEAE}'), // reh
        '\u{0632}' => Forms::right('\u{FEAF}', '\u{FEB0}'), // zain
        '\u{0633}' => Forms::dual('\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'), // seen
        '\u{0634}' => Forms::dual('\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'), // sheen
        '\u{0635}' => Forms::dual('\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'), // sad
        '\u{0636}' => Forms::dual('\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'), // dad
        '\u{0637}' => Forms::dual('\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'), // tah
        '\u{0638}' => Forms::dual('\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'), // zah
        '\u{0639}' => Forms::dual('\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'), // ain
        '\u{063A}' => Forms::dual('\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'), // ghain
        '\u{0641}' => Forms::dual('\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'), // feh
        '\u{0642}' => Forms::dual('\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'), // qaf
        '\u{0643}' => Forms::dual('\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'), // kaf
        '\u{0644}' => Forms::dual('\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'), // lam
        '\u{0645}' => Forms::dual('\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'), // meem
        '\u{0646}' => Forms::dual('\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'), // noon
        '\u{0647}' => Forms::dual('\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'), // heh
        '\u{0648}' => Forms::right('\u{FEED}', '\u{FEEE}'), // waw
        '\u{0649}' => Forms::right('\u{FEEF}', '\u{FEF0}'), // alef maksura
        '\u{064A}' => Forms::dual('\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'), // yeh
        _ => return None,
    };
    Some(f)
}

/// Mandatory lam-alef ligature: (isolated, final) presentation forms.
fn lam_alef(alef: char) -> Option<(char, char)> {
    match alef {
        '\u{0622}' => Some(('\u{FEF5}', '\u{FEF6}')),
        '\u{0623}' => Some(('\u{FEF7}', '\u{FEF8}')),
        '\u{0625}' => Some(('\u{FEF9}', '\u{FEFA}')),
        '\u{0627}' => Some(('\u{FEFB}', '\u{FEFC}')),
        _ => None,
    }
}

/// Combining marks that do not participate in joining.
fn is_transparent(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06DC}'
        | '\u{06DF}'..='\u{06E8}'
        | '\u{06EA}'..='\u{06ED}')
}

/// Index and value of the next non-transparent character after `i`.
fn next_base(chars: &[char], i: usize) -> Option<(usize, char)> {
    chars
        .iter()
        .enumerate()
        .skip(i + 1)
        .find(|(_, c)| !is_transparent(**c))
        .map(|(j, c)| (j, *c))
}

fn joins_backward(c: char) -> bool {
    c == TATWEEL || forms(c).is_some()
}

/// Replace Arabic letters with their contextual presentation forms.
///
/// The output is freshly allocated per call; the input is never mutated.
/// Non-Arabic characters, Arabic digits, and punctuation pass through
/// unchanged and break joining.
pub fn shape_text(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    // Tracks whether the previously emitted letter connects forward.
    let mut prev_connects = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if is_transparent(c) {
            out.push(c);
            i += 1;
            continue;
        }

        if c == TATWEEL {
            out.push(c);
            prev_connects = true;
            i += 1;
            continue;
        }

        let Some(letter) = forms(c) else {
            out.push(c);
            prev_connects = false;
            i += 1;
            continue;
        };

        if c == LAM {
            if let Some((j, next)) = next_base(&chars, i) {
                if let Some((isolated, final_)) = lam_alef(next) {
                    out.push(if prev_connects { final_ } else { isolated });
                    // Marks between lam and alef follow the ligature.
                    for &mark in &chars[i + 1..j] {
                        out.push(mark);
                    }
                    prev_connects = false;
                    i = j + 1;
                    continue;
                }
            }
        }

        let next_connects = next_base(&chars, i)
            .map(|(_, next)| joins_backward(next))
            .unwrap_or(false);

        out.push(letter.select(prev_connects, next_connects));
        prev_connects = letter.joins_forward();
        i += 1;
    }

    out
}
