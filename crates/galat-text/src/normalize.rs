use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical comparison form of a string.
///
/// Lowercases, folds diacritics to their base Latin letter, turns every
/// character outside `[a-z0-9]` into a separator, collapses separators to a
/// single space and trims. `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    let lowered = input.to_lowercase();
    for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        let folded: &str = match c {
            'a'..='z' | '0'..='9' => {
                push_with_separator(&mut out, &mut pending_space, c);
                continue;
            }
            'œ' => "oe",
            'æ' => "ae",
            'ß' => "ss",
            'ø' => "o",
            'đ' => "d",
            'ł' => "l",
            _ => {
                pending_space = true;
                continue;
            }
        };
        for f in folded.chars() {
            push_with_separator(&mut out, &mut pending_space, f);
        }
    }
    out
}

fn push_with_separator(out: &mut String, pending_space: &mut bool, c: char) {
    if *pending_space && !out.is_empty() {
        out.push(' ');
    }
    *pending_space = false;
    out.push(c);
}
