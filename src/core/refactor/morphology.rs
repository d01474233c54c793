//! English number morphology: simple suffix rules, no irregular-word table.
//!
//! Suffix tests are ASCII case-insensitive. Replacement suffixes follow the
//! case of the word's last letter, so `USERS` singularizes to `USER` and
//! `Category` pluralizes to `Categories`.

fn is_vowel(c: u8) -> bool {
    matches!(c.to_ascii_lowercase(), b'a' | b'e' | b'i' | b'o' | b'u')
}

fn is_consonant(c: u8) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Render `suffix` in the case of `word`'s last character.
fn cased(word: &str, suffix: &str) -> String {
    match word.as_bytes().last() {
        Some(c) if c.is_ascii_uppercase() => suffix.to_ascii_uppercase(),
        _ => suffix.to_string(),
    }
}

fn ends_with_ci(word: &str, suffix: &str) -> bool {
    word.len() >= suffix.len()
        && word.as_bytes()[word.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

/// Replace the last `strip` bytes of `word` with `suffix`, cased like `word`.
fn swap_suffix(word: &str, strip: usize, suffix: &str) -> String {
    let stem = &word[..word.len() - strip];
    format!("{}{}", stem, cased(word, suffix))
}

/// `f` or `fe` for a stem that lost its `ves`.
///
/// A stem ending in a single vowel after a consonant takes `fe` (kni-ves,
/// wi-ves, li-ves); everything else takes `f` (wol-ves, lea-ves, thie-ves).
fn f_suffix(stem: &str) -> &'static str {
    let bytes = stem.as_bytes();
    match bytes {
        [.., before, last] if is_vowel(*last) && is_consonant(*before) => "fe",
        [last] if is_vowel(*last) => "fe",
        _ => "f",
    }
}

/// Derive the singular form of `word`. First matching rule wins.
pub fn singularize(word: &str) -> String {
    if !word.is_ascii() {
        return word.to_string();
    }

    let len = word.len();

    if len > 3 && ends_with_ci(word, "ies") {
        return swap_suffix(word, 3, "y");
    }

    if len > 3 && ends_with_ci(word, "ves") {
        let stem = &word[..len - 3];
        return swap_suffix(word, 3, f_suffix(stem));
    }

    if len > 2 && ends_with_ci(word, "es") {
        let stem = &word[..len - 2];
        if ["s", "x", "z", "ch", "sh"]
            .iter()
            .any(|suffix| ends_with_ci(stem, suffix))
        {
            return stem.to_string();
        }
    }

    if len > 1 && ends_with_ci(word, "s") && !ends_with_ci(word, "ss") {
        return word[..len - 1].to_string();
    }

    word.to_string()
}

/// Derive the plural form of `word`. First matching rule wins.
pub fn pluralize(word: &str) -> String {
    if !word.is_ascii() || word.is_empty() {
        return word.to_string();
    }

    let bytes = word.as_bytes();
    let len = bytes.len();

    if len > 1 && ends_with_ci(word, "y") && is_consonant(bytes[len - 2]) {
        return swap_suffix(word, 1, "ies");
    }

    if ends_with_ci(word, "fe") {
        return swap_suffix(word, 2, "ves");
    }
    if ends_with_ci(word, "f") {
        return swap_suffix(word, 1, "ves");
    }

    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| ends_with_ci(word, suffix))
    {
        return format!("{}{}", word, cased(word, "es"));
    }

    format!("{}{}", word, cased(word, "s"))
}

/// Uppercase the first character only; the rest is left untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}
