// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Replace every char outside 0..=127 with a single space.
/// Char count is preserved: `"Café"` → `"Caf "`.
pub fn normalize_ascii(s: &str) -> String {
    s.chars().map(|c| if c.is_ascii() { c } else { ' ' }).collect()
}

/// Word-wise title case: the first letter of every run of letters is upper
/// case, the rest lower case. `"ALCOHOL:"` → `"Alcohol:"`, `"650ml"` → `"650Ml"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word { out.extend(ch.to_lowercase()); }
            else { out.extend(ch.to_uppercase()); }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Keep ASCII digits only.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Last whitespace-separated token, if any. `"Posts by Jane Doe"` → `"Doe"`.
pub fn last_token(s: &str) -> Option<&str> {
    s.split_whitespace().next_back()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_normalization_is_char_for_char() {
        assert_eq!(normalize_ascii("Café"), "Caf ");
        assert_eq!(normalize_ascii("Brew – Co"), "Brew   Co");
        assert_eq!(normalize_ascii("plain"), "plain");
        assert_eq!(normalize_ascii("ü€"), "  ");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("  aroma "), "  Aroma ");
        assert_eq!(title_case("ALCOHOL – 5.5%"), "Alcohol – 5.5%");
        assert_eq!(title_case("size – 650ml"), "Size – 650Ml");
        assert_eq!(title_case("ibu:40"), "Ibu:40");
        assert_eq!(title_case("o'hara"), "O'Hara");
    }

    #[test]
    fn digits_and_tokens() {
        assert_eq!(digits_only("650Ml"), "650");
        assert_eq!(digits_only("Ml"), "");
        assert_eq!(last_token("Posts by Jane Doe"), Some("Doe"));
        assert_eq!(last_token("   "), None);
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
    }
}
