//! Small string helpers shared by naming and display code.

/// Turn `the-long-night` into `The long night`.
///
/// Only the first word is capitalised; the rest are kept verbatim.
pub fn kebab_to_sentence(s: &str) -> String {
    let mut words = s.split('-');
    let mut out = String::with_capacity(s.len());

    if let Some(first) = words.next() {
        let mut chars = first.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    for word in words {
        out.push(' ');
        out.push_str(word);
    }
    out
}

/// Turn an arbitrary title into a kebab-case slug.
///
/// Every run of characters outside `a-z` (after lowercasing) collapses to a
/// single `-`, and leading/trailing dashes are trimmed.
pub fn to_kebab(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_dash = false;

    for c in s.to_lowercase().chars() {
        if c.is_ascii_lowercase() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Format `12500` as `12,500`.
pub fn with_thousands_separator(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Count whitespace-delimited tokens.
pub fn word_count(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_to_sentence_capitalises_first_word_only() {
        assert_eq!(kebab_to_sentence("foo-bar"), "Foo bar");
        assert_eq!(kebab_to_sentence("a-longer-example"), "A longer example");
        assert_eq!(kebab_to_sentence(""), "");
    }

    #[test]
    fn to_kebab_collapses_non_letters() {
        assert_eq!(to_kebab("Foo bar"), "foo-bar");
        assert_eq!(to_kebab(" Foo bar "), "foo-bar");
        assert_eq!(to_kebab("*Foo.^%$bar__"), "foo-bar");
    }

    #[test]
    fn thousands() {
        assert_eq!(with_thousands_separator(0), "0");
        assert_eq!(with_thousands_separator(500), "500");
        assert_eq!(with_thousands_separator(12500), "12,500");
        assert_eq!(with_thousands_separator(1234567), "1,234,567");
    }

    #[test]
    fn counts_words() {
        assert_eq!(word_count("Lorem ipsum\n\n dolor   sit"), 4);
        assert_eq!(word_count("   "), 0);
    }
}
