//! Word scanner.
//!
//! Splits free-form text into the words a case convention is applied to.
//! Boundaries come from four sources, checked in this order at every
//! position:
//!
//! 1. A registered acronym spelled at the position.
//! 2. A lowercase letter or digit followed by an uppercase letter
//!    (`fooBar`, `get2HTTP`).
//! 3. An uppercase letter followed by a lowercase letter, which starts a new
//!    word (`HTTPResponse` -> `HTTP`, `Response`).
//! 4. A delimiter character (see [`DELIMITERS`]).
//!
//! Everything else, punctuation and uncased scripts included, extends the
//! current word.
//!
//! Letter case and digits are classified by Unicode general category (`Lu`,
//! `Ll`, `Nd`).  Characters that merely have a case mapping, such as `Ⓐ` or
//! `Ⅷ`, and other numbers such as `½` never form a boundary.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::acronyms::AcronymRegistry;

/// Characters that separate words.
pub const DELIMITERS: [char; 9] = [' ', '\n', '\t', '_', '.', '-', '#', '?', '!'];

/// A unit of output produced by [`scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A word subject to the convention's casing rule.
    Word(&'a str),
    /// A registered acronym; emitted verbatim.
    Acronym(&'a str),
    /// Zero-length placeholder that keeps a leading or trailing separator.
    Empty,
}

impl<'a> Token<'a> {
    /// The token's text; empty for [`Token::Empty`].
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(text) | Token::Acronym(text) => text,
            Token::Empty => "",
        }
    }

    /// Whether the token's casing must not be changed.
    pub fn is_case_locked(&self) -> bool {
        matches!(self, Token::Acronym(_))
    }
}

/// Whether `ch` is an uppercase letter (`Lu`).
pub fn is_upper(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::UppercaseLetter
}

/// Whether `ch` is a lowercase letter (`Ll`).
pub fn is_lower(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::LowercaseLetter
}

/// Whether `ch` is a decimal digit (`Nd`).
pub fn is_digit(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::DecimalNumber
}

/// Whether `ch` separates words.
pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Split `text` into tokens.
///
/// `separator` is the string the words will be joined with.  When the input
/// starts or ends with a delimiter equal to it, an [`Token::Empty`] is
/// emitted at that edge so the joined output keeps the separator there.
pub fn scan<'a>(text: &'a str, acronyms: &AcronymRegistry, separator: &str) -> Vec<Token<'a>> {
    let separator = single_char(separator);
    let mut tokens = Vec::new();
    // Byte offset where the pending word begins.
    let mut start: Option<usize> = None;
    let mut trailing_separator = false;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(found) = acronyms.match_at(text, pos) {
            flush(&mut tokens, text, &mut start, pos);
            tokens.push(Token::Acronym(&text[pos..pos + found.len]));
            pos += found.len;
            continue;
        }

        let mut chars = text[pos..].chars();
        let Some(ch) = chars.next() else { break };
        let next = chars.next();
        let end = pos + ch.len_utf8();

        if (is_lower(ch) || is_digit(ch)) && next.is_some_and(is_upper) {
            let word_start = start.take().unwrap_or(pos);
            tokens.push(Token::Word(&text[word_start..end]));
        } else if is_upper(ch) && next.is_some_and(is_lower) {
            flush(&mut tokens, text, &mut start, pos);
            start = Some(pos);
        } else if is_delimiter(ch) {
            flush(&mut tokens, text, &mut start, pos);
            if separator == Some(ch) {
                if pos == 0 {
                    tokens.push(Token::Empty);
                } else if end == text.len() {
                    trailing_separator = true;
                }
            }
        } else if start.is_none() {
            start = Some(pos);
        }

        pos = end;
    }

    if start.is_some() {
        flush(&mut tokens, text, &mut start, text.len());
    } else if trailing_separator {
        tokens.push(Token::Empty);
    }

    tokens
}

fn flush<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str, start: &mut Option<usize>, end: usize) {
    if let Some(word_start) = start.take()
        && word_start < end
    {
        tokens.push(Token::Word(&text[word_start..end]));
    }
}

fn single_char(separator: &str) -> Option<char> {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        scan(text, &AcronymRegistry::new(), "_")
            .iter()
            .map(Token::as_str)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(scan("", &AcronymRegistry::new(), "_").is_empty());
    }

    #[test]
    fn test_single_character() {
        assert_eq!(words("f"), vec!["f"]);
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(words("1234"), vec!["1234"]);
    }

    #[test]
    fn test_camel_humps() {
        assert_eq!(words("fooBarBaz"), vec!["foo", "Bar", "Baz"]);
        assert_eq!(words("FooBarBaz"), vec!["Foo", "Bar", "Baz"]);
        assert_eq!(words("Foo2Foo2Bar"), vec!["Foo2", "Foo2", "Bar"]);
    }

    #[test]
    fn test_uppercase_run_falls_back_to_humps() {
        assert_eq!(words("getHTTPResponse"), vec!["get", "HTTP", "Response"]);
        assert_eq!(words("HTTPResponseCodeXY"), vec!["HTTP", "Response", "Code", "XY"]);
        assert_eq!(words("FooXYz"), vec!["Foo", "X", "Yz"]);
        assert_eq!(words("supports IPv6 on iOS?"), vec!["supports", "I", "Pv6", "on", "i", "OS"]);
    }

    #[test]
    fn test_delimiters_collapse() {
        assert_eq!(words("Foo - Bar"), vec!["Foo", "Bar"]);
        assert_eq!(words("foo.bar#baz?qux!quux"), vec!["foo", "bar", "baz", "qux", "quux"]);
        assert_eq!(words("foo\tbar\nbaz"), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_punctuation_stays_in_word() {
        assert_eq!(words("Foo w1th apo's and punc]t"), vec!["Foo", "w1th", "apo's", "and", "punc]t"]);
        assert_eq!(words("foo & bar"), vec!["foo", "&", "bar"]);
    }

    #[test]
    fn test_leading_and_trailing_separator() {
        let tokens = scan("__FOO_BAR__", &AcronymRegistry::new(), "_");
        assert_eq!(
            tokens,
            vec![Token::Empty, Token::Word("FOO"), Token::Word("BAR"), Token::Empty]
        );
    }

    #[test]
    fn test_edge_delimiter_other_than_separator_is_dropped() {
        let tokens = scan("__FOO_BAR__", &AcronymRegistry::new(), "-");
        assert_eq!(tokens, vec![Token::Word("FOO"), Token::Word("BAR")]);

        let tokens = scan("--foo-bar--", &AcronymRegistry::new(), "-");
        assert_eq!(
            tokens,
            vec![Token::Empty, Token::Word("foo"), Token::Word("bar"), Token::Empty]
        );
    }

    #[test]
    fn test_multi_char_separator_never_marks_edges() {
        let tokens = scan("_foo_", &AcronymRegistry::new(), "__");
        assert_eq!(tokens, vec![Token::Word("foo")]);
    }

    #[test]
    fn test_lone_separator() {
        let tokens = scan("_", &AcronymRegistry::new(), "_");
        assert_eq!(tokens, vec![Token::Empty]);
    }

    #[test]
    fn test_acronym_tokens_are_case_locked() {
        let acronyms: AcronymRegistry = ["HTTP"].into_iter().collect();
        let tokens = scan("HTTPResponseCode", &acronyms, "_");
        assert_eq!(
            tokens,
            vec![
                Token::Acronym("HTTP"),
                Token::Word("Response"),
                Token::Word("Code"),
            ]
        );
        assert!(tokens[0].is_case_locked());
        assert!(!tokens[1].is_case_locked());
    }

    #[test]
    fn test_acronym_inside_word() {
        let acronyms: AcronymRegistry = ["DOM", "XPath"].into_iter().collect();
        let tokens = scan("ADOMXPathElement", &acronyms, "-");
        assert_eq!(
            tokens,
            vec![
                Token::Word("A"),
                Token::Acronym("DOM"),
                Token::Acronym("XPath"),
                Token::Word("Element"),
            ]
        );
    }

    #[test]
    fn test_acronym_followed_by_lowercase_is_not_matched() {
        let acronyms: AcronymRegistry = ["HTTP"].into_iter().collect();
        let tokens = scan("HTTPs response", &acronyms, "_");
        assert_eq!(
            tokens,
            vec![Token::Word("HTT"), Token::Word("Ps"), Token::Word("response")]
        );
        assert!(tokens.iter().all(|token| !token.is_case_locked()));

        let tokens = scan("https response", &acronyms, "_");
        assert_eq!(tokens, vec![Token::Word("https"), Token::Word("response")]);
    }

    #[test]
    fn test_unicode_case_boundaries() {
        assert_eq!(words("ЗдравствуйтеПривет"), vec!["Здравствуйте", "Привет"]);
        assert_eq!(words("ΚαλημέραΚόσμε"), vec!["Καλημέρα", "Κόσμε"]);
    }

    #[test]
    fn test_general_category_classification() {
        assert!(is_upper('Ж') && is_lower('ж') && is_digit('٣'));
        assert!(!is_upper('Ⓐ') && !is_lower('ⓐ'));
        assert!(!is_upper('Ⅷ') && !is_digit('Ⅷ'));
        assert!(!is_lower('ª') && !is_lower('ᵃ'));
        assert!(!is_digit('½') && !is_digit('²'));
        assert!(!is_upper('ǅ') && !is_lower('ǅ'));
    }

    #[test]
    fn test_cased_symbols_and_other_numbers_are_not_boundaries() {
        assert_eq!(words("fooⒶbar"), vec!["fooⒶbar"]);
        assert_eq!(words("a½B"), vec!["a½B"]);
        assert_eq!(words("xⅧy"), vec!["xⅧy"]);
        assert_eq!(words("aªBc"), vec!["aª", "Bc"]);
        assert_eq!(words("x²Y"), vec!["x²Y"]);
    }

    #[test]
    fn test_non_ascii_decimal_digits_are_boundaries() {
        assert_eq!(words("foo٣Bar"), vec!["foo٣", "Bar"]);
    }

    #[test]
    fn test_uncased_scripts_are_single_words() {
        assert_eq!(words("你好世界"), vec!["你好世界"]);
        assert_eq!(words("你好 世界"), vec!["你好", "世界"]);
    }
}
