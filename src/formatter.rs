// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Joins scanned tokens into the final string for one convention.

use crate::acronyms::AcronymRegistry;
use crate::convention::Convention;
use crate::scanner::Token;

/// Case every token by `convention` and join them with `separator`.
///
/// Acronym tokens, and words whose spelling matches a registered acronym
/// regardless of case, are written with their canonical spelling.  Empty
/// tokens contribute nothing but still get a separator on their side.
pub fn format(
    tokens: &[Token<'_>],
    convention: Convention,
    separator: &str,
    acronyms: &AcronymRegistry,
) -> String {
    let capacity = tokens.iter().map(|t| t.as_str().len()).sum::<usize>()
        + separator.len() * tokens.len().saturating_sub(1);
    let mut out = String::with_capacity(capacity);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        match *token {
            Token::Empty => {}
            Token::Acronym(text) => out.push_str(text),
            Token::Word(word) => match acronyms.lookup(word) {
                Some(canonical) => out.push_str(canonical),
                None => convention.rule(index).apply_into(word, &mut out),
            },
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_with_rules() {
        let tokens = [Token::Word("foo"), Token::Word("BAR"), Token::Word("baz")];
        let none = AcronymRegistry::new();
        assert_eq!(format(&tokens, Convention::Camel, "", &none), "fooBarBaz");
        assert_eq!(format(&tokens, Convention::Constant, "_", &none), "FOO_BAR_BAZ");
        assert_eq!(format(&tokens, Convention::Sentence, " ", &none), "Foo bar baz");
        assert_eq!(format(&tokens, Convention::Header, ":", &none), "Foo:Bar:Baz");
    }

    #[test]
    fn test_empty_tokens_keep_separators() {
        let tokens = [Token::Empty, Token::Word("foo"), Token::Empty];
        let none = AcronymRegistry::new();
        assert_eq!(format(&tokens, Convention::Snake, "_", &none), "_foo_");
        assert_eq!(format(&[Token::Empty], Convention::Snake, "_", &none), "");
    }

    #[test]
    fn test_acronym_tokens_are_verbatim() {
        let tokens = [Token::Acronym("XPath"), Token::Word("node")];
        let none = AcronymRegistry::new();
        for convention in Convention::ALL {
            let output = format(&tokens, convention, "|", &none);
            assert!(output.starts_with("XPath|"), "{convention}: {output}");
        }
    }

    #[test]
    fn test_words_spelling_an_acronym_are_locked() {
        let acronyms: AcronymRegistry = ["HTTP", "PostgreSQL"].into_iter().collect();
        let tokens = [Token::Word("postgresql"), Token::Word("http"), Token::Word("adapter")];
        assert_eq!(
            format(&tokens, Convention::Camel, "", &acronyms),
            "PostgreSQLHTTPAdapter"
        );
        assert_eq!(
            format(&tokens, Convention::Sentence, " ", &acronyms),
            "PostgreSQL HTTP adapter"
        );
    }

    #[test]
    fn test_no_tokens() {
        assert_eq!(format(&[], Convention::Title, " ", &AcronymRegistry::new()), "");
    }
}
