//! Word case conventions.

use std::fmt;
use std::str::FromStr;

/// One of the supported output stylings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// `fooBarBaz`
    Camel,
    /// `FooBarBaz`
    Pascal,
    /// `foo_bar_baz`
    Snake,
    /// `foo-bar-baz`
    Kebab,
    /// `FOO_BAR_BAZ`
    Constant,
    /// `Foo-Bar-Baz`
    Header,
    /// `foo/bar/baz`
    Path,
    /// `Foo bar baz`
    Sentence,
    /// `Foo Bar Baz`
    Title,
}

/// How a single word is cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRule {
    /// Every character lowercased.
    Lower,
    /// Every character uppercased.
    Upper,
    /// First character uppercased, the rest lowercased.
    Capitalize,
}

struct Descriptor {
    separator: &'static str,
    first: WordRule,
    rest: WordRule,
}

impl Convention {
    /// All conventions, in a stable order.
    pub const ALL: [Convention; 9] = [
        Convention::Camel,
        Convention::Pascal,
        Convention::Snake,
        Convention::Kebab,
        Convention::Constant,
        Convention::Header,
        Convention::Path,
        Convention::Sentence,
        Convention::Title,
    ];

    const fn descriptor(self) -> Descriptor {
        use WordRule::*;
        let (separator, first, rest) = match self {
            Convention::Camel => ("", Lower, Capitalize),
            Convention::Pascal => ("", Capitalize, Capitalize),
            Convention::Snake => ("_", Lower, Lower),
            Convention::Kebab => ("-", Lower, Lower),
            Convention::Constant => ("_", Upper, Upper),
            Convention::Header => ("-", Capitalize, Capitalize),
            Convention::Path => ("/", Lower, Lower),
            Convention::Sentence => (" ", Capitalize, Lower),
            Convention::Title => (" ", Capitalize, Capitalize),
        };
        Descriptor {
            separator,
            first,
            rest,
        }
    }

    /// The canonical name, as accepted by [`Convention::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            Convention::Camel => "camel",
            Convention::Pascal => "pascal",
            Convention::Snake => "snake",
            Convention::Kebab => "kebab",
            Convention::Constant => "constant",
            Convention::Header => "header",
            Convention::Path => "path",
            Convention::Sentence => "sentence",
            Convention::Title => "title",
        }
    }

    /// The string words are joined with unless the caller overrides it.
    pub const fn separator(self) -> &'static str {
        self.descriptor().separator
    }

    /// The rule for the word at `index` (0-based).
    pub const fn rule(self, index: usize) -> WordRule {
        let descriptor = self.descriptor();
        if index == 0 {
            descriptor.first
        } else {
            descriptor.rest
        }
    }
}

impl WordRule {
    /// Append `word` cased by this rule to `out`.
    pub fn apply_into(self, word: &str, out: &mut String) {
        match self {
            WordRule::Lower => out.push_str(&word.to_lowercase()),
            WordRule::Upper => out.push_str(&word.to_uppercase()),
            WordRule::Capitalize => {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    push_titlecase(first, out);
                    out.push_str(&chars.as_str().to_lowercase());
                }
            }
        }
    }

    /// `word` cased by this rule.
    pub fn apply(self, word: &str) -> String {
        let mut out = String::with_capacity(word.len());
        self.apply_into(word, &mut out);
        out
    }
}

/// Append the titlecase form of `ch`.
///
/// The Latin digraphs have a dedicated titlecase letter (`ǆ` to `ǅ`).  When
/// uppercasing expands to several characters (`ß` to `SS`), only the first
/// stays uppercase (`Ss`).
fn push_titlecase(ch: char, out: &mut String) {
    let digraph = match ch {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    };
    if let Some(title) = digraph {
        out.push(title);
        return;
    }

    let mut upper = ch.to_uppercase();
    if let Some(head) = upper.next() {
        out.push(head);
        for rest in upper {
            out.extend(rest.to_lowercase());
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a convention name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConventionError {
    name: String,
}

impl fmt::Display for ParseConventionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown case convention '{}' (expected one of: {})",
            self.name,
            Convention::ALL.map(Convention::name).join(", ")
        )
    }
}

impl std::error::Error for ParseConventionError {}

impl FromStr for Convention {
    type Err = ParseConventionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let convention = match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "camel" | "camelcase" | "lower_camel" | "lower_camelcase" => Convention::Camel,
            "pascal" | "pascalcase" | "upper_camel" | "upper_camelcase" => Convention::Pascal,
            "snake" | "snakecase" | "underscore" => Convention::Snake,
            "kebab" | "kebabcase" | "dash" | "dashcase" => Convention::Kebab,
            "constant" | "const" | "constcase" | "constantcase" => Convention::Constant,
            "header" | "headercase" => Convention::Header,
            "path" | "pathcase" => Convention::Path,
            "sentence" | "sentencecase" => Convention::Sentence,
            "title" | "titlecase" => Convention::Title,
            _ => {
                return Err(ParseConventionError {
                    name: s.to_string(),
                });
            }
        };
        Ok(convention)
    }
}
