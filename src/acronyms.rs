//! Acronym registry.
//!
//! Acronyms are words whose canonical spelling survives every case
//! conversion untouched, e.g. `HTTP` in `HTTP_RESPONSE_CODE` or `XPath` in
//! `XPathNode`.  The registry answers two questions:
//!
//! - Does this whole word spell a registered acronym, ignoring case?
//!   ([`AcronymRegistry::lookup`])
//! - Which registered acronym, if any, starts at this position of the input?
//!   ([`AcronymRegistry::match_at`])
//!
//! The second one is asked at every scan position, so the registry keeps a
//! character trie over the canonical spellings instead of testing each
//! acronym in turn.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::scanner::is_lower;

/// A collection of acronyms keyed by their lowercased spelling.
#[derive(Debug, Clone, Default)]
pub struct AcronymRegistry {
    /// Lowercased spelling to canonical spelling, in registration order.
    entries: IndexMap<String, String>,
    matcher: Trie,
}

/// An acronym found at a position of the input by [`AcronymRegistry::match_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcronymMatch<'r> {
    /// Length of the match in bytes.
    pub len: usize,
    /// The canonical spelling of the matched acronym.
    pub canonical: &'r str,
}

impl AcronymRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an acronym.
    ///
    /// Adding a spelling that is already registered under a different casing
    /// replaces the canonical spelling but keeps its registration slot.
    /// Empty strings are ignored.
    pub fn add(&mut self, acronym: &str) {
        if acronym.is_empty() {
            tracing::trace!("ignoring empty acronym");
            return;
        }

        let key = acronym.to_lowercase();
        let (index, previous) = self.entries.insert_full(key, acronym.to_string());
        tracing::trace!(acronym, "registered acronym");

        match previous {
            Some(old) if old != acronym => self.rebuild(),
            Some(_) => {}
            None => self.matcher.insert(acronym, index),
        }
    }

    /// Find the canonical spelling of `word`, ignoring case.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Find the longest acronym spelled exactly at byte offset `pos` of `text`.
    ///
    /// A candidate only counts when the character following it is not a
    /// lowercase letter (`Ll`), so `HTTP` does not match the start of `HTTPs`.
    /// When a longer candidate fails that check, a shorter one may still
    /// match.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not on a character boundary of `text`.
    pub fn match_at<'r>(&'r self, text: &str, pos: usize) -> Option<AcronymMatch<'r>> {
        let rest = &text[pos..];
        let mut node = &self.matcher.root;
        let mut best = None;

        for (offset, ch) in rest.char_indices() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => break,
            }
            let end = offset + ch.len_utf8();
            if let Some(index) = node.terminal {
                let followed_by_lowercase = rest[end..].chars().next().is_some_and(is_lower);
                if !followed_by_lowercase {
                    best = Some((end, index));
                }
            }
        }

        best.and_then(|(len, index)| {
            self.entries.get_index(index).map(|(_, canonical)| AcronymMatch {
                len,
                canonical: canonical.as_str(),
            })
        })
    }

    /// Number of registered acronyms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no acronym is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over canonical spellings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Canonical spellings in registration order.
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.values().cloned().collect()
    }

    fn rebuild(&mut self) {
        let mut matcher = Trie::default();
        for (index, canonical) in self.entries.values().enumerate() {
            matcher.insert(canonical, index);
        }
        self.matcher = matcher;
    }
}

impl<S: AsRef<str>> FromIterator<S> for AcronymRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<S: AsRef<str>> Extend<S> for AcronymRegistry {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for acronym in iter {
            self.add(acronym.as_ref());
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Trie {
    root: Node,
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, Node>,
    /// Index into the registry entries when a canonical spelling ends here.
    terminal: Option<usize>,
}

impl Trie {
    fn insert(&mut self, word: &str, index: usize) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.terminal = Some(index);
    }
}
