//! Converter facade: owns the acronym configuration and exposes one entry
//! point per convention.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::acronyms::AcronymRegistry;
use crate::config::Config;
use crate::convention::Convention;
use crate::{formatter, scanner};

/// Acronyms registered on a [`Converter`].
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    acronyms: AcronymRegistry,
}

impl Configuration {
    /// Create a configuration without acronyms.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registered acronyms.
    pub fn acronyms(&self) -> &AcronymRegistry {
        &self.acronyms
    }

    /// Register acronyms.
    ///
    /// ```
    /// use wordcase::Converter;
    ///
    /// let converter = Converter::new();
    /// converter.configure(|config| {
    ///     config.acronym(["HTTP", "JSON"]).acronym(["XML"]);
    /// });
    /// assert_eq!(converter.camelcase("xml_http_request"), "XMLHTTPRequest");
    /// ```
    pub fn acronym<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.acronyms.extend(names);
        self
    }
}

/// Per-call overrides for a conversion.
#[derive(Debug, Clone, Default)]
pub struct CaseOptions {
    /// Acronyms to use instead of the converter's configured ones.  An empty
    /// registry disables acronyms for the call.
    pub acronyms: Option<AcronymRegistry>,
    /// Separator to join words with instead of the convention's default.
    pub separator: Option<String>,
}

impl CaseOptions {
    /// Options that change nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the configured acronyms for this call.
    pub fn acronyms<I, S>(mut self, acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.acronyms = Some(acronyms.into_iter().collect());
        self
    }

    /// Join words with `separator`.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }
}

/// Converts text between case conventions.
///
/// The configuration is swapped atomically on update: conversions read a
/// snapshot and never block, and updates clone, modify and publish a new
/// configuration, retrying if another update got there first.  A shared
/// `Converter` can therefore be reconfigured from any thread, although a
/// conversion running concurrently with an update may see either version.
#[derive(Debug)]
pub struct Converter {
    config: ArcSwap<Configuration>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Converter {
    fn clone(&self) -> Self {
        Self {
            config: ArcSwap::new(self.config.load_full()),
        }
    }
}

macro_rules! convention_methods {
    ($($(#[$meta:meta])* $name:ident, $with:ident => $convention:expr;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, text: &str) -> String {
                self.convert($convention, text, &CaseOptions::default())
            }

            #[doc = concat!("Like [`Converter::", stringify!($name), "`] with per-call overrides.")]
            pub fn $with(&self, text: &str, options: &CaseOptions) -> String {
                self.convert($convention, text, options)
            }
        )*
    };
}

impl Converter {
    /// Create a converter without acronyms.
    pub fn new() -> Self {
        Self::from_configuration(Configuration::new())
    }

    /// Create a converter with an initial set of acronyms.
    pub fn with_acronyms<I, S>(acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut configuration = Configuration::new();
        configuration.acronym(acronyms);
        Self::from_configuration(configuration)
    }

    /// Create a converter from a loaded configuration file.
    pub fn from_config(config: &Config) -> Self {
        Self::with_acronyms(&config.acronyms)
    }

    fn from_configuration(configuration: Configuration) -> Self {
        Self {
            config: ArcSwap::from_pointee(configuration),
        }
    }

    /// A snapshot of the current configuration.
    pub fn config(&self) -> Arc<Configuration> {
        self.config.load_full()
    }

    /// Modify the configuration.
    ///
    /// `f` receives a copy of the current configuration; the result replaces
    /// it.  If another thread updates the configuration meanwhile, `f` runs
    /// again on the newer copy.
    pub fn configure<F>(&self, mut f: F)
    where
        F: FnMut(&mut Configuration),
    {
        self.config.rcu(|current| {
            let mut next = Configuration::clone(current);
            f(&mut next);
            next
        });
    }

    /// Register acronyms.
    pub fn acronym<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        self.configure(|config| {
            config.acronym(&names);
        });
    }

    /// Convert `text` to `convention`.
    pub fn convert(&self, convention: Convention, text: &str, options: &CaseOptions) -> String {
        let config = self.config.load();
        let acronyms = options.acronyms.as_ref().unwrap_or(&config.acronyms);
        let separator = options
            .separator
            .as_deref()
            .unwrap_or(convention.separator());
        let tokens = scanner::scan(text, acronyms, separator);
        formatter::format(&tokens, convention, separator, acronyms)
    }

    /// Convert optional text, passing `None` through.
    pub fn convert_opt(
        &self,
        convention: Convention,
        text: Option<&str>,
        options: &CaseOptions,
    ) -> Option<String> {
        text.map(|text| self.convert(convention, text, options))
    }

    convention_methods! {
        /// `"foo bar baz"` to `"fooBarBaz"`.
        camelcase, camelcase_with => Convention::Camel;
        /// Alias of [`Converter::camelcase`].
        lower_camelcase, lower_camelcase_with => Convention::Camel;
        /// `"foo bar baz"` to `"FooBarBaz"`.
        pascalcase, pascalcase_with => Convention::Pascal;
        /// Alias of [`Converter::pascalcase`].
        upper_camelcase, upper_camelcase_with => Convention::Pascal;
        /// `"fooBarBaz"` to `"foo_bar_baz"`.
        snakecase, snakecase_with => Convention::Snake;
        /// Alias of [`Converter::snakecase`].
        underscore, underscore_with => Convention::Snake;
        /// `"fooBarBaz"` to `"foo-bar-baz"`.
        kebabcase, kebabcase_with => Convention::Kebab;
        /// Alias of [`Converter::kebabcase`].
        dashcase, dashcase_with => Convention::Kebab;
        /// `"foo bar baz"` to `"FOO_BAR_BAZ"`.
        constcase, constcase_with => Convention::Constant;
        /// Alias of [`Converter::constcase`].
        constantcase, constantcase_with => Convention::Constant;
        /// `"foo bar baz"` to `"Foo-Bar-Baz"`.
        headercase, headercase_with => Convention::Header;
        /// `"FooBarBaz"` to `"foo/bar/baz"`.
        pathcase, pathcase_with => Convention::Path;
        /// `"foo bar baz"` to `"Foo bar baz"`.
        sentencecase, sentencecase_with => Convention::Sentence;
        /// `"foo bar baz"` to `"Foo Bar Baz"`.
        titlecase, titlecase_with => Convention::Title;
    }
}
