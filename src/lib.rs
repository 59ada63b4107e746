//! wordcase converts text between word case conventions while keeping
//! registered acronyms spelled the way they were registered.
//!
//! # Example
//!
//! ```
//! use wordcase::{CaseOptions, Converter};
//!
//! assert_eq!(wordcase::snakecase("HTTPResponseCode"), "http_response_code");
//!
//! let converter = Converter::with_acronyms(["HTTP"]);
//! assert_eq!(converter.constcase("HTTPResponseCode"), "HTTP_RESPONSE_CODE");
//! assert_eq!(converter.sentencecase("http response code"), "HTTP response code");
//!
//! let options = CaseOptions::new().separator(":");
//! assert_eq!(converter.snakecase_with("fooBarBaz", &options), "foo:bar:baz");
//! ```
//!
//! The free functions use a process-wide [default converter](default_converter).

pub mod acronyms;
pub mod config;
pub mod convention;
pub mod converter;
pub mod extensions;
pub mod formatter;
pub mod scanner;
#[cfg(feature = "wasm")]
pub mod wasm;

use std::sync::OnceLock;

pub use acronyms::{AcronymMatch, AcronymRegistry};
pub use config::{Config, ConfigError};
pub use convention::{Convention, ParseConventionError, WordRule};
pub use converter::{CaseOptions, Configuration, Converter};
pub use extensions::CaseExt;
pub use scanner::Token;

/// The converter shared by the free functions and [`CaseExt`].
///
/// It is created on first use, exactly once even when first used from
/// several threads at the same time.  Acronyms registered on it through
/// [`configure`] or [`Converter::acronym`] are visible to every later call
/// in the process; conversions already running keep the acronyms they
/// started with.
pub fn default_converter() -> &'static Converter {
    static DEFAULT: OnceLock<Converter> = OnceLock::new();
    DEFAULT.get_or_init(Converter::new)
}

/// Modify the configuration of the [default converter](default_converter).
pub fn configure<F>(f: F)
where
    F: FnMut(&mut Configuration),
{
    default_converter().configure(f);
}

/// Convert `text` to `convention` with the default converter.
pub fn convert(convention: Convention, text: &str, options: &CaseOptions) -> String {
    default_converter().convert(convention, text, options)
}

/// Convert optional text with the default converter, passing `None` through.
pub fn convert_opt(
    convention: Convention,
    text: Option<&str>,
    options: &CaseOptions,
) -> Option<String> {
    default_converter().convert_opt(convention, text, options)
}

macro_rules! default_functions {
    ($($name:ident, $with:ident => $convention:expr;)*) => {
        $(
            #[doc = concat!("[`Converter::", stringify!($name), "`] on the default converter.")]
            pub fn $name(text: &str) -> String {
                convert($convention, text, &CaseOptions::default())
            }

            #[doc = concat!("[`Converter::", stringify!($with), "`] on the default converter.")]
            pub fn $with(text: &str, options: &CaseOptions) -> String {
                convert($convention, text, options)
            }
        )*
    };
}

default_functions! {
    camelcase, camelcase_with => Convention::Camel;
    lower_camelcase, lower_camelcase_with => Convention::Camel;
    pascalcase, pascalcase_with => Convention::Pascal;
    upper_camelcase, upper_camelcase_with => Convention::Pascal;
    snakecase, snakecase_with => Convention::Snake;
    underscore, underscore_with => Convention::Snake;
    kebabcase, kebabcase_with => Convention::Kebab;
    dashcase, dashcase_with => Convention::Kebab;
    constcase, constcase_with => Convention::Constant;
    constantcase, constantcase_with => Convention::Constant;
    headercase, headercase_with => Convention::Header;
    pathcase, pathcase_with => Convention::Path;
    sentencecase, sentencecase_with => Convention::Sentence;
    titlecase, titlecase_with => Convention::Title;
}
