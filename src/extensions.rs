//! Case conversion methods on string slices.
//!
//! ```
//! use wordcase::CaseExt;
//!
//! assert_eq!("foo bar baz".pascalcase(), "FooBarBaz");
//! ```

use crate::converter::CaseOptions;
use crate::convention::Convention;
use crate::default_converter;

macro_rules! extension_methods {
    ($($name:ident, $with:ident => $convention:expr;)*) => {
        $(
            #[doc = concat!("See [`Converter::", stringify!($name), "`](crate::Converter::", stringify!($name), ").")]
            fn $name(&self) -> String {
                self.to_case($convention, &CaseOptions::default())
            }

            #[doc = concat!("See [`Converter::", stringify!($with), "`](crate::Converter::", stringify!($with), ").")]
            fn $with(&self, options: &CaseOptions) -> String {
                self.to_case($convention, options)
            }
        )*
    };
}

/// Convert string slices with the [default converter](crate::default_converter).
pub trait CaseExt {
    /// Convert to `convention`.
    fn to_case(&self, convention: Convention, options: &CaseOptions) -> String;

    extension_methods! {
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
}

impl CaseExt for str {
    fn to_case(&self, convention: Convention, options: &CaseOptions) -> String {
        default_converter().convert(convention, self, options)
    }
}
