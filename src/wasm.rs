//! WebAssembly bindings for wordcase.
//!
//! This module provides JavaScript-friendly bindings for the converter.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::{CaseOptions, Convention};

/// JavaScript-friendly options struct.
///
/// All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsOptions {
    /// Acronyms to preserve.  When given, they replace the default
    /// converter's acronyms for this call.
    pub acronyms: Option<Vec<String>>,

    /// Separator to join words with (default: the convention's own).
    pub separator: Option<String>,
}

impl JsOptions {
    fn to_options(&self) -> CaseOptions {
        let mut opts = CaseOptions::default();

        if let Some(ref v) = self.acronyms {
            opts = opts.acronyms(v);
        }
        if let Some(ref v) = self.separator {
            opts = opts.separator(v.clone());
        }

        opts
    }
}

/// Convert `input` to the convention named `case`.
#[wasm_bindgen]
pub fn convert(input: &str, case: &str, options: JsValue) -> Result<String, JsError> {
    let convention = case
        .parse::<Convention>()
        .map_err(|e| JsError::new(&e.to_string()))?;

    let js_opts: JsOptions = if options.is_undefined() || options.is_null() {
        JsOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
    };

    Ok(crate::convert(convention, input, &js_opts.to_options()))
}

/// Canonical names of the supported conventions.
#[wasm_bindgen]
pub fn conventions() -> Vec<String> {
    Convention::ALL
        .iter()
        .map(|convention| convention.name().to_string())
        .collect()
}
