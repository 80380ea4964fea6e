//! Dough name inflection.
//!
//! Menu names are nominative ("Тонкое"), but the size description reads
//! "на тонком тесте", which needs the prepositional form. The table is a
//! plain value handed to the display functions, so a menu with new dough
//! kinds supplies its own.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};

/// Canonical dough name → inflected form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoughSpelling {
    forms: HashMap<String, String>,
}

impl DoughSpelling {
    /// Builds a table from `(canonical, inflected)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        DoughSpelling {
            forms: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the inflected form of `dough_name`.
    pub fn inflect(&self, dough_name: &str) -> CoreResult<&str> {
        self.forms
            .get(dough_name)
            .map(String::as_str)
            .ok_or_else(|| CoreError::MissingTranslation(dough_name.to_string()))
    }
}

/// The table for the current menu.
impl Default for DoughSpelling {
    fn default() -> Self {
        DoughSpelling::from_pairs([("Тонкое", "тонком"), ("Толстое", "толстом")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let spelling = DoughSpelling::default();
        assert_eq!(spelling.inflect("Тонкое").unwrap(), "тонком");
        assert_eq!(spelling.inflect("Толстое").unwrap(), "толстом");
    }

    #[test]
    fn test_unknown_dough_is_missing_translation() {
        let spelling = DoughSpelling::default();
        assert_eq!(
            spelling.inflect("Пышное"),
            Err(CoreError::MissingTranslation("Пышное".to_string()))
        );
    }

    #[test]
    fn test_custom_table() {
        let spelling = DoughSpelling::from_pairs([("Пышное", "пышном")]);
        assert_eq!(spelling.inflect("Пышное").unwrap(), "пышном");
        assert!(spelling.inflect("Тонкое").is_err());
    }
}
