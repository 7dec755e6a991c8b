//! Search query model.
//!
//! [`SearchForm`] is the editable form state. [`SearchQuery`] is what a
//! search actually runs with: it can only be built from non-blank text and
//! exposes no setters, so an issued query cannot change mid-flight. A new
//! search always means a new `SearchQuery`.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{CatalogScope, LibraryScope};

/// Editable search form: free text plus facet selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchForm {
    pub text: String,
    #[serde(default)]
    pub catalog: CatalogScope,
    #[serde(default)]
    pub library: LibraryScope,
}

impl SearchForm {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Freeze the form into a runnable query. `None` if the text is blank.
    #[must_use]
    pub fn to_query(&self) -> Option<SearchQuery> {
        SearchQuery::new(&self.text, self.catalog, self.library)
    }
}

/// An issued search. The text is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SearchQuery {
    text: String,
    catalog: CatalogScope,
    library: LibraryScope,
}

impl SearchQuery {
    /// Build a query from raw input. Returns `None` when `text` is empty
    /// after trimming.
    #[must_use]
    pub fn new(text: &str, catalog: CatalogScope, library: LibraryScope) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            catalog,
            library,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn catalog(&self) -> CatalogScope {
        self.catalog
    }

    #[must_use]
    pub const fn library(&self) -> LibraryScope {
        self.library
    }

    /// Form state that reproduces this query.
    #[must_use]
    pub fn to_form(&self) -> SearchForm {
        SearchForm {
            text: self.text.clone(),
            catalog: self.catalog,
            library: self.library,
        }
    }
}

impl<'de> Deserialize<'de> for SearchQuery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        SearchForm::deserialize(deserializer)?
            .to_query()
            .ok_or_else(|| serde::de::Error::custom("search query text must not be blank"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_text_never_becomes_a_query() {
        assert!(SearchForm::new("").to_query().is_none());
        assert!(SearchForm::new("   \t\n").to_query().is_none());
    }

    #[test]
    fn query_text_is_trimmed() {
        let query = SearchForm::new("  harry potter ").to_query().unwrap();
        assert_eq!(query.text(), "harry potter");
    }

    #[test]
    fn query_keeps_facets_and_round_trips_to_form() {
        let form = SearchForm {
            text: "dinosaurs".into(),
            catalog: CatalogScope::Ebooks,
            library: LibraryScope::Elementary,
        };
        let query = form.to_query().unwrap();
        assert_eq!(query.catalog(), CatalogScope::Ebooks);
        assert_eq!(query.library(), LibraryScope::Elementary);
        assert_eq!(query.to_form(), form);
    }

    #[test]
    fn blank_query_is_rejected_on_deserialize() {
        let err = serde_json::from_str::<SearchQuery>(r#"{"text":"  "}"#).unwrap_err();
        assert!(err.to_string().contains("must not be blank"));
        let ok: SearchQuery = serde_json::from_str(r#"{"text":" owls "}"#).unwrap();
        assert_eq!(ok.text(), "owls");
    }
}
