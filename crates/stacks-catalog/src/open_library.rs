//! Open Library catalog client.

use stacks_core::{CatalogScope, WorkDetail};

use crate::http::read_json;
use crate::normalize::RawRecord;
use crate::{CatalogClient, CatalogError, LookupRequest};

/// Subjects kept on a work detail.
const MAX_SUBJECTS: usize = 10;

const SEARCH_FIELDS: &str = "key,title,author_name,publisher,first_publish_year,cover_i,ratings_average";

#[derive(serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(serde::Deserialize)]
struct SearchDoc {
    key: Option<String>,
    title: Option<String>,
    #[serde(default)]
    author_name: Vec<String>,
    #[serde(default)]
    publisher: Vec<String>,
    first_publish_year: Option<i32>,
    cover_i: Option<i64>,
    ratings_average: Option<f64>,
}

#[derive(serde::Deserialize)]
struct WorkResponse {
    key: Option<String>,
    description: Option<Description>,
    #[serde(default)]
    subjects: Vec<String>,
}

/// Works carry either a bare string or a typed text object.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Description {
    Text(String),
    Typed { value: String },
}

impl Description {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) | Self::Typed { value: text } => text,
        }
    }
}

impl CatalogClient {
    /// Keyword search against `/search.json`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the HTTP request fails, the catalog
    /// returns a non-success status, or the response cannot be parsed.
    pub async fn search_records(
        &self,
        request: &LookupRequest,
    ) -> Result<Vec<RawRecord>, CatalogError> {
        let url = self.search_url(request);
        tracing::debug!(%url, "catalog search");
        let data: SearchResponse = read_json(self.http.get(&url).send().await?).await?;
        Ok(data
            .docs
            .into_iter()
            .take(request.limit)
            .map(|doc| self.to_raw(doc))
            .collect())
    }

    /// Fetch a single work by its catalog key (e.g. `/works/OL82563W`).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidIdentifier`] for anything that is not a
    /// work or edition key, otherwise as [`Self::search_records`].
    pub async fn fetch_work(&self, identifier: &str) -> Result<WorkDetail, CatalogError> {
        let url = self.work_url(identifier)?;
        tracing::debug!(%url, "catalog work detail");
        let data: WorkResponse = read_json(self.http.get(&url).send().await?).await?;
        Ok(WorkDetail {
            identifier: data.key.unwrap_or_else(|| identifier.to_string()),
            description: data
                .description
                .map(Description::into_text)
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            subjects: data.subjects.into_iter().take(MAX_SUBJECTS).collect(),
        })
    }

    pub(crate) fn search_url(&self, request: &LookupRequest) -> String {
        let mut url = format!(
            "{}/search.json?q={}&limit={}&fields={SEARCH_FIELDS}",
            self.base_url,
            urlencoding::encode(request.query.text()),
            request.limit,
        );
        if request.query.catalog() == CatalogScope::Ebooks {
            url.push_str("&has_fulltext=true");
        }
        url
    }

    pub(crate) fn work_url(&self, identifier: &str) -> Result<String, CatalogError> {
        let id = identifier.trim();
        let valid = ["/works/", "/books/"].iter().any(|prefix| {
            id.strip_prefix(prefix).is_some_and(|rest| {
                !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric())
            })
        });
        if !valid {
            return Err(CatalogError::InvalidIdentifier(identifier.to_string()));
        }
        Ok(format!("{}{id}.json", self.base_url))
    }

    fn to_raw(&self, doc: SearchDoc) -> RawRecord {
        RawRecord {
            identifier: doc.key,
            title: doc.title,
            authors: doc.author_name,
            publishers: doc.publisher,
            first_publish_year: doc.first_publish_year,
            cover_url: doc
                .cover_i
                .filter(|id| *id > 0)
                .map(|id| format!("{}/b/id/{id}-M.jpg", self.covers_url)),
            rating: doc.ratings_average,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use stacks_config::CatalogConfig;

    use super::*;
    use stacks_core::{LibraryScope, SearchQuery};

    const SEARCH_FIXTURE: &str = r#"{
        "numFound": 3,
        "docs": [
            {
                "key": "/works/OL82563W",
                "title": "Harry Potter and the Philosopher's Stone",
                "author_name": ["J. K. Rowling"],
                "publisher": ["Bloomsbury", "Scholastic"],
                "first_publish_year": 1997,
                "cover_i": 10521270,
                "ratings_average": 4.2
            },
            {
                "key": "/works/OL82586W",
                "title": "Harry Potter and the Deathly Hallows",
                "author_name": ["J. K. Rowling"],
                "first_publish_year": 2007
            },
            {
                "key": "/works/OL1W"
            }
        ]
    }"#;

    fn client() -> CatalogClient {
        CatalogClient::new(&CatalogConfig {
            base_url: "https://catalog.test".into(),
            covers_url: "https://covers.test".into(),
            ..CatalogConfig::default()
        })
        .unwrap()
    }

    fn request(text: &str, catalog: CatalogScope) -> LookupRequest {
        LookupRequest {
            query: SearchQuery::new(text, catalog, LibraryScope::All).unwrap(),
            limit: 10,
        }
    }

    #[test]
    fn parse_search_response() {
        let data: SearchResponse = serde_json::from_str(SEARCH_FIXTURE).unwrap();
        assert_eq!(data.docs.len(), 3);
        assert_eq!(data.docs[0].publisher[0], "Bloomsbury");
        assert!(data.docs[1].cover_i.is_none());
        assert!(data.docs[2].title.is_none());
    }

    #[test]
    fn maps_docs_to_raw_records_with_cover_urls() {
        let client = client();
        let data: SearchResponse = serde_json::from_str(SEARCH_FIXTURE).unwrap();
        let raw: Vec<RawRecord> = data.docs.into_iter().map(|d| client.to_raw(d)).collect();
        assert_eq!(
            raw[0].cover_url.as_deref(),
            Some("https://covers.test/b/id/10521270-M.jpg")
        );
        assert!(raw[1].cover_url.is_none());
        assert_eq!(raw[1].first_publish_year, Some(2007));
    }

    #[test]
    fn search_url_encodes_query_and_bounds_results() {
        let url = client().search_url(&request("harry potter & co", CatalogScope::LibraryCatalog));
        assert!(url.starts_with("https://catalog.test/search.json?q=harry%20potter%20%26%20co&limit=10"));
        assert!(!url.contains("has_fulltext"));
    }

    #[test]
    fn ebooks_scope_requests_full_text() {
        let url = client().search_url(&request("owls", CatalogScope::Ebooks));
        assert!(url.ends_with("&has_fulltext=true"));
    }

    #[test]
    fn work_url_accepts_catalog_keys() {
        let client = client();
        assert_eq!(
            client.work_url("/works/OL82563W").unwrap(),
            "https://catalog.test/works/OL82563W.json"
        );
        assert!(client.work_url("/books/OL7353617M").is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("/works/")]
    #[case("OL82563W")]
    #[case("/authors/OL23919A")]
    #[case("/works/../admin")]
    fn work_url_rejects_anything_else(#[case] bad: &str) {
        assert!(matches!(
            client().work_url(bad),
            Err(CatalogError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn work_description_accepts_both_shapes() {
        let plain: WorkResponse =
            serde_json::from_str(r#"{"key":"/works/OL1W","description":"Plain."}"#).unwrap();
        assert_eq!(plain.description.unwrap().into_text(), "Plain.");

        let typed: WorkResponse = serde_json::from_str(
            r#"{"description":{"type":"/type/text","value":"Typed."},"subjects":["Magic"]}"#,
        )
        .unwrap();
        assert_eq!(typed.description.unwrap().into_text(), "Typed.");
        assert_eq!(typed.subjects, vec!["Magic".to_string()]);
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_search_and_detail() {
        let client = CatalogClient::new(&CatalogConfig::default()).unwrap();
        let records = client
            .search_records(&request("harry potter", CatalogScope::LibraryCatalog))
            .await
            .unwrap();
        println!("\n── search(\"harry potter\") ── {} records", records.len());
        for r in &records {
            println!(
                "  {} | {} | {}",
                r.identifier.as_deref().unwrap_or("-"),
                r.title.as_deref().unwrap_or("-"),
                r.authors.join(", ")
            );
        }
        if let Some(id) = records.first().and_then(|r| r.identifier.clone()) {
            let detail = client.fetch_work(&id).await.unwrap();
            println!("  subjects: {:?}", detail.subjects);
        }
    }
}
