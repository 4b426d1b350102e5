//! Canonical URL construction for the three Data API surfaces.
//!
//! Pure functions of the configuration and operation parameters; no state,
//! no I/O. Document keys and index names are passed through verbatim so
//! URLs are never double-encoded.

use crate::config::DataApiConfig;

/// Normalize a configured endpoint into a canonical `https://` base URL.
///
/// Scheme handling is a single well-defined step: strip a leading
/// `http://` or `https://` if present, then always prefix `https://`.
/// Trailing slashes are trimmed so joined paths never double up.
pub fn base_url(endpoint: &str) -> String {
    let host = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .unwrap_or(endpoint);
    format!("https://{}", host.trim_end_matches('/'))
}

/// URL addressing one document in the configured collection.
pub fn document_url(config: &DataApiConfig, key: &str) -> String {
    format!(
        "{}/v1/buckets/{}/scopes/{}/collections/{}/documents/{}",
        base_url(&config.endpoint),
        config.bucket,
        config.scope,
        config.collection,
        key
    )
}

/// URL of the SQL++ query service.
pub fn query_url(config: &DataApiConfig) -> String {
    format!("{}/_p/query/query/service", base_url(&config.endpoint))
}

/// URL of the named full-text search index in the configured scope.
pub fn fts_search_url(config: &DataApiConfig, index_name: &str) -> String {
    format!(
        "{}/_p/fts/api/bucket/{}/scope/{}/index/{}/query",
        base_url(&config.endpoint),
        config.bucket,
        config.scope,
        index_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DataApiConfig {
        DataApiConfig::new("api.example.com", "admin", "secret")
    }

    #[test]
    fn base_url_always_prefixes_https() {
        assert_eq!(base_url("api.example.com"), "https://api.example.com");
        assert_eq!(base_url("https://api.example.com"), "https://api.example.com");
        assert_eq!(base_url("http://api.example.com"), "https://api.example.com");
    }

    #[test]
    fn base_url_trims_trailing_slashes() {
        assert_eq!(base_url("https://api.example.com/"), "https://api.example.com");
    }

    #[test]
    fn document_url_addresses_the_configured_collection() {
        assert_eq!(
            document_url(&config(), "airport_1254"),
            "https://api.example.com/v1/buckets/travel-sample/scopes/inventory/collections/airport/documents/airport_1254"
        );
    }

    #[test]
    fn document_url_passes_the_key_through_verbatim() {
        let url = document_url(&config(), "airport%201254");
        assert!(url.ends_with("/documents/airport%201254"));
    }

    #[test]
    fn query_url_is_independent_of_the_namespace() {
        assert_eq!(
            query_url(&config()),
            "https://api.example.com/_p/query/query/service"
        );
    }

    #[test]
    fn fts_search_url_names_bucket_scope_and_index() {
        assert_eq!(
            fts_search_url(&config(), "hotel-geo-index"),
            "https://api.example.com/_p/fts/api/bucket/travel-sample/scope/inventory/index/hotel-geo-index/query"
        );
    }
}
