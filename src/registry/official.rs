//! Lookup against the official archlinux.org package search.

use crate::registry::build_client;
use crate::types::Result;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, trace};

/// Search API response for a name query.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    pkgname: String,
    repo: String,
    arch: String,
}

/// Checker for the official repositories.
pub struct OfficialChecker {
    client: Client,
    base_url: String,
}

impl OfficialChecker {
    /// Create a checker against `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: base_url.to_string(),
        })
    }

    /// Resolve `name` to its `repo/arch` location, if any.
    ///
    /// The search endpoint matches loosely, so every result is scanned
    /// for an exact, case-sensitive `pkgname` match; the first one wins.
    pub async fn lookup(&self, name: &str) -> Result<Option<String>> {
        let url = format!("{}?name={}", self.base_url, urlencoding::encode(name));
        trace!("Checking official: {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let data: SearchResponse = serde_json::from_str(&body)?;

        for result in &data.results {
            if result.pkgname == name {
                debug!("Official hit: {} in {}/{}", name, result.repo, result.arch);
                return Ok(Some(format!("{}/{}", result.repo, result.arch)));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn checker(server: &mockito::ServerGuard) -> OfficialChecker {
        OfficialChecker::new(&format!("{}/packages/search/json/", server.url()), 5).unwrap()
    }

    #[tokio::test]
    async fn test_exact_match_returns_repo_and_arch() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/packages/search/json/")
            .match_query(Matcher::UrlEncoded("name".into(), "git".into()))
            .with_body(r#"{"results": [{"pkgname": "git", "repo": "extra", "arch": "x86_64"}]}"#)
            .create_async()
            .await;

        let tag = checker(&server).lookup("git").await.unwrap();

        mock.assert_async().await;
        assert_eq!(tag, Some("extra/x86_64".to_string()));
    }

    #[tokio::test]
    async fn test_first_matching_result_wins() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/packages/search/json/")
            .match_query(Matcher::Any)
            .with_body(
                r#"{"results": [
                    {"pkgname": "git-lfs", "repo": "extra", "arch": "x86_64"},
                    {"pkgname": "git", "repo": "extra", "arch": "any"},
                    {"pkgname": "git", "repo": "core", "arch": "x86_64"}
                ]}"#,
            )
            .create_async()
            .await;

        let tag = checker(&server).lookup("git").await.unwrap();
        assert_eq!(tag, Some("extra/any".to_string()));
    }

    #[tokio::test]
    async fn test_match_is_case_sensitive() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/packages/search/json/")
            .match_query(Matcher::Any)
            .with_body(r#"{"results": [{"pkgname": "Git", "repo": "core", "arch": "x86_64"}]}"#)
            .create_async()
            .await;

        let tag = checker(&server).lookup("git").await.unwrap();
        assert_eq!(tag, None);
    }

    #[tokio::test]
    async fn test_empty_results_is_a_miss() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/packages/search/json/")
            .match_query(Matcher::Any)
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let tag = checker(&server).lookup("nosuchpkg").await.unwrap();
        assert_eq!(tag, None);
    }

    #[tokio::test]
    async fn test_server_error_is_a_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/packages/search/json/")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        assert!(checker(&server).lookup("git").await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/packages/search/json/")
            .match_query(Matcher::Any)
            .with_body("not json")
            .create_async()
            .await;

        assert!(checker(&server).lookup("git").await.is_err());
    }
}
