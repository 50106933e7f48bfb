// src/github/fetch.rs
// =============================================================================
// Fetches the repository listing of a GitHub organization.
//
// Strategy:
// - Build https://api.github.com/orgs/{organization}/repos
// - Issue a single GET (no token, no pagination: first page only)
// - Parse the body as a JSON array of objects, keeping every field so the
//   page template can refer to any of them
// =============================================================================

use reqwest::Client;
use serde_json::{Map, Value};
use url::Url;

use crate::error::{PageError, Result};

// Base URL of the public GitHub REST API.
pub const GITHUB_API: &str = "https://api.github.com";

// One element of the listing, exactly as the API returned it.
pub type RepoObject = Map<String, Value>;

// Builds the listing endpoint for an organization.
//
// The organization is pushed as one path segment, so characters like '/'
// or spaces are percent-encoded instead of changing the path.
//
// Example:
//   ("https://api.github.com", "acme") -> "https://api.github.com/orgs/acme/repos"
pub fn org_repos_url(api_base: &str, organization: &str) -> Result<Url> {
    let mut url = Url::parse(api_base).map_err(|e| PageError::InvalidUrl(e.to_string()))?;

    url.path_segments_mut()
        .map_err(|_| PageError::InvalidUrl(format!("{} cannot be a base", api_base)))?
        .pop_if_empty()
        .extend(["orgs", organization, "repos"]);

    Ok(url)
}

// Fetches the organization's repositories in the order the API returns them.
//
// Errors:
//   PageError::Transport - connection failure or non-2xx status
//   PageError::Parse     - body is not a JSON array of objects
pub async fn fetch_org_repos(
    client: &Client,
    api_base: &str,
    organization: &str,
) -> Result<Vec<RepoObject>> {
    let url = org_repos_url(api_base, organization)?;
    tracing::info!(%url, "fetching repository listing");

    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;

    // Parsed from text rather than with response.json() so a bad body
    // surfaces as a parse error, not a transport error.
    let repos: Vec<RepoObject> = serde_json::from_str(&body)?;
    tracing::debug!(count = repos.len(), "repository listing received");

    Ok(repos)
}
