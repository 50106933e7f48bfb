// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Building the organization repository listing URL
// - Fetching and parsing that listing
//
// Authentication and pagination are deliberately absent: one unauthenticated
// request, first page only.
// =============================================================================

mod fetch;

pub use fetch::{fetch_org_repos, RepoObject, GITHUB_API};
