// src/pages/mod.rs
// =============================================================================
// This module turns an organization's repositories into page files.
//
// Submodules:
// - naming: slug and filename derivation
// - template: front-matter page rendering
//
// Flow of generate():
// 1. Fetch the repository listing (one request)
// 2. For each repository, in API order: filename, render, write
// 3. Stop at the first error; pages already written stay on disk
// =============================================================================

mod naming;
mod template;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use reqwest::Client;

use crate::error::{PageError, Result};
use crate::github::{fetch_org_repos, RepoObject};

use naming::page_filename;
use template::{render, PAGE_TEMPLATE};

// Writes one page per repository of `organization` into `output_dir`.
//
// The directory must already exist. Existing pages are overwritten and
// pages of repositories that no longer exist are left alone.
pub async fn generate(
    client: &Client,
    api_base: &str,
    organization: &str,
    output_dir: &Path,
) -> Result<()> {
    let repos = fetch_org_repos(client, api_base, organization).await?;

    for repo in &repos {
        write_page(repo, output_dir)?;
    }

    tracing::info!(
        organization,
        pages = repos.len(),
        dir = %output_dir.display(),
        "project pages written"
    );
    Ok(())
}

// Renders and writes the page for a single repository.
//
// Nothing is created unless both the filename and the content could be
// derived. The file is flushed and closed before returning.
pub fn write_page(repo: &RepoObject, output_dir: &Path) -> Result<()> {
    let filename = page_filename(repo)?;
    let contents = render(PAGE_TEMPLATE, repo)?;
    let path = output_dir.join(filename);

    let io_error = |source| PageError::Io {
        path: path.clone(),
        source,
    };
    let mut file = File::create(&path).map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)?;
    file.flush().map_err(io_error)?;

    tracing::debug!(path = %path.display(), "page written");
    Ok(())
}
