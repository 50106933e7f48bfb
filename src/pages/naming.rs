// src/pages/naming.rs
// =============================================================================
// Derives page filenames from repository objects.
//
// Filename format: {id:012}_{slug}.md
//   - id:   the repository's numeric id, zero-padded to 12 digits
//   - slug: the lower-cased name with every ".jl" removed
//
// Example:
//   {"id": 7, "name": "Foo.jl"} -> "000000000007_foo.md"
// =============================================================================

use serde_json::Value;

use crate::error::{PageError, Result};
use crate::github::RepoObject;

// Suffix used by Julia package repositories. Removed wherever it appears,
// not only at the end of the name.
const JULIA_SUFFIX: &str = ".jl";

// Lower-cases a repository name and strips ".jl".
//
// str::replace works left to right over non-overlapping matches, so
// "Foo.jl.jl" becomes "foo" in one pass.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(JULIA_SUFFIX, "")
}

// Builds the page filename for one repository object.
//
// Errors:
//   MissingField - no "id" or "name"
//   InvalidField - "id" is not a non-negative integer, or "name" not a string
pub fn page_filename(repo: &RepoObject) -> Result<String> {
    let name = field(repo, "name")?
        .as_str()
        .ok_or_else(|| invalid("name", "a string"))?;
    let id = field(repo, "id")?
        .as_u64()
        .ok_or_else(|| invalid("id", "a non-negative integer"))?;

    Ok(format!("{:012}_{}.md", id, slug(name)))
}

fn field<'a>(repo: &'a RepoObject, key: &str) -> Result<&'a Value> {
    repo.get(key)
        .ok_or_else(|| PageError::MissingField(key.to_string()))
}

fn invalid(field: &str, expected: &'static str) -> PageError {
    PageError::InvalidField {
        field: field.to_string(),
        expected,
    }
}
