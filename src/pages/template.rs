// src/pages/template.rs
// =============================================================================
// Renders the front-matter page for a repository.
//
// Placeholders are written as {field} and are looked up in the full
// repository object, so any field the API returns can be used. Literal
// braces are written as {{ and }}.
// =============================================================================

use serde_json::{Map, Value};

use crate::error::{PageError, Result};

// The page written for every repository.
pub const PAGE_TEMPLATE: &str = "\
---
layout: page
title: {name}
---

{description}
";

// Renders `template`, substituting each {field} with the matching value.
//
// Value formatting:
//   string -> inserted verbatim
//   null   -> None (repositories without a description)
//   other  -> its JSON text, e.g. 42 or true
pub fn render(template: &str, fields: &Map<String, Value>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let key = placeholder(&mut chars)?;
                let value = fields
                    .get(&key)
                    .ok_or_else(|| PageError::MissingField(key.clone()))?;
                push_value(&mut out, value);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => {
                return Err(PageError::MalformedTemplate(
                    "single '}' outside a placeholder".to_string(),
                ))
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

// Reads a placeholder name up to the closing brace.
fn placeholder(chars: &mut impl Iterator<Item = char>) -> Result<String> {
    let mut key = String::new();
    for c in chars.by_ref() {
        match c {
            '}' if key.is_empty() => {
                return Err(PageError::MalformedTemplate("empty placeholder".to_string()))
            }
            '}' => return Ok(key),
            '{' => {
                return Err(PageError::MalformedTemplate(format!(
                    "nested '{{' in placeholder '{}'",
                    key
                )))
            }
            c => key.push(c),
        }
    }
    Err(PageError::MalformedTemplate(format!(
        "unclosed placeholder '{}'",
        key
    )))
}

fn push_value(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Null => out.push_str("None"),
        other => out.push_str(&other.to_string()),
    }
}
