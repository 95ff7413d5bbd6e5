//! Extraction of package arrays from a shell-style install script.
//!
//! The script declares its package lists as `NAME=( ... )` arrays whose
//! bodies may span multiple lines. This is not a shell parser: the first
//! block matching the requested name is located with a non-greedy regex
//! and its body is split on whitespace.

use crate::types::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the install script into memory.
pub fn load_document(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Extract the tokens of the first `<block> = ( ... )` array in `document`.
///
/// Tokens starting with `#` are dropped; everything else is kept in
/// order, duplicates included. A missing block yields an empty list
/// rather than an error.
pub fn parse_array(document: &str, block: &str) -> Vec<String> {
    let pattern = format!(r"(?s){}\s*=\s*\((.*?)\)", regex::escape(block));
    let Ok(re) = Regex::new(&pattern) else {
        return Vec::new();
    };

    let Some(caps) = re.captures(document) else {
        debug!("Array {} not found in document", block);
        return Vec::new();
    };

    caps[1]
        .split_whitespace()
        .filter(|token| !token.starts_with('#'))
        .map(str::to_string)
        .collect()
}
