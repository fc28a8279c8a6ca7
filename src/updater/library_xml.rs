//! SFRA version markers in the shared data library XML.
//!
//! The markers live inside content assets and are HTML-escaped in the file,
//! so they appear as `&lt;!-- SFRA 6.3.0` rather than as XML comments.
use regex::{NoExpand, Regex};

use crate::result::Result;

/// Replace every `&lt;!-- SFRA X.Y.Z` marker with the new version.
/// Returns None when the file contains no marker.
pub fn update_sfra_markers(
    content: &str,
    version: &str,
) -> Result<Option<String>> {
    let regex = Regex::new(r"&lt;!-- SFRA \d+\.\d+\.\d+")?;

    if !regex.is_match(content) {
        return Ok(None);
    }

    let marker = format!("&lt;!-- SFRA {version}");
    let updated = regex.replace_all(content, NoExpand(&marker));

    Ok(Some(updated.into_owned()))
}
