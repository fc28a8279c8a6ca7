//! Version lines in cartridge `.properties` files.
use regex::{NoExpand, Regex};

use crate::result::Result;

/// Replace the first `demandware.cartridges.<cartridge>.version=` line.
/// Returns None when the file has no such line.
pub fn update_cartridge_version(
    content: &str,
    cartridge: &str,
    version: &str,
) -> Result<Option<String>> {
    let key = format!("demandware.cartridges.{cartridge}.version");
    replace_property(content, &key, version)
}

/// Replace the first `global.version.number=` line of `version.properties`.
pub fn update_global_version(
    content: &str,
    version: &str,
) -> Result<Option<String>> {
    replace_property(content, "global.version.number", version)
}

fn replace_property(
    content: &str,
    key: &str,
    version: &str,
) -> Result<Option<String>> {
    let regex = Regex::new(&format!(r"{}=\S+", regex::escape(key)))?;

    if !regex.is_match(content) {
        return Ok(None);
    }

    let new_line = format!("{key}={version}");
    let updated = regex.replace(content, NoExpand(&new_line));

    Ok(Some(updated.into_owned()))
}
