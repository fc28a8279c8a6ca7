//! Which version files each package carries, and the editor for each.
use std::path::{Path, PathBuf};

use crate::{
    package::{STOREFRONT_DATA_PACKAGE, STOREFRONT_PACKAGE},
    result::Result,
    updater::{EditOutcome, edit_file, library_xml, properties},
};

/// Cartridge holding the storefront's base templates and resources.
const STOREFRONT_BASE_CARTRIDGE: &str = "app_storefront_base";

const STOREFRONT_VERSION_PROPERTIES: &str =
    "cartridges/app_storefront_base/cartridge/templates/resources/version.properties";

const STOREFRONT_DATA_LIBRARY: &str =
    "demo_data_sfra/libraries/RefArchSharedLibrary/library.xml";

/// Kind of version file and the edit applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRole {
    /// `demandware.cartridges.<cartridge>.version=` in a cartridge
    /// properties file.
    CartridgeProperties { cartridge: String },
    /// `global.version.number=` in the storefront's version.properties.
    VersionProperties,
    /// Escaped `&lt;!-- SFRA X.Y.Z` markers in the data library.
    LibraryXml,
}

/// A version file relative to the package root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEdit {
    pub role: FileRole,
    pub path: PathBuf,
}

impl FileEdit {
    /// Apply this edit inside `package_root` with the `v`-stripped version.
    pub fn apply(
        &self,
        package_root: &Path,
        version: &str,
    ) -> Result<EditOutcome> {
        let path = package_root.join(&self.path);

        edit_file(&path, |content| match &self.role {
            FileRole::CartridgeProperties { cartridge } => {
                properties::update_cartridge_version(content, cartridge, version)
            }
            FileRole::VersionProperties => {
                properties::update_global_version(content, version)
            }
            FileRole::LibraryXml => {
                library_xml::update_sfra_markers(content, version)
            }
        })
    }
}

/// Conventional properties path for a cartridge named after its package.
pub fn cartridge_properties_path(cartridge: &str) -> PathBuf {
    Path::new("cartridges")
        .join(cartridge)
        .join("cartridge")
        .join(format!("{cartridge}.properties"))
}

/// Ordered version-file edits for a package. The manifest and changelog are
/// handled separately since they depend on the install step and on each
/// other.
pub fn edits_for(package_name: &str) -> Vec<FileEdit> {
    let mut edits = vec![];

    if package_name == STOREFRONT_PACKAGE {
        edits.push(FileEdit {
            role: FileRole::VersionProperties,
            path: PathBuf::from(STOREFRONT_VERSION_PROPERTIES),
        });
        edits.push(FileEdit {
            role: FileRole::CartridgeProperties {
                cartridge: STOREFRONT_BASE_CARTRIDGE.into(),
            },
            path: cartridge_properties_path(STOREFRONT_BASE_CARTRIDGE),
        });
    } else {
        edits.push(FileEdit {
            role: FileRole::CartridgeProperties {
                cartridge: package_name.into(),
            },
            path: cartridge_properties_path(package_name),
        });
    }

    if package_name == STOREFRONT_DATA_PACKAGE {
        edits.push(FileEdit {
            role: FileRole::LibraryXml,
            path: PathBuf::from(STOREFRONT_DATA_LIBRARY),
        });
    }

    edits
}
