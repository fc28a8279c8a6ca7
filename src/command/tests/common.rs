use chrono::NaiveDate;
use std::path::Path;

use crate::{
    command::common::ReleaseContext, config::Config, prompt::Prompter,
    runner::CommandRunner, test_helpers::write_files,
};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub fn context<'a>(
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn Prompter,
    config: &'a Config,
    workspace_root: &Path,
) -> ReleaseContext<'a> {
    ReleaseContext {
        runner,
        prompter,
        config,
        workspace_root: workspace_root.to_path_buf(),
        today: today(),
    }
}

/// Lay out a conventional package checkout at version 1.2.0.
pub fn create_package(workspace_root: &Path, name: &str) {
    let properties = format!(
        "## cartridge.properties for cartridge {name}\n\
demandware.cartridges.{name}.multipleLanguageStorefront=true\n\
demandware.cartridges.{name}.id={name}\n\
demandware.cartridges.{name}.version=1.2.0\n"
    );
    let properties_path =
        format!("cartridges/{name}/cartridge/{name}.properties");
    let manifest = format!(
        "{{\n  \"name\": \"{name}\",\n  \"version\": \"1.2.0\",\n  \"private\": true\n}}\n"
    );

    write_files(
        &workspace_root.join(name),
        &[
            (properties_path.as_str(), properties.as_str()),
            ("package.json", manifest.as_str()),
            (
                "CHANGELOG.md",
                "# Changelog\n\n## v1.2.0 (Jan 05, 2026)\n\n- Initial release\n",
            ),
        ],
    );
}
