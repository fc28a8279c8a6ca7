//! Release headings in `CHANGELOG.md`.
use chrono::NaiveDate;

/// Top-level title every package changelog starts with.
pub const CHANGELOG_TITLE: &str = "# Changelog";

/// Result of splicing a release heading into a changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogUpdate {
    /// New changelog content with the heading below the title.
    Updated(String),
    /// The version already appears somewhere in the changelog.
    AlreadyPresent,
    /// The changelog has no `# Changelog` title to anchor the heading.
    MissingTitle,
}

/// Heading for a release, e.g. `## v2.0.0 (Oct 06, 2026)`.
pub fn release_heading(version: &str, date: NaiveDate) -> String {
    format!("## v{version} ({})", date.format("%b %d, %Y"))
}

/// Insert `heading` directly below the changelog title, keeping everything
/// that followed the title underneath it.
pub fn prepend_release(
    content: &str,
    version: &str,
    heading: &str,
) -> ChangelogUpdate {
    if content.contains(version) {
        return ChangelogUpdate::AlreadyPresent;
    }

    let Some(idx) = content.find(CHANGELOG_TITLE) else {
        return ChangelogUpdate::MissingTitle;
    };

    let before = &content[..idx];
    let after = &content[idx + CHANGELOG_TITLE.len()..];

    ChangelogUpdate::Updated(format!(
        "{CHANGELOG_TITLE}\n\n{heading}{before}{after}"
    ))
}
