use super::common::{context, create_package};
use crate::{
    command::git_tag,
    config::Config,
    error::ReleaseError,
    package::ReleaseVersion,
    prompt::MockPrompter,
    runner::CmdOutput,
    test_helpers::FakeRunner,
};

fn tag_prompter() -> MockPrompter {
    let mut prompter = MockPrompter::new();
    prompter.expect_confirm().never();
    prompter.expect_ask().never();
    prompter
}

#[test_log::test]
fn creates_and_pushes_missing_tag() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_package(tmp.path(), "plugin-applepay");
    let runner = FakeRunner::new();
    runner.respond("git tag", CmdOutput::ok("v1.1.0\nv1.2.0\n"));
    let prompter = tag_prompter();
    let config = Config::default();
    let ctx = context(&runner, &prompter, &config, tmp.path());

    git_tag::execute(
        &ctx,
        &ReleaseVersion::new("v2.0.0"),
        &["plugin-applepay".to_string()],
    )
    .unwrap();

    assert_eq!(
        runner.commands(),
        vec![
            "git switch master",
            "git pull",
            "git tag",
            "git tag v2.0.0",
            "git push origin refs/tags/v2.0.0",
        ]
    );
}

#[test_log::test]
fn existing_tag_is_still_pushed() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_package(tmp.path(), "plugin-applepay");
    let runner = FakeRunner::new();
    runner.respond("git tag", CmdOutput::ok("v1.2.0\nv2.0.0\n"));
    let prompter = tag_prompter();
    let config = Config::default();
    let ctx = context(&runner, &prompter, &config, tmp.path());

    git_tag::execute(
        &ctx,
        &ReleaseVersion::new("v2.0.0"),
        &["plugin-applepay".to_string()],
    )
    .unwrap();

    assert_eq!(
        runner.commands(),
        vec![
            "git switch master",
            "git pull",
            "git tag",
            "git push origin refs/tags/v2.0.0",
        ]
    );
}

#[test_log::test]
fn tag_match_is_exact() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_package(tmp.path(), "plugin_sitemap");
    let runner = FakeRunner::new();
    runner.respond("git tag", CmdOutput::ok("v2.0.0-rc.1\nv12.0.0\n"));
    let prompter = tag_prompter();
    let config = Config::default();
    let ctx = context(&runner, &prompter, &config, tmp.path());

    git_tag::execute(
        &ctx,
        &ReleaseVersion::new("v2.0.0"),
        &["plugin_sitemap".to_string()],
    )
    .unwrap();

    assert!(runner.commands().contains(&"git tag v2.0.0".to_string()));
}

#[test_log::test]
fn uses_configured_branch_and_remote() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_package(tmp.path(), "storefront-reference-architecture");
    create_package(tmp.path(), "plugin_wishlists");
    let runner = FakeRunner::new();
    let prompter = tag_prompter();
    let config = Config {
        remote: "upstream".into(),
        default_branch: "main".into(),
        ..Config::default()
    };
    let ctx = context(&runner, &prompter, &config, tmp.path());

    git_tag::execute(
        &ctx,
        &ReleaseVersion::new("v7.1.0"),
        &[
            "storefront-reference-architecture".to_string(),
            "plugin_wishlists".to_string(),
        ],
    )
    .unwrap();

    let commands = runner.commands();
    assert_eq!(commands[0], "git switch integration");
    assert_eq!(commands[4], "git push upstream refs/tags/v7.1.0");
    assert_eq!(commands[5], "git switch main");
    assert_eq!(
        runner.invocations()[5].cwd,
        tmp.path().join("plugin_wishlists")
    );
}

#[test_log::test]
fn missing_package_is_skipped() {
    let tmp = tempfile::TempDir::new().unwrap();
    let runner = FakeRunner::new();
    let prompter = tag_prompter();
    let config = Config::default();
    let ctx = context(&runner, &prompter, &config, tmp.path());

    git_tag::execute(
        &ctx,
        &ReleaseVersion::new("v2.0.0"),
        &["plugin_datadownload".to_string()],
    )
    .unwrap();

    assert!(runner.commands().is_empty());
}

#[test_log::test]
fn failed_push_is_fatal() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_package(tmp.path(), "plugin-applepay");
    create_package(tmp.path(), "plugin_sitemap");
    let runner = FakeRunner::new();
    runner.respond(
        "git push origin refs/tags/v2.0.0",
        CmdOutput::failed(1, "rejected"),
    );
    let prompter = tag_prompter();
    let config = Config::default();
    let ctx = context(&runner, &prompter, &config, tmp.path());

    let err = git_tag::execute(
        &ctx,
        &ReleaseVersion::new("v2.0.0"),
        &["plugin-applepay".to_string(), "plugin_sitemap".to_string()],
    )
    .unwrap_err()
    .downcast::<ReleaseError>()
    .unwrap();

    assert!(matches!(err, ReleaseError::CommandFailed { .. }));
    assert_eq!(runner.commands().len(), 5);
}
