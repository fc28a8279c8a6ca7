use chrono::Local;
use clap::{Parser, error::ErrorKind};
use log::*;
use std::process;

use sfra_release::{
    cli::{self, Action, Args},
    command::{
        common::{self, ReleaseContext},
        git_tag, release_pr,
    },
    config::Config,
    error::ReleaseError,
    package::ReleaseVersion,
    path_helpers,
    prompt::{AutoPrompter, Prompter, TerminalPrompter},
    result::Result,
    runner::SystemRunner,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("sfra_release")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                eprintln!("{err}");
                eprintln!("{}", cli::USAGE_EXAMPLES);
                process::exit(1);
            }
        },
    }
}

fn required_tools<'c>(action: Action, config: &'c Config) -> Vec<&'c str> {
    let mut tools = vec!["git"];

    if action == Action::CreatePr {
        tools.push("gh");
        if let Some(install) = config.install_command.first() {
            tools.push(install);
        }
    }

    tools
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;

    let workspace_root = match &args.workspace_root {
        Some(root) => root.clone(),
        None => path_helpers::workspace_root()?,
    };
    debug!("workspace root: {}", workspace_root.display());

    common::preflight(&required_tools(args.action, &config))?;

    let runner = SystemRunner::new();
    let prompter: Box<dyn Prompter> = if args.yes {
        Box::new(AutoPrompter::default())
    } else {
        Box::new(TerminalPrompter::new())
    };

    let ctx = ReleaseContext {
        runner: &runner,
        prompter: prompter.as_ref(),
        config: &config,
        workspace_root,
        today: Local::now().date_naive(),
    };

    let version = ReleaseVersion::new(args.version.as_str());
    let packages = args.packages_or(&config.packages);

    match args.action {
        Action::CreatePr => {
            release_pr::execute(&ctx, &version, &packages).map(|_| ())
        }
        Action::CreateGitTag => git_tag::execute(&ctx, &version, &packages),
    }
}

/// Turn an operator abort into a successful exit. Any other error is kept
/// so the process exits with status 1.
fn settle(result: Result<()>) -> Result<()> {
    match result {
        Err(err)
            if err
                .downcast_ref::<ReleaseError>()
                .is_some_and(ReleaseError::is_abort) =>
        {
            warn!("Aborting... please clean up your working tree");
            Ok(())
        }
        other => other,
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = parse_args();

    initialize_logger(args.debug)?;

    settle(run(&args))
}
