use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use semver_tag::cli::{run_workflow, WorkflowArgs, WorkflowOutcome};
use semver_tag::config;
use semver_tag::git::Git2Repository;
use semver_tag::ui::{self, Console};

#[derive(clap::Parser)]
#[command(
    name = "semver",
    version,
    about = "Bump the latest semantic version tag, then create and push the new tag",
    after_help = ui::usage()
)]
struct Args {
    /// Bump option: M (major), m (minor), p (patch), rc (release candidate), q (quit), h (help)
    option: Option<String>,

    /// Annotation message for the new tag
    #[arg(allow_hyphen_values = true)]
    description: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    yes: bool,

    #[arg(long, help = "Preview the new tag without creating or pushing it")]
    dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<WorkflowOutcome> {
    let config = config::load_config(args.config.as_deref())
        .context("Cannot load configuration")?;

    // Nothing else can work outside a repository, so check before prompting
    let repo = Git2Repository::discover(".")?;

    let workflow_args = WorkflowArgs {
        option: args.option,
        description: args.description,
        assume_yes: args.yes,
        dry_run: args.dry_run,
    };

    let mut console = Console::stdio();
    let outcome = run_workflow(&workflow_args, &config, &repo, &mut console)?;
    Ok(outcome)
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "run finished");
            if outcome == WorkflowOutcome::Declined {
                println!("Tag creation cancelled by user.");
            }
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}
