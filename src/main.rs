use anyhow::Result;
use clap::{Parser, Subcommand};

use gfl::branch::{self, BranchKind};
use gfl::config::{self, Resolver};
use gfl::git_ops::GitRepo;
use gfl::ui;
use gfl::version::{self, IncrementKind};

#[derive(Parser)]
#[command(
    name = "gfl",
    about = "Git workflow helper: layered config, branch naming and version tags"
)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved configuration and where each value came from
    #[command(alias = "c")]
    Config,

    /// Compute the next release version from existing tags
    #[command(alias = "rel")]
    Release {
        #[arg(
            short = 't',
            long = "type",
            default_value = "patch",
            help = "Increment kind: major, minor or patch"
        )]
        kind: String,

        #[arg(long, help = "Create the new version as a lightweight tag on HEAD")]
        tag: bool,

        #[arg(
            short = 'x',
            long,
            help = "Base the release on the production branch instead of the dev base branch"
        )]
        hotfix: bool,
    },

    /// Print the branch name for a new unit of work
    Branch {
        #[arg(help = "Branch kind: feature, fix or hotfix")]
        kind: String,

        #[arg(help = "Short description used as the name segment")]
        name: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Config => show_config(),
        Commands::Release { kind, tag, hotfix } => release(&kind, tag, hotfix),
        Commands::Branch { kind, name } => branch_name(&kind, &name),
    }
}

fn show_config() -> Result<()> {
    let report = Resolver::from_environment().resolve();

    // A broken layer is worth a warning, but never blocks resolution
    for source in &report.sources {
        if let Some(err) = source.as_error() {
            ui::display_warning(&err.to_string());
        }
    }

    ui::display_resolved_config(&report);
    Ok(())
}

fn release(kind: &str, create_tag: bool, hotfix: bool) -> Result<()> {
    let kind: IncrementKind = kind.parse()?;

    let repo = match GitRepo::new() {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let tags = repo.list_tags()?;
    let current = version::latest_version(tags.iter().map(|tag| tag.as_str()));
    let next = current.increment(kind);

    ui::display_version_change(Some(&current), &next);

    let config = config::load_config();
    let base_branch = if hotfix {
        &config.production_branch
    } else {
        &config.dev_base_branch
    };
    ui::display_status(&format!(
        "Release branch: {} (from origin/{})",
        branch::release_branch_name(&next),
        base_branch
    ));

    if create_tag {
        if let Err(e) = repo.create_tag(&next.to_string()) {
            ui::display_error(&format!("Failed to create tag '{}': {}", next, e));
            std::process::exit(1);
        }
        ui::display_success(&format!("Created tag: {}", next));
    }

    Ok(())
}

fn branch_name(kind: &str, name: &str) -> Result<()> {
    let kind: BranchKind = kind.parse()?;
    let config = config::load_config();
    println!("{}", branch::generate_branch_name(&config, kind, name));
    Ok(())
}
