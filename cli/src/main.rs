mod description;
mod edits;
mod error;
mod resolve;

#[cfg(test)]
mod edits_test;

use clap::Parser;
use cmdgraft::{CommandTree, RedirectTargets, TreeWalker, WalkOptions};
use description::Permissions;
use error::CliError;
use miette::Result;
use resolve::{ResolveMapper, Resolved};

/// cmdgraft - Show the command tree a client would receive
#[derive(Parser, Debug)]
#[command(name = "cmdgraft")]
#[command(about = "Filter and resolve a JSON command description", long_about = None)]
struct Args {
    /// Command description (JSON)
    file: String,

    /// Permission granted to the viewer (repeatable)
    #[arg(long = "grant", value_name = "PERM")]
    grants: Vec<String>,

    /// Skip requirement checks and keep every command
    #[arg(long)]
    unfiltered: bool,

    /// Register an alias before mapping, as PATH=NAME (repeatable)
    #[arg(long = "alias", value_name = "PATH=NAME")]
    aliases: Vec<String>,

    /// Unregister the command at PATH before mapping (repeatable)
    #[arg(long = "remove", value_name = "PATH")]
    removals: Vec<String>,

    /// Drop redirects whose destination the viewer cannot use
    #[arg(long)]
    require_visible_redirects: bool,
}

fn run(args: Args) -> Result<String, CliError> {
    let json = std::fs::read_to_string(&args.file).map_err(|source| CliError::Read {
        path: args.file.clone(),
        source,
    })?;
    let mut tree = description::parse(&json)?;

    for removal in &args.removals {
        edits::apply_removal(&mut tree, removal)?;
    }
    for alias in &args.aliases {
        edits::apply_alias(&mut tree, alias)?;
    }

    let permissions: Permissions = args.grants.iter().map(String::as_str).collect();
    let context = (!args.unfiltered).then_some(&permissions);
    let options = WalkOptions {
        redirect_targets: if args.require_visible_redirects {
            RedirectTargets::RequireVisible
        } else {
            RedirectTargets::AlwaysResolve
        },
    };

    let resolved: CommandTree<Resolved> = TreeWalker::new(&tree, &mut ResolveMapper)
        .with_context(context)
        .with_options(options)
        .run()?;
    Ok(resolved.display().to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let outline = run(args)?;
    print!("{outline}");
    Ok(())
}
