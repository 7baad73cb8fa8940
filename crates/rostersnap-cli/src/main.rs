//! rostersnap CLI
//!
//! Command-line host for a roster snapshot chain stored in a JSON file

use clap::{Parser, Subcommand};
use rostersnap_core::logging_facility::{init, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rostersnap")]
#[command(about = "rostersnap - Roster snapshot history", long_about = None)]
struct Cli {
    /// Chain file to operate on
    #[arg(long, global = true, default_value = ".rostersnap/chain.json")]
    chain: PathBuf,

    /// Retention policy file (TOML; defaults apply when absent)
    #[arg(long, global = true, default_value = ".rostersnap/policy.toml")]
    policy: PathBuf,

    /// Log operations at debug level on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List chain entries (live only unless --all)
    List(commands::list::ListArgs),
    /// Print one resolved snapshot as JSON
    Show(commands::show::ShowArgs),
    /// Summarize what changed between two snapshots
    Diff(commands::diff::DiffArgs),
    /// Snapshot a live roster file and append it to the chain
    Take(commands::take::TakeArgs),
    /// Move an entry to the trash
    Delete(commands::lifecycle::DeleteArgs),
    /// Take an entry back out of the trash
    Restore(commands::lifecycle::RestoreArgs),
    /// Rename an entry
    Rename(commands::lifecycle::RenameArgs),
    /// Drop the oldest trashed entries beyond the retention cap
    Purge,
    /// Drop every trashed entry
    EmptyTrash,
}

fn main() {
    let cli = Cli::parse();

    init(if cli.verbose {
        Profile::Development
    } else {
        Profile::Quiet
    });

    let ctx = commands::Context {
        chain_path: cli.chain,
        policy_path: cli.policy,
    };
    tracing::debug!(
        chain = %ctx.chain_path.display(),
        policy = %ctx.policy_path.display(),
        "resolved file locations"
    );

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&ctx, args),
        Commands::Show(args) => commands::show::execute(&ctx, args),
        Commands::Diff(args) => commands::diff::execute(&ctx, args),
        Commands::Take(args) => commands::take::execute(&ctx, args),
        Commands::Delete(args) => commands::lifecycle::execute_delete(&ctx, args),
        Commands::Restore(args) => commands::lifecycle::execute_restore(&ctx, args),
        Commands::Rename(args) => commands::lifecycle::execute_rename(&ctx, args),
        Commands::Purge => commands::purge::execute_purge(&ctx),
        Commands::EmptyTrash => commands::purge::execute_empty_trash(&ctx),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
