//! Diff command
//!
//! Usage: rostersnap diff <LEFT> <RIGHT> [--shards] [--mythic-shards] [--xp]

use clap::Args;
use rostersnap_core::diff::render_diff_summary;
use rostersnap_core::{compare_snapshots, DiffFlags};
use rostersnap_store::load_chain;

use super::{engine_error, CommandResult, Context};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Older chain index (-1 for the base)
    #[arg(allow_negative_numbers = true)]
    pub left: i64,

    /// Newer chain index
    #[arg(allow_negative_numbers = true)]
    pub right: i64,

    /// Include shard count changes
    #[arg(long)]
    pub shards: bool,

    /// Include mythic shard count changes
    #[arg(long)]
    pub mythic_shards: bool,

    /// Include character level changes
    #[arg(long)]
    pub xp: bool,
}

impl DiffArgs {
    fn flags(&self) -> DiffFlags {
        DiffFlags {
            shards: self.shards,
            mythic_shards: self.mythic_shards,
            xp_level: self.xp,
        }
    }
}

pub fn execute(ctx: &Context, args: DiffArgs) -> CommandResult {
    let chain = load_chain(&ctx.chain_path)?;
    let diff = compare_snapshots(&chain, args.left, args.right, args.flags())
        .map_err(engine_error("diff"))?;
    print!("{}", render_diff_summary(&diff));
    Ok(())
}
