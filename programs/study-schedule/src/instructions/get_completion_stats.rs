use anchor_lang::prelude::*;
use crate::{contexts::ReadGrid, state::CompletionStats};

pub fn handler(ctx: Context<ReadGrid>) -> Result<CompletionStats> {
    let stats = CompletionStats::tally(ctx.accounts.headers()?);

    msg!(
        "📊 Completed {} of {} days ({}.{:02}%)",
        stats.completed,
        stats.total,
        stats.percentage / 100,
        stats.percentage % 100
    );

    Ok(stats)
}
