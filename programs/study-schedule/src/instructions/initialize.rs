use anchor_lang::prelude::*;
use crate::{contexts::Initialize, state::open_weeks};

pub fn handler(ctx: Context<Initialize>, candidate_name: Option<String>) -> Result<()> {
    let bumps = &ctx.bumps;
    let accounts = &mut *ctx.accounts;

    let owner = accounts.owner.key();
    accounts.schedule.open(owner, candidate_name, bumps.schedule)?;

    open_weeks([
        (&mut **accounts.week_1, bumps.week_1),
        (&mut **accounts.week_2, bumps.week_2),
        (&mut **accounts.week_3, bumps.week_3),
        (&mut **accounts.week_4, bumps.week_4),
        (&mut **accounts.week_5, bumps.week_5),
        (&mut **accounts.week_6, bumps.week_6),
    ]);

    msg!("✅ Study schedule initialized!");
    msg!("   Owner: {}", accounts.schedule.owner);
    msg!("   Candidate: {}", accounts.schedule.candidate_name);

    Ok(())
}
