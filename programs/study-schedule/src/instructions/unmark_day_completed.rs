use anchor_lang::prelude::*;
use crate::{contexts::ManageDay, state::DayCompletedUnmarked};

pub fn handler(ctx: Context<ManageDay>, week_number: u8, day_number: u8) -> Result<()> {
    let week = &mut ctx.accounts.week;
    let clock = Clock::get()?;

    week.unmark_day_completed(week_number, day_number)?;

    emit!(DayCompletedUnmarked {
        week_number,
        day_number,
        timestamp: clock.unix_timestamp,
    });

    msg!("↩️ Completion unmarked: week {} day {}", week_number, day_number);

    Ok(())
}
