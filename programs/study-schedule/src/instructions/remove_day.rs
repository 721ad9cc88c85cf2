use anchor_lang::prelude::*;
use crate::{contexts::ManageDay, state::DayRemoved};

pub fn handler(ctx: Context<ManageDay>, week_number: u8, day_number: u8) -> Result<()> {
    let week = &mut ctx.accounts.week;
    let clock = Clock::get()?;

    week.remove_day(week_number, day_number)?;

    emit!(DayRemoved {
        week_number,
        day_number,
        timestamp: clock.unix_timestamp,
    });

    msg!("🗑️ Day removed: week {} day {}", week_number, day_number);

    Ok(())
}
