use anchor_lang::prelude::*;
use crate::{contexts::ManageDay, state::SubjectSet};

pub fn handler(
    ctx: Context<ManageDay>,
    week_number: u8,
    day_number: u8,
    subject: String,
    topics: Vec<String>,
    time: String,
) -> Result<()> {
    let week = &mut ctx.accounts.week;
    let clock = Clock::get()?;

    week.set_reading_day(week_number, day_number, subject.clone(), topics, time)?;

    emit!(SubjectSet {
        week_number,
        day_number,
        subject: subject.clone(),
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "✅ Reading day set: week {} day {} ({})",
        week_number,
        day_number,
        subject
    );

    Ok(())
}
