use anchor_lang::prelude::*;
use crate::{contexts::ReadDay, state::DayView};

/// Project a single day; exam questions and grades are revealed by completion state
pub fn handler(ctx: Context<ReadDay>, week_number: u8, day_number: u8) -> Result<DayView> {
    ctx.accounts.week.view(week_number, day_number)
}
