use anchor_lang::prelude::*;
use crate::{contexts::ReadSchedule, state::ScheduleInfo};

pub fn handler(ctx: Context<ReadSchedule>) -> Result<ScheduleInfo> {
    Ok(ctx.accounts.schedule.info())
}
