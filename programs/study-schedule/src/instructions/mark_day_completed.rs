use anchor_lang::prelude::*;
use crate::{
    contexts::ManageDay,
    state::{DayCompleted, DayKind, ExamCompleted},
};

pub fn handler(
    ctx: Context<ManageDay>,
    week_number: u8,
    day_number: u8,
    grade: String,
    ipfs_link: String,
) -> Result<()> {
    let week = &mut ctx.accounts.week;
    let clock = Clock::get()?;

    let kind = week.mark_day_completed(week_number, day_number, grade.clone(), ipfs_link.clone())?;

    if kind == DayKind::Exam {
        emit!(ExamCompleted {
            week_number,
            day_number,
            grade: grade.clone(),
            ipfs_link,
            timestamp: clock.unix_timestamp,
        });
        msg!(
            "✅ Exam completed: week {} day {} (grade {})",
            week_number,
            day_number,
            grade
        );
    } else {
        emit!(DayCompleted {
            week_number,
            day_number,
            grade,
            ipfs_link,
            timestamp: clock.unix_timestamp,
        });
        msg!("✅ Day completed: week {} day {}", week_number, day_number);
    }

    Ok(())
}
