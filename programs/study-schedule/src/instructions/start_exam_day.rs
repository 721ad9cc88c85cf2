use anchor_lang::prelude::*;
use crate::{contexts::StartExamDay, state::ExamStarted};

/// Start a scheduled exam
///
/// Open to any signer: whoever sits the exam marks it in progress. The owner
/// keeps sole control over authoring and grading.
pub fn handler(ctx: Context<StartExamDay>, week_number: u8, day_number: u8) -> Result<()> {
    let week = &mut ctx.accounts.week;
    let clock = Clock::get()?;

    let start_time = week.start_exam_day(week_number, day_number, clock.unix_timestamp)?;

    emit!(ExamStarted {
        week_number,
        day_number,
        started_by: ctx.accounts.candidate.key(),
        start_time,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "⏱️ Exam started: week {} day {} at {}",
        week_number,
        day_number,
        start_time
    );

    Ok(())
}
