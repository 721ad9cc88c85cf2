use anchor_lang::prelude::*;
use crate::{contexts::ManageDay, state::ExamSet};

pub fn handler(
    ctx: Context<ManageDay>,
    week_number: u8,
    day_number: u8,
    title: String,
    questions: Vec<String>,
) -> Result<()> {
    let week = &mut ctx.accounts.week;
    let clock = Clock::get()?;

    let question_count = questions.len();
    week.set_exam_day(week_number, day_number, title.clone(), questions)?;

    emit!(ExamSet {
        week_number,
        day_number,
        title: title.clone(),
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "✅ Exam day set: week {} day {} ({}, {} questions)",
        week_number,
        day_number,
        title,
        question_count
    );

    Ok(())
}
