pub mod constants;
pub mod contexts;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use contexts::*;
pub use error::*;
pub use state::*;

declare_id!("EasH6Z3ZpkMKmEZN6nMVTtTFE2pFR2TZzupJ15v6GAL9");

/// Study Schedule: a six-week reading and exam planner for one candidate
///
/// - A 6 x 7 grid of days; days 1-6 hold reading plans, day 7 the weekly exam
/// - One owner authors days, records completion and grades exams
/// - Anyone may start a scheduled exam
/// - Exam questions are visible until graded, grade and script link after
///
/// Accounts:
/// - `Schedule` PDA: owner and candidate name
/// - `Week` PDA per week: seven days each
#[program]
pub mod study_schedule {
    use super::*;

    /// Create the schedule and its six empty weeks
    pub fn initialize(ctx: Context<Initialize>, candidate_name: Option<String>) -> Result<()> {
        instructions::initialize::handler(ctx, candidate_name)
    }

    /// Author a reading day (owner-only, days 1-6)
    pub fn set_reading_day(
        ctx: Context<ManageDay>,
        week_number: u8,
        day_number: u8,
        subject: String,
        topics: Vec<String>,
        time: String,
    ) -> Result<()> {
        instructions::set_reading_day::handler(ctx, week_number, day_number, subject, topics, time)
    }

    /// Author the exam day (owner-only, day 7)
    pub fn set_exam_day(
        ctx: Context<ManageDay>,
        week_number: u8,
        day_number: u8,
        title: String,
        questions: Vec<String>,
    ) -> Result<()> {
        instructions::set_exam_day::handler(ctx, week_number, day_number, title, questions)
    }

    /// Start an exam (anyone)
    pub fn start_exam_day(ctx: Context<StartExamDay>, week_number: u8, day_number: u8) -> Result<()> {
        instructions::start_exam_day::handler(ctx, week_number, day_number)
    }

    /// Mark a day completed; for exams also records grade and script link (owner-only)
    pub fn mark_day_completed(
        ctx: Context<ManageDay>,
        week_number: u8,
        day_number: u8,
        grade: String,
        ipfs_link: String,
    ) -> Result<()> {
        instructions::mark_day_completed::handler(ctx, week_number, day_number, grade, ipfs_link)
    }

    /// Clear a day's completion flag (owner-only)
    pub fn unmark_day_completed(ctx: Context<ManageDay>, week_number: u8, day_number: u8) -> Result<()> {
        instructions::unmark_day_completed::handler(ctx, week_number, day_number)
    }

    /// Reset a day to unset so it can be authored again (owner-only)
    pub fn remove_day(ctx: Context<ManageDay>, week_number: u8, day_number: u8) -> Result<()> {
        instructions::remove_day::handler(ctx, week_number, day_number)
    }

    /// Project one day; exam questions give way to grade and link once completed
    pub fn get_today(ctx: Context<ReadDay>, week_number: u8, day_number: u8) -> Result<DayView> {
        instructions::get_today::handler(ctx, week_number, day_number)
    }

    /// Count completed days across the grid, percentage in hundredths
    pub fn get_completion_stats(ctx: Context<ReadGrid>) -> Result<CompletionStats> {
        instructions::get_completion_stats::handler(ctx)
    }

    /// Owner and candidate name
    pub fn get_schedule_info(ctx: Context<ReadSchedule>) -> Result<ScheduleInfo> {
        instructions::get_schedule_info::handler(ctx)
    }
}
