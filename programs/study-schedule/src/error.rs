use anchor_lang::prelude::*;

#[error_code]
pub enum ScheduleError {
    #[msg("Only the schedule owner can perform this action")]
    NotOwner,

    #[msg("Week number must be between 1 and 6")]
    InvalidWeek,

    #[msg("Day number is outside the range allowed for this action")]
    InvalidDay,

    #[msg("Reading day has already been set - remove it first")]
    DayAlreadySet,

    #[msg("Exam day has already been set - remove it first")]
    ExamAlreadySet,

    #[msg("Day has not been set")]
    DayNotSet,

    #[msg("Day has already been completed")]
    DayAlreadyCompleted,

    #[msg("Exam has already been started")]
    ExamAlreadyStarted,

    #[msg("Day is not an exam day")]
    NotExamDay,

    #[msg("Week account does not match the requested week number")]
    WeekAccountMismatch,

    #[msg("Text field exceeds its maximum length")]
    FieldTooLong,

    #[msg("Too many entries in list")]
    TooManyEntries,
}
