use std::ops::RangeInclusive;

// ============================================================================
// SEEDS FOR PDA DERIVATION
// ============================================================================

pub const SCHEDULE_SEED: &[u8] = b"schedule";

pub const WEEK_SEED: &[u8] = b"week";

// ============================================================================
// GRID SHAPE
// ============================================================================

/// Number of weeks in the schedule
pub const WEEKS: usize = 6;

/// Number of days in every week
pub const DAYS_PER_WEEK: usize = 7;

/// Total number of cells in the grid (6 x 7)
pub const TOTAL_DAYS: u64 = (WEEKS * DAYS_PER_WEEK) as u64;

/// Valid week numbers; week `n` lives in the PDA seeded with `[WEEK_SEED, [n]]`
pub const WEEK_NUMBERS: RangeInclusive<u8> = 1..=6;

/// Days that may be authored as reading days
pub const READING_DAYS: RangeInclusive<u8> = 1..=6;

/// Exams can only be authored on the last day of a week
pub const EXAM_DAYS: RangeInclusive<u8> = 7..=7;

/// Days accepted by start/complete/unmark/remove and the read projection
pub const ANY_DAY: RangeInclusive<u8> = 1..=7;

// ============================================================================
// EXAMS
// ============================================================================

/// Every exam runs for 180 minutes
pub const EXAM_DURATION_SECONDS: i64 = 180 * 60;

/// Completion percentages are fixed-point with two implied decimals
pub const PERCENT_SCALE: u64 = 10_000;

// ============================================================================
// PAYLOAD BOUNDS
// Keep in sync with the #[max_len] attributes in state.rs. A full exam view
// must fit in the 1024 bytes of instruction return data.
// ============================================================================

pub const DEFAULT_CANDIDATE_NAME: &str = "JULIET ONYINYE O";

pub const MAX_CANDIDATE_NAME_LEN: usize = 64;

pub const MAX_SUBJECT_LEN: usize = 64;

pub const MAX_TOPICS: usize = 8;

pub const MAX_TOPIC_LEN: usize = 64;

pub const MAX_TIME_LEN: usize = 32;

pub const MAX_TITLE_LEN: usize = 64;

pub const MAX_QUESTIONS: usize = 8;

pub const MAX_QUESTION_LEN: usize = 96;

pub const MAX_GRADE_LEN: usize = 16;

pub const MAX_IPFS_LINK_LEN: usize = 96;
