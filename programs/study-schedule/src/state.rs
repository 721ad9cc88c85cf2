use anchor_lang::{error::ErrorCode, prelude::*};
use std::ops::RangeInclusive;

use crate::{constants::*, error::ScheduleError};

// ============================================================================
// SCHEDULE - Owner and candidate, created once
// ============================================================================

#[account]
#[derive(InitSpace, Default)]
pub struct Schedule {
    /// The only identity allowed to author and grade days
    pub owner: Pubkey,

    /// Candidate the schedule belongs to
    #[max_len(64)]
    pub candidate_name: String,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Schedule {
    /// Falls back to the default candidate when no name is given.
    pub fn open(&mut self, owner: Pubkey, candidate_name: Option<String>, bump: u8) -> Result<()> {
        let candidate_name = candidate_name.unwrap_or_else(|| DEFAULT_CANDIDATE_NAME.to_string());
        check_len(&candidate_name, MAX_CANDIDATE_NAME_LEN)?;

        self.owner = owner;
        self.candidate_name = candidate_name;
        self.bump = bump;

        Ok(())
    }

    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.owner == *caller
    }

    pub fn info(&self) -> ScheduleInfo {
        ScheduleInfo {
            owner: self.owner,
            candidate_name: self.candidate_name.clone(),
        }
    }
}

// ============================================================================
// DAY - One cell of the grid
// ============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayKind {
    Unset,
    Reading,
    Exam,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq)]
pub struct ReadingPlan {
    #[max_len(64)]
    pub subject: String,

    #[max_len(8, 64)]
    pub topics: Vec<String>,

    /// Free-form label, e.g. "09:00 - 12:00"
    #[max_len(32)]
    pub time: String,
}

impl ReadingPlan {
    pub fn new(subject: String, topics: Vec<String>, time: String) -> Result<Self> {
        check_len(&subject, MAX_SUBJECT_LEN)?;
        check_list(&topics, MAX_TOPICS, MAX_TOPIC_LEN)?;
        check_len(&time, MAX_TIME_LEN)?;

        Ok(Self {
            subject,
            topics,
            time,
        })
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq)]
pub struct ExamPlan {
    #[max_len(64)]
    pub title: String,

    #[max_len(8, 96)]
    pub questions: Vec<String>,

    /// Recorded on completion
    #[max_len(16)]
    pub grade: String,

    /// Unix timestamp, set once by start_exam_day
    pub started_at: Option<i64>,

    pub duration_seconds: i64,

    /// Link to the graded script, recorded on completion
    #[max_len(96)]
    pub ipfs_link: String,
}

impl ExamPlan {
    pub fn new(title: String, questions: Vec<String>) -> Result<Self> {
        check_len(&title, MAX_TITLE_LEN)?;
        check_list(&questions, MAX_QUESTIONS, MAX_QUESTION_LEN)?;

        Ok(Self {
            title,
            questions,
            grade: String::new(),
            started_at: None,
            duration_seconds: EXAM_DURATION_SECONDS,
            ipfs_link: String::new(),
        })
    }

    /// Questions are shown until the exam is graded; grade and link only after.
    pub fn reveal(&self, is_completed: bool) -> ExamView {
        let (questions, grade, ipfs_link) = if is_completed {
            (Vec::new(), self.grade.clone(), self.ipfs_link.clone())
        } else {
            (self.questions.clone(), String::new(), String::new())
        };

        ExamView {
            title: self.title.clone(),
            questions,
            grade,
            start_time: self.started_at.unwrap_or(0),
            duration_seconds: self.duration_seconds,
            ipfs_link,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub enum DayEntry {
    #[default]
    Unset,
    Reading(ReadingPlan),
    Exam(ExamPlan),
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct Day {
    pub entry: DayEntry,

    /// Only ever true for a day that is set
    pub is_completed: bool,
}

impl Day {
    pub fn kind(&self) -> DayKind {
        match self.entry {
            DayEntry::Unset => DayKind::Unset,
            DayEntry::Reading(_) => DayKind::Reading,
            DayEntry::Exam(_) => DayKind::Exam,
        }
    }

    pub fn is_set(&self) -> bool {
        self.kind() != DayKind::Unset
    }
}

// ============================================================================
// WEEK - Seven days, one account per week
// ============================================================================

#[account]
#[derive(InitSpace, Default)]
pub struct Week {
    /// 1-based week number, fixed at initialization
    pub number: u8,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Number of days with `is_completed` set. Stored ahead of `days` so
    /// the stats instruction only reads the first bytes of each week.
    pub completed_days: u8,

    pub days: [Day; DAYS_PER_WEEK],
}

impl Week {
    pub fn open(&mut self, number: u8, bump: u8) {
        self.number = number;
        self.bump = bump;
        self.completed_days = 0;
        self.days = Default::default();
    }

    /// Range-checks the coordinates against this week and returns the day index.
    fn locate(&self, week_number: u8, day_number: u8, days: RangeInclusive<u8>) -> Result<usize> {
        require!(WEEK_NUMBERS.contains(&week_number), ScheduleError::InvalidWeek);
        require!(days.contains(&day_number), ScheduleError::InvalidDay);
        require_eq!(self.number, week_number, ScheduleError::WeekAccountMismatch);

        Ok(usize::from(day_number - 1))
    }

    pub fn set_reading_day(
        &mut self,
        week_number: u8,
        day_number: u8,
        subject: String,
        topics: Vec<String>,
        time: String,
    ) -> Result<()> {
        let index = self.locate(week_number, day_number, READING_DAYS)?;
        let day = &mut self.days[index];
        require!(!day.is_set(), ScheduleError::DayAlreadySet);

        let plan = ReadingPlan::new(subject, topics, time)?;
        *day = Day {
            entry: DayEntry::Reading(plan),
            is_completed: false,
        };

        Ok(())
    }

    pub fn set_exam_day(
        &mut self,
        week_number: u8,
        day_number: u8,
        title: String,
        questions: Vec<String>,
    ) -> Result<()> {
        let index = self.locate(week_number, day_number, EXAM_DAYS)?;
        let day = &mut self.days[index];
        require!(!day.is_set(), ScheduleError::ExamAlreadySet);

        let plan = ExamPlan::new(title, questions)?;
        *day = Day {
            entry: DayEntry::Exam(plan),
            is_completed: false,
        };

        Ok(())
    }

    /// Records `now` as the exam start time and returns it.
    pub fn start_exam_day(&mut self, week_number: u8, day_number: u8, now: i64) -> Result<i64> {
        let index = self.locate(week_number, day_number, ANY_DAY)?;
        let day = &mut self.days[index];

        let DayEntry::Exam(exam) = &mut day.entry else {
            return err!(ScheduleError::NotExamDay);
        };
        require!(exam.started_at.is_none(), ScheduleError::ExamAlreadyStarted);
        require!(!day.is_completed, ScheduleError::DayAlreadyCompleted);

        exam.started_at = Some(now);
        exam.duration_seconds = EXAM_DURATION_SECONDS;

        Ok(now)
    }

    /// Marks the day finished. Grade and link are stored for exams and ignored
    /// for reading days.
    pub fn mark_day_completed(
        &mut self,
        week_number: u8,
        day_number: u8,
        grade: String,
        ipfs_link: String,
    ) -> Result<DayKind> {
        let index = self.locate(week_number, day_number, ANY_DAY)?;
        let day = &mut self.days[index];
        require!(day.is_set(), ScheduleError::DayNotSet);
        require!(!day.is_completed, ScheduleError::DayAlreadyCompleted);

        if let DayEntry::Exam(exam) = &mut day.entry {
            check_len(&grade, MAX_GRADE_LEN)?;
            check_len(&ipfs_link, MAX_IPFS_LINK_LEN)?;
            exam.grade = grade;
            exam.ipfs_link = ipfs_link;
        }
        day.is_completed = true;
        self.completed_days += 1;

        Ok(day.kind())
    }

    /// Unmarking a day that is not completed is a no-op, not an error.
    pub fn unmark_day_completed(&mut self, week_number: u8, day_number: u8) -> Result<()> {
        let index = self.locate(week_number, day_number, ANY_DAY)?;
        let day = &mut self.days[index];
        require!(day.is_set(), ScheduleError::DayNotSet);

        if day.is_completed {
            day.is_completed = false;
            self.completed_days -= 1;
        }

        Ok(())
    }

    pub fn remove_day(&mut self, week_number: u8, day_number: u8) -> Result<()> {
        let index = self.locate(week_number, day_number, ANY_DAY)?;
        let day = &mut self.days[index];
        require!(day.is_set(), ScheduleError::DayNotSet);

        if day.is_completed {
            self.completed_days -= 1;
        }
        *day = Day::default();

        Ok(())
    }

    pub fn view(&self, week_number: u8, day_number: u8) -> Result<DayView> {
        let index = self.locate(week_number, day_number, ANY_DAY)?;
        let day = &self.days[index];

        let details = match &day.entry {
            DayEntry::Unset => return err!(ScheduleError::DayNotSet),
            DayEntry::Reading(plan) => DayDetails::Reading(plan.clone()),
            DayEntry::Exam(exam) => DayDetails::Exam(exam.reveal(day.is_completed)),
        };

        Ok(DayView {
            kind: day.kind(),
            is_completed: day.is_completed,
            details,
        })
    }
}

/// Numbers the given weeks 1..=6 in order and clears their days.
pub fn open_weeks<'a>(weeks: impl IntoIterator<Item = (&'a mut Week, u8)>) {
    for (number, (week, bump)) in WEEK_NUMBERS.zip(weeks) {
        week.open(number, bump);
    }
}

/// Leading fields of a serialized `Week`, decoded without touching `days`.
#[derive(AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeekHeader {
    pub number: u8,
    pub bump: u8,
    pub completed_days: u8,
}

impl WeekHeader {
    /// `data` is the raw account data, discriminator included.
    pub fn read(data: &[u8]) -> Result<Self> {
        let mut body = data
            .strip_prefix(Week::DISCRIMINATOR)
            .ok_or_else(|| error!(ErrorCode::AccountDiscriminatorMismatch))?;

        Self::deserialize(&mut body).map_err(|_| ErrorCode::AccountDidNotDeserialize.into())
    }
}

fn check_len(value: &str, max: usize) -> Result<()> {
    require!(value.len() <= max, ScheduleError::FieldTooLong);
    Ok(())
}

fn check_list(values: &[String], max_entries: usize, max_len: usize) -> Result<()> {
    require!(values.len() <= max_entries, ScheduleError::TooManyEntries);
    values.iter().try_for_each(|value| check_len(value, max_len))
}

// ============================================================================
// VIEWS - Returned from read-only instructions
// ============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExamView {
    pub title: String,
    /// Empty once the exam is completed
    pub questions: Vec<String>,
    /// Empty until the exam is completed
    pub grade: String,
    /// 0 until the exam is started
    pub start_time: i64,
    pub duration_seconds: i64,
    /// Empty until the exam is completed
    pub ipfs_link: String,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum DayDetails {
    Reading(ReadingPlan),
    Exam(ExamView),
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DayView {
    pub kind: DayKind,
    pub is_completed: bool,
    pub details: DayDetails,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionStats {
    pub completed: u64,
    pub total: u64,
    /// Fixed-point with two decimals: 10000 = 100.00%
    pub percentage: u64,
}

impl CompletionStats {
    pub fn tally(weeks: impl IntoIterator<Item = WeekHeader>) -> Self {
        let completed: u64 = weeks
            .into_iter()
            .map(|week| u64::from(week.completed_days))
            .sum();

        Self {
            completed,
            total: TOTAL_DAYS,
            percentage: completed * PERCENT_SCALE / TOTAL_DAYS,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScheduleInfo {
    pub owner: Pubkey,
    pub candidate_name: String,
}

// ============================================================================
// EVENTS - Emitted for off-chain indexing
// ============================================================================

#[event]
pub struct SubjectSet {
    pub week_number: u8,
    pub day_number: u8,
    pub subject: String,
    pub timestamp: i64,
}

#[event]
pub struct ExamSet {
    pub week_number: u8,
    pub day_number: u8,
    pub title: String,
    pub timestamp: i64,
}

#[event]
pub struct ExamStarted {
    pub week_number: u8,
    pub day_number: u8,
    pub started_by: Pubkey,
    pub start_time: i64,
    pub timestamp: i64,
}

#[event]
pub struct DayCompleted {
    pub week_number: u8,
    pub day_number: u8,
    /// As supplied by the caller; not stored for reading days
    pub grade: String,
    pub ipfs_link: String,
    pub timestamp: i64,
}

#[event]
pub struct ExamCompleted {
    pub week_number: u8,
    pub day_number: u8,
    pub grade: String,
    pub ipfs_link: String,
    pub timestamp: i64,
}

#[event]
pub struct DayCompletedUnmarked {
    pub week_number: u8,
    pub day_number: u8,
    pub timestamp: i64,
}

#[event]
pub struct DayRemoved {
    pub week_number: u8,
    pub day_number: u8,
    pub timestamp: i64,
}
