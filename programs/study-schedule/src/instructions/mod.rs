pub mod get_completion_stats;
pub mod get_schedule_info;
pub mod get_today;
pub mod initialize;
pub mod mark_day_completed;
pub mod remove_day;
pub mod set_exam_day;
pub mod set_reading_day;
pub mod start_exam_day;
pub mod unmark_day_completed;
