pub mod schedule;
pub mod upload;

pub use schedule::{Priority, ScheduledTask, StudySchedule, classify_priority, generate_schedule};
pub use upload::decode_upload;
