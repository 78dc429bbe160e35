pub mod attendance;
pub mod member;
pub mod rating;
pub mod settings;
pub mod task;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use member::{Member, MemberStatus};
pub use rating::Rating;
pub use settings::Settings;
pub use task::{Task, TaskStatus, normalize_score};
