pub mod member_index;

pub use member_index::{MemberIndex, UNKNOWN_MEMBER};
