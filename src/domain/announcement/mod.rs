//! Daily announcement composition

mod compose;
mod date;

pub use compose::{compose, Announcement};
pub use date::AnnouncementDate;
