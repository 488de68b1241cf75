pub mod course;
pub mod query;

pub use course::{Course, CourseId, CourseModule, ModuleKind};
pub use query::{Availability, CourseQuery, SortKey};
