pub mod syllabus;
pub mod todo;

pub use syllabus::{Syllabus, SyllabusRow};
pub use todo::{NewTodoRequest, Todo, UpdateTodoRequest};

/// Single hardcoded user until authentication exists.
pub const DEFAULT_USER_ID: i64 = 1;
