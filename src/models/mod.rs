pub mod course;
pub mod response;

pub use course::{Course, CourseRequest, Grade};
pub use response::ApiResponse;
