//! studymatch-content: course document loading (file, HTTP, bundled)

pub mod loader;
pub mod source;

pub use loader::{bundled_course_data, fetch_course_data, load_course_file, parse_course_data};
pub use source::CourseSource;
