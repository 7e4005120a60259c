pub mod model;
pub mod schema;

pub use model::{Homework, HomeworkStatus, PayloadError};
pub use schema::check_response;
