pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod sql;

pub use extractor::{
    SafeDisciplineGroupIdI64, SafeGroupIdI64, SafeIDI64, SafeScheduleItemIdI64, SafeStudentIdI64,
    SafeSubjectIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use random_code::generate_random_code;
pub use sql::escape_like_pattern;
