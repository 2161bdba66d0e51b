pub mod auth;

pub mod users;

pub mod groups;

pub mod subjects;

pub mod students;

pub mod discipline_groups;

pub mod schedule;

pub mod grades;

pub mod attendance;

pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use discipline_groups::configure_discipline_group_routes;
pub use grades::configure_grade_routes;
pub use groups::configure_group_routes;
pub use schedule::configure_schedule_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use users::configure_user_routes;
