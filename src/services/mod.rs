pub mod attendance;
pub mod auth;
pub mod discipline_groups;
pub mod grades;
pub mod groups;
pub mod schedule;
pub mod students;
pub mod subjects;
pub mod users;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use discipline_groups::DisciplineGroupService;
pub use grades::GradeService;
pub use groups::GroupService;
pub use schedule::ScheduleService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use users::UserService;
