pub use super::attendance::Entity as Attendance;
pub use super::discipline_groups::Entity as DisciplineGroups;
pub use super::grades::Entity as Grades;
pub use super::groups::Entity as Groups;
pub use super::schedule_item_groups::Entity as ScheduleItemGroups;
pub use super::schedule_items::Entity as ScheduleItems;
pub use super::students::Entity as Students;
pub use super::subjects::Entity as Subjects;
pub use super::users::Entity as Users;
