use std::sync::Arc;

use crate::models::{
    attendance::{
        entities::Attendance,
        requests::{AttendanceQuery, CreateAttendanceRequest, UpdateAttendanceRequest},
    },
    discipline_groups::{
        entities::DisciplineGroup,
        requests::{CreateDisciplineGroupRequest, DisciplineGroupQuery, UpdateDisciplineGroupRequest},
    },
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeQuery, UpdateGradeRequest},
    },
    groups::{
        entities::Group,
        requests::{CreateGroupRequest, UpdateGroupRequest},
    },
    schedule::{entities::ScheduleItem, requests::ScheduleItemData, requests::ScheduleQuery},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[cfg(test)]
pub mod mock;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段携带已哈希的密码）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;

    /// 学生组管理方法
    // 创建组
    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group>;
    // 通过ID获取组
    async fn get_group_by_id(&self, id: i64) -> Result<Option<Group>>;
    // 通过名称获取组
    async fn get_group_by_name(&self, name: &str) -> Result<Option<Group>>;
    // 列出所有组（按 ID 排序）
    async fn list_groups(&self) -> Result<Vec<Group>>;
    // 列出某教师通过课程-组分配可见的组（去重，按 ID 排序）
    async fn list_groups_by_teacher(&self, teacher_id: i64) -> Result<Vec<Group>>;
    // 更新组信息
    async fn update_group(&self, id: i64, update: UpdateGroupRequest) -> Result<Option<Group>>;
    // 组是否存在
    async fn group_exists(&self, id: i64) -> Result<bool>;
    // 删除组及其全部关联行（有序级联，单事务）
    async fn delete_group_with_relations(&self, id: i64) -> Result<bool>;
    // 级联删除影响统计
    async fn count_schedule_items_by_group(&self, group_id: i64) -> Result<u64>;
    async fn count_students_by_group(&self, group_id: i64) -> Result<u64>;
    async fn count_discipline_groups_by_group(&self, group_id: i64) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取课程
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    // 列出所有课程（按 ID 排序）
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    // 列出某教师通过课程-组分配可见的课程（去重，按 ID 排序）
    async fn list_subjects_by_teacher(&self, teacher_id: i64) -> Result<Vec<Subject>>;
    // 更新课程信息
    async fn update_subject(&self, id: i64, update: UpdateSubjectRequest)
    -> Result<Option<Subject>>;
    // 课程是否存在
    async fn subject_exists(&self, id: i64) -> Result<bool>;
    // 删除课程及其全部关联行（有序级联，单事务）
    async fn delete_subject_with_relations(&self, id: i64) -> Result<bool>;
    // 级联删除影响统计
    async fn count_schedule_items_by_subject(&self, subject_id: i64) -> Result<u64>;
    async fn count_discipline_groups_by_subject(&self, subject_id: i64) -> Result<u64>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出学生（可按组过滤）
    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生及其成绩/出勤记录（单事务）
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 课程-组分配管理方法
    // 创建分配
    async fn create_discipline_group(
        &self,
        assignment: CreateDisciplineGroupRequest,
    ) -> Result<DisciplineGroup>;
    // 通过ID获取分配
    async fn get_discipline_group_by_id(&self, id: i64) -> Result<Option<DisciplineGroup>>;
    // 列出分配（可按组/课程/教师过滤）
    async fn list_discipline_groups(
        &self,
        query: DisciplineGroupQuery,
    ) -> Result<Vec<DisciplineGroup>>;
    // 更新分配
    async fn update_discipline_group(
        &self,
        id: i64,
        update: UpdateDisciplineGroupRequest,
    ) -> Result<Option<DisciplineGroup>>;
    // 删除分配
    async fn delete_discipline_group(&self, id: i64) -> Result<bool>;

    /// 课程安排管理方法
    // 创建课程安排（条目 + 组关联行，单事务）
    async fn create_schedule_item(&self, data: &ScheduleItemData) -> Result<ScheduleItem>;
    // 通过ID获取课程安排
    async fn get_schedule_item_by_id(&self, id: i64) -> Result<Option<ScheduleItem>>;
    // 列出课程安排（可按日期/组过滤）
    async fn list_schedule_items(&self, query: ScheduleQuery) -> Result<Vec<ScheduleItem>>;
    // 全量替换课程安排（保留 ID，重建组关联行，单事务）
    async fn update_schedule_item(
        &self,
        id: i64,
        data: &ScheduleItemData,
    ) -> Result<Option<ScheduleItem>>;
    // 删除单个课程安排（条目 + 组关联行）
    async fn delete_schedule_item(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    // 记录成绩
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    // 通过ID获取成绩
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    // 列出成绩（可按学生/课程过滤）
    async fn list_grades(&self, query: GradeQuery) -> Result<Vec<Grade>>;
    // 更新成绩
    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>>;
    // 删除成绩
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// 出勤管理方法
    // 记录出勤
    async fn create_attendance(&self, record: CreateAttendanceRequest) -> Result<Attendance>;
    // 通过ID获取出勤记录
    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<Attendance>>;
    // 列出出勤记录（可按学生/课程过滤）
    async fn list_attendance(&self, query: AttendanceQuery) -> Result<Vec<Attendance>>;
    // 更新出勤记录
    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>>;
    // 删除出勤记录
    async fn delete_attendance(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
