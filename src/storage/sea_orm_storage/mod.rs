//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 组/课程的级联删除在此层内以单事务、固定顺序显式执行。

mod attendance;
mod discipline_groups;
mod grades;
mod groups;
mod schedule_items;
mod students;
mod subjects;
mod users;

use crate::config::AppConfig;
use crate::errors::{AcadSysError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AcadSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AcadSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AcadSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AcadSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学生组模块
    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group> {
        self.create_group_impl(group).await
    }

    async fn get_group_by_id(&self, id: i64) -> Result<Option<Group>> {
        self.get_group_by_id_impl(id).await
    }

    async fn get_group_by_name(&self, name: &str) -> Result<Option<Group>> {
        self.get_group_by_name_impl(name).await
    }

    async fn list_groups(&self) -> Result<Vec<Group>> {
        self.list_groups_impl().await
    }

    async fn list_groups_by_teacher(&self, teacher_id: i64) -> Result<Vec<Group>> {
        self.list_groups_by_teacher_impl(teacher_id).await
    }

    async fn update_group(&self, id: i64, update: UpdateGroupRequest) -> Result<Option<Group>> {
        self.update_group_impl(id, update).await
    }

    async fn group_exists(&self, id: i64) -> Result<bool> {
        self.group_exists_impl(id).await
    }

    async fn delete_group_with_relations(&self, id: i64) -> Result<bool> {
        self.delete_group_with_relations_impl(id).await
    }

    async fn count_schedule_items_by_group(&self, group_id: i64) -> Result<u64> {
        self.count_schedule_items_by_group_impl(group_id).await
    }

    async fn count_students_by_group(&self, group_id: i64) -> Result<u64> {
        self.count_students_by_group_impl(group_id).await
    }

    async fn count_discipline_groups_by_group(&self, group_id: i64) -> Result<u64> {
        self.count_discipline_groups_by_group_impl(group_id).await
    }

    // 课程模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn list_subjects_by_teacher(&self, teacher_id: i64) -> Result<Vec<Subject>> {
        self.list_subjects_by_teacher_impl(teacher_id).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn subject_exists(&self, id: i64) -> Result<bool> {
        self.subject_exists_impl(id).await
    }

    async fn delete_subject_with_relations(&self, id: i64) -> Result<bool> {
        self.delete_subject_with_relations_impl(id).await
    }

    async fn count_schedule_items_by_subject(&self, subject_id: i64) -> Result<u64> {
        self.count_schedule_items_by_subject_impl(subject_id).await
    }

    async fn count_discipline_groups_by_subject(&self, subject_id: i64) -> Result<u64> {
        self.count_discipline_groups_by_subject_impl(subject_id)
            .await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        self.list_students_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 课程-组分配模块
    async fn create_discipline_group(
        &self,
        assignment: CreateDisciplineGroupRequest,
    ) -> Result<DisciplineGroup> {
        self.create_discipline_group_impl(assignment).await
    }

    async fn get_discipline_group_by_id(&self, id: i64) -> Result<Option<DisciplineGroup>> {
        self.get_discipline_group_by_id_impl(id).await
    }

    async fn list_discipline_groups(
        &self,
        query: DisciplineGroupQuery,
    ) -> Result<Vec<DisciplineGroup>> {
        self.list_discipline_groups_impl(query).await
    }

    async fn update_discipline_group(
        &self,
        id: i64,
        update: UpdateDisciplineGroupRequest,
    ) -> Result<Option<DisciplineGroup>> {
        self.update_discipline_group_impl(id, update).await
    }

    async fn delete_discipline_group(&self, id: i64) -> Result<bool> {
        self.delete_discipline_group_impl(id).await
    }

    // 课程安排模块
    async fn create_schedule_item(&self, data: &ScheduleItemData) -> Result<ScheduleItem> {
        self.create_schedule_item_impl(data).await
    }

    async fn get_schedule_item_by_id(&self, id: i64) -> Result<Option<ScheduleItem>> {
        self.get_schedule_item_by_id_impl(id).await
    }

    async fn list_schedule_items(&self, query: ScheduleQuery) -> Result<Vec<ScheduleItem>> {
        self.list_schedule_items_impl(query).await
    }

    async fn update_schedule_item(
        &self,
        id: i64,
        data: &ScheduleItemData,
    ) -> Result<Option<ScheduleItem>> {
        self.update_schedule_item_impl(id, data).await
    }

    async fn delete_schedule_item(&self, id: i64) -> Result<bool> {
        self.delete_schedule_item_impl(id).await
    }

    // 成绩模块
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn list_grades(&self, query: GradeQuery) -> Result<Vec<Grade>> {
        self.list_grades_impl(query).await
    }

    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>> {
        self.update_grade_impl(id, update).await
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    // 出勤模块
    async fn create_attendance(&self, record: CreateAttendanceRequest) -> Result<Attendance> {
        self.create_attendance_impl(record).await
    }

    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<Attendance>> {
        self.get_attendance_by_id_impl(id).await
    }

    async fn list_attendance(&self, query: AttendanceQuery) -> Result<Vec<Attendance>> {
        self.list_attendance_impl(query).await
    }

    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>> {
        self.update_attendance_impl(id, update).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        attendance::{entities::AttendanceStatus, requests::CreateAttendanceRequest},
        discipline_groups::requests::{CreateDisciplineGroupRequest, DisciplineGroupQuery},
        grades::{
            entities::GradeType,
            requests::{CreateGradeRequest, GradeQuery, UpdateGradeRequest},
        },
        groups::requests::CreateGroupRequest,
        schedule::requests::{ScheduleItemData, ScheduleQuery},
        students::requests::{CreateStudentRequest, StudentListQuery},
        subjects::entities::LessonType,
        subjects::requests::CreateSubjectRequest,
        users::entities::UserRole,
        users::requests::CreateUserRequest,
    };
    use crate::storage::Storage;

    async fn memory_storage() -> SeaOrmStorage {
        let db = Database::connect("sqlite::memory:")
            .await
            .unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    async fn seed_teacher(storage: &SeaOrmStorage) -> i64 {
        storage
            .create_user(CreateUserRequest {
                username: "ivanov".to_string(),
                password: "hash".to_string(),
                first_name: "Ivan".to_string(),
                last_name: "Ivanov".to_string(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap()
            .id
    }

    async fn seed_group(storage: &SeaOrmStorage, name: &str) -> i64 {
        storage
            .create_group(CreateGroupRequest {
                name: name.to_string(),
            })
            .await
            .unwrap()
            .id
    }

    async fn seed_subject(storage: &SeaOrmStorage, name: &str) -> i64 {
        storage
            .create_subject(CreateSubjectRequest {
                name: name.to_string(),
                short_name: name[..2].to_string(),
                description: None,
                credits: Some(4),
                lesson_types: vec![LessonType::Lecture, LessonType::Lab],
            })
            .await
            .unwrap()
            .id
    }

    async fn seed_student(storage: &SeaOrmStorage, group_id: i64) -> i64 {
        storage
            .create_student(CreateStudentRequest {
                first_name: "Petr".to_string(),
                last_name: "Petrov".to_string(),
                middle_name: None,
                date_born: None,
                group_id: Some(group_id),
            })
            .await
            .unwrap()
            .id
    }

    fn schedule_data(
        group_ids: Vec<i64>,
        subject_id: i64,
        teacher_id: i64,
    ) -> ScheduleItemData {
        ScheduleItemData {
            date: "2026-09-01".parse().unwrap(),
            start_time: "09:00:00".parse().unwrap(),
            end_time: "10:30:00".parse().unwrap(),
            group_ids,
            subject_id,
            teacher_id,
            lesson_type: LessonType::Lecture,
        }
    }

    #[tokio::test]
    async fn test_group_cascade_removes_all_relations() {
        let storage = memory_storage().await;
        let teacher_id = seed_teacher(&storage).await;
        let group_id = seed_group(&storage, "CS-101").await;
        let other_group_id = seed_group(&storage, "CS-102").await;
        let subject_id = seed_subject(&storage, "Algebra").await;
        let student_id = seed_student(&storage, group_id).await;

        storage
            .create_discipline_group(CreateDisciplineGroupRequest {
                subject_id,
                group_id,
                teacher_id: Some(teacher_id),
                semester: 1,
                year: 2026,
            })
            .await
            .unwrap();

        // 同时关联两个组的课程安排：删除任一参与组时整条消失
        let item = storage
            .create_schedule_item(&schedule_data(
                vec![group_id, other_group_id],
                subject_id,
                teacher_id,
            ))
            .await
            .unwrap();

        assert!(storage.delete_group_with_relations(group_id).await.unwrap());

        assert!(storage.get_group_by_id(group_id).await.unwrap().is_none());
        assert!(storage.get_student_by_id(student_id).await.unwrap().is_none());
        assert!(
            storage
                .get_schedule_item_by_id(item.id)
                .await
                .unwrap()
                .is_none()
        );
        let assignments = storage
            .list_discipline_groups(DisciplineGroupQuery {
                group_id: Some(group_id),
                subject_id: None,
                teacher_id: None,
            })
            .await
            .unwrap();
        assert!(assignments.is_empty());

        // 未涉及的组不受影响
        assert!(
            storage
                .get_group_by_id(other_group_id)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_subject_cascade_removes_schedule_and_assignments() {
        let storage = memory_storage().await;
        let teacher_id = seed_teacher(&storage).await;
        let group_id = seed_group(&storage, "CS-201").await;
        let subject_id = seed_subject(&storage, "Physics").await;

        storage
            .create_discipline_group(CreateDisciplineGroupRequest {
                subject_id,
                group_id,
                teacher_id: Some(teacher_id),
                semester: 2,
                year: 2026,
            })
            .await
            .unwrap();
        let item = storage
            .create_schedule_item(&schedule_data(vec![group_id], subject_id, teacher_id))
            .await
            .unwrap();

        assert!(
            storage
                .delete_subject_with_relations(subject_id)
                .await
                .unwrap()
        );

        assert!(storage.get_subject_by_id(subject_id).await.unwrap().is_none());
        assert!(
            storage
                .get_schedule_item_by_id(item.id)
                .await
                .unwrap()
                .is_none()
        );
        let assignments = storage
            .list_discipline_groups(DisciplineGroupQuery {
                group_id: None,
                subject_id: Some(subject_id),
                teacher_id: None,
            })
            .await
            .unwrap();
        assert!(assignments.is_empty());

        // 组及其学生不在课程级联范围内
        assert!(storage.get_group_by_id(group_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_deletion_counts_match_relations() {
        let storage = memory_storage().await;
        let teacher_id = seed_teacher(&storage).await;
        let group_id = seed_group(&storage, "CS-301").await;
        let subject_id = seed_subject(&storage, "Chemistry").await;
        seed_student(&storage, group_id).await;
        seed_student(&storage, group_id).await;

        storage
            .create_discipline_group(CreateDisciplineGroupRequest {
                subject_id,
                group_id,
                teacher_id: Some(teacher_id),
                semester: 1,
                year: 2026,
            })
            .await
            .unwrap();
        storage
            .create_schedule_item(&schedule_data(vec![group_id], subject_id, teacher_id))
            .await
            .unwrap();

        assert_eq!(
            storage.count_schedule_items_by_group(group_id).await.unwrap(),
            1
        );
        assert_eq!(storage.count_students_by_group(group_id).await.unwrap(), 2);
        assert_eq!(
            storage
                .count_discipline_groups_by_group(group_id)
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            storage
                .count_schedule_items_by_subject(subject_id)
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            storage
                .count_discipline_groups_by_subject(subject_id)
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_delete_missing_group_returns_false() {
        let storage = memory_storage().await;
        assert!(!storage.delete_group_with_relations(999).await.unwrap());
        assert!(!storage.delete_subject_with_relations(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_schedule_update_replaces_group_links() {
        let storage = memory_storage().await;
        let teacher_id = seed_teacher(&storage).await;
        let g1 = seed_group(&storage, "G-1").await;
        let g2 = seed_group(&storage, "G-2").await;
        let g3 = seed_group(&storage, "G-3").await;
        let subject_id = seed_subject(&storage, "History").await;

        let item = storage
            .create_schedule_item(&schedule_data(vec![g1, g2], subject_id, teacher_id))
            .await
            .unwrap();
        assert_eq!(item.group_ids, vec![g1, g2]);

        let mut data = schedule_data(vec![g3], subject_id, teacher_id);
        data.lesson_type = LessonType::Seminar;
        let updated = storage
            .update_schedule_item(item.id, &data)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.group_ids, vec![g3]);
        assert_eq!(updated.lesson_type, LessonType::Seminar);

        // 旧关联行已被替换
        let by_old_group = storage
            .list_schedule_items(ScheduleQuery {
                date: None,
                group_id: Some(g1),
            })
            .await
            .unwrap();
        assert!(by_old_group.is_empty());
    }

    #[tokio::test]
    async fn test_teacher_visibility_distinct_ordered() {
        let storage = memory_storage().await;
        let teacher_id = seed_teacher(&storage).await;
        let g1 = seed_group(&storage, "V-1").await;
        let g2 = seed_group(&storage, "V-2").await;
        let s1 = seed_subject(&storage, "Maths").await;
        let s2 = seed_subject(&storage, "Logic").await;

        // 同一教师、同一组两门课：组在可见列表中只出现一次
        for subject_id in [s1, s2] {
            storage
                .create_discipline_group(CreateDisciplineGroupRequest {
                    subject_id,
                    group_id: g1,
                    teacher_id: Some(teacher_id),
                    semester: 1,
                    year: 2026,
                })
                .await
                .unwrap();
        }

        let visible_groups = storage.list_groups_by_teacher(teacher_id).await.unwrap();
        assert_eq!(visible_groups.len(), 1);
        assert_eq!(visible_groups[0].id, g1);

        let visible_subjects = storage.list_subjects_by_teacher(teacher_id).await.unwrap();
        assert_eq!(
            visible_subjects.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![s1.min(s2), s1.max(s2)]
        );

        // 未分配的组不可见
        assert!(
            !visible_groups.iter().any(|g| g.id == g2),
            "unassigned group must stay invisible"
        );
    }

    fn grade_data(student_id: i64, subject_id: i64, value: i32) -> CreateGradeRequest {
        CreateGradeRequest {
            student_id,
            subject_id,
            teacher_id: None,
            grade_type: GradeType::Current,
            lesson_type: None,
            value,
            date: Some("2026-09-02".parse().unwrap()),
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_grade_crud_and_filters() {
        let storage = memory_storage().await;
        let group_id = seed_group(&storage, "GR-1").await;
        let subject_id = seed_subject(&storage, "Algebra").await;
        let s1 = seed_student(&storage, group_id).await;
        let s2 = seed_student(&storage, group_id).await;

        let grade = storage.create_grade(grade_data(s1, subject_id, 7)).await.unwrap();
        storage.create_grade(grade_data(s2, subject_id, 9)).await.unwrap();
        assert_eq!(grade.grade_type, GradeType::Current);
        assert_eq!(grade.date.to_string(), "2026-09-02");

        let by_student = storage
            .list_grades(GradeQuery {
                student_id: Some(s1),
                subject_id: None,
            })
            .await
            .unwrap();
        assert_eq!(by_student.len(), 1);
        assert_eq!(by_student[0].value, 7);

        let updated = storage
            .update_grade(
                grade.id,
                UpdateGradeRequest {
                    grade_type: Some(GradeType::Exam),
                    lesson_type: None,
                    value: Some(10),
                    date: None,
                    comment: Some("retake".to_string()),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.grade_type, GradeType::Exam);
        assert_eq!(updated.value, 10);
        assert_eq!(updated.comment.as_deref(), Some("retake"));

        assert!(storage.delete_grade(grade.id).await.unwrap());
        assert!(storage.get_grade_by_id(grade.id).await.unwrap().is_none());
        assert!(!storage.delete_grade(grade.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_student_delete_removes_grades_and_attendance() {
        let storage = memory_storage().await;
        let group_id = seed_group(&storage, "GR-2").await;
        let subject_id = seed_subject(&storage, "Physics").await;
        let student_id = seed_student(&storage, group_id).await;

        let grade = storage
            .create_grade(grade_data(student_id, subject_id, 6))
            .await
            .unwrap();
        let record = storage
            .create_attendance(CreateAttendanceRequest {
                student_id,
                subject_id,
                status: AttendanceStatus::Present,
                date: None,
            })
            .await
            .unwrap();
        assert_eq!(record.status, AttendanceStatus::Present);

        assert!(storage.delete_student(student_id).await.unwrap());
        assert!(storage.get_grade_by_id(grade.id).await.unwrap().is_none());
        assert!(
            storage
                .get_attendance_by_id(record.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_failed_subject_cascade_leaves_rows_intact() {
        let storage = memory_storage().await;
        let teacher_id = seed_teacher(&storage).await;
        let group_id = seed_group(&storage, "AT-1").await;
        let subject_id = seed_subject(&storage, "Geometry").await;
        let student_id = seed_student(&storage, group_id).await;

        storage
            .create_discipline_group(CreateDisciplineGroupRequest {
                subject_id,
                group_id,
                teacher_id: Some(teacher_id),
                semester: 1,
                year: 2026,
            })
            .await
            .unwrap();
        let item = storage
            .create_schedule_item(&schedule_data(vec![group_id], subject_id, teacher_id))
            .await
            .unwrap();
        // 该课程仍被成绩引用，级联的最后一步（删除课程本身）会触发外键约束
        let grade = storage
            .create_grade(grade_data(student_id, subject_id, 8))
            .await
            .unwrap();

        assert!(storage.delete_subject_with_relations(subject_id).await.is_err());

        // 级联中途失败后所有行保持原样：前置步骤已删除的行随事务一起回滚
        assert!(storage.get_subject_by_id(subject_id).await.unwrap().is_some());
        assert!(
            storage
                .get_schedule_item_by_id(item.id)
                .await
                .unwrap()
                .is_some()
        );
        assert_eq!(
            storage
                .count_discipline_groups_by_subject(subject_id)
                .await
                .unwrap(),
            1
        );
        assert!(storage.get_grade_by_id(grade.id).await.unwrap().is_some());
        assert!(storage.get_student_by_id(student_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_student_delete_and_group_filter() {
        let storage = memory_storage().await;
        let group_id = seed_group(&storage, "F-1").await;
        let other = seed_group(&storage, "F-2").await;
        let s1 = seed_student(&storage, group_id).await;
        seed_student(&storage, other).await;

        let in_group = storage
            .list_students(StudentListQuery {
                group_id: Some(group_id),
                search: None,
            })
            .await
            .unwrap();
        assert_eq!(in_group.len(), 1);
        assert_eq!(in_group[0].id, s1);

        assert!(storage.delete_student(s1).await.unwrap());
        assert!(storage.get_student_by_id(s1).await.unwrap().is_none());
        assert!(!storage.delete_student(s1).await.unwrap());
    }
}
