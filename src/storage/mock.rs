//! 测试用内存存储
//!
//! 服务层单元测试的 Storage 替身，数据保存在 Mutex 包裹的 Vec 中。
//! 级联语义与 SeaORM 实现保持一致（组/课程删除带动关联行）。

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::{AcadSysError, Result};
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

#[derive(Default)]
struct MockState {
    next_id: i64,
    users: Vec<User>,
    groups: Vec<Group>,
    subjects: Vec<Subject>,
    students: Vec<Student>,
    discipline_groups: Vec<DisciplineGroup>,
    schedule_items: Vec<ScheduleItem>,
    grades: Vec<Grade>,
    attendance: Vec<Attendance>,
}

#[derive(Default)]
pub struct MockStorage {
    state: Mutex<MockState>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MockState {
    fn alloc_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        let mut state = self.state.lock().unwrap();
        let id = state.alloc_id();
        let now = Utc::now();
        let user = User {
            id,
            username: user.username,
            password_hash: user.password,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.clone())
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        let mut state = self.state.lock().unwrap();
        let Some(user) = state.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(password_hash) = update.password {
            user.password_hash = password_hash;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        Ok(state.users.len() < before)
    }

    async fn count_users(&self) -> Result<u64> {
        let state = self.state.lock().unwrap();
        Ok(state.users.len() as u64)
    }

    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group> {
        let mut state = self.state.lock().unwrap();
        let id = state.alloc_id();
        let now = Utc::now();
        let group = Group {
            id,
            name: group.name,
            created_at: now,
            updated_at: now,
        };
        state.groups.push(group.clone());
        Ok(group)
    }

    async fn get_group_by_id(&self, id: i64) -> Result<Option<Group>> {
        let state = self.state.lock().unwrap();
        Ok(state.groups.iter().find(|g| g.id == id).cloned())
    }

    async fn get_group_by_name(&self, name: &str) -> Result<Option<Group>> {
        let state = self.state.lock().unwrap();
        Ok(state.groups.iter().find(|g| g.name == name).cloned())
    }

    async fn list_groups(&self) -> Result<Vec<Group>> {
        let state = self.state.lock().unwrap();
        let mut groups = state.groups.clone();
        groups.sort_by_key(|g| g.id);
        Ok(groups)
    }

    async fn list_groups_by_teacher(&self, teacher_id: i64) -> Result<Vec<Group>> {
        let state = self.state.lock().unwrap();
        let mut ids: Vec<i64> = state
            .discipline_groups
            .iter()
            .filter(|dg| dg.teacher_id == Some(teacher_id))
            .map(|dg| dg.group_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(state
            .groups
            .iter()
            .filter(|g| ids.contains(&g.id))
            .cloned()
            .collect())
    }

    async fn update_group(&self, id: i64, update: UpdateGroupRequest) -> Result<Option<Group>> {
        let mut state = self.state.lock().unwrap();
        let Some(group) = state.groups.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            group.name = name;
        }
        group.updated_at = Utc::now();
        Ok(Some(group.clone()))
    }

    async fn group_exists(&self, id: i64) -> Result<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.groups.iter().any(|g| g.id == id))
    }

    async fn delete_group_with_relations(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        if !state.groups.iter().any(|g| g.id == id) {
            return Ok(false);
        }
        state
            .schedule_items
            .retain(|item| !item.group_ids.contains(&id));
        state.discipline_groups.retain(|dg| dg.group_id != id);
        let student_ids: Vec<i64> = state
            .students
            .iter()
            .filter(|s| s.group_id == Some(id))
            .map(|s| s.id)
            .collect();
        state.grades.retain(|g| !student_ids.contains(&g.student_id));
        state
            .attendance
            .retain(|a| !student_ids.contains(&a.student_id));
        state.students.retain(|s| s.group_id != Some(id));
        state.groups.retain(|g| g.id != id);
        Ok(true)
    }

    async fn count_schedule_items_by_group(&self, group_id: i64) -> Result<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .schedule_items
            .iter()
            .filter(|item| item.group_ids.contains(&group_id))
            .count() as u64)
    }

    async fn count_students_by_group(&self, group_id: i64) -> Result<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .students
            .iter()
            .filter(|s| s.group_id == Some(group_id))
            .count() as u64)
    }

    async fn count_discipline_groups_by_group(&self, group_id: i64) -> Result<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .discipline_groups
            .iter()
            .filter(|dg| dg.group_id == group_id)
            .count() as u64)
    }

    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        let mut state = self.state.lock().unwrap();
        let id = state.alloc_id();
        let now = Utc::now();
        let subject = Subject {
            id,
            name: subject.name,
            short_name: subject.short_name,
            description: subject.description,
            credits: subject.credits,
            lesson_types: subject.lesson_types,
            created_at: now,
            updated_at: now,
        };
        state.subjects.push(subject.clone());
        Ok(subject)
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        let state = self.state.lock().unwrap();
        Ok(state.subjects.iter().find(|s| s.id == id).cloned())
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        let state = self.state.lock().unwrap();
        let mut subjects = state.subjects.clone();
        subjects.sort_by_key(|s| s.id);
        Ok(subjects)
    }

    async fn list_subjects_by_teacher(&self, teacher_id: i64) -> Result<Vec<Subject>> {
        let state = self.state.lock().unwrap();
        let mut ids: Vec<i64> = state
            .discipline_groups
            .iter()
            .filter(|dg| dg.teacher_id == Some(teacher_id))
            .map(|dg| dg.subject_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(state
            .subjects
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let mut state = self.state.lock().unwrap();
        let Some(subject) = state.subjects.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            subject.name = name;
        }
        if let Some(short_name) = update.short_name {
            subject.short_name = short_name;
        }
        if let Some(description) = update.description {
            subject.description = Some(description);
        }
        if let Some(credits) = update.credits {
            subject.credits = Some(credits);
        }
        if let Some(lesson_types) = update.lesson_types {
            subject.lesson_types = lesson_types;
        }
        subject.updated_at = Utc::now();
        Ok(Some(subject.clone()))
    }

    async fn subject_exists(&self, id: i64) -> Result<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.subjects.iter().any(|s| s.id == id))
    }

    async fn delete_subject_with_relations(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        if !state.subjects.iter().any(|s| s.id == id) {
            return Ok(false);
        }
        // 与 SeaORM 实现一致：成绩/出勤仍引用该课程时外键约束会使删除失败
        if state.grades.iter().any(|g| g.subject_id == id)
            || state.attendance.iter().any(|a| a.subject_id == id)
        {
            return Err(AcadSysError::database_operation(format!(
                "FOREIGN KEY constraint failed: subject {id} is referenced"
            )));
        }
        state.schedule_items.retain(|item| item.subject_id != id);
        state.discipline_groups.retain(|dg| dg.subject_id != id);
        state.subjects.retain(|s| s.id != id);
        Ok(true)
    }

    async fn count_schedule_items_by_subject(&self, subject_id: i64) -> Result<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .schedule_items
            .iter()
            .filter(|item| item.subject_id == subject_id)
            .count() as u64)
    }

    async fn count_discipline_groups_by_subject(&self, subject_id: i64) -> Result<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .discipline_groups
            .iter()
            .filter(|dg| dg.subject_id == subject_id)
            .count() as u64)
    }

    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        let mut state = self.state.lock().unwrap();
        let id = state.alloc_id();
        let now = Utc::now();
        let student = Student {
            id,
            first_name: student.first_name,
            last_name: student.last_name,
            middle_name: student.middle_name,
            date_born: student.date_born,
            group_id: student.group_id,
            created_at: now,
            updated_at: now,
        };
        state.students.push(student.clone());
        Ok(student)
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        let state = self.state.lock().unwrap();
        Ok(state.students.iter().find(|s| s.id == id).cloned())
    }

    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        let state = self.state.lock().unwrap();
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        Ok(state
            .students
            .iter()
            .filter(|s| query.group_id.is_none() || s.group_id == query.group_id)
            .filter(|s| {
                search.as_deref().is_none_or(|needle| {
                    s.last_name.to_lowercase().contains(needle)
                        || s.first_name.to_lowercase().contains(needle)
                })
            })
            .cloned()
            .collect())
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let mut state = self.state.lock().unwrap();
        let Some(student) = state.students.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(first_name) = update.first_name {
            student.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            student.last_name = last_name;
        }
        if let Some(middle_name) = update.middle_name {
            student.middle_name = Some(middle_name);
        }
        if let Some(date_born) = update.date_born {
            student.date_born = Some(date_born);
        }
        if let Some(group_id) = update.group_id {
            student.group_id = Some(group_id);
        }
        student.updated_at = Utc::now();
        Ok(Some(student.clone()))
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.students.len();
        state.grades.retain(|g| g.student_id != id);
        state.attendance.retain(|a| a.student_id != id);
        state.students.retain(|s| s.id != id);
        Ok(state.students.len() < before)
    }

    async fn create_discipline_group(
        &self,
        assignment: CreateDisciplineGroupRequest,
    ) -> Result<DisciplineGroup> {
        let mut state = self.state.lock().unwrap();
        let id = state.alloc_id();
        let assignment = DisciplineGroup {
            id,
            subject_id: assignment.subject_id,
            group_id: assignment.group_id,
            teacher_id: assignment.teacher_id,
            semester: assignment.semester,
            year: assignment.year,
            created_at: Utc::now(),
        };
        state.discipline_groups.push(assignment.clone());
        Ok(assignment)
    }

    async fn get_discipline_group_by_id(&self, id: i64) -> Result<Option<DisciplineGroup>> {
        let state = self.state.lock().unwrap();
        Ok(state.discipline_groups.iter().find(|dg| dg.id == id).cloned())
    }

    async fn list_discipline_groups(
        &self,
        query: DisciplineGroupQuery,
    ) -> Result<Vec<DisciplineGroup>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .discipline_groups
            .iter()
            .filter(|dg| {
                (query.group_id.is_none() || Some(dg.group_id) == query.group_id)
                    && (query.subject_id.is_none() || Some(dg.subject_id) == query.subject_id)
                    && (query.teacher_id.is_none() || dg.teacher_id == query.teacher_id)
            })
            .cloned()
            .collect())
    }

    async fn update_discipline_group(
        &self,
        id: i64,
        update: UpdateDisciplineGroupRequest,
    ) -> Result<Option<DisciplineGroup>> {
        let mut state = self.state.lock().unwrap();
        let Some(assignment) = state.discipline_groups.iter_mut().find(|dg| dg.id == id) else {
            return Ok(None);
        };
        if let Some(teacher_id) = update.teacher_id {
            assignment.teacher_id = Some(teacher_id);
        }
        if let Some(semester) = update.semester {
            assignment.semester = semester;
        }
        if let Some(year) = update.year {
            assignment.year = year;
        }
        Ok(Some(assignment.clone()))
    }

    async fn delete_discipline_group(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.discipline_groups.len();
        state.discipline_groups.retain(|dg| dg.id != id);
        Ok(state.discipline_groups.len() < before)
    }

    async fn create_schedule_item(&self, data: &ScheduleItemData) -> Result<ScheduleItem> {
        let mut state = self.state.lock().unwrap();
        let id = state.alloc_id();
        let now = Utc::now();
        let item = ScheduleItem {
            id,
            date: data.date,
            start_time: data.start_time,
            end_time: data.end_time,
            group_ids: data.group_ids.clone(),
            subject_id: data.subject_id,
            teacher_id: data.teacher_id,
            lesson_type: data.lesson_type,
            created_at: now,
            updated_at: now,
        };
        state.schedule_items.push(item.clone());
        Ok(item)
    }

    async fn get_schedule_item_by_id(&self, id: i64) -> Result<Option<ScheduleItem>> {
        let state = self.state.lock().unwrap();
        Ok(state.schedule_items.iter().find(|item| item.id == id).cloned())
    }

    async fn list_schedule_items(&self, query: ScheduleQuery) -> Result<Vec<ScheduleItem>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .schedule_items
            .iter()
            .filter(|item| {
                (query.date.is_none() || Some(item.date) == query.date)
                    && query
                        .group_id
                        .is_none_or(|g| item.group_ids.contains(&g))
            })
            .cloned()
            .collect())
    }

    async fn update_schedule_item(
        &self,
        id: i64,
        data: &ScheduleItemData,
    ) -> Result<Option<ScheduleItem>> {
        let mut state = self.state.lock().unwrap();
        let Some(item) = state.schedule_items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        item.date = data.date;
        item.start_time = data.start_time;
        item.end_time = data.end_time;
        item.group_ids = data.group_ids.clone();
        item.subject_id = data.subject_id;
        item.teacher_id = data.teacher_id;
        item.lesson_type = data.lesson_type;
        item.updated_at = Utc::now();
        Ok(Some(item.clone()))
    }

    async fn delete_schedule_item(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.schedule_items.len();
        state.schedule_items.retain(|item| item.id != id);
        Ok(state.schedule_items.len() < before)
    }

    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade> {
        let mut state = self.state.lock().unwrap();
        let id = state.alloc_id();
        let now = Utc::now();
        let grade = Grade {
            id,
            student_id: grade.student_id,
            subject_id: grade.subject_id,
            teacher_id: grade.teacher_id,
            grade_type: grade.grade_type,
            lesson_type: grade.lesson_type,
            value: grade.value,
            date: grade.date.unwrap_or_else(|| now.date_naive()),
            comment: grade.comment,
            created_at: now,
        };
        state.grades.push(grade.clone());
        Ok(grade)
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        let state = self.state.lock().unwrap();
        Ok(state.grades.iter().find(|g| g.id == id).cloned())
    }

    async fn list_grades(&self, query: GradeQuery) -> Result<Vec<Grade>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .grades
            .iter()
            .filter(|g| {
                (query.student_id.is_none() || Some(g.student_id) == query.student_id)
                    && (query.subject_id.is_none() || Some(g.subject_id) == query.subject_id)
            })
            .cloned()
            .collect())
    }

    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>> {
        let mut state = self.state.lock().unwrap();
        let Some(grade) = state.grades.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };
        if let Some(grade_type) = update.grade_type {
            grade.grade_type = grade_type;
        }
        if let Some(lesson_type) = update.lesson_type {
            grade.lesson_type = Some(lesson_type);
        }
        if let Some(value) = update.value {
            grade.value = value;
        }
        if let Some(date) = update.date {
            grade.date = date;
        }
        if let Some(comment) = update.comment {
            grade.comment = Some(comment);
        }
        Ok(Some(grade.clone()))
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.grades.len();
        state.grades.retain(|g| g.id != id);
        Ok(state.grades.len() < before)
    }

    async fn create_attendance(&self, record: CreateAttendanceRequest) -> Result<Attendance> {
        let mut state = self.state.lock().unwrap();
        let id = state.alloc_id();
        let now = Utc::now();
        let record = Attendance {
            id,
            student_id: record.student_id,
            subject_id: record.subject_id,
            status: record.status,
            date: record.date.unwrap_or_else(|| now.date_naive()),
            created_at: now,
        };
        state.attendance.push(record.clone());
        Ok(record)
    }

    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<Attendance>> {
        let state = self.state.lock().unwrap();
        Ok(state.attendance.iter().find(|a| a.id == id).cloned())
    }

    async fn list_attendance(&self, query: AttendanceQuery) -> Result<Vec<Attendance>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .attendance
            .iter()
            .filter(|a| {
                (query.student_id.is_none() || Some(a.student_id) == query.student_id)
                    && (query.subject_id.is_none() || Some(a.subject_id) == query.subject_id)
            })
            .cloned()
            .collect())
    }

    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>> {
        let mut state = self.state.lock().unwrap();
        let Some(record) = state.attendance.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        if let Some(status) = update.status {
            record.status = status;
        }
        if let Some(date) = update.date {
            record.date = date;
        }
        Ok(Some(record.clone()))
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.attendance.len();
        state.attendance.retain(|a| a.id != id);
        Ok(state.attendance.len() < before)
    }
}
