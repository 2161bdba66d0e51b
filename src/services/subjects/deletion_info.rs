use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::models::subjects::responses::SubjectDeletionInfo;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

use super::SubjectService;

/// 汇总删除该课程会带走的行数。只读，不改变任何状态，可重复调用。
pub(crate) async fn collect_deletion_info(
    storage: &dyn Storage,
    subject_id: i64,
) -> Result<Option<SubjectDeletionInfo>> {
    let Some(subject) = storage.get_subject_by_id(subject_id).await? else {
        return Ok(None);
    };

    let schedule_items_count = storage.count_schedule_items_by_subject(subject_id).await? as i64;
    let discipline_groups_count =
        storage.count_discipline_groups_by_subject(subject_id).await? as i64;

    Ok(Some(SubjectDeletionInfo {
        subject_id: subject.id,
        subject_name: subject.name,
        schedule_items_count,
        discipline_groups_count,
        can_delete: true,
    }))
}

pub async fn get_deletion_info(
    service: &SubjectService,
    req: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match collect_deletion_info(storage.as_ref(), subject_id).await {
        Ok(Some(info)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            info,
            "Deletion info retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to collect deletion info: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::discipline_groups::requests::CreateDisciplineGroupRequest;
    use crate::models::groups::requests::CreateGroupRequest;
    use crate::models::schedule::requests::ScheduleItemData;
    use crate::models::subjects::{entities::LessonType, requests::CreateSubjectRequest};
    use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
    use crate::storage::mock::MockStorage;

    #[tokio::test]
    async fn test_subject_deletion_info_counts() {
        let storage = MockStorage::new();
        let teacher = storage
            .create_user(CreateUserRequest {
                username: "teacher".to_string(),
                password: "hash".to_string(),
                first_name: "Test".to_string(),
                last_name: "Teacher".to_string(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap();
        let group = storage
            .create_group(CreateGroupRequest {
                name: "QA-101".to_string(),
            })
            .await
            .unwrap();
        let subject = storage
            .create_subject(CreateSubjectRequest {
                name: "Testing".to_string(),
                short_name: "QA".to_string(),
                description: None,
                credits: None,
                lesson_types: vec![LessonType::Practical],
            })
            .await
            .unwrap();

        storage
            .create_discipline_group(CreateDisciplineGroupRequest {
                subject_id: subject.id,
                group_id: group.id,
                teacher_id: Some(teacher.id),
                semester: 1,
                year: 2026,
            })
            .await
            .unwrap();
        for _ in 0..3 {
            storage
                .create_schedule_item(&ScheduleItemData {
                    date: "2026-09-07".parse().unwrap(),
                    start_time: "11:00:00".parse().unwrap(),
                    end_time: "12:30:00".parse().unwrap(),
                    group_ids: vec![group.id],
                    subject_id: subject.id,
                    teacher_id: teacher.id,
                    lesson_type: LessonType::Practical,
                })
                .await
                .unwrap();
        }

        let info = collect_deletion_info(&storage, subject.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(info.subject_name, "Testing");
        assert_eq!(info.schedule_items_count, 3);
        assert_eq!(info.discipline_groups_count, 1);
        assert!(info.can_delete);
    }

    #[tokio::test]
    async fn test_subject_deletion_info_missing() {
        let storage = MockStorage::new();
        assert!(collect_deletion_info(&storage, 7).await.unwrap().is_none());
    }
}
