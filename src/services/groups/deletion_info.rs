use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::models::groups::responses::GroupDeletionInfo;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

use super::GroupService;

/// 汇总删除该组会带走的行数。只读，不改变任何状态，可重复调用。
pub(crate) async fn collect_deletion_info(
    storage: &dyn Storage,
    group_id: i64,
) -> Result<Option<GroupDeletionInfo>> {
    let Some(group) = storage.get_group_by_id(group_id).await? else {
        return Ok(None);
    };

    let schedule_items_count = storage.count_schedule_items_by_group(group_id).await? as i64;
    let students_count = storage.count_students_by_group(group_id).await? as i64;
    let discipline_groups_count = storage.count_discipline_groups_by_group(group_id).await? as i64;

    Ok(Some(GroupDeletionInfo {
        group_id: group.id,
        group_name: group.name,
        schedule_items_count,
        students_count,
        discipline_groups_count,
        can_delete: true,
    }))
}

pub async fn get_deletion_info(
    service: &GroupService,
    req: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match collect_deletion_info(storage.as_ref(), group_id).await {
        Ok(Some(info)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            info,
            "Deletion info retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
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
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::subjects::{entities::LessonType, requests::CreateSubjectRequest};
    use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
    use crate::storage::mock::MockStorage;

    async fn populated_storage() -> (MockStorage, i64) {
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
                name: "IS-201".to_string(),
            })
            .await
            .unwrap();
        let subject = storage
            .create_subject(CreateSubjectRequest {
                name: "Networks".to_string(),
                short_name: "NET".to_string(),
                description: None,
                credits: None,
                lesson_types: vec![LessonType::Lecture],
            })
            .await
            .unwrap();

        for _ in 0..2 {
            storage
                .create_student(CreateStudentRequest {
                    first_name: "A".to_string(),
                    last_name: "B".to_string(),
                    middle_name: None,
                    date_born: None,
                    group_id: Some(group.id),
                })
                .await
                .unwrap();
        }
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
        storage
            .create_schedule_item(&ScheduleItemData {
                date: "2026-09-01".parse().unwrap(),
                start_time: "09:00:00".parse().unwrap(),
                end_time: "10:30:00".parse().unwrap(),
                group_ids: vec![group.id],
                subject_id: subject.id,
                teacher_id: teacher.id,
                lesson_type: LessonType::Lecture,
            })
            .await
            .unwrap();

        (storage, group.id)
    }

    #[tokio::test]
    async fn test_deletion_info_counts() {
        let (storage, group_id) = populated_storage().await;
        let info = collect_deletion_info(&storage, group_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(info.group_id, group_id);
        assert_eq!(info.schedule_items_count, 1);
        assert_eq!(info.students_count, 2);
        assert_eq!(info.discipline_groups_count, 1);
        assert!(info.can_delete);
    }

    #[tokio::test]
    async fn test_deletion_info_is_read_only_and_repeatable() {
        let (storage, group_id) = populated_storage().await;
        let first = collect_deletion_info(&storage, group_id).await.unwrap();
        let second = collect_deletion_info(&storage, group_id).await.unwrap();
        assert_eq!(first, second);
        // 组仍然存在
        assert!(storage.get_group_by_id(group_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_deletion_info_missing_group() {
        let storage = MockStorage::new();
        assert!(collect_deletion_info(&storage, 42).await.unwrap().is_none());
    }
}
