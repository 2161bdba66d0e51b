use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AcadSysError;
use crate::models::schedule::requests::ScheduleItemData;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

use super::ScheduleService;

/// 课程安排输入校验失败的原因，HTTP 层据此选择状态码与错误码
#[derive(Debug)]
pub(crate) enum ScheduleInputError {
    Validation(String),
    GroupNotFound(i64),
    SubjectNotFound(i64),
    TeacherNotFound(i64),
    Storage(AcadSysError),
}

impl From<AcadSysError> for ScheduleInputError {
    fn from(e: AcadSysError) -> Self {
        ScheduleInputError::Storage(e)
    }
}

/// 课程安排输入校验。
///
/// 校验顺序固定：时间区间 → 组列表非空 → 每个组（按输入顺序）→ 课程 → 教师。
/// 引用缺失的错误信息点名缺失的 ID，方便客户端直接展示。
pub(crate) async fn validate_schedule_input(
    storage: &dyn Storage,
    data: &ScheduleItemData,
) -> Result<(), ScheduleInputError> {
    if data.end_time <= data.start_time {
        return Err(ScheduleInputError::Validation(
            "End time must be after start time".to_string(),
        ));
    }
    if data.group_ids.is_empty() {
        return Err(ScheduleInputError::Validation(
            "At least one group is required".to_string(),
        ));
    }

    for &group_id in &data.group_ids {
        if !storage.group_exists(group_id).await? {
            return Err(ScheduleInputError::GroupNotFound(group_id));
        }
    }
    if !storage.subject_exists(data.subject_id).await? {
        return Err(ScheduleInputError::SubjectNotFound(data.subject_id));
    }
    if storage.get_user_by_id(data.teacher_id).await?.is_none() {
        return Err(ScheduleInputError::TeacherNotFound(data.teacher_id));
    }

    Ok(())
}

/// 校验失败统一转为 HTTP 响应
pub(crate) fn input_error_response(err: ScheduleInputError) -> HttpResponse {
    match err {
        ScheduleInputError::Validation(msg) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                msg,
            ))
        }
        ScheduleInputError::GroupNotFound(id) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GroupNotFound,
                format!("Group not found: {id}"),
            ))
        }
        ScheduleInputError::SubjectNotFound(id) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                format!("Subject not found: {id}"),
            ))
        }
        ScheduleInputError::TeacherNotFound(id) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                format!("Teacher not found: {id}"),
            ))
        }
        ScheduleInputError::Storage(e) => {
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to validate schedule item: {e}"),
            ))
        }
    }
}

pub async fn create_schedule_item(
    service: &ScheduleService,
    req: &HttpRequest,
    data: ScheduleItemData,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if let Err(err) = validate_schedule_input(storage.as_ref(), &data).await {
        return Ok(input_error_response(err));
    }

    match storage.create_schedule_item(&data).await {
        Ok(item) => {
            tracing::info!("Schedule item {} created for {} group(s)", item.id, item.group_ids.len());
            Ok(HttpResponse::Created().json(ApiResponse::success(
                item,
                "Schedule item created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create schedule item: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::groups::requests::CreateGroupRequest;
    use crate::models::subjects::{entities::LessonType, requests::CreateSubjectRequest};
    use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
    use crate::storage::mock::MockStorage;

    async fn setup() -> (MockStorage, i64, i64, i64) {
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
                name: "SCH-1".to_string(),
            })
            .await
            .unwrap();
        let subject = storage
            .create_subject(CreateSubjectRequest {
                name: "Geometry".to_string(),
                short_name: "GEO".to_string(),
                description: None,
                credits: None,
                lesson_types: vec![LessonType::Lecture],
            })
            .await
            .unwrap();
        (storage, group.id, subject.id, teacher.id)
    }

    fn data(group_ids: Vec<i64>, subject_id: i64, teacher_id: i64) -> ScheduleItemData {
        ScheduleItemData {
            date: "2026-09-03".parse().unwrap(),
            start_time: "09:00:00".parse().unwrap(),
            end_time: "10:30:00".parse().unwrap(),
            group_ids,
            subject_id,
            teacher_id,
            lesson_type: LessonType::Lecture,
        }
    }

    #[tokio::test]
    async fn test_valid_input_accepted() {
        let (storage, group_id, subject_id, teacher_id) = setup().await;
        let input = data(vec![group_id], subject_id, teacher_id);
        assert!(validate_schedule_input(&storage, &input).await.is_ok());
    }

    #[tokio::test]
    async fn test_time_range_checked_first() {
        let (storage, _, _, _) = setup().await;
        // 组/课程/教师全部缺失，但时间区间错误优先报出
        let mut input = data(vec![999], 998, 997);
        input.end_time = input.start_time;
        match validate_schedule_input(&storage, &input).await {
            Err(ScheduleInputError::Validation(msg)) => {
                assert!(msg.contains("End time"));
            }
            other => panic!("expected time validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_groups_rejected() {
        let (storage, _, subject_id, teacher_id) = setup().await;
        let input = data(vec![], subject_id, teacher_id);
        assert!(matches!(
            validate_schedule_input(&storage, &input).await,
            Err(ScheduleInputError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_group_named_in_error() {
        let (storage, group_id, subject_id, teacher_id) = setup().await;
        let input = data(vec![group_id, 777], subject_id, teacher_id);
        assert!(matches!(
            validate_schedule_input(&storage, &input).await,
            Err(ScheduleInputError::GroupNotFound(777))
        ));
    }

    #[tokio::test]
    async fn test_missing_subject_and_teacher() {
        let (storage, group_id, subject_id, teacher_id) = setup().await;

        let input = data(vec![group_id], 555, teacher_id);
        assert!(matches!(
            validate_schedule_input(&storage, &input).await,
            Err(ScheduleInputError::SubjectNotFound(555))
        ));

        let input = data(vec![group_id], subject_id, 444);
        assert!(matches!(
            validate_schedule_input(&storage, &input).await,
            Err(ScheduleInputError::TeacherNotFound(444))
        ));
    }

    #[tokio::test]
    async fn test_groups_resolved_in_input_order() {
        let (storage, _, subject_id, teacher_id) = setup().await;
        // 两个组都缺失，报错点名第一个
        let input = data(vec![300, 301], subject_id, teacher_id);
        assert!(matches!(
            validate_schedule_input(&storage, &input).await,
            Err(ScheduleInputError::GroupNotFound(300))
        ));
    }
}
