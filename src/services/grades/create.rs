use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AcadSysError;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

use super::GradeService;

/// 成绩输入校验失败的原因，HTTP 层据此选择状态码与错误码
#[derive(Debug)]
pub(crate) enum GradeInputError {
    Validation(String),
    StudentNotFound(i64),
    SubjectNotFound(i64),
    TeacherNotFound(i64),
    Storage(AcadSysError),
}

impl From<AcadSysError> for GradeInputError {
    fn from(e: AcadSysError) -> Self {
        GradeInputError::Storage(e)
    }
}

/// 成绩录入校验。
///
/// 校验顺序固定：分值范围 → 学生 → 课程 → 教师（若指定）。
/// 引用缺失的错误信息点名缺失的 ID。
pub(crate) async fn validate_grade_input(
    storage: &dyn Storage,
    data: &CreateGradeRequest,
) -> Result<(), GradeInputError> {
    if !(1..=10).contains(&data.value) {
        return Err(GradeInputError::Validation(
            "Grade value must be between 1 and 10".to_string(),
        ));
    }

    if storage.get_student_by_id(data.student_id).await?.is_none() {
        return Err(GradeInputError::StudentNotFound(data.student_id));
    }
    if !storage.subject_exists(data.subject_id).await? {
        return Err(GradeInputError::SubjectNotFound(data.subject_id));
    }
    if let Some(teacher_id) = data.teacher_id
        && storage.get_user_by_id(teacher_id).await?.is_none()
    {
        return Err(GradeInputError::TeacherNotFound(teacher_id));
    }

    Ok(())
}

/// 校验失败统一转为 HTTP 响应
pub(crate) fn input_error_response(err: GradeInputError) -> HttpResponse {
    match err {
        GradeInputError::Validation(msg) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                msg,
            ))
        }
        GradeInputError::StudentNotFound(id) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("Student not found: {id}"),
            ))
        }
        GradeInputError::SubjectNotFound(id) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                format!("Subject not found: {id}"),
            ))
        }
        GradeInputError::TeacherNotFound(id) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                format!("Teacher not found: {id}"),
            ))
        }
        GradeInputError::Storage(e) => {
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to validate grade: {e}"),
            ))
        }
    }
}

pub async fn create_grade(
    service: &GradeService,
    req: &HttpRequest,
    grade_data: CreateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if let Err(err) = validate_grade_input(storage.as_ref(), &grade_data).await {
        return Ok(input_error_response(err));
    }

    match storage.create_grade(grade_data).await {
        Ok(grade) => {
            tracing::info!("Grade {} recorded for student {}", grade.id, grade.student_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(grade, "Grade created successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create grade: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grades::entities::GradeType;
    use crate::models::groups::requests::CreateGroupRequest;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::subjects::{entities::LessonType, requests::CreateSubjectRequest};
    use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
    use crate::storage::mock::MockStorage;

    async fn setup() -> (MockStorage, i64, i64, i64) {
        let storage = MockStorage::new();
        let teacher = storage
            .create_user(CreateUserRequest {
                username: "grader".to_string(),
                password: "hash".to_string(),
                first_name: "Test".to_string(),
                last_name: "Teacher".to_string(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap();
        let group = storage
            .create_group(CreateGroupRequest {
                name: "GR-1".to_string(),
            })
            .await
            .unwrap();
        let student = storage
            .create_student(CreateStudentRequest {
                first_name: "Anna".to_string(),
                last_name: "Petrova".to_string(),
                middle_name: None,
                date_born: None,
                group_id: Some(group.id),
            })
            .await
            .unwrap();
        let subject = storage
            .create_subject(CreateSubjectRequest {
                name: "Algebra".to_string(),
                short_name: "ALG".to_string(),
                description: None,
                credits: None,
                lesson_types: vec![LessonType::Lecture],
            })
            .await
            .unwrap();
        (storage, student.id, subject.id, teacher.id)
    }

    fn data(student_id: i64, subject_id: i64, value: i32) -> CreateGradeRequest {
        CreateGradeRequest {
            student_id,
            subject_id,
            teacher_id: None,
            grade_type: GradeType::Current,
            lesson_type: None,
            value,
            date: None,
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_valid_input_accepted() {
        let (storage, student_id, subject_id, _) = setup().await;
        let input = data(student_id, subject_id, 8);
        assert!(validate_grade_input(&storage, &input).await.is_ok());
    }

    #[tokio::test]
    async fn test_value_range_checked_first() {
        let (storage, _, _, _) = setup().await;
        // 学生/课程都缺失，但分值范围错误优先报出
        for value in [0, 11, -3] {
            let input = data(999, 998, value);
            match validate_grade_input(&storage, &input).await {
                Err(GradeInputError::Validation(msg)) => {
                    assert!(msg.contains("between 1 and 10"));
                }
                other => panic!("expected value validation error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_boundary_values_accepted() {
        let (storage, student_id, subject_id, _) = setup().await;
        for value in [1, 10] {
            let input = data(student_id, subject_id, value);
            assert!(validate_grade_input(&storage, &input).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_missing_refs_named_in_error() {
        let (storage, student_id, subject_id, _) = setup().await;

        let input = data(666, subject_id, 5);
        assert!(matches!(
            validate_grade_input(&storage, &input).await,
            Err(GradeInputError::StudentNotFound(666))
        ));

        let input = data(student_id, 555, 5);
        assert!(matches!(
            validate_grade_input(&storage, &input).await,
            Err(GradeInputError::SubjectNotFound(555))
        ));

        let mut input = data(student_id, subject_id, 5);
        input.teacher_id = Some(444);
        assert!(matches!(
            validate_grade_input(&storage, &input).await,
            Err(GradeInputError::TeacherNotFound(444))
        ));
    }

    #[tokio::test]
    async fn test_grade_date_defaults_to_today() {
        let (storage, student_id, subject_id, _) = setup().await;
        let grade = storage
            .create_grade(data(student_id, subject_id, 7))
            .await
            .unwrap();
        assert_eq!(grade.date, chrono::Utc::now().date_naive());
    }
}
