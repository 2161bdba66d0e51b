use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::subjects::{entities::Subject, responses::SubjectListResponse};
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

use super::SubjectService;

/// 调用者可见的课程列表。
///
/// 管理员看到全部课程；其他角色只看到通过课程-组分配
/// （teacher_id = 调用者）关联到自己的课程。
pub(crate) async fn visible_subjects(storage: &dyn Storage, caller: &User) -> Result<Vec<Subject>> {
    match caller.role {
        UserRole::Admin => storage.list_subjects().await,
        _ => storage.list_subjects_by_teacher(caller.id).await,
    }
}

pub async fn list_subjects(
    service: &SubjectService,
    req: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    let caller = match RequireJWT::extract_user(req) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user",
            )));
        }
    };

    match visible_subjects(storage.as_ref(), &caller).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectListResponse { items },
            "Subjects retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list subjects: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::discipline_groups::requests::CreateDisciplineGroupRequest;
    use crate::models::groups::requests::CreateGroupRequest;
    use crate::models::subjects::{entities::LessonType, requests::CreateSubjectRequest};
    use crate::models::users::requests::CreateUserRequest;
    use crate::storage::mock::MockStorage;

    async fn user(storage: &MockStorage, username: &str, role: UserRole) -> User {
        storage
            .create_user(CreateUserRequest {
                username: username.to_string(),
                password: "hash".to_string(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                role,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_visibility_scoped_by_assignments() {
        let storage = MockStorage::new();
        let admin = user(&storage, "admin", UserRole::Admin).await;
        let teacher = user(&storage, "teacher", UserRole::Teacher).await;

        let group = storage
            .create_group(CreateGroupRequest {
                name: "SE-301".to_string(),
            })
            .await
            .unwrap();
        let mut subject_ids = Vec::new();
        for name in ["Compilers", "Operating Systems"] {
            let subject = storage
                .create_subject(CreateSubjectRequest {
                    name: name.to_string(),
                    short_name: name[..2].to_string(),
                    description: None,
                    credits: None,
                    lesson_types: vec![LessonType::Lecture],
                })
                .await
                .unwrap();
            subject_ids.push(subject.id);
        }

        // teacher 只分配到第一门课
        storage
            .create_discipline_group(CreateDisciplineGroupRequest {
                subject_id: subject_ids[0],
                group_id: group.id,
                teacher_id: Some(teacher.id),
                semester: 1,
                year: 2026,
            })
            .await
            .unwrap();

        let all = visible_subjects(&storage, &admin).await.unwrap();
        assert_eq!(all.len(), 2);

        let scoped = visible_subjects(&storage, &teacher).await.unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].id, subject_ids[0]);
    }
}
