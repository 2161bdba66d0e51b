use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::groups::{entities::Group, responses::GroupListResponse};
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

use super::GroupService;

/// 调用者可见的组列表。
///
/// 可见性由显式传入的调用者决定：管理员看到全部组；
/// 其他角色只看到通过课程-组分配（teacher_id = 调用者）关联到自己的组。
pub(crate) async fn visible_groups(storage: &dyn Storage, caller: &User) -> Result<Vec<Group>> {
    match caller.role {
        UserRole::Admin => storage.list_groups().await,
        _ => storage.list_groups_by_teacher(caller.id).await,
    }
}

pub async fn list_groups(service: &GroupService, req: &HttpRequest) -> ActixResult<HttpResponse> {
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

    match visible_groups(storage.as_ref(), &caller).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GroupListResponse { items },
            "Groups retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list groups: {e}"),
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

    async fn setup() -> (MockStorage, User, User, i64, i64) {
        let storage = MockStorage::new();
        let admin = user(&storage, "admin", UserRole::Admin).await;
        let teacher = user(&storage, "teacher", UserRole::Teacher).await;

        let g1 = storage
            .create_group(CreateGroupRequest {
                name: "PI-101".to_string(),
            })
            .await
            .unwrap()
            .id;
        let g2 = storage
            .create_group(CreateGroupRequest {
                name: "PI-102".to_string(),
            })
            .await
            .unwrap()
            .id;
        let subject = storage
            .create_subject(CreateSubjectRequest {
                name: "Databases".to_string(),
                short_name: "DB".to_string(),
                description: None,
                credits: Some(5),
                lesson_types: vec![LessonType::Lecture],
            })
            .await
            .unwrap();

        // teacher 只分配到 g1
        storage
            .create_discipline_group(CreateDisciplineGroupRequest {
                subject_id: subject.id,
                group_id: g1,
                teacher_id: Some(teacher.id),
                semester: 1,
                year: 2026,
            })
            .await
            .unwrap();

        (storage, admin, teacher, g1, g2)
    }

    #[tokio::test]
    async fn test_admin_sees_all_groups() {
        let (storage, admin, _, g1, g2) = setup().await;
        let groups = visible_groups(&storage, &admin).await.unwrap();
        assert_eq!(groups.iter().map(|g| g.id).collect::<Vec<_>>(), vec![g1, g2]);
    }

    #[tokio::test]
    async fn test_teacher_sees_only_assigned_groups() {
        let (storage, _, teacher, g1, _) = setup().await;
        let groups = visible_groups(&storage, &teacher).await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, g1);
    }

    #[tokio::test]
    async fn test_student_role_uses_assignment_scope_too() {
        let (storage, _, _, _, _) = setup().await;
        let student = user(&storage, "student", UserRole::Student).await;
        // 学生没有任何分配，可见列表为空
        let groups = visible_groups(&storage, &student).await.unwrap();
        assert!(groups.is_empty());
    }
}
