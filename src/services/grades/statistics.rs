use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::grades::{
    entities::Grade,
    requests::GradeQuery,
    responses::GradeStatistics,
};
use crate::models::{ApiResponse, ErrorCode};

use super::GradeService;

/// 汇总某学生的成绩统计。没有成绩时平均分为空而不是 0。
pub(crate) fn compute_statistics(student_id: i64, grades: &[Grade]) -> GradeStatistics {
    let total_grades = grades.len() as i64;
    let average_grade = if grades.is_empty() {
        None
    } else {
        let sum: i64 = grades.iter().map(|g| i64::from(g.value)).sum();
        Some(sum as f64 / total_grades as f64)
    };
    GradeStatistics {
        student_id,
        total_grades,
        average_grade,
    }
}

pub async fn get_student_statistics(
    service: &GradeService,
    req: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    // 学生必须存在，空成绩单照常返回统计
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("Student not found: {student_id}"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check student: {e}"),
                )),
            );
        }
    }

    let query = GradeQuery {
        student_id: Some(student_id),
        subject_id: None,
    };
    match storage.list_grades(query).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            compute_statistics(student_id, &grades),
            "Grade statistics retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to compute grade statistics: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grades::entities::GradeType;
    use chrono::Utc;

    fn grade(value: i32) -> Grade {
        Grade {
            id: 0,
            student_id: 1,
            subject_id: 2,
            teacher_id: None,
            grade_type: GradeType::Current,
            lesson_type: None,
            value,
            date: Utc::now().date_naive(),
            comment: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_grades_have_no_average() {
        let stats = compute_statistics(1, &[]);
        assert_eq!(stats.total_grades, 0);
        assert_eq!(stats.average_grade, None);
    }

    #[test]
    fn test_average_over_all_grades() {
        let grades = vec![grade(7), grade(8), grade(10)];
        let stats = compute_statistics(1, &grades);
        assert_eq!(stats.total_grades, 3);
        let average = stats.average_grade.unwrap();
        assert!((average - 25.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_grade_average() {
        let stats = compute_statistics(5, &[grade(9)]);
        assert_eq!(stats.student_id, 5);
        assert_eq!(stats.average_grade, Some(9.0));
    }
}
