use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::attendance::{
    entities::{Attendance, AttendanceStatus},
    requests::AttendanceQuery,
    responses::AttendanceStatistics,
};
use crate::models::{ApiResponse, ErrorCode};

use super::AttendanceService;

/// 汇总某学生的出勤统计。没有记录时出勤率为 0。
pub(crate) fn compute_statistics(student_id: i64, records: &[Attendance]) -> AttendanceStatistics {
    let total_classes = records.len() as i64;
    let present_classes = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .count() as i64;
    let attendance_percentage = if total_classes == 0 {
        0.0
    } else {
        present_classes as f64 / total_classes as f64 * 100.0
    };
    AttendanceStatistics {
        student_id,
        total_classes,
        present_classes,
        attendance_percentage,
    }
}

pub async fn get_student_statistics(
    service: &AttendanceService,
    req: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

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

    let query = AttendanceQuery {
        student_id: Some(student_id),
        subject_id: None,
    };
    match storage.list_attendance(query).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            compute_statistics(student_id, &records),
            "Attendance statistics retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to compute attendance statistics: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(status: AttendanceStatus) -> Attendance {
        Attendance {
            id: 0,
            student_id: 1,
            subject_id: 2,
            status,
            date: Utc::now().date_naive(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_records_means_zero_percentage() {
        let stats = compute_statistics(1, &[]);
        assert_eq!(stats.total_classes, 0);
        assert_eq!(stats.present_classes, 0);
        assert_eq!(stats.attendance_percentage, 0.0);
    }

    #[test]
    fn test_only_present_counts() {
        let records = vec![
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Absent),
            record(AttendanceStatus::Late),
            record(AttendanceStatus::Present),
        ];
        let stats = compute_statistics(1, &records);
        assert_eq!(stats.total_classes, 4);
        assert_eq!(stats.present_classes, 2);
        assert!((stats.attendance_percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_excused_is_not_present() {
        let records = vec![record(AttendanceStatus::Excused)];
        let stats = compute_statistics(7, &records);
        assert_eq!(stats.present_classes, 0);
        assert_eq!(stats.attendance_percentage, 0.0);
    }
}
