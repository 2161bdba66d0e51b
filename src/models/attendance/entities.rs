use serde::{Deserialize, Serialize};

// 出勤状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present, // 出勤
    Absent,  // 缺勤
    Late,    // 迟到
    Excused, // 请假
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Absent => write!(f, "absent"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::Excused => write!(f, "excused"),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            "excused" => Ok(AttendanceStatus::Excused),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 出勤记录实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub status: AttendanceStatus,
    pub date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
