use serde::{Deserialize, Serialize};

use crate::models::subjects::entities::LessonType;

// 成绩类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradeType {
    Current, // 平时成绩
    Midterm, // 期中
    Final,   // 期末
    Exam,    // 考试
}

impl std::fmt::Display for GradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeType::Current => write!(f, "current"),
            GradeType::Midterm => write!(f, "midterm"),
            GradeType::Final => write!(f, "final"),
            GradeType::Exam => write!(f, "exam"),
        }
    }
}

impl std::str::FromStr for GradeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(GradeType::Current),
            "midterm" => Ok(GradeType::Midterm),
            "final" => Ok(GradeType::Final),
            "exam" => Ok(GradeType::Exam),
            _ => Err(format!("Invalid grade type: {s}")),
        }
    }
}

// 成绩实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    // 打分教师
    pub teacher_id: Option<i64>,
    pub grade_type: GradeType,
    pub lesson_type: Option<LessonType>,
    // 分值，1 到 10
    pub value: i32,
    pub date: chrono::NaiveDate,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
