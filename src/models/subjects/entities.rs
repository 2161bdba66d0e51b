use serde::{Deserialize, Serialize};

// 课型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LessonType {
    Lecture,   // 讲课
    Seminar,   // 研讨课
    Lab,       // 实验课
    Practical, // 实践课
}

impl std::fmt::Display for LessonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonType::Lecture => write!(f, "lecture"),
            LessonType::Seminar => write!(f, "seminar"),
            LessonType::Lab => write!(f, "lab"),
            LessonType::Practical => write!(f, "practical"),
        }
    }
}

impl std::str::FromStr for LessonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lecture" => Ok(LessonType::Lecture),
            "seminar" => Ok(LessonType::Seminar),
            "lab" => Ok(LessonType::Lab),
            "practical" => Ok(LessonType::Practical),
            _ => Err(format!("Invalid lesson type: {s}")),
        }
    }
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    // 课程ID
    pub id: i64,
    // 完整名称（唯一）
    pub name: String,
    // 简称
    pub short_name: String,
    // 描述
    pub description: Option<String>,
    // 学分
    pub credits: Option<i32>,
    // 开设的课型
    pub lesson_types: Vec<LessonType>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
