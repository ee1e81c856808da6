use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub coefficient: i32,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub credit: i32,
    pub grade: Grade,
}

/// Incoming course body. Every field may be missing so that validation,
/// not deserialization, decides what is reported back to the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub credit: Option<i32>,
    pub grade: Option<Grade>,
}
