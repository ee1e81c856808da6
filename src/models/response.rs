use serde::Serialize;

use super::Course;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub course: Course,
    pub total_gpa: i64,
}
