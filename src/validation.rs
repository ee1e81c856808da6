use crate::error::AppError;
use crate::models::Grade;

pub const MIN_CREDIT: i32 = 0;
pub const MAX_CREDIT: i32 = 4;

pub fn check_credit(credit: Option<i32>) -> Result<i32, AppError> {
    match credit {
        Some(c) if (MIN_CREDIT..=MAX_CREDIT).contains(&c) => Ok(c),
        _ => Err(AppError::InvalidArgument(
            "Credit must be between 0 and 4".to_string(),
        )),
    }
}

/// Returns the name as given; trimming is only used for the emptiness check.
pub fn check_name(name: Option<&str>) -> Result<&str, AppError> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(n),
        _ => Err(AppError::InvalidArgument(
            "Name cannot be null or empty".to_string(),
        )),
    }
}

pub fn check_id(id: Option<i64>) -> Result<i64, AppError> {
    match id {
        Some(i) if i >= 0 => Ok(i),
        _ => Err(AppError::InvalidArgument(
            "ID must be a positive integer".to_string(),
        )),
    }
}

pub fn check_grade(grade: Option<&Grade>) -> Result<&Grade, AppError> {
    grade.ok_or_else(|| AppError::InvalidArgument("Grade cannot be null".to_string()))
}
