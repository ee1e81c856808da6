use crate::error::AppError;
use crate::models::Course;

/// In-memory course list. Insertion order is the listing order.
///
/// Nothing here enforces id or name uniqueness; `replace` and `remove`
/// act on the first record with a matching id.
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: Vec<Course>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_all(&self) -> &[Course] {
        &self.courses
    }

    pub fn find_by_name(&self, name: &str) -> Result<&Course, AppError> {
        self.courses
            .iter()
            .find(|c| eq_ignore_case(&c.name, name))
            .ok_or_else(|| AppError::NotFound(format!("course not found with name: {}", name)))
    }

    pub fn find_by_id(&self, id: i64) -> Result<&Course, AppError> {
        self.position_of(id).map(|idx| &self.courses[idx])
    }

    pub fn add(&mut self, course: Course) -> &Course {
        self.courses.push(course);
        &self.courses[self.courses.len() - 1]
    }

    /// Next id for a course created without one.
    pub fn next_id(&self) -> i64 {
        self.courses.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
    }

    /// Overwrites the record holding `id` in place. The stored course
    /// always carries `id`, whatever the incoming value said.
    pub fn replace(&mut self, id: i64, mut course: Course) -> Result<&Course, AppError> {
        let idx = self.position_of(id)?;
        course.id = id;
        self.courses[idx] = course;
        Ok(&self.courses[idx])
    }

    pub fn remove(&mut self, id: i64) -> Result<Course, AppError> {
        let idx = self.position_of(id)?;
        Ok(self.courses.remove(idx))
    }

    fn position_of(&self, id: i64) -> Result<usize, AppError> {
        self.courses
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("course not found with id: {}", id)))
    }
}

/// Char-by-char case-insensitive equality. A pair matches when the chars
/// are equal, their uppercase forms are equal, or the lowercase forms of
/// those uppercase forms are equal. Only single-char case mappings are used.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            if x == y {
                return true;
            }
            let (ux, uy) = (simple_upper(x), simple_upper(y));
            ux == uy || simple_lower(ux) == simple_lower(uy)
        })
}

fn simple_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

fn simple_lower(c: char) -> char {
    // U+0130 only has a multi-char full lowercase; its simple mapping is 'i'.
    if c == '\u{130}' {
        return 'i';
    }
    single(c.to_lowercase()).unwrap_or(c)
}

fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
