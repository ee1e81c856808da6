use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::AppError;
use crate::gpa::{GPA_TIERS, GpaTierTable};
use crate::models::{ApiResponse, Course, CourseRequest};
use crate::store::CourseStore;
use crate::validation;

/// Validation, store mutation and GPA scoring for course requests.
///
/// Each operation holds the store lock from lookup to mutation.
pub struct CourseService {
    store: Arc<Mutex<CourseStore>>,
    tiers: GpaTierTable,
}

impl CourseService {
    pub fn new(store: Arc<Mutex<CourseStore>>) -> Self {
        Self { store, tiers: GPA_TIERS }
    }

    pub async fn list(&self) -> Vec<Course> {
        self.store.lock().await.list_all().to_vec()
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Course, AppError> {
        let name = validation::check_name(Some(name))?;
        let store = self.store.lock().await;
        store.find_by_name(name).cloned()
    }

    pub async fn create(&self, req: Option<CourseRequest>) -> Result<ApiResponse, AppError> {
        let req = req.ok_or_else(|| AppError::InvalidArgument("Provided course is null".to_string()))?;
        let credit = validation::check_credit(req.credit)?;
        let name = validation::check_name(req.name.as_deref())?.to_string();
        let grade = validation::check_grade(req.grade.as_ref())?.clone();

        let mut store = self.store.lock().await;
        let id = req.id.unwrap_or_else(|| store.next_id());
        let course = store.add(Course { id, name, credit, grade }).clone();
        drop(store);

        let total_gpa = self.tiers.total_gpa(&course);
        info!("created course {} ({}) total_gpa={}", course.id, course.name, total_gpa);
        Ok(ApiResponse { course, total_gpa })
    }

    pub async fn update(&self, id: i64, req: CourseRequest) -> Result<ApiResponse, AppError> {
        let id = validation::check_id(Some(id))?;
        let credit = validation::check_credit(req.credit)?;
        let name = validation::check_name(req.name.as_deref())?.to_string();
        let grade = validation::check_grade(req.grade.as_ref())?.clone();

        if req.id.is_some_and(|body_id| body_id != id) {
            debug!("ignoring body id {:?} in favour of path id {}", req.id, id);
        }

        let mut store = self.store.lock().await;
        let course = store.replace(id, Course { id, name, credit, grade })?.clone();
        drop(store);

        let total_gpa = self.tiers.total_gpa(&course);
        info!("updated course {} ({}) total_gpa={}", course.id, course.name, total_gpa);
        Ok(ApiResponse { course, total_gpa })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let removed = self.store.lock().await.remove(id)?;
        info!("deleted course {} ({})", removed.id, removed.name);
        Ok(())
    }
}
