use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::CourseStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<Mutex<CourseStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
