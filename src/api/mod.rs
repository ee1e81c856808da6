use std::any::Any;

use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::response::{IntoResponse, Response};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};

use crate::error::AppError;
use crate::models::*;
use crate::services::CourseService;
use crate::state::AppState;

/// Builds the application router. `base_path` is either empty or a
/// normalized prefix such as `/api`; `/health` always stays at the root.
pub fn router(state: AppState, base_path: &str) -> Router {
    let courses = Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{key}",
            get(get_course).put(update_course).delete(delete_course),
        );

    let api = if base_path.is_empty() {
        courses
    } else {
        Router::new().nest(base_path, courses)
    };

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };
    AppError::Unexpected(message).into_response()
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    let service = CourseService::new(state.store.clone());
    Json(service.list().await)
}

async fn get_course(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Course>, AppError> {
    let service = CourseService::new(state.store.clone());
    let course = service.get_by_name(&name).await?;
    Ok(Json(course))
}

async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<Option<CourseRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse>), AppError> {
    let Json(req) = payload?;
    let service = CourseService::new(state.store.clone());
    let resp = service.create(req).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

async fn update_course(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Option<CourseRequest>>, JsonRejection>,
) -> Result<Json<ApiResponse>, AppError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let service = CourseService::new(state.store.clone());
    let resp = service.update(id, req.unwrap_or_default()).await?;
    Ok(Json(resp))
}

async fn delete_course(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    let service = CourseService::new(state.store.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_maps_to_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
