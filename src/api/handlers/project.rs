//! # Project Handlers
//!
//! Handler‌های CRUD پروژه‌ها

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::Result,
    models::{
        CreateProjectRequest, DeleteResponse, Project, ProjectFilter, UpdateProjectRequest,
    },
    services::AppState,
};

// =====================================
// List Projects
// =====================================
/// لیست پروژه‌ها با فیلتر اختیاری
///
/// # مفاهیم:
/// - `Query<T>`: استخراج و deserialize پارامترهای query string
/// - خروجی آرایه JSON خامه، بدون wrapper
///
/// # Endpoint
/// `GET /projects?title=Si&owner=Ana`
///
/// # Response
/// ```json
/// [
///   { "id": "9a82854d-...", "title": "Site", "owner": "Ana" }
/// ]
/// ```
pub async fn list_projects(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> Json<Vec<Project>> {
    let projects = state.project_service.list_projects(filter).await;

    Json(projects)
}

// =====================================
// Create Project
// =====================================
/// ساخت پروژه جدید
///
/// # مفاهیم:
/// - `Json<T>`: استخراج و deserialize بدنه JSON
/// - status پیش‌فرض 200 هست و عمدا همینه (نه 201)
///
/// # Endpoint
/// `POST /projects`
///
/// # Request Body
/// ```json
/// { "title": "Site", "owner": "Ana" }
/// ```
///
/// # Response
/// ```json
/// { "id": "9a82854d-...", "title": "Site", "owner": "Ana" }
/// ```
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Json<Project> {
    let project = state.project_service.create_project(request).await;

    Json(project)
}

// =====================================
// Update Project
// =====================================
/// جایگزینی کامل یک پروژه
///
/// # مفاهیم:
/// - `Path<String>`: استخراج پارامتر `:id` از مسیر
/// - شناسه قبل از رسیدن به اینجا توسط گارد middleware چک شده
///
/// # Endpoint
/// `PUT /projects/:id`
///
/// # Response
/// - 200 با رکورد بروز شده
/// - 400 با `{"error": "Project not Found"}` اگه شناسه موجود نباشه
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<Project>> {
    let project = state.project_service.update_project(&id, request).await?;

    Ok(Json(project))
}

// =====================================
// Delete Project
// =====================================
/// حذف یک پروژه
///
/// # Endpoint
/// `DELETE /projects/:id`
///
/// # Response
/// - 200 با `{"delete": "Successfully"}`
/// - 400 با `{"error": "Project not Found"}` اگه شناسه موجود نباشه
///   (حذف دوباره همون شناسه هم همینو برمیگردونه)
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.project_service.delete_project(&id).await?;

    Ok(Json(DeleteResponse::successful()))
}
