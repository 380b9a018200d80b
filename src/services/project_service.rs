//! # سرویس پروژه
//!
//! منطق کسب‌وکار مربوط به پروژه‌ها
//!
//! ## مفاهیم Rust:
//! - Business Logic: قوانین برنامه اینجا پیاده‌سازی میشن
//! - Separation of Concerns: جداسازی از لایه داده
//! - Error Handling: مدیریت خطا در سطح business

use tracing::{info, instrument};

use crate::{
    error::Result,
    models::{CreateProjectRequest, Project, ProjectFilter, UpdateProjectRequest},
    store::{ProjectStore, Repository},
};

use super::Service;

// =====================================
// Project Service
// =====================================
/// سرویس مدیریت پروژه‌ها
///
/// # مسئولیت‌ها:
/// - لیست کردن با فیلتر
/// - ساخت، جایگزینی و حذف
/// - لاگ‌های audit در سطح business
#[derive(Debug, Clone)]
pub struct ProjectService {
    store: ProjectStore,
}

// پیاده‌سازی marker trait
impl Service for ProjectService {}

impl ProjectService {
    /// ساخت سرویس جدید
    #[must_use]
    pub fn new(store: ProjectStore) -> Self {
        Self { store }
    }

    /// لیست پروژه‌ها با فیلترهای اختیاری
    ///
    /// # مفاهیم:
    /// - `#[instrument]`: macro برای tracing خودکار
    /// - `skip(self)`: از لاگ کردن self صرفنظر کن
    ///
    /// فیلتر کردن کار مخزنه؛ این لایه فقط عبور میده و span میسازه.
    #[instrument(skip(self))]
    pub async fn list_projects(&self, filter: ProjectFilter) -> Vec<Project> {
        self.store.list(&filter).await
    }

    /// ساخت پروژه جدید
    ///
    /// حضور فیلدها عمدا چک نمیشه: درخواست خالی هم رکورد معتبری
    /// با رشته‌های خالی میسازه.
    #[instrument(skip(self), fields(title = %request.title, owner = %request.owner))]
    pub async fn create_project(&self, request: CreateProjectRequest) -> Project {
        let project = self.store.create(request.title, request.owner).await;

        info!(id = %project.id, "Created new project");

        project
    }

    /// جایگزینی کامل یک پروژه
    ///
    /// # Errors
    /// - `ProjectNotFound`: شناسه در مخزن نیست
    #[instrument(skip(self))]
    pub async fn update_project(
        &self,
        id: &str,
        request: UpdateProjectRequest,
    ) -> Result<Project> {
        let project = self
            .store
            .replace(id, request.title, request.owner)
            .await?;

        info!(id = %project.id, "Updated project");

        Ok(project)
    }

    /// حذف یک پروژه
    ///
    /// # Errors
    /// - `ProjectNotFound`: شناسه در مخزن نیست (حذف دوباره هم همینه)
    #[instrument(skip(self))]
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        self.store.remove(id).await?;

        info!(id = %id, "Deleted project");

        Ok(())
    }

    /// تعداد پروژه‌های موجود
    ///
    /// از مسیر Repository trait میره - برای health check استفاده میشه.
    pub async fn count(&self) -> usize {
        self.store.count().await
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_create_then_update_then_delete() {
        let service = ProjectService::new(ProjectStore::new());

        let created = service
            .create_project(CreateProjectRequest {
                title: "Site".to_string(),
                owner: "Ana".to_string(),
            })
            .await;

        let updated = service
            .update_project(
                created.id.as_str(),
                UpdateProjectRequest {
                    title: "Site v2".to_string(),
                    owner: "Ana".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Site v2");

        service.delete_project(created.id.as_str()).await.unwrap();
        assert_eq!(service.count().await, 0);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let service = ProjectService::new(ProjectStore::new());

        let result = service
            .update_project(
                "9a82854d-7a34-49ad-b0a1-0b2d70b479af",
                UpdateProjectRequest::default(),
            )
            .await;

        assert!(matches!(result, Err(AppError::ProjectNotFound)));
    }

    #[tokio::test]
    async fn test_create_with_empty_request() {
        let service = ProjectService::new(ProjectStore::new());

        // درخواست خالی خطا نیست
        let project = service.create_project(CreateProjectRequest::default()).await;

        assert_eq!(project.title, "");
        assert_eq!(project.owner, "");
        assert_eq!(service.count().await, 1);
    }
}
