//! # ماژول مخزن (Store Layer)
//!
//! این ماژول مخزن in-memory پروژه‌ها رو مدیریت میکنه.
//!
//! ## مفاهیم Rust:
//! - **Arc<T>**: Reference Counting برای اشتراک داده بین threads
//! - **RwLock**: قفل خواندن/نوشتن async
//! - **async/await**: برنامه‌نویسی غیرهمزمان
//! - **Interior Mutability**: تغییر داده از پشت reference اشتراکی
//!
//! ## الگوهای طراحی:
//! - Repository Pattern: جداسازی لایه داده از منطق
//! - Dependency Injection: مخزن هنگام ساخت router تزریق میشه، نه global

mod repository;

pub use repository::*;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::models::{Project, ProjectFilter, ProjectId};

// =====================================
// Project Store
// =====================================
/// مخزن in-memory پروژه‌ها
///
/// # مفاهیم:
/// - `#[derive(Clone)]`: clone فقط counter آرک رو زیاد میکنه، داده کپی نمیشه
/// - `Arc<RwLock<Vec<...>>>`: یک دنباله مرتب که بین handler‌ها share میشه
///
/// ## چرا Vec و نه HashMap؟
/// ترتیب درج باید حفظ بشه - لیست پیش‌فرض همون ترتیب ساخته شدنه.
///
/// ## Invariant‌ها
/// - هیچ دو رکوردی `id` یکسان ندارن (شناسه‌ها سمت سرور تولید میشن)
/// - عملیات find-then-mutate کل مدتش رو زیر یک write lock میمونه،
///   پس بین پیدا کردن index و نوشتن، هیچ request دیگه‌ای وسط نمیاد
///
/// هیچ چیزی persist نمیشه؛ با ری‌استارت پروسس کالکشن خالیه.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl ProjectStore {
    /// ساخت مخزن خالی جدید
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// لیست پروژه‌ها با فیلترهای اختیاری
    ///
    /// # مفاهیم:
    /// - `read().await`: قفل خواندن - چند reader همزمان اوکیه
    /// - `retain`: فیلتر in-place روی کپی
    ///
    /// فیلترها با AND ترکیب میشن و به ترتیب اعمال میشن: اول `title`
    /// نتیجه رو تنگ میکنه، بعد `owner`. تطبیق substring ساده‌ست -
    /// case-sensitive و بدون anchor. هیچ تطبیقی یعنی لیست خالی، نه خطا.
    pub async fn list(&self, filter: &ProjectFilter) -> Vec<Project> {
        let projects = self.projects.read().await;

        let mut results: Vec<Project> = projects.clone();

        if let Some(title) = &filter.title {
            results.retain(|project| project.title.contains(title.as_str()));
        }

        if let Some(owner) = &filter.owner {
            results.retain(|project| project.owner.contains(owner.as_str()));
        }

        results
    }

    /// ساخت پروژه جدید
    ///
    /// شناسه همینجا تولید میشه و رکورد به انتهای دنباله اضافه میشه.
    pub async fn create(&self, title: String, owner: String) -> Project {
        let project = Project::new(title, owner);

        self.projects.write().await.push(project.clone());

        project
    }

    /// درج یک رکورد آماده در انتهای دنباله
    ///
    /// برخلاف `create` شناسه تولید نمیکنه - caller مسئول یکتایی شناسه‌ست
    /// (مسیر upsert در `Repository::save` قبلش وجود شناسه رو چک میکنه).
    pub(crate) async fn insert(&self, project: Project) -> Project {
        self.projects.write().await.push(project.clone());
        project
    }

    /// جایگزینی کامل یک پروژه
    ///
    /// # مفاهیم:
    /// - `position`: اسکن خطی با مقایسه مقدار `id`
    /// - رکورد جدید در همون جایگاه قبلی میشینه و `id` قبلی رو نگه میداره
    ///
    /// # Errors
    /// - `ProjectNotFound`: شناسه‌ای با این مقدار در مخزن نیست
    pub async fn replace(&self, id: &str, title: String, owner: String) -> Result<Project> {
        let mut projects = self.projects.write().await;

        let index = projects
            .iter()
            .position(|project| project.id.as_str() == id)
            .ok_or(AppError::ProjectNotFound)?;

        let project = Project {
            id: ProjectId::from(id),
            title,
            owner,
        };

        projects[index] = project.clone();

        Ok(project)
    }

    /// حذف یک پروژه
    ///
    /// دقیقا همون یک رکورد حذف میشه؛ ترتیب نسبی بقیه حفظ میشه.
    ///
    /// # Errors
    /// - `ProjectNotFound`: شناسه‌ای با این مقدار در مخزن نیست
    pub async fn remove(&self, id: &str) -> Result<()> {
        let mut projects = self.projects.write().await;

        let index = projects
            .iter()
            .position(|project| project.id.as_str() == id)
            .ok_or(AppError::ProjectNotFound)?;

        projects.remove(index);

        Ok(())
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_appends_in_order() {
        let store = ProjectStore::new();

        let first = store.create("Site".to_string(), "Ana".to_string()).await;
        let second = store.create("App".to_string(), "Bruno".to_string()).await;

        let all = store.list(&ProjectFilter::default()).await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }

    #[tokio::test]
    async fn test_created_ids_are_unique_and_valid() {
        let store = ProjectStore::new();

        let a = store.create("A".to_string(), "x".to_string()).await;
        let b = store.create("B".to_string(), "y".to_string()).await;

        assert_ne!(a.id, b.id);
        assert!(ProjectId::is_valid(a.id.as_str()));
        assert!(ProjectId::is_valid(b.id.as_str()));
    }

    #[tokio::test]
    async fn test_list_filters_by_title_then_owner() {
        let store = ProjectStore::new();
        store.create("Site novo".to_string(), "Ana".to_string()).await;
        store.create("Site velho".to_string(), "Bruno".to_string()).await;
        store.create("App mobile".to_string(), "Ana".to_string()).await;

        // فقط title
        let filter = ProjectFilter {
            title: Some("Site".to_string()),
            owner: None,
        };
        assert_eq!(store.list(&filter).await.len(), 2);

        // title و owner با هم - AND
        let filter = ProjectFilter {
            title: Some("Site".to_string()),
            owner: Some("Ana".to_string()),
        };
        let results = store.list(&filter).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Site novo");
    }

    #[tokio::test]
    async fn test_list_filter_is_case_sensitive() {
        let store = ProjectStore::new();
        store.create("Site".to_string(), "Ana".to_string()).await;

        let filter = ProjectFilter {
            title: Some("site".to_string()),
            owner: None,
        };

        // حروف کوچک match نمیشه - و این خطا نیست، فقط لیست خالیه
        assert!(store.list(&filter).await.is_empty());
    }

    #[tokio::test]
    async fn test_replace_keeps_id_and_position() {
        let store = ProjectStore::new();
        let first = store.create("Site".to_string(), "Ana".to_string()).await;
        store.create("App".to_string(), "Bruno".to_string()).await;

        let updated = store
            .replace(first.id.as_str(), "Site v2".to_string(), "Ana".to_string())
            .await
            .unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.title, "Site v2");

        // رکورد بروز شده هنوز اوله
        let all = store.list(&ProjectFilter::default()).await;
        assert_eq!(all[0].title, "Site v2");
        assert_eq!(all[1].title, "App");
    }

    #[tokio::test]
    async fn test_replace_unknown_id_is_not_found() {
        let store = ProjectStore::new();

        let result = store
            .replace(
                "9a82854d-7a34-49ad-b0a1-0b2d70b479af",
                "X".to_string(),
                "Y".to_string(),
            )
            .await;

        assert!(matches!(result, Err(AppError::ProjectNotFound)));
    }

    #[tokio::test]
    async fn test_remove_preserves_relative_order() {
        let store = ProjectStore::new();
        store.create("A".to_string(), "x".to_string()).await;
        let middle = store.create("B".to_string(), "y".to_string()).await;
        store.create("C".to_string(), "z".to_string()).await;

        store.remove(middle.id.as_str()).await.unwrap();

        let all = store.list(&ProjectFilter::default()).await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "A");
        assert_eq!(all[1].title, "C");
    }

    #[tokio::test]
    async fn test_remove_twice_is_not_found() {
        let store = ProjectStore::new();
        let project = store.create("Site".to_string(), "Ana".to_string()).await;

        assert!(store.remove(project.id.as_str()).await.is_ok());

        // بار دوم دیگه وجود نداره
        let result = store.remove(project.id.as_str()).await;
        assert!(matches!(result, Err(AppError::ProjectNotFound)));
    }
}
