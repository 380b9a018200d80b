//! # Repository Pattern
//!
//! این فایل الگوی Repository رو پیاده‌سازی میکنه.
//!
//! ## Repository Pattern چیه؟
//! یه لایه انتزاعی بین منطق برنامه و محل نگهداری داده.
//! - منطق برنامه نمیدونه داده کجا ذخیره میشه
//! - تست کردن راحت‌تر میشه
//! - عوض کردن backend (مثلا in-memory → دیتابیس) آسون‌تر میشه
//!
//! ## مفاهیم Rust:
//! - **Traits**: تعریف interface
//! - **async_trait**: امکان async در traits
//! - **Associated Types**: نوع‌های مرتبط با trait
//! - **?Sized**: اجازه دادن به نوع‌های بدون سایز مثل `str`

use async_trait::async_trait;

use super::ProjectStore;
use crate::error::Result;
use crate::models::{Project, ProjectFilter};

// =====================================
// Base Repository Trait
// =====================================
/// Trait پایه برای همه Repository‌ها
///
/// # مفاهیم:
/// - `#[async_trait]`: macro برای async در traits
/// - `Send + Sync`: امکان ارسال بین threads
/// - Associated Types: `type Entity` و `type Id`
///
/// # چرا async_trait؟
/// قبل از Rust 1.75، async fn در trait مستقیم ممکن نبود.
/// این macro مشکل رو حل میکنه.
#[async_trait]
pub trait Repository: Send + Sync {
    /// نوع Entity که این repository باهاش کار میکنه
    type Entity: Send + Sync;

    /// نوع شناسه (ID)
    /// `?Sized` یعنی `str` هم میتونه باشه
    type Id: Send + Sync + ?Sized;

    /// پیدا کردن با ID
    async fn find_by_id(&self, id: &Self::Id) -> Option<Self::Entity>;

    /// پیدا کردن همه
    async fn find_all(&self) -> Vec<Self::Entity>;

    /// ذخیره کردن (upsert)
    async fn save(&self, entity: Self::Entity) -> Self::Entity;

    /// حذف با ID
    async fn delete(&self, id: &Self::Id) -> Result<()>;

    /// شمارش کل
    async fn count(&self) -> usize;
}

// =====================================
// Repository Implementation
// =====================================
/// پیاده‌سازی Repository برای ProjectStore
///
/// # مفاهیم:
/// - `impl Trait for Type`: پیاده‌سازی trait
/// - متدهای domain-specific (فیلتر، replace) روی خود ProjectStore هستن؛
///   این trait عملیات generic رو پوشش میده
#[async_trait]
impl Repository for ProjectStore {
    type Entity = Project;
    type Id = str;

    async fn find_by_id(&self, id: &str) -> Option<Project> {
        self.list(&ProjectFilter::default())
            .await
            .into_iter()
            .find(|project| project.id.as_str() == id)
    }

    async fn find_all(&self) -> Vec<Project> {
        self.list(&ProjectFilter::default()).await
    }

    /// Upsert با کلید `id`
    ///
    /// اگه رکوردی با همین شناسه باشه جایگزین میشه، وگرنه اضافه میشه.
    /// اینطوری invariant یکتایی شناسه‌ها از این مسیر هم حفظ میشه.
    async fn save(&self, entity: Project) -> Project {
        match self
            .replace(
                entity.id.as_str(),
                entity.title.clone(),
                entity.owner.clone(),
            )
            .await
        {
            Ok(saved) => saved,
            Err(_) => {
                // وجود نداشت - درج به عنوان رکورد جدید با همون شناسه
                self.insert(entity).await
            }
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.remove(id).await
    }

    async fn count(&self) -> usize {
        self.find_all().await.len()
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectId;

    #[tokio::test]
    async fn test_find_by_id() {
        let store = ProjectStore::new();
        let created = store.create("Site".to_string(), "Ana".to_string()).await;

        let found = store.find_by_id(created.id.as_str()).await;
        assert!(found.is_some());
        assert_eq!(found.unwrap().title, "Site");

        let missing = store
            .find_by_id("9a82854d-7a34-49ad-b0a1-0b2d70b479af")
            .await;
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_save_inserts_then_replaces() {
        let store = ProjectStore::new();

        let project = Project {
            id: ProjectId::new(),
            title: "Site".to_string(),
            owner: "Ana".to_string(),
        };

        // بار اول: درج
        let saved = store.save(project.clone()).await;
        assert_eq!(store.count().await, 1);

        // بار دوم با همون شناسه: جایگزینی، نه duplicate
        let updated = Project {
            id: saved.id.clone(),
            title: "Site v2".to_string(),
            owner: "Ana".to_string(),
        };
        store.save(updated).await;

        assert_eq!(store.count().await, 1);
        let found = store.find_by_id(saved.id.as_str()).await.unwrap();
        assert_eq!(found.title, "Site v2");
    }

    #[tokio::test]
    async fn test_delete_through_trait() {
        let store = ProjectStore::new();
        let created = store.create("Site".to_string(), "Ana".to_string()).await;

        assert!(store.delete(created.id.as_str()).await.is_ok());
        assert_eq!(store.count().await, 0);
        assert!(store.delete(created.id.as_str()).await.is_err());
    }
}
