//! # ماژول سرویس‌ها (Business Logic Layer)
//!
//! این ماژول منطق کسب‌وکار برنامه رو پیاده‌سازی میکنه.
//!
//! ## لایه‌بندی معماری
//!
//! ```text
//! ┌─────────────────┐
//! │    API Layer    │  <-- HTTP handlers (axum)
//! ├─────────────────┤
//! │  Service Layer  │  <-- Business logic (اینجا!)
//! ├─────────────────┤
//! │   Store Layer   │  <-- In-memory data access
//! └─────────────────┘
//! ```
//!
//! ## مفاهیم Rust:
//! - **Dependency Injection**: تزریق وابستگی‌ها
//! - **Arc<T>**: اشتراک امن بین threads
//! - **async/await**: عملیات غیرهمزمان

mod project_service;

pub use project_service::*;

use std::sync::Arc;

use crate::{config::Config, store::ProjectStore};

// =====================================
// Application State
// =====================================
/// وضعیت برنامه که بین همه handlers اشتراک‌گذاری میشه
///
/// # مفاهیم:
/// - `Arc<T>`: Reference counting برای thread-safe sharing
/// - `Clone`: کپی کردن (فقط Arc clone میشه، نه داده)
/// - این state در axum با `.with_state()` تزریق میشه
///
/// ## چرا این ساختار؟
/// - هر request به یک handler میره
/// - handlers باید به services دسترسی داشته باشن
/// - Arc اجازه میده بدون کپی داده، reference share کنیم
#[derive(Clone)]
pub struct AppState {
    /// تنظیمات برنامه
    pub config: Arc<Config>,

    /// سرویس پروژه‌ها
    pub project_service: Arc<ProjectService>,
}

impl AppState {
    /// ساخت AppState جدید
    ///
    /// # مفاهیم:
    /// - Factory method: ساخت object پیچیده
    /// - Dependency Injection: مخزن از بیرون میاد، global نیست
    #[must_use]
    pub fn new(store: ProjectStore, config: Config) -> Self {
        let config = Arc::new(config);

        let project_service = Arc::new(ProjectService::new(store));

        Self {
            config,
            project_service,
        }
    }

    /// دسترسی به config
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// =====================================
// Service Trait
// =====================================
/// Trait پایه برای services
///
/// # مفاهیم:
/// - این یک marker trait هست
/// - همه services باید Send + Sync باشن برای thread-safety
/// - در پروژه‌های بزرگ‌تر میتونید متدهای مشترک اینجا بذارید
pub trait Service: Send + Sync {}
