//! # Project Manager Library
//!
//! این کتابخانه یک سرویس مدیریت پروژه (CRUD کامل) ارائه میده.
//!
//! ## ساختار پروژه
//!
//! ```text
//! src/
//! ├── lib.rs          # نقطه ورود کتابخانه - اینجا!
//! ├── main.rs         # نقطه ورود باینری
//! ├── config/         # مدیریت تنظیمات
//! ├── error/          # تعریف خطاها
//! ├── store/          # مخزن in-memory پروژه‌ها
//! ├── models/         # مدل‌های داده
//! ├── services/       # منطق کسب‌وکار
//! ├── api/            # لایه API
//! └── utils/          # توابع کمکی
//! ```
//!
//! ## مفاهیم Rust در این فایل
//!
//! - **Module System**: سیستم ماژول‌ها برای سازماندهی کد
//! - **Public API**: با `pub` مشخص میکنیم چی از بیرون قابل دسترسی باشه
//! - **Re-exports**: با `pub use` آیتم‌ها رو re-export میکنیم
//!
//! ## مثال استفاده
//!
//! ```rust
//! use project_manager::{api::create_router, config::Config, store::ProjectStore};
//!
//! let store = ProjectStore::new();
//! let app = create_router(store, Config::default());
//! ```

// =====================================
// Module Declarations
// =====================================
// در Rust، هر ماژول باید در lib.rs یا main.rs declare بشه
// `pub mod` یعنی این ماژول از بیرون کتابخانه قابل دسترسی هست

/// ماژول مدیریت تنظیمات برنامه
pub mod config;

/// ماژول تعریف و مدیریت خطاها
pub mod error;

/// ماژول مخزن داده (in-memory)
pub mod store;

/// ماژول مدل‌های داده (Domain Models)
pub mod models;

/// ماژول سرویس‌ها (Business Logic)
pub mod services;

/// ماژول API و HTTP Handlers
pub mod api;

/// ماژول توابع کمکی
pub mod utils;

// =====================================
// Re-exports
// =====================================
// Re-export کردن آیتم‌های پرکاربرد برای دسترسی راحت‌تر
// کاربر به جای `project_manager::error::Result` میتونه بنویسه `project_manager::Result`

/// نتیجه عملیات با خطای سفارشی ما
pub use error::Result;

/// خطای اصلی برنامه
pub use error::AppError;

// =====================================
// Prelude Module
// =====================================
/// ماژول prelude برای import راحت‌تر آیتم‌های پرکاربرد
///
/// کاربرد:
/// ```rust
/// use project_manager::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{AppError, Result};
    pub use crate::models::*;
    pub use crate::services::*;
    pub use crate::store::ProjectStore;
}
