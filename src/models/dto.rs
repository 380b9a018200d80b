//! # Data Transfer Objects (DTOs)
//!
//! DTO‌های عمومی که در API استفاده میشن
//!
//! ## مفاهیم:
//! - DTO: برای انتقال داده بین لایه‌ها
//! - Request/Response separation: جداسازی ورودی از خروجی

use serde::{Deserialize, Serialize};

use crate::config::Environment;

// =====================================
// Delete Response
// =====================================
/// پاسخ حذف موفق
///
/// شکل wire: `{"delete": "Successfully"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub delete: String,
}

impl DeleteResponse {
    /// ساخت پاسخ حذف موفق
    #[must_use]
    pub fn successful() -> Self {
        Self {
            delete: "Successfully".to_string(),
        }
    }
}

// =====================================
// Health Check
// =====================================
/// پاسخ health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: Environment,

    /// تعداد پروژه‌های موجود در مخزن
    pub projects: usize,
}

impl HealthResponse {
    /// ساخت پاسخ healthy
    ///
    /// مخزن in-memory هست و fail نمیشه، پس status همیشه healthy گزارش میشه.
    #[must_use]
    pub fn healthy(environment: Environment, projects: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment,
            projects,
        }
    }
}
