//! # ماژول مدل‌ها (Domain Models)
//!
//! این ماژول مدل‌های داده برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Structs**: ساختار داده
//! - **Derive Macros**: تولید خودکار کد
//! - **Serialize/Deserialize**: تبدیل JSON
//! - **Newtype Pattern**: کپسوله کردن نوع‌ها
//!
//! ## تفاوت انواع مدل:
//! - **Entity**: رکوردی که در مخزن نگهداری میشه
//! - **DTO (Data Transfer Object)**: برای ارسال/دریافت از API

mod project;
mod dto;

// Re-export همه مدل‌ها
pub use project::*;
pub use dto::*;

use serde::{Deserialize, Serialize};

use crate::utils;

// =====================================
// Project ID (Newtype Pattern)
// =====================================
/// شناسه یکتای پروژه
///
/// # Newtype Pattern
/// این الگو یه نوع ساده رو wrap میکنه برای:
/// - Type safety: جلوگیری از اشتباه
/// - اضافه کردن متد
/// - پنهان کردن جزئیات
///
/// # مثال
/// ```rust
/// use project_manager::models::ProjectId;
///
/// let id = ProjectId::new();
/// assert!(ProjectId::is_valid(id.as_str()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]  // در JSON فقط مقدار داخلی نمایش داده میشه
pub struct ProjectId(String);

impl ProjectId {
    /// ساخت شناسه جدید (UUID v4)
    ///
    /// شناسه همیشه سمت سرور تولید میشه، هیچوقت از کلاینت نمیاد.
    #[must_use]
    pub fn new() -> Self {
        Self(utils::generate_project_id())
    }

    /// ساخت از string موجود
    ///
    /// فرمت چک نمیشه - اعتبارسنجی کار `is_valid` و middleware هست.
    #[must_use]
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// آیا این رشته فرمت شناسه پروژه داره؟
    #[must_use]
    pub fn is_valid(candidate: &str) -> bool {
        utils::is_valid_project_id(candidate)
    }

    /// گرفتن به عنوان &str
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// تبدیل به String
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

// تبدیل از String
impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// تبدیل از &str
impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// نمایش به عنوان String
impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// برای مقایسه با &str بدون allocation
impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_generation() {
        let id1 = ProjectId::new();
        let id2 = ProjectId::new();

        // باید یکتا باشن
        assert_ne!(id1.as_str(), id2.as_str());

        // طول ثابت و فرمت معتبر
        assert_eq!(id1.as_str().len(), 36);
        assert!(ProjectId::is_valid(id1.as_str()));
    }

    #[test]
    fn test_project_id_conversions() {
        let id = ProjectId::from_string("9a82854d-7a34-49ad-b0a1-0b2d70b479af");

        assert_eq!(id.to_string(), "9a82854d-7a34-49ad-b0a1-0b2d70b479af");
        assert_eq!(id.into_string(), "9a82854d-7a34-49ad-b0a1-0b2d70b479af");
    }

    #[test]
    fn test_project_id_serializes_transparently() {
        let id = ProjectId::from("9a82854d-7a34-49ad-b0a1-0b2d70b479af");
        let json = serde_json::to_value(&id).unwrap();

        // transparent یعنی فقط خود رشته، بدون wrapper
        assert_eq!(json, serde_json::json!("9a82854d-7a34-49ad-b0a1-0b2d70b479af"));
    }
}
