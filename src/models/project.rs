//! # مدل Project
//!
//! Entity و DTO‌های مربوط به پروژه

use serde::{Deserialize, Serialize};

use super::ProjectId;

// =====================================
// Project Entity
// =====================================
/// Entity اصلی پروژه
///
/// # مفاهیم:
/// - این struct مستقیم به JSON سریالایز میشه - خودش قرارداد wire هست
/// - `id` بعد از ساخت تغییر نمیکنه؛ update فقط `title` و `owner` رو عوض میکنه
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// شناسه یکتا (UUID v4، تولید سمت سرور)
    pub id: ProjectId,

    /// عنوان پروژه
    pub title: String,

    /// مالک پروژه
    pub owner: String,
}

impl Project {
    /// ساخت پروژه جدید با شناسه تازه
    #[must_use]
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            title: title.into(),
            owner: owner.into(),
        }
    }
}

// =====================================
// API Request DTOs
// =====================================
/// درخواست ساخت پروژه
///
/// # مفاهیم:
/// - `#[serde(default)]`: فیلد غایب میشه رشته خالی، نه خطا
///
/// ساخت پروژه حضور فیلدها رو اعتبارسنجی نمیکنه؛ `{}` هم یه درخواست
/// معتبره و رکوردی با فیلدهای خالی میسازه.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// عنوان پروژه
    #[serde(default)]
    pub title: String,

    /// مالک پروژه
    #[serde(default)]
    pub owner: String,
}

/// درخواست بروزرسانی پروژه
///
/// هر دو فیلد جایگزین میشن - partial update نداریم.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    /// عنوان جدید
    #[serde(default)]
    pub title: String,

    /// مالک جدید
    #[serde(default)]
    pub owner: String,
}

// =====================================
// Query DTO
// =====================================
/// پارامترهای فیلتر لیست پروژه‌ها
///
/// # مفاهیم:
/// - Query string → struct با extractor `Query` در axum
/// - `Option<String>`: فیلتر غایب یعنی بدون محدودیت
///
/// هر دو فیلتر substring containment ساده‌ان: case-sensitive و بدون anchor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    /// فیلتر روی عنوان
    #[serde(default)]
    pub title: Option<String>,

    /// فیلتر روی مالک
    #[serde(default)]
    pub owner: Option<String>,
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    /// شکل JSON پروژه - عینا قرارداد wire
    #[test]
    fn test_project_wire_shape() {
        let project = Project {
            id: ProjectId::from("9a82854d-7a34-49ad-b0a1-0b2d70b479af"),
            title: "Site".to_string(),
            owner: "Ana".to_string(),
        };

        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "9a82854d-7a34-49ad-b0a1-0b2d70b479af",
                "title": "Site",
                "owner": "Ana"
            })
        );
    }

    /// فیلدهای غایب در create باید رشته خالی بشن
    #[test]
    fn test_create_request_missing_fields_default_to_empty() {
        let request: CreateProjectRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.title, "");
        assert_eq!(request.owner, "");
    }

    #[test]
    fn test_filter_defaults_to_none() {
        let filter = ProjectFilter::default();
        assert!(filter.title.is_none());
        assert!(filter.owner.is_none());
    }
}
