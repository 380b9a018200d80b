//! # ماژول مدیریت خطاها (Error Handling)
//!
//! این ماژول سیستم مدیریت خطای برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Custom Error Types**: تعریف نوع خطای سفارشی
//! - **thiserror**: derive macro برای Error trait
//! - **Error Trait**: trait استاندارد خطا
//! - **From Trait**: تبدیل خودکار نوع‌ها
//! - **Result Type Alias**: alias برای ساده‌تر شدن کد
//! - **Error Propagation**: انتشار خطا با `?`
//!
//! ## اهمیت Error Handling در Rust
//!
//! Rust از exceptions استفاده نمیکنه! به جاش از `Result<T, E>` استفاده میکنه.
//! این باعث میشه:
//! - خطاها صریح باشن
//! - نتونید خطا رو نادیده بگیرید
//! - کد قابل پیش‌بینی‌تر بشه

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

// =====================================
// Result Type Alias
// =====================================
/// نوع Result سفارشی برنامه
///
/// # مفاهیم:
/// - Type Alias: نام مستعار برای یک نوع
/// - Generic با default: `T` پارامتر، `E` ثابت
///
/// به جای نوشتن `Result<Project, AppError>` میتونیم بنویسیم `Result<Project>`
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Custom Error Enum
// =====================================
/// خطای اصلی برنامه
///
/// # مفاهیم:
/// - `enum`: نوع شمارشی با انواع مختلف خطا
/// - `#[derive(Error)]`: از thiserror برای پیاده‌سازی Error trait
/// - `#[error("...")]`: پیام خطا برای هر نوع
/// - `#[from]`: تبدیل خودکار از نوع‌های دیگه
///
/// # نکته مهم
/// پیام دو variant اول عینا روی wire میرن - کلاینت‌ها بهشون وابسته‌ان،
/// پس تغییرشون یه breaking change هست.
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // خطاهای کاربر (4xx)
    // ----------------------------------------

    /// شناسه پروژه فرمت UUID نداره - قبل از handler رد میشه
    #[error("Invalid project ID. (Middleware)")]
    InvalidProjectId,

    /// پروژه‌ای با این شناسه در مخزن نیست
    #[error("Project not Found")]
    ProjectNotFound,

    /// درخواست نامعتبر - 400
    #[error("Bad request: {0}")]
    BadRequest(String),

    // ----------------------------------------
    // خطاهای سرور (5xx)
    // ----------------------------------------

    /// خطای داخلی سرور - 500
    #[error("Internal server error: {0}")]
    Internal(String),

    /// خطای سرور
    #[error("Server error: {0}")]
    Server(String),

    /// خطای تنظیمات
    #[error("Configuration error: {0}")]
    Config(String),

    // ----------------------------------------
    // خطاهای تبدیل شده از کتابخانه‌ها
    // ----------------------------------------

    /// خطای IO
    /// `#[from]` یعنی std::io::Error خودکار به این تبدیل میشه
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// خطای JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// گرفتن HTTP status code متناسب با خطا
    ///
    /// # مفاهیم:
    /// - `match`: pattern matching
    /// - `&self`: reference به خودش
    /// - `Self::Variant`: مراجعه به variant‌ها
    ///
    /// # نکته
    /// `ProjectNotFound` عمدا 400 برمیگردونه نه 404 - این بخشی از
    /// قرارداد wire این سرویس هست.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client Errors
            Self::InvalidProjectId
            | Self::ProjectNotFound
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,

            // 5xx Server Errors
            Self::Internal(_)
            | Self::Server(_)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// آیا این یه خطای سرور هست؟
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

// =====================================
// Error Response DTO
// =====================================
/// ساختار پاسخ خطا در API
///
/// # مفاهیم:
/// - DTO (Data Transfer Object): برای ارسال به کلاینت
/// - `Serialize`: تبدیل به JSON
///
/// خروجی همیشه به شکل `{"error": "..."}` هست.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// پیام خطا
    pub error: String,
}

impl ErrorResponse {
    /// ساخت پاسخ خطای جدید
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =====================================
// IntoResponse Implementation
// =====================================
/// تبدیل AppError به Response HTTP
///
/// # مفاهیم:
/// - `impl Trait for Type`: پیاده‌سازی trait
/// - `IntoResponse`: trait خاص axum برای تبدیل به response
/// - این باعث میشه بتونیم AppError رو مستقیم از handler برگردونیم
///
/// # مثال
/// ```rust,ignore
/// async fn handler() -> Result<Json<Data>, AppError> {
///     // اگه Err برگرده، خودکار به response تبدیل میشه
///     Ok(Json(data))
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // لاگ کردن خطاهای سرور
        if self.is_server_error() {
            error!(error = %self, "Server error occurred");
        }

        let status = self.status_code();

        // پیام Display هر variant میشه مقدار فیلد error
        let error_response = ErrorResponse::new(self.to_string());

        // برگردوندن tuple که axum بلده تبدیل کنه
        (status, Json(error_response)).into_response()
    }
}

// =====================================
// From Implementations
// =====================================
// این‌ها برای تبدیل خودکار خطاهای دیگه به AppError هستن
// با `?` میتونیم خطا رو propagate کنیم

impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Internal(s)
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::Internal(s.to_string())
    }
}

// =====================================
// Result Extensions
// =====================================
/// Extension trait برای Result
///
/// # مفاهیم:
/// - Extension Trait: اضافه کردن متد به نوع‌های موجود
/// - Generic: کار با هر نوع T و E
pub trait ResultExt<T, E> {
    /// تبدیل خطا به AppError::Internal
    fn map_internal(self) -> Result<T>;

    /// تبدیل خطا به نوع دلخواه
    fn map_app_err<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(E) -> AppError;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for std::result::Result<T, E> {
    fn map_internal(self) -> Result<T> {
        self.map_err(|e| AppError::Internal(e.to_string()))
    }

    fn map_app_err<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(E) -> AppError,
    {
        self.map_err(f)
    }
}

// =====================================
// Option Extensions
// =====================================
/// Extension trait برای Option
pub trait OptionExt<T> {
    /// تبدیل None به AppError::ProjectNotFound
    fn ok_or_not_found(self) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> Result<T> {
        self.ok_or(AppError::ProjectNotFound)
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        // هر دو خطای core طبق قرارداد 400 برمیگردونن
        assert_eq!(
            AppError::ProjectNotFound.status_code(),
            StatusCode::BAD_REQUEST
        );

        assert_eq!(
            AppError::InvalidProjectId.status_code(),
            StatusCode::BAD_REQUEST
        );

        assert_eq!(
            AppError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_wire_messages() {
        // این پیام‌ها عینا روی wire میرن - باید ثابت بمونن
        assert_eq!(
            AppError::ProjectNotFound.to_string(),
            "Project not Found"
        );
        assert_eq!(
            AppError::InvalidProjectId.to_string(),
            "Invalid project ID. (Middleware)"
        );
    }

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse::new("Project not Found");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "Project not Found" }));
    }

    #[test]
    fn test_option_extension() {
        let some_value: Option<i32> = Some(42);
        let none_value: Option<i32> = None;

        assert!(some_value.ok_or_not_found().is_ok());
        assert!(matches!(
            none_value.ok_or_not_found(),
            Err(AppError::ProjectNotFound)
        ));
    }

    #[test]
    fn test_result_extension() {
        let ok: std::result::Result<i32, &str> = Ok(42);
        let err: std::result::Result<i32, &str> = Err("original error");

        assert!(ok.map_internal().is_ok());
        let mapped = err.map_internal();
        assert!(matches!(mapped, Err(AppError::Internal(_))));
    }
}
