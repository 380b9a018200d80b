//! # ماژول توابع کمکی (Utilities)
//!
//! این ماژول تولید و اعتبارسنجی شناسه پروژه‌ها رو ارائه میده.
//!
//! ## مفاهیم Rust:
//! - **static**: متغیرهای با عمر 'static
//! - **lazy_static / once_cell**: مقداردهی اولیه تنبل
//! - **Regex**: عبارات منظم

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

// =====================================
// Constants
// =====================================
/// طول شناسه پروژه در فرم canonical (8-4-4-4-12 با خط تیره)
pub const PROJECT_ID_LENGTH: usize = 36;

// =====================================
// Lazy Statics (Regex patterns)
// =====================================
/// الگوی معتبر برای شناسه پروژه
///
/// # مفاهیم:
/// - `Lazy`: مقداردهی اولیه در اولین استفاده
/// - این بهینه‌تر از ساخت Regex هر بار هست
/// - `pub static`: متغیر استاتیک عمومی با عمر 'static
///
/// فقط فرم hyphenated قبول میشه (گروه‌بندی 8-4-4-4-12، حروف بزرگ هم اوکیه).
/// فرم بدون خط تیره یا braced نامعتبره.
pub static VALID_PROJECT_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
    ).expect("Invalid regex pattern")
});

// =====================================
// Project ID Generation
// =====================================
/// تولید شناسه یکتا برای پروژه جدید
///
/// # مفاهیم:
/// - UUID v4: شناسه تصادفی 122 بیتی
/// - یکتایی آماری - نیازی به چک کردن registry نیست
///
/// # مثال
/// ```rust
/// use project_manager::utils::{generate_project_id, is_valid_project_id};
///
/// let id = generate_project_id();
/// assert_eq!(id.len(), 36);
/// assert!(is_valid_project_id(&id));
/// ```
#[must_use]
pub fn generate_project_id() -> String {
    // Display استاندارد uuid همون فرم lowercase hyphenated هست
    Uuid::new_v4().to_string()
}

// =====================================
// Validation Functions
// =====================================
/// اعتبارسنجی فرمت شناسه پروژه
///
/// # مفاهیم:
/// - `&str`: رفرنس به string (borrowing)
/// - Pure function: بدون side effect، هیچوقت panic نمیکنه
///
/// ورودی خراب فقط `false` برمیگردونه، نه خطا.
///
/// # مثال
/// ```rust
/// use project_manager::utils::is_valid_project_id;
///
/// assert!(is_valid_project_id("9a82854d-7a34-49ad-b0a1-0b2d70b479af"));
/// assert!(!is_valid_project_id("not-a-uuid"));
/// ```
#[must_use]
pub fn is_valid_project_id(candidate: &str) -> bool {
    VALID_PROJECT_ID.is_match(candidate)
}
