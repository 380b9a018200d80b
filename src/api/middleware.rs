//! # Middleware
//!
//! Middleware‌های سفارشی برای پردازش request/response
//!
//! ## مفاهیم:
//! - **Middleware**: کد که قبل/بعد از handler اجرا میشه
//! - **Tower**: کتابخانه middleware در اکوسیستم Rust
//! - **Next**: ادامه زنجیره middleware
//! - **Short-circuit**: قطع زنجیره با برگردوندن response terminal
//!
//! ## زنجیره این سرویس
//! دو middleware داریم و ترتیبشون ثابته:
//! 1. `log_requests` - عمومی، همیشه ادامه میده
//! 2. `validate_project_id` - فقط روی `/projects/:id`، میتونه قطع کنه

use axum::{
    body::Body,
    extract::Path,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{debug, info};

use crate::{error::AppError, utils};

// =====================================
// Request Logger Middleware
// =====================================
/// لاگ کردن هر request به شکل `[METHOD] path`
///
/// # مفاهیم:
/// - `async fn` middleware
/// - `Next`: ادامه زنجیره middleware
/// - `Instant`: اندازه‌گیری زمان
///
/// این middleware هیچوقت request رو قطع نمیکنه - لاگ میکنه و رد میشه.
/// بعد از برگشتن response هم status و latency رو در سطح debug میگه.
///
/// # استفاده:
/// ```rust,ignore
/// let app = Router::new()
///     .layer(axum::middleware::from_fn(log_requests));
/// ```
pub async fn log_requests(
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    // همون فرمت `[METHOD] path`
    info!("[{}] {}", method, path);

    // شروع تایمر و اجرای بقیه زنجیره
    let start = Instant::now();
    let response = next.run(request).await;

    debug!(
        method = %method,
        path = %path,
        status = %response.status(),
        duration_ms = %start.elapsed().as_millis(),
        "Request completed"
    );

    response
}

// =====================================
// Project ID Guard Middleware
// =====================================
/// گارد اعتبارسنجی شناسه پروژه
///
/// # مفاهیم:
/// - Extractor در middleware: `Path` قبل از `Request` میاد
/// - برگردوندن `Err(AppError)` یعنی short-circuit - زنجیره همینجا تموم
///   میشه و handler و مخزن هیچوقت اجرا نمیشن
///
/// فقط روی route‌هایی که پارامتر `id` دارن (جایگزینی و حذف) میشینه.
/// شناسه خراب با 400 و بدنه `{"error": "Invalid project ID. (Middleware)"}`
/// رد میشه؛ شناسه سالم عبور میکنه.
///
/// # استفاده:
/// ```rust,ignore
/// let guarded = Router::new()
///     .route("/projects/:id", put(update_project))
///     .route_layer(axum::middleware::from_fn(validate_project_id));
/// ```
pub async fn validate_project_id(
    Path(id): Path<String>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !utils::is_valid_project_id(&id) {
        return Err(AppError::InvalidProjectId);
    }

    // ادامه
    Ok(next.run(request).await)
}
