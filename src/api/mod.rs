//! # لایه API
//!
//! این ماژول HTTP handlers و routing رو مدیریت میکنه.
//!
//! ## مفاهیم Rust + Axum:
//! - **Router**: تعریف مسیرها
//! - **Handler Functions**: پردازش request‌ها
//! - **Extractors**: استخراج داده از request
//! - **State**: اشتراک state بین handlers
//! - **Middleware**: پردازش قبل/بعد از handler
//! - **Tower**: زیرساخت middleware
//!
//! ## ساختار URL‌ها:
//! - `GET /projects` - لیست پروژه‌ها (فیلتر با query string)
//! - `POST /projects` - ساخت پروژه
//! - `PUT /projects/:id` - جایگزینی پروژه (با اعتبارسنجی شناسه)
//! - `DELETE /projects/:id` - حذف پروژه (با اعتبارسنجی شناسه)
//! - `GET /health` - Health check

mod handlers;
mod middleware;

pub use handlers::*;
pub use middleware::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, services::AppState, store::ProjectStore};

// =====================================
// Router Builder
// =====================================
/// ساخت Router اصلی برنامه
///
/// # مفاهیم:
/// - `Router::new()`: شروع router خالی
/// - `.route()`: اضافه کردن route
/// - `.merge()`: ترکیب router‌ها
/// - `.layer()`: اضافه کردن middleware
/// - `.with_state()`: تزریق state
///
/// ترتیب middleware‌ها مهمه: `log_requests` بیرونی‌ترین لایه‌ست و برای
/// هر request اجرا میشه؛ گارد شناسه فقط روی مسیرهای `/projects/:id`
/// میشینه و قبل از handler میتونه request رو قطع کنه.
///
/// # Arguments
/// * `store` - مخزن پروژه‌ها
/// * `config` - تنظیمات برنامه
pub fn create_router(store: ProjectStore, config: Config) -> Router {
    // ساخت AppState
    let state = AppState::new(store, config);

    // ساخت router با گروه‌بندی
    Router::new()
        // Route‌های کالکشن
        .route(
            "/projects",
            get(handlers::project::list_projects).post(handlers::project::create_project),
        )

        // Route‌های تکی با گارد شناسه
        .merge(guarded_project_routes())

        // Health check
        .route("/health", get(handlers::health::health_check))

        // Middleware‌های عمومی
        .layer(
            ServiceBuilder::new()
                // لاگ `[METHOD] path` برای تک‌تک request‌ها
                .layer(axum_middleware::from_fn(middleware::log_requests))

                // Tracing - لاگ کردن request‌ها در سطح HTTP
                .layer(TraceLayer::new_for_http())

                // Timeout - حداکثر زمان پردازش
                .layer(TimeoutLayer::new(Duration::from_secs(30)))

                // Compression - فشرده‌سازی response
                .layer(CompressionLayer::new())

                // CORS - اجازه دسترسی از دامنه‌های دیگه
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any)
                )
        )

        // تزریق state به همه handlers
        .with_state(state)
}

/// Route‌های `/projects/:id`
///
/// # مفاهیم:
/// - `route_layer`: middleware فقط برای route‌های همین router
/// - جایگزینی و حذف هر دو پشت گارد اعتبارسنجی شناسه‌ان
fn guarded_project_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/:id",
            put(handlers::project::update_project)
                .delete(handlers::project::delete_project),
        )
        .route_layer(axum_middleware::from_fn(middleware::validate_project_id))
}
