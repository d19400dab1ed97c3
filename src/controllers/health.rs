use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;

use crate::models::{ApiResponse, HealthResponse};

/// 健康检查
///
/// 返回 `{status, timestamp}`，timestamp 为服务端当前时间 (RFC 3339)。
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "服务健康，data 为 HealthResponse")
    )
)]
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
