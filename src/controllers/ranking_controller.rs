use actix_web::{get, web, HttpResponse};
use log::debug;

use crate::models::{ApiResponse, RankingQuery};
use crate::services::SongRankingService;
use crate::utils::error::AppResult;

/// 获取指定段位的谱面达成率排行 (每页 50 条)
#[utoipa::path(
    get,
    path = "/api/rankings/{grade}",
    tag = "rankings",
    params(
        ("grade" = String, Path, description = "段位名，如 SUN+"),
        RankingQuery
    ),
    responses(
        (status = 200, description = "SP/DP → CLASSIC/WHITE/GOLD → RankingPage"),
        (status = 400, description = "段位无效")
    )
)]
#[get("/rankings/{grade}")]
pub async fn get_rankings(
    path: web::Path<String>,
    query: web::Query<RankingQuery>,
    service: web::Data<SongRankingService>,
) -> AppResult<HttpResponse> {
    let grade = path.into_inner();
    let page = query.page.unwrap_or(1);
    debug!("接收到排行请求: grade={}, page={}", grade, page);

    let ranked = service.get_ranked_songs(&grade, page).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(ranked)))
}
