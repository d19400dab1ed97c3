use actix_web::{get, web, HttpResponse};
use log::debug;

use crate::models::ApiResponse;
use crate::services::{PlayerScoreService, PlayerStatsService};
use crate::utils::error::{AppError, AppResult};

/// 获取玩家的技能对象成绩，按 SP/DP 与 CLASSIC/WHITE/GOLD 分组
#[utoipa::path(
    get,
    path = "/api/players/{name}/scores",
    tag = "players",
    params(("name" = String, Path, description = "玩家名")),
    responses(
        (status = 200, description = "SP/DP → CLASSIC/WHITE/GOLD → SkillBookSong 列表"),
        (status = 404, description = "玩家不存在")
    )
)]
#[get("/players/{name}/scores")]
pub async fn get_player_scores(
    path: web::Path<String>,
    service: web::Data<PlayerScoreService>,
) -> AppResult<HttpResponse> {
    let name = path.into_inner();
    debug!("接收到玩家成绩请求: name={}", name);

    let scores = service
        .get_player_scores(&name)
        .await?
        .ok_or_else(|| AppError::PlayerNotFound(name.clone()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(scores)))
}

/// 获取玩家的技能点统计与段位
#[utoipa::path(
    get,
    path = "/api/players/{name}/stats",
    tag = "players",
    params(("name" = String, Path, description = "玩家名")),
    responses(
        (status = 200, description = "PlayerStats"),
        (status = 404, description = "玩家不存在")
    )
)]
#[get("/players/{name}/stats")]
pub async fn get_player_stats(
    path: web::Path<String>,
    service: web::Data<PlayerStatsService>,
) -> AppResult<HttpResponse> {
    let name = path.into_inner();
    debug!("接收到玩家统计请求: name={}", name);

    let stats = service
        .get_player_stats(&name)
        .await?
        .ok_or_else(|| AppError::PlayerNotFound(name.clone()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(stats)))
}
