use actix_web::{get, web, HttpResponse};
use log::debug;

use crate::models::{ApiResponse, ChartType, DistributionQuery, RecommendationQuery};
use crate::services::{GimmickService, ScoreDistributionService, SongRankingService, SongRecommendationService};
use crate::utils::error::{AppError, AppResult};

// 路径中的谱面类型先解析，非法值直接返回 400
fn chart_path(path: web::Path<(i64, String)>) -> AppResult<(i64, ChartType)> {
    let (song_id, chart_type) = path.into_inner();
    Ok((song_id, chart_type.parse()?))
}

/// Flare Rank 代号只能是 "0" 到 "10"
fn check_flare_rank(flare_rank: &str) -> AppResult<()> {
    match flare_rank.parse::<u8>() {
        Ok(rank) if rank <= 10 && flare_rank == rank.to_string() => Ok(()),
        _ => Err(AppError::BadRequest(format!("无效的 flare_rank: {flare_rank}"))),
    }
}

/// 获取谱面在指定 Flare Rank 下的分数分布
#[utoipa::path(
    get,
    path = "/api/songs/{song_id}/{chart_type}/distribution",
    tag = "songs",
    params(
        ("song_id" = i64, Path, description = "歌曲ID"),
        ("chart_type" = String, Path, description = "谱面类型，如 ESP、CDP"),
        DistributionQuery
    ),
    responses(
        (status = 200, description = "ScoreDistribution"),
        (status = 400, description = "谱面类型或 flare_rank 无效")
    )
)]
#[get("/songs/{song_id}/{chart_type}/distribution")]
pub async fn get_score_distribution(
    path: web::Path<(i64, String)>,
    query: web::Query<DistributionQuery>,
    service: web::Data<ScoreDistributionService>,
) -> AppResult<HttpResponse> {
    let (song_id, chart_type) = chart_path(path)?;
    check_flare_rank(&query.flare_rank)?;
    debug!("接收到分数分布请求: song_id={}, chart_type={}, flare_rank={}", song_id, chart_type, query.flare_rank);

    let distribution = service.get_distribution(song_id, chart_type, &query.flare_rank).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(distribution)))
}

/// 获取推荐谱面
#[utoipa::path(
    get,
    path = "/api/songs/{song_id}/{chart_type}/recommendations",
    tag = "songs",
    params(
        ("song_id" = i64, Path, description = "歌曲ID"),
        ("chart_type" = String, Path, description = "谱面类型"),
        RecommendationQuery
    ),
    responses(
        (status = 200, description = "RecommendedSong 列表", body = Vec<crate::models::RecommendedSong>),
        (status = 400, description = "谱面类型或 flare_rank 无效")
    )
)]
#[get("/songs/{song_id}/{chart_type}/recommendations")]
pub async fn get_recommendations(
    path: web::Path<(i64, String)>,
    query: web::Query<RecommendationQuery>,
    service: web::Data<SongRecommendationService>,
) -> AppResult<HttpResponse> {
    let (song_id, chart_type) = chart_path(path)?;
    let RecommendationQuery { flare_rank, limit } = query.into_inner();
    check_flare_rank(&flare_rank)?;
    debug!("接收到推荐请求: song_id={}, chart_type={}, flare_rank={}", song_id, chart_type, flare_rank);

    let recommended = service
        .get_recommendations(song_id, chart_type, &flare_rank, limit)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(recommended)))
}

/// 获取谱面的 gimmick 与物量信息
#[utoipa::path(
    get,
    path = "/api/songs/{song_id}/{chart_type}/gimmick",
    tag = "songs",
    params(
        ("song_id" = i64, Path, description = "歌曲ID"),
        ("chart_type" = String, Path, description = "谱面类型")
    ),
    responses(
        (status = 200, description = "GimmickAndNotes"),
        (status = 400, description = "谱面类型无效")
    )
)]
#[get("/songs/{song_id}/{chart_type}/gimmick")]
pub async fn get_gimmick(
    path: web::Path<(i64, String)>,
    service: web::Data<GimmickService>,
) -> AppResult<HttpResponse> {
    let (song_id, chart_type) = chart_path(path)?;
    let gimmick = service.get_gimmick_and_notes(song_id, chart_type).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(gimmick)))
}

/// 获取谱面上达成率较高的高段位记录
#[utoipa::path(
    get,
    path = "/api/songs/{song_id}/{chart_type}/nominated",
    tag = "songs",
    params(
        ("song_id" = i64, Path, description = "歌曲ID"),
        ("chart_type" = String, Path, description = "谱面类型")
    ),
    responses(
        (status = 200, description = "NominatedRanking 列表", body = Vec<crate::models::NominatedRanking>),
        (status = 400, description = "谱面类型无效")
    )
)]
#[get("/songs/{song_id}/{chart_type}/nominated")]
pub async fn get_nominated(
    path: web::Path<(i64, String)>,
    service: web::Data<SongRankingService>,
) -> AppResult<HttpResponse> {
    let (song_id, chart_type) = chart_path(path)?;
    let nominated = service.get_nominated(song_id, chart_type).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(nominated)))
}
