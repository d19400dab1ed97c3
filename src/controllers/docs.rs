use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::models::{
    Category, ChartType, GimmickAndNotes, HealthResponse, HistogramBucket, NominatedRanking, PlayStyle,
    PlayerStats, RankingPage, RankingSong, RecommendedSong, ScoreDistribution, SkillBookSong,
    SkillHistoryPoint, Stats,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controllers::health::health_check,
        crate::controllers::player_controller::get_player_scores,
        crate::controllers::player_controller::get_player_stats,
        crate::controllers::song_controller::get_score_distribution,
        crate::controllers::song_controller::get_recommendations,
        crate::controllers::song_controller::get_gimmick,
        crate::controllers::song_controller::get_nominated,
        crate::controllers::ranking_controller::get_rankings,
    ),
    components(schemas(
        ChartType,
        PlayStyle,
        Category,
        HealthResponse,
        ScoreDistribution,
        HistogramBucket,
        RecommendedSong,
        GimmickAndNotes,
        NominatedRanking,
        RankingPage,
        RankingSong,
        SkillBookSong,
        PlayerStats,
        Stats,
        SkillHistoryPoint,
    )),
    tags(
        (name = "health", description = "服务状态"),
        (name = "players", description = "玩家成绩与统计"),
        (name = "songs", description = "谱面分布、推荐与 gimmick"),
        (name = "rankings", description = "段位达成率排行")
    ),
    info(title = "DDR Skill Backend API", version = "1.0.0")
)]
pub struct ApiDoc;

/// OpenAPI 文档 (JSON)
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
