use actix_web::web;
use std::sync::Arc;

use crate::controllers;
use crate::services::{
    DdrRepository, GimmickService, PlayerScoreService, PlayerStatsService, ScoreDistributionService,
    SongRankingService, SongRecommendationService,
};

/// 注册各服务的共享数据，所有服务共用同一个数据访问实现
pub fn register_services(
    cfg: &mut web::ServiceConfig,
    repository: Arc<dyn DdrRepository>,
    recommendation_limit: usize,
) {
    cfg.app_data(web::Data::new(PlayerScoreService::new(repository.clone())))
        .app_data(web::Data::new(PlayerStatsService::new(repository.clone())))
        .app_data(web::Data::new(ScoreDistributionService::new(repository.clone())))
        .app_data(web::Data::new(SongRankingService::new(repository.clone())))
        .app_data(web::Data::new(SongRecommendationService::new(
            repository.clone(),
            recommendation_limit,
        )))
        .app_data(web::Data::new(GimmickService::new(repository)));
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // API 路由
    cfg.service(
        web::scope("/api")
            .service(controllers::health_check) // GET /api/health
            // Players
            .service(controllers::get_player_scores) // GET /api/players/{name}/scores
            .service(controllers::get_player_stats) // GET /api/players/{name}/stats
            // Songs
            .service(controllers::get_score_distribution)
            .service(controllers::get_recommendations)
            .service(controllers::get_gimmick)
            .service(controllers::get_nominated)
            // Rankings
            .service(controllers::get_rankings), // GET /api/rankings/{grade}
    );

    // OpenAPI 文档
    cfg.service(controllers::openapi_json);
}
