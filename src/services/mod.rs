pub mod gimmick;
pub mod player_score;
pub mod player_stats;
pub mod repository;
pub mod score_distribution;
pub mod song_ranking;
pub mod song_recommendation;
pub mod song_sheet;
pub mod sqlite_repository;

// 重新导出主要的服务结构体，以便可以直接从 services 模块导入
pub use gimmick::GimmickService;
pub use player_score::PlayerScoreService;
pub use player_stats::PlayerStatsService;
pub use repository::DdrRepository;
pub use score_distribution::ScoreDistributionService;
pub use song_ranking::SongRankingService;
pub use song_recommendation::SongRecommendationService;
pub use song_sheet::SongSheetImporter;
pub use sqlite_repository::SqliteRepository;
