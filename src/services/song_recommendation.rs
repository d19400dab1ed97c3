use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{ChartType, RecommendedSong};
use crate::services::repository::DdrRepository;
use crate::utils::error::AppResult;
use crate::utils::ranking_utils::recommend_songs;

/// 推荐谱面服务
///
/// 找出把目标谱面作为技能对象的玩家，再统计他们的其他技能对象谱面。
#[derive(Clone)]
pub struct SongRecommendationService {
    repository: Arc<dyn DdrRepository>,
    default_limit: usize,
}

impl SongRecommendationService {
    pub fn new(repository: Arc<dyn DdrRepository>, default_limit: usize) -> Self {
        Self {
            repository,
            default_limit,
        }
    }

    pub async fn get_recommendations(
        &self,
        song_id: i64,
        chart_type: ChartType,
        flare_rank: &str,
        limit: Option<usize>,
    ) -> AppResult<Vec<RecommendedSong>> {
        let player_ids = self
            .repository
            .find_player_ids_with_chart(song_id, chart_type, flare_rank)
            .await?;
        if player_ids.is_empty() {
            return Ok(Vec::new());
        }

        let other_scores = self
            .repository
            .find_scores_by_players_excluding(&player_ids, song_id, chart_type, flare_rank)
            .await?;

        let mut song_ids: Vec<i64> = other_scores.iter().map(|s| s.song_id).collect();
        song_ids.sort_unstable();
        song_ids.dedup();
        let songs: HashMap<_, _> = self
            .repository
            .find_songs_by_ids(&song_ids)
            .await?
            .into_iter()
            .map(|song| (song.id, song))
            .collect();

        log::debug!(
            "推荐计算: 目标玩家 {} 人，其他成绩 {} 条",
            player_ids.len(),
            other_scores.len()
        );
        Ok(recommend_songs(
            player_ids.len(),
            &other_scores,
            &songs,
            limit.unwrap_or(self.default_limit),
        ))
    }
}
