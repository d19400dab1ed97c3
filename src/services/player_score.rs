use std::collections::HashMap;
use std::sync::Arc;

use crate::models::CategorizedSongs;
use crate::services::repository::DdrRepository;
use crate::utils::error::AppResult;
use crate::utils::score_utils::categorize_scores;

// 玩家技能对象成绩查询服务
#[derive(Clone)]
pub struct PlayerScoreService {
    repository: Arc<dyn DdrRepository>,
}

impl PlayerScoreService {
    pub fn new(repository: Arc<dyn DdrRepository>) -> Self {
        Self { repository }
    }

    /// 返回按 游玩方式 × 分类 分组的成绩，玩家不存在时返回 None
    pub async fn get_player_scores(&self, name: &str) -> AppResult<Option<CategorizedSongs>> {
        let Some(player) = self.repository.find_player_by_name(name).await? else {
            log::debug!("玩家不存在: {}", name);
            return Ok(None);
        };

        let scores = self.repository.find_scores_by_player(player.id).await?;
        let mut song_ids: Vec<i64> = scores.iter().map(|s| s.song_id).collect();
        song_ids.sort_unstable();
        song_ids.dedup();

        let songs: HashMap<_, _> = self
            .repository
            .find_songs_by_ids(&song_ids)
            .await?
            .into_iter()
            .map(|song| (song.id, song))
            .collect();

        let categorized = categorize_scores(&scores, &songs);
        log::debug!(
            "玩家 {} 共有 {} 条成绩",
            name,
            categorized.cells().map(Vec::len).sum::<usize>()
        );
        Ok(Some(categorized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_song, Category, PlayStyle, PlayerScore};
    use crate::services::sqlite_repository::test_support::memory_repository;

    #[tokio::test]
    async fn groups_scores_of_existing_player() {
        let repo = memory_repository().await;
        repo.upsert_songs(&[sample_song(1, "PARANOiA", "1st"), sample_song(2, "Pluto", "2013")])
            .await
            .unwrap();
        let id = repo.insert_player("alice", 0.0, 0.0).await;
        for (song_id, chart_type) in [(1, "csp"), (2, "EDP"), (3, "ESP")] {
            repo.insert_score(&PlayerScore {
                player_id: id,
                song_id,
                chart_type: chart_type.to_string(),
                score: 900_000,
                flare_rank: "5".to_string(),
                flare_skill: 300.0,
            })
            .await;
        }

        let service = PlayerScoreService::new(Arc::new(repo));
        let categorized = service.get_player_scores("alice").await.unwrap().unwrap();

        let classic_sp = categorized.cell(PlayStyle::Sp, Category::Classic);
        assert_eq!(classic_sp.len(), 2);
        assert_eq!(classic_sp[0].chart_type, "CSP");
        assert_eq!(classic_sp[0].level, 15);
        // 歌曲 3 不存在，仍保留在 CLASSIC
        assert_eq!(classic_sp[1].title, "");
        assert_eq!(categorized.cell(PlayStyle::Dp, Category::White).len(), 1);
    }

    #[tokio::test]
    async fn unknown_player_is_none() {
        let service = PlayerScoreService::new(Arc::new(memory_repository().await));
        assert!(service.get_player_scores("nobody").await.unwrap().is_none());
    }
}
