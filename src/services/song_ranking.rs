use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{ChartType, NominatedRanking, RankingSongsSpDp, Song};
use crate::services::repository::DdrRepository;
use crate::utils::error::AppResult;
use crate::utils::grade::SkillGrade;
use crate::utils::ranking_utils::{nominated_rankings, rank_songs};

// 段位达成率排行服务
#[derive(Clone)]
pub struct SongRankingService {
    repository: Arc<dyn DdrRepository>,
}

impl SongRankingService {
    pub fn new(repository: Arc<dyn DdrRepository>) -> Self {
        Self { repository }
    }

    /// 指定段位的分页排行，`grade` 必须是段位表中的名称 (如 "SUN+")
    pub async fn get_ranked_songs(&self, grade: &str, page: i64) -> AppResult<RankingSongsSpDp> {
        let grade = grade.parse::<SkillGrade>()?.to_string();
        let rows = self.repository.find_rankings_by_grade(&grade).await?;

        let mut song_ids: Vec<i64> = rows.iter().map(|r| r.song_id).collect();
        song_ids.sort_unstable();
        song_ids.dedup();
        let songs = self.load_songs(&song_ids).await?;

        log::debug!("段位 {} 的排行数据共 {} 条，请求第 {} 页", grade, rows.len(), page);
        Ok(rank_songs(&rows, &songs, &grade, page))
    }

    pub async fn get_nominated(
        &self,
        song_id: i64,
        chart_type: ChartType,
    ) -> AppResult<Vec<NominatedRanking>> {
        let rows = self.repository.find_rankings_by_chart(song_id, chart_type).await?;
        Ok(nominated_rankings(&rows, song_id, chart_type))
    }

    async fn load_songs(&self, ids: &[i64]) -> AppResult<HashMap<i64, Song>> {
        Ok(self
            .repository
            .find_songs_by_ids(ids)
            .await?
            .into_iter()
            .map(|song| (song.id, song))
            .collect())
    }
}
