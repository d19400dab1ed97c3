use std::sync::Arc;

use crate::models::{ChartType, ScoreDistribution};
use crate::services::repository::DdrRepository;
use crate::utils::distribution_utils::{calculate_distribution, DEFAULT_SCORE_INTERVAL, THEORETICAL_MAX_SCORE};
use crate::utils::error::AppResult;

#[derive(Clone)]
pub struct ScoreDistributionService {
    repository: Arc<dyn DdrRepository>,
}

impl ScoreDistributionService {
    pub fn new(repository: Arc<dyn DdrRepository>) -> Self {
        Self { repository }
    }

    /// 某谱面在某 Flare Rank 下的分数分布，无数据时返回空分布
    pub async fn get_distribution(
        &self,
        song_id: i64,
        chart_type: ChartType,
        flare_rank: &str,
    ) -> AppResult<ScoreDistribution> {
        let scores = self
            .repository
            .find_score_values(song_id, chart_type, flare_rank)
            .await?;
        log::debug!(
            "计算分数分布: song_id={}, chart_type={}, flare_rank={}, 样本数={}",
            song_id,
            chart_type,
            flare_rank,
            scores.len()
        );
        Ok(calculate_distribution(&scores, DEFAULT_SCORE_INTERVAL, THEORETICAL_MAX_SCORE))
    }
}
