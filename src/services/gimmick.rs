use std::sync::Arc;

use crate::models::{ChartType, GimmickAndNotes};
use crate::services::repository::DdrRepository;
use crate::utils::error::AppResult;

#[derive(Clone)]
pub struct GimmickService {
    repository: Arc<dyn DdrRepository>,
}

impl GimmickService {
    pub fn new(repository: Arc<dyn DdrRepository>) -> Self {
        Self { repository }
    }

    /// 查询谱面 gimmick 信息，按难度首字母匹配；没有记录时全部为 false/0
    pub async fn get_gimmick_and_notes(
        &self,
        song_id: i64,
        chart_type: ChartType,
    ) -> AppResult<GimmickAndNotes> {
        let row = self
            .repository
            .find_gimmick_and_notes(song_id, chart_type.difficulty_initial())
            .await?;
        Ok(row.map(GimmickAndNotes::from).unwrap_or_default())
    }
}
