use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::repository::DdrRepository;
use crate::utils::error::AppResult;
use crate::utils::sheet_parser::{parse_gimmick_rows, parse_song_rows};

// 歌曲表/gimmick 表导入
#[derive(Clone)]
pub struct SongSheetImporter {
    repository: Arc<dyn DdrRepository>,
}

impl SongSheetImporter {
    pub fn new(repository: Arc<dyn DdrRepository>) -> Self {
        Self { repository }
    }

    /// 启动时导入两张表，文件不存在时跳过
    pub async fn import_from_config(&self, config: &AppConfig) -> AppResult<()> {
        let song_path = config.song_sheet_path();
        if song_path.exists() {
            let count = self.import_songs(&song_path).await?;
            log::info!("歌曲表导入完成，共 {} 首: {}", count, song_path.display());
        } else {
            log::warn!("歌曲表不存在，跳过导入: {}", song_path.display());
        }

        let gimmick_path = config.gimmick_sheet_path();
        if gimmick_path.exists() {
            let count = self.import_gimmicks(&gimmick_path).await?;
            log::info!("gimmick 表导入完成，共 {} 条: {}", count, gimmick_path.display());
        } else {
            log::warn!("gimmick 表不存在，跳过导入: {}", gimmick_path.display());
        }

        Ok(())
    }

    pub async fn import_songs(&self, path: &Path) -> AppResult<usize> {
        log::debug!("正在读取歌曲表，路径: {}", path.display());
        let rows = read_sheet(std::fs::File::open(path)?)?;
        let songs = parse_song_rows(&rows);
        self.repository.upsert_songs(&songs).await
    }

    pub async fn import_gimmicks(&self, path: &Path) -> AppResult<usize> {
        log::debug!("正在读取 gimmick 表，路径: {}", path.display());
        let rows = read_sheet(std::fs::File::open(path)?)?;
        let gimmicks = parse_gimmick_rows(&rows);
        self.repository.replace_gimmick_and_notes(&gimmicks).await
    }
}

/// 读取带表头的 CSV，各行长度允许不一致
fn read_sheet<R: Read>(reader: R) -> AppResult<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChartType;
    use crate::services::sqlite_repository::test_support::memory_repository;
    use std::fs;

    #[test]
    fn reads_ragged_rows_after_header() {
        let data = "id,title\n1,PARANOiA,x,1st\n2\n";
        let rows = read_sheet(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][3], "1st");
        assert_eq!(rows[1], vec!["2".to_string()]);
    }

    #[tokio::test]
    async fn imports_both_sheets_from_data_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("songs.csv"),
            "id,title,artist,version,bpm,x,besp,bsp,dsp,esp,csp,bdp,ddp,edp,cdp\n\
             10,Fascination MAXX,x,EXTREME,,,3,7,12,16,18,7,12,16,18\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("gimmicks.csv"),
            "id,title,chart,soflan,stop,shock,notes,freeze,shock_arrow\n\
             10,Fascination MAXX,C,1,1,0,900,30,0\n",
        )
        .unwrap();

        let repo = Arc::new(memory_repository().await);
        let config = AppConfig {
            data_path: dir.path().to_string_lossy().into_owned(),
            song_sheet_file: "songs.csv".to_string(),
            gimmick_sheet_file: "gimmicks.csv".to_string(),
            ..AppConfig::default()
        };
        SongSheetImporter::new(repo.clone()).import_from_config(&config).await.unwrap();

        let songs = repo.find_songs_by_ids(&[10]).await.unwrap();
        assert_eq!(songs[0].version, "EXTREME");
        assert_eq!(songs[0].c_sp, 18);

        let gimmick = repo
            .find_gimmick_and_notes(10, ChartType::Cdp.difficulty_initial())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(gimmick.notes, 900);
        assert!(gimmick.has_stop);
    }

    #[tokio::test]
    async fn missing_sheets_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(memory_repository().await);
        let config = AppConfig {
            data_path: dir.path().to_string_lossy().into_owned(),
            ..AppConfig::default()
        };
        SongSheetImporter::new(repo.clone()).import_from_config(&config).await.unwrap();
        assert!(repo.find_songs_by_ids(&[10]).await.unwrap().is_empty());
    }
}
