use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("找不到玩家: {0}")]
    PlayerNotFound(String),

    #[error("无效的谱面类型: {0}")]
    InvalidChartType(String),

    #[error("无效的段位: {0}")]
    InvalidGrade(String),

    #[error("错误的请求: {0}")]
    BadRequest(String),

    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV错误: {0}")]
    CsvError(#[from] csv::Error),

    #[error("配置错误: {0}")]
    ConfigError(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl AppError {
    fn kind(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::PlayerNotFound(_) => (StatusCode::NOT_FOUND, "player_not_found"),
            AppError::InvalidChartType(_) => (StatusCode::BAD_REQUEST, "invalid_chart_type"),
            AppError::InvalidGrade(_) => (StatusCode::BAD_REQUEST, "invalid_grade"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            AppError::IoError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
            AppError::CsvError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "csv_error"),
            AppError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.kind().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_type) = self.kind();
        if status_code.is_server_error() {
            log::error!("请求处理失败: {self}");
        }

        HttpResponse::build(status_code).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        })
    }
}
