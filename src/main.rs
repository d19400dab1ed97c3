use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::io;
use std::str::FromStr;
use std::sync::Arc;

mod config;
mod controllers;
mod models;
mod routes;
mod services;
mod utils;

use config::CONFIG;
use services::{DdrRepository, SongSheetImporter, SqliteRepository};
use utils::error::AppError;

fn to_io_error(e: impl std::fmt::Display) -> io::Error {
    io::Error::other(e.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 加载.env文件
    dotenv().ok();

    // 初始化日志
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // --- 数据库初始化 ---
    log::info!("Connecting to database: {}", CONFIG.database_url);

    // 使用 SqliteConnectOptions 配置连接，并设置 create_if_missing
    let connect_options = SqliteConnectOptions::from_str(&CONFIG.database_url)
        .map_err(|e| to_io_error(AppError::ConfigError(format!("DATABASE_URL 无效: {e}"))))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(CONFIG.max_connections)
        .connect_with(connect_options)
        .await
        .map_err(to_io_error)?;

    let sqlite_repository = SqliteRepository::new(pool);
    sqlite_repository.init_tables().await.map_err(to_io_error)?;
    log::info!("Database initialized successfully");

    let repository: Arc<dyn DdrRepository> = Arc::new(sqlite_repository);

    // 导入歌曲表与 gimmick 表
    SongSheetImporter::new(repository.clone())
        .import_from_config(&CONFIG)
        .await
        .map_err(to_io_error)?;
    // --- 数据库初始化结束 ---

    let host = CONFIG.host.clone();
    let port = CONFIG.port;
    let recommendation_limit = CONFIG.recommendation_limit;
    log::info!("Starting server at http://{}:{}", host, port);

    // 创建并启动HTTP服务器
    HttpServer::new(move || {
        // 配置CORS
        let cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        let cors = if CONFIG.cors_allowed_origins.iter().any(|o| o == "*") {
            cors.allow_any_origin()
        } else {
            CONFIG
                .cors_allowed_origins
                .iter()
                .fold(cors, |cors, origin| cors.allowed_origin(origin))
        };

        let repository = repository.clone();
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .configure(move |cfg| routes::register_services(cfg, repository, recommendation_limit))
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
