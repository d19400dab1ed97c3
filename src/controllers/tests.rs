use actix_web::{test, App};
use serde_json::Value;
use std::sync::Arc;

use crate::models::{sample_song, PlayerScore, RankingBaseRow};
use crate::routes;
use crate::services::sqlite_repository::test_support::memory_repository;
use crate::services::{DdrRepository, SqliteRepository};

async fn seeded_repository() -> Arc<SqliteRepository> {
    let repo = memory_repository().await;
    repo.upsert_songs(&[sample_song(1, "MAX 300", "MAX")]).await.unwrap();
    let id = repo.insert_player("alice", 80_000.0, 2_500.0).await;
    repo.insert_score(&PlayerScore {
        player_id: id,
        song_id: 1,
        chart_type: "CSP".to_string(),
        score: 987_650,
        flare_rank: "10".to_string(),
        flare_skill: 700.0,
    })
    .await;
    Arc::new(repo)
}

fn ranking_row(song_id: i64, grade: &str, achieved: i64) -> RankingBaseRow {
    RankingBaseRow {
        song_id,
        category: "GOLD".to_string(),
        chart_type: "ESP".to_string(),
        grade: grade.to_string(),
        play_style: "SP".to_string(),
        achieved_count: achieved,
        total_count: 100,
        flare_rank: "10".to_string(),
    }
}

fn chart_score(player_id: i64, song_id: i64, chart_type: &str, flare_rank: &str) -> PlayerScore {
    PlayerScore {
        player_id,
        song_id,
        chart_type: chart_type.to_string(),
        score: 950_000,
        flare_rank: flare_rank.to_string(),
        flare_skill: 600.0,
    }
}

macro_rules! init_app {
    ($repo:expr) => {{
        let repository: Arc<dyn DdrRepository> = $repo;
        test::init_service(
            App::new()
                .configure(move |cfg| routes::register_services(cfg, repository, 1568))
                .configure(routes::configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = init_app!(seeded_repository().await);
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["code"], 200);
    assert_eq!(body["data"]["status"], "ok");
}

#[actix_web::test]
async fn player_scores_are_grouped() {
    let app = init_app!(seeded_repository().await);
    let req = test::TestRequest::get().uri("/api/players/alice/scores").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let classic = &body["data"]["SP"]["CLASSIC"];
    assert_eq!(classic[0]["title"], "MAX 300");
    assert_eq!(classic[0]["chartType"], "CSP");
    assert_eq!(body["data"]["DP"]["GOLD"].as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn player_stats_include_grade_strings() {
    let app = init_app!(seeded_repository().await);
    let req = test::TestRequest::get().uri("/api/players/alice/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["SP"]["grade"], "SUN+");
    assert_eq!(body["data"]["DP"]["grade"], "MERCURY");
}

#[actix_web::test]
async fn unknown_player_is_404() {
    let app = init_app!(seeded_repository().await);
    let req = test::TestRequest::get().uri("/api/players/nobody/stats").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "player_not_found");
}

#[actix_web::test]
async fn bad_chart_type_is_400() {
    let app = init_app!(seeded_repository().await);
    let req = test::TestRequest::get()
        .uri("/api/songs/1/XSP/distribution?flare_rank=10")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_chart_type");
}

#[actix_web::test]
async fn bad_flare_rank_is_400() {
    let app = init_app!(seeded_repository().await);
    for uri in [
        "/api/songs/1/CSP/distribution?flare_rank=11",
        "/api/songs/1/CSP/recommendations?flare_rank=EX",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), 400, "{uri}");
    }
}

#[actix_web::test]
async fn distribution_for_lowercase_chart_type() {
    let app = init_app!(seeded_repository().await);
    let req = test::TestRequest::get()
        .uri("/api/songs/1/csp/distribution?flare_rank=10")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["minScore"], 987_650);
    assert_eq!(body["data"]["distribution"][0]["count"], 1);
}

#[actix_web::test]
async fn gimmick_defaults_when_absent() {
    let app = init_app!(seeded_repository().await);
    let req = test::TestRequest::get().uri("/api/songs/1/CSP/gimmick").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["hasSoflan"], false);
    assert_eq!(body["data"]["notes"], 0);
}

#[actix_web::test]
async fn unknown_grade_is_400() {
    let app = init_app!(seeded_repository().await);
    let req = test::TestRequest::get().uri("/api/rankings/PLANET").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn openapi_lists_paths() {
    let app = init_app!(seeded_repository().await);
    let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body["paths"]["/api/rankings/{grade}"].is_object());
    assert!(body["paths"]["/api/health"].is_object());
    assert!(body["components"]["schemas"]["RankingPage"].is_object());
    assert!(body["components"]["schemas"]["SkillBookSong"].is_object());
}

#[actix_web::test]
async fn rankings_second_page_keeps_group_total() {
    let repo = seeded_repository().await;
    for i in 0..75 {
        repo.insert_ranking(&ranking_row(1, "SUN", i)).await;
    }
    let app = init_app!(repo);

    let req = test::TestRequest::get().uri("/api/rankings/sun?page=2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let gold = &body["data"]["SP"]["GOLD"];
    assert_eq!(gold["totalCount"], 75);
    assert_eq!(gold["entries"].as_array().map(Vec::len), Some(25));
    // 降序排列，第二页第一条是第 51 高的达成率
    assert_eq!(gold["entries"][0]["overallPercentage"], 24.0);
    assert_eq!(gold["entries"][0]["flareRank"], "EX");
    assert_eq!(body["data"]["DP"]["GOLD"]["totalCount"], 0);
}

#[actix_web::test]
async fn rankings_default_to_first_page() {
    let repo = seeded_repository().await;
    for i in 0..60 {
        repo.insert_ranking(&ranking_row(1, "WORLD", i)).await;
    }
    let app = init_app!(repo);

    let req = test::TestRequest::get().uri("/api/rankings/WORLD").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["SP"]["GOLD"]["entries"].as_array().map(Vec::len), Some(50));
}

#[actix_web::test]
async fn nominated_lists_high_grades_over_floor() {
    let repo = seeded_repository().await;
    repo.insert_ranking(&ranking_row(1, "WORLD", 20)).await;
    repo.insert_ranking(&ranking_row(1, "SUN+", 14)).await;
    repo.insert_ranking(&ranking_row(1, "SATURN", 90)).await;
    let app = init_app!(repo);

    let req = test::TestRequest::get().uri("/api/songs/1/ESP/nominated").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let nominated = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(nominated.len(), 1);
    assert_eq!(nominated[0]["grade"], "WORLD");
    assert_eq!(nominated[0]["overallPercentage"], 20.0);
}

#[actix_web::test]
async fn recommendations_respect_limit_query() {
    let repo = seeded_repository().await;
    repo.upsert_songs(&[sample_song(2, "Pluto", "2013"), sample_song(3, "Lachryma", "A20")])
        .await
        .unwrap();
    // alice (id 1) 已有 1/CSP/10
    repo.insert_score(&chart_score(1, 2, "ESP", "9")).await;
    repo.insert_score(&chart_score(1, 3, "EDP", "8")).await;
    let bob = repo.insert_player("bob", 0.0, 0.0).await;
    repo.insert_score(&chart_score(bob, 1, "CSP", "10")).await;
    repo.insert_score(&chart_score(bob, 2, "ESP", "9")).await;
    let app = init_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/songs/1/CSP/recommendations?flare_rank=10&limit=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let recommended = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(recommended.len(), 1);
    assert_eq!(recommended[0]["songId"], 2);
    assert_eq!(recommended[0]["count"], 2);
    assert_eq!(recommended[0]["percentage"], 100.0);
    assert_eq!(recommended[0]["flareRank"], "IX");
}
