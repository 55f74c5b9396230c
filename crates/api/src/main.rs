use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use insightdeal_core::analyzer::{fake, trend};
use insightdeal_core::domain::contract::DealPayload;
use insightdeal_core::domain::verdict::{DealBadge, EvaluatedDeal, QualityVerdict, TrendLabel};
use insightdeal_core::DealQualityAnalyzer;

const MAX_BATCH_SIZE: usize = 500;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = insightdeal_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let port = match settings.port() {
        Ok(port) => port,
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            return Err(e);
        }
    };

    let state = AppState {
        analyzer: DealQualityAnalyzer::default(),
    };
    let app = router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/badges", get(list_badges))
        .route("/deals/evaluate", post(evaluate_deal))
        .route("/deals/evaluate/batch", post(evaluate_batch))
        .route("/deals/suspicious", post(check_suspicious))
        .route("/trends", post(classify_trend))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    analyzer: DealQualityAnalyzer,
}

#[derive(Debug, Serialize)]
struct BadgeInfo {
    code: &'static str,
    emoji: &'static str,
    label: &'static str,
    color: &'static str,
    min_score: u8,
    recommendation: &'static str,
}

async fn list_badges() -> Json<Vec<BadgeInfo>> {
    let badges = DealBadge::ALL
        .into_iter()
        .map(|badge| BadgeInfo {
            code: badge.code(),
            emoji: badge.emoji(),
            label: badge.label(),
            color: badge.color(),
            min_score: badge.min_score(),
            recommendation: badge.recommendation(),
        })
        .collect();
    Json(badges)
}

async fn evaluate_deal(
    State(state): State<AppState>,
    Json(payload): Json<DealPayload>,
) -> Json<QualityVerdict> {
    Json(state.analyzer.evaluate_payload(payload))
}

async fn evaluate_batch(
    State(state): State<AppState>,
    Json(payloads): Json<Vec<DealPayload>>,
) -> Result<Json<Vec<EvaluatedDeal>>, StatusCode> {
    if payloads.len() > MAX_BATCH_SIZE {
        tracing::warn!(
            batch_len = payloads.len(),
            max = MAX_BATCH_SIZE,
            "batch too large"
        );
        return Err(StatusCode::PAYLOAD_TOO_LARGE);
    }

    let items = payloads
        .into_iter()
        .map(|payload| state.analyzer.assess(payload))
        .collect();
    Ok(Json(items))
}

#[derive(Debug, Deserialize)]
struct SuspiciousRequest {
    title: String,
}

#[derive(Debug, Serialize)]
struct SuspiciousResponse {
    suspicious: bool,
    clickbait_hits: usize,
}

async fn check_suspicious(
    State(state): State<AppState>,
    Json(req): Json<SuspiciousRequest>,
) -> Json<SuspiciousResponse> {
    Json(SuspiciousResponse {
        suspicious: state.analyzer.is_suspicious(&req.title),
        clickbait_hits: fake::clickbait_hits(&req.title),
    })
}

#[derive(Debug, Deserialize)]
struct TrendRequest {
    scores: Vec<i32>,
}

#[derive(Debug, Serialize)]
struct TrendResponse {
    trend: TrendLabel,
    slope: f64,
}

async fn classify_trend(
    State(state): State<AppState>,
    Json(req): Json<TrendRequest>,
) -> Json<TrendResponse> {
    Json(TrendResponse {
        trend: state.analyzer.classify_trend(&req.scores),
        slope: trend::recent_slope(&req.scores),
    })
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &insightdeal_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState {
            analyzer: DealQualityAnalyzer::default(),
        })
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let req = Request::builder()
            .uri("/healthz")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn evaluate_returns_verdict() {
        let (status, body) = post_json(
            "/deals/evaluate",
            json!({
                "title": "완전 대박 꿀딜 강추",
                "site_name": "ppomppu",
                "view_count": 12000,
                "comment_count": 60,
                "like_count": 45,
                "dislike_count": 5,
                "created_at": "30분 전",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 92);
        assert_eq!(body["badge"], "SUPER_HOT");
        assert_eq!(body["breakdown"]["site"], 85);
    }

    #[tokio::test]
    async fn evaluate_falls_back_on_negative_counter() {
        let (status, body) = post_json(
            "/deals/evaluate",
            json!({ "title": "대박", "view_count": -5 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 50);
        assert_eq!(body["badge"], "OKAY");
        assert_eq!(body["recommendation"], "분석 중...");
    }

    #[tokio::test]
    async fn evaluate_rejects_malformed_json() {
        let req = Request::builder()
            .method("POST")
            .uri("/deals/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert!(res.status().is_client_error());
    }

    #[tokio::test]
    async fn batch_returns_side_signals() {
        let (status, body) = post_json(
            "/deals/evaluate/batch",
            json!([
                { "title": "절대 무조건 100% 확실한 보장!!!" },
                { "title": "가성비 추천", "recent_scores": [50, 60, 70] },
            ]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["suspicious"], true);
        assert!(items[0].get("trend").is_none());
        assert_eq!(items[1]["suspicious"], false);
        assert_eq!(items[1]["trend"], "IMPROVING");
    }

    #[tokio::test]
    async fn batch_rejects_oversized_input() {
        let payloads: Vec<Value> = (0..=MAX_BATCH_SIZE)
            .map(|i| json!({ "title": format!("deal {i}") }))
            .collect();
        let (status, _) = post_json("/deals/evaluate/batch", Value::Array(payloads)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn suspicious_counts_patterns() {
        let (status, body) = post_json(
            "/deals/suspicious",
            json!({ "title": "마지막 기회 에어팟" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suspicious"], false);
        assert_eq!(body["clickbait_hits"], 2);
    }

    #[tokio::test]
    async fn trends_classify_recent_scores() {
        let (_, body) = post_json("/trends", json!({ "scores": [70, 60, 50] })).await;
        assert_eq!(body["trend"], "DECLINING");
        assert_eq!(body["slope"], -10.0);

        let (_, body) = post_json("/trends", json!({ "scores": [70, 72] })).await;
        assert_eq!(body["trend"], "STABLE");
        assert_eq!(body["slope"], 0.0);
    }

    #[tokio::test]
    async fn badges_are_listed_best_first() {
        let req = Request::builder()
            .uri("/badges")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        let badges = body.as_array().unwrap();
        assert_eq!(badges.len(), 5);
        assert_eq!(badges[0]["code"], "SUPER_HOT");
        assert_eq!(badges[0]["min_score"], 90);
        assert_eq!(badges[4]["code"], "AVOID");
        assert_eq!(badges[4]["color"], "#333333");
    }
}
