use arcadia::catalog::CatalogClient;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use crate::model::{GameSummary, GamesResponse};

#[derive(Deserialize)]
pub(super) struct GamesParams {
    // Named page_number by the frontend but forwarded upstream as the page
    // index; the default of 10 predates that and reads like a page size.
    #[serde(default = "default_page_number")]
    page_number: u32,
}

fn default_page_number() -> u32 {
    10
}

pub(super) async fn get_games(
    State(catalog_client): State<CatalogClient>,
    Query(params): Query<GamesParams>,
) -> Result<Json<GamesResponse>, (StatusCode, Json<Value>)> {
    let raw_games = match catalog_client.fetch_games(params.page_number).await {
        Ok(v) => v,
        Err(e) => {
            error!("Could not fetch games from catalog: {:?}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": e.to_string()})),
            ));
        }
    };

    let games: Vec<GameSummary> = raw_games.into_iter().map(GameSummary::from_raw).collect();

    Ok(Json(GamesResponse { data: games }))
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use arcadia::catalog::CatalogClient;
    use axum::{
        body::{to_bytes, Body},
        extract::Query,
        http::{Request, StatusCode},
        routing::get,
        Json, Router,
    };
    use serde_json::{json, Value};
    use tokio::net::TcpListener;
    use tower::ServiceExt;

    use crate::{build_app, CLIENT_ORIGIN};

    async fn spawn_upstream(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn app_for(catalog_client: CatalogClient) -> Router {
        CLIENT_ORIGIN.get_or_init(|| "http://127.0.0.1:80".to_owned());

        build_app(catalog_client)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn serves_mapped_games() {
        async fn games() -> Json<Value> {
            Json(json!({
                "results": [{
                    "name": "Portal 2",
                    "slug": "portal-2",
                    "released": "2011-04-18",
                    "metacritic": 95,
                    "platforms": [{"platform": {"name": "PC"}}],
                    "background_image": "http://x/y.jpg",
                }]
            }))
        }

        let url = spawn_upstream(Router::new().route("/games", get(games))).await;
        let app = app_for(CatalogClient::with_base_url("secret", &url));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/games?page_number=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let data = body["data"].as_array().unwrap();

        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["title"], "Portal 2");
        assert_eq!(data[0]["description"], "portal-2");
        assert_eq!(data[0]["release_date"], "2011-04-18");
        assert_eq!(data[0]["review_score"], 95);
        assert_eq!(data[0]["platforms"], json!({"pc": true}));
        assert_eq!(data[0]["player_count"], 1);
        assert_eq!(data[0]["cover_url"], "http://x/y.jpg");
        assert!(data[0]["id"].is_string());
    }

    #[tokio::test]
    async fn page_number_defaults_to_ten() {
        async fn games(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
            Json(json!({
                "results": [{"name": params.get("page").cloned().unwrap_or_default()}]
            }))
        }

        let url = spawn_upstream(Router::new().route("/games", get(games))).await;
        let app = app_for(CatalogClient::with_base_url("secret", &url));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/games")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;

        assert_eq!(body["data"][0]["title"], "10");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_server_error() {
        async fn games() -> StatusCode {
            StatusCode::BAD_GATEWAY
        }

        let url = spawn_upstream(Router::new().route("/games", get(games))).await;
        let app = app_for(CatalogClient::with_base_url("secret", &url));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/games")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;

        assert!(body["detail"]
            .as_str()
            .unwrap()
            .starts_with("catalog request failed"));
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn empty_upstream_page_yields_empty_data() {
        async fn games() -> Json<Value> {
            Json(json!({"results": []}))
        }

        let url = spawn_upstream(Router::new().route("/games", get(games))).await;
        let app = app_for(CatalogClient::with_base_url("secret", &url));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/games?page_number=4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;

        assert_eq!(body["data"], json!([]));
    }
}
