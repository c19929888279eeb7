//! End-to-end tests of the gateway router against a mock OpenWeather server.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use current_weather_core::{OpenWeatherProvider, Temperature, WeatherResponse, router};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(server: &MockServer) -> Router {
    let endpoint = format!("{}/data/2.5/weather", server.uri());
    router(Arc::new(OpenWeatherProvider::with_endpoint("test-key".into(), endpoint)))
}

async fn call(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(resp.into_body(), 64 * 1024).await.unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_current_weather_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "39.8097343"))
        .and(query_param("lon", "-98.5556199"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "coord": { "lon": -98.5556, "lat": 39.8097 },
            "weather": [
                { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }
            ],
            "main": { "temp": 80.0, "humidity": 40 },
            "name": "Lebanon",
            "cod": 200
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, content_type, body) =
        call(gateway(&server), "/weather/39.8097343,-98.5556199").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let resp: WeatherResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(resp.lat, 39.8097);
    assert_eq!(resp.lon, -98.5556);
    assert_eq!(resp.condition, "Rain");
    assert_eq!(resp.temperature, Temperature::Hot);
}

#[tokio::test]
async fn test_empty_weather_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "coord": { "lon": 1.0, "lat": 2.0 },
            "weather": [],
            "main": { "temp": 50.0 }
        })))
        .mount(&server)
        .await;

    let (status, _, body) = call(gateway(&server), "/weather/2,1").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "lat": 2.0, "lon": 1.0, "condition": "", "temperature": "cold" })
    );
}

#[tokio::test]
async fn test_upstream_api_error_is_500() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"cod":"400","message":"Invalid date format"}"#),
        )
        .mount(&server)
        .await;

    let (status, content_type, body) = call(gateway(&server), "/weather/1,2").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, "Invalid date format (code 400)");
}

#[tokio::test]
async fn test_non_numeric_coordinates_fail_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("lat", "abc"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"cod":"400","message":"wrong latitude"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, _, body) = call(gateway(&server), "/weather/abc,2").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "wrong latitude (code 400)");
}

#[tokio::test]
async fn test_malformed_coordinates_skip_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for uri in ["/weather/-108.0295765", "/weather/1,2,3"] {
        let (status, _, body) = call(gateway(&server), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
        assert_eq!(body, "malformed coordinates");
    }
}

#[tokio::test]
async fn test_garbage_success_body_is_500() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (status, _, body) = call(gateway(&server), "/weather/1,2").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Failed to JSON decode response"), "body: {body}");
}
