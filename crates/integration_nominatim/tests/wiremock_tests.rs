//! Integration tests for the Nominatim client (wiremock-based)

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_nominatim::{GeocodingClient, GeocodingError, NominatimClient, NominatimConfig};

fn config_for_mock(base_url: &str) -> NominatimConfig {
    NominatimConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        user_agent: "AyamFresh-Test/1.0".to_string(),
        ..NominatimConfig::default()
    }
}

const fn klcc_json() -> &'static str {
    r#"[{"lat": "3.1578", "lon": "101.7118", "display_name": "Kuala Lumpur City Centre, Kuala Lumpur, Malaysia"}]"#
}

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "KLCC, Kuala Lumpur"))
        .and(query_param("countrycodes", "my"))
        .respond_with(ResponseTemplate::new(200).set_body_string(klcc_json()))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = NominatimClient::new(&config).unwrap();

    let location = client.geocode("KLCC, Kuala Lumpur").await.unwrap();
    assert!((location.latitude() - 3.1578).abs() < 0.0001);
    assert!((location.longitude() - 101.7118).abs() < 0.0001);
}

#[tokio::test]
async fn test_geocode_sends_identifying_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("user-agent", "AyamFresh-Test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(klcc_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = NominatimClient::new(&config).unwrap();

    client.geocode("KLCC, Kuala Lumpur").await.unwrap();
}

#[tokio::test]
async fn test_geocode_falls_back_to_relaxed_query() {
    let server = MockServer::start().await;

    // The full address is unknown to the provider
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "No. 7, Lorong Haji Taib, Chow Kit, Kuala Lumpur"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    // The first relaxation (last three components) misses too
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Lorong Haji Taib, Chow Kit, Kuala Lumpur"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    // The second relaxation (last two components) resolves
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Chow Kit, Kuala Lumpur"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"lat": "3.1649", "lon": "101.6983", "display_name": "Chow Kit, Kuala Lumpur"}]"#,
        ))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = NominatimClient::new(&config).unwrap();

    let location = client
        .geocode("No. 7, Lorong Haji Taib, Chow Kit, Kuala Lumpur")
        .await
        .unwrap();
    assert!((location.latitude() - 3.1649).abs() < 0.0001);
}

#[tokio::test]
async fn test_geocode_not_found_after_all_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = NominatimClient::new(&config).unwrap();

    let err = client
        .geocode("Nowhere Street, Imaginary Town, Atlantis")
        .await
        .unwrap_err();

    match err {
        GeocodingError::AddressNotFound(address) => {
            assert_eq!(address, "Nowhere Street, Imaginary Town, Atlantis");
        },
        other => unreachable!("Expected AddressNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_geocode_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = NominatimClient::new(&config).unwrap();

    let err = client.geocode("KLCC, Kuala Lumpur").await.unwrap_err();
    assert!(matches!(err, GeocodingError::RequestFailed(_)));
}

#[tokio::test]
async fn test_suggest_returns_candidates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Jalan Amp"))
        .and(query_param("limit", "5"))
        .and(query_param("addressdetails", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[
                {"lat": "3.1605", "lon": "101.7158", "display_name": "Jalan Ampang, Kuala Lumpur"},
                {"lat": "3.1666", "lon": "101.7505", "display_name": "Jalan Ampang Hilir, Kuala Lumpur"}
            ]"#,
        ))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = NominatimClient::new(&config).unwrap();

    let candidates = client.suggest("Jalan Amp").await.unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].address, "Jalan Ampang, Kuala Lumpur");
    assert!((candidates[0].location.latitude() - 3.1605).abs() < 0.0001);
}

#[tokio::test]
async fn test_suggest_skips_unparseable_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[
                {"lat": "not-a-number", "lon": "101.7158", "display_name": "Broken"},
                {"lat": "3.1666", "lon": "101.7505", "display_name": "Jalan Ampang Hilir"}
            ]"#,
        ))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = NominatimClient::new(&config).unwrap();

    let candidates = client.suggest("Jalan Amp").await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].address, "Jalan Ampang Hilir");
}

#[tokio::test]
async fn test_suggest_empty_query_makes_no_request() {
    let server = MockServer::start().await;

    // Any request arriving at the server would fail the expectation
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = NominatimClient::new(&config).unwrap();

    let candidates = client.suggest("   ").await.unwrap();
    assert!(candidates.is_empty());
}
