use mockito::Matcher;
use racing_import::{AppConfig, ImportError, ProviderFactory};

fn config_for(server_url: &str) -> AppConfig {
    AppConfig::from_toml(&format!(
        r#"
        [providers.racing_api]
        api_key = "racing-key"
        base_url = "{server_url}/"

        [providers.lsports]
        api_key = "lsports-key"
        base_url = "{server_url}"
        "#
    ))
    .unwrap()
}

#[tokio::test]
async fn test_racing_api_from_config() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/results")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("course".into(), "cheltenham".into()),
            Matcher::UrlEncoded("api_key".into(), "racing-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"horse": "Thunder Bolt", "position": "1"}]}"#)
        .create_async()
        .await;

    let config = config_for(&server.url());
    let provider = ProviderFactory::from_app_config("racing_api", &config).unwrap();
    let params = vec![("course".to_string(), "cheltenham".to_string())];
    let body = provider.fetch("/v1/results", &params).await.unwrap();

    assert_eq!(body["results"][0]["horse"], "Thunder Bolt");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_lsports_failure_is_propagated() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/markets")
        .match_query(Matcher::UrlEncoded("api_key".into(), "lsports-key".into()))
        .with_status(500)
        .create_async()
        .await;

    let config = config_for(&server.url());
    let provider = ProviderFactory::from_app_config("lsports", &config).unwrap();
    let result = provider.fetch("markets", &[]).await;

    assert!(matches!(result, Err(ImportError::HttpStatus { .. })));
}

#[test]
fn test_disabled_provider_in_config() {
    let config = AppConfig::from_toml(
        r#"
        [providers.racing_api]
        enabled = false
        api_key = "racing-key"
        "#,
    )
    .unwrap();

    let result = ProviderFactory::from_app_config("racing_api", &config);
    assert!(matches!(result, Err(ImportError::ProviderError(_))));
}
