//! Unit tests for the cached request primitive

use super::*;
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer, config: ClientConfig) -> TmClient {
    TmClient::new(config.with_base_url(server.uri())).unwrap()
}

#[cfg(test)]
mod cache_tests {
    use super::*;

    #[tokio::test]
    async fn test_second_resolve_is_served_from_cache() {
        let mock_server = MockServer::start().await;
        let profile = json!({"id": "28003", "name": "Lionel Messi"});

        Mock::given(method("GET"))
            .and(path("/player/28003"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&profile))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, ClientConfig::default());

        assert_eq!(client.resolve("player/28003").await, Some(profile.clone()));
        assert_eq!(client.resolve("player/28003").await, Some(profile));
        assert_eq!(client.cache_len(), 1);

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_new_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/club/131"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 131})))
            .expect(2)
            .mount(&mock_server)
            .await;

        let config = ClientConfig::default().with_cache_ttl(Duration::from_millis(50));
        let client = client_for(&mock_server, config);

        assert!(client.resolve("club/131").await.is_some());
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(client.resolve("club/131").await.is_some());

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_distinct_keys_are_fetched_separately() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, ClientConfig::default());

        client.resolve("players?ids[]=1&ids[]=2").await;
        client.resolve("players?ids[]=2&ids[]=1").await;

        assert_eq!(client.cache_len(), 2);
        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_concurrent_misses_both_reach_network() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/game/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 1}))
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, ClientConfig::default());

        let (first, second) = tokio::join!(client.resolve("game/1"), client.resolve("game/1"));
        assert_eq!(first, second);
        assert_eq!(client.cache_len(), 1);

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/attributes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"positions": []})))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, ClientConfig::default());

        client.resolve("attributes").await;
        client.clear_cache();
        assert_eq!(client.cache_len(), 0);
        client.resolve("attributes").await;

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_purge_expired_drops_stale_entries() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let config = ClientConfig::default().with_cache_ttl(Duration::from_millis(50));
        let client = client_for(&mock_server, config);

        client.resolve("stadium/66").await;
        assert_eq!(client.cache_len(), 1);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(client.purge_expired(), 1);
        assert_eq!(client.cache_len(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_cache() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/coach/5672"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5672})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, ClientConfig::default());
        let clone = client.clone();

        client.resolve("coach/5672").await;
        assert!(clone.resolve("coach/5672").await.is_some());

        mock_server.verify().await;
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_error_status_returns_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, ClientConfig::default());

        assert_eq!(client.resolve("player/0").await, None);
        assert_eq!(
            client.try_resolve("player/0").await,
            Err(FetchError::Status { status: 404 })
        );
        assert_eq!(client.cache_len(), 0);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/referee/1234"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/referee/1234"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1234})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, ClientConfig::default());

        assert_eq!(client.resolve("referee/1234").await, None);
        assert_eq!(client.resolve("referee/1234").await, Some(json!({"id": 1234})));

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_timeout_returns_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let config = ClientConfig::default().with_timeout(Duration::from_millis(100));
        let client = client_for(&mock_server, config);

        assert_eq!(client.try_resolve("game/1/live-detail").await, Err(FetchError::Timeout));
        assert_eq!(client.resolve("game/1/live-detail").await, None);
    }

    #[tokio::test]
    async fn test_unreachable_host_returns_none() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9");
        let client = TmClient::new(config).unwrap();

        match client.try_resolve("player/28003").await {
            Err(FetchError::Transport(_)) => (),
            other => panic!("Expected Transport error, got {other:?}"),
        }
        assert_eq!(client.resolve("player/28003").await, None);
    }

    #[test]
    fn test_invalid_header_config_fails_construction() {
        let config = ClientConfig::default().with_accept_language("pt\nBR");
        assert!(matches!(
            TmClient::new(config),
            Err(crate::TmError::InvalidHeader(_))
        ));
    }
}

#[cfg(test)]
mod request_tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_headers_are_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/player/28003"))
            .and(header("accept", "application/json"))
            .and(header("accept-language", "pt-BR"))
            .and(header("user-agent", "Mozilla/5.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, ClientConfig::default());
        assert_eq!(client.resolve("player/28003").await, Some(json!({"ok": true})));

        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_query_string_is_sent_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, ClientConfig::default());
        client.resolve("players?ids[]=28003&ids[]=8198").await;

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), Some("ids[]=28003&ids[]=8198"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_returned_as_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, ClientConfig::default());
        assert_eq!(
            client.resolve("attributes").await,
            Some(Value::String("maintenance".to_string()))
        );
    }

    #[test]
    fn test_accessors() {
        let client = TmClient::with_defaults().unwrap();
        assert_eq!(client.base_url(), "https://tmapi-alpha.transfermarkt.technology/");
        assert_eq!(client.cache_len(), 0);
        let _ = client.http();
    }
}
