#[cfg(test)]
mod openrouter_client_tests {
    use std::{sync::Arc, time::Duration};

    use openrouter_agent::{
        ClientConfig, OpenRouterClient, RunnerConfig, Step, TaskRunner, TaskStatus,
        agent::NoPacing,
        error::completion_error::CompletionError,
        llm::CompletionClient,
        message::ChatMessage,
    };
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    fn client_for(server: &MockServer) -> OpenRouterClient {
        let mut config = ClientConfig::new("sk-or-test");
        config.base_url = server.uri();
        config.site_url = "https://example.org".into();
        config.site_name = "Agentic AI Demo".into();
        OpenRouterClient::new(&config).unwrap()
    }

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "id": "gen-1",
            "model": "openai/gpt-4",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
        })
    }

    #[tokio::test]
    async fn sends_auth_and_attribution_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer sk-or-test"))
            .and(header("HTTP-Referer", "https://example.org"))
            .and(header("X-Title", "Agentic AI Demo"))
            .and(body_partial_json(json!({
                "model": "openai/gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "Hello, world!"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("Hi!")))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .complete("openai/gpt-3.5-turbo", &[ChatMessage::user("Hello, world!")])
            .await
            .unwrap();
        assert_eq!(reply, "Hi!");
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete("m", &[ChatMessage::user("x")])
            .await
            .unwrap_err();
        match err {
            CompletionError::Api { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_choices_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete("m", &[ChatMessage::user("x")])
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::EmptyResponse));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete("m", &[ChatMessage::user("x")])
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Decode(_)));
    }

    #[tokio::test]
    async fn runner_over_http_reports_unparseable_plan() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion("Sure! Here are the steps:")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let runner = TaskRunner::new(Arc::new(client_for(&server)), RunnerConfig::default())
            .with_pacing(NoPacing);
        let outcome = runner.solve("Plan a birthday party").await;

        assert_eq!(outcome.status, TaskStatus::Failed);
        assert!(outcome.step_results.is_empty());
    }

    #[tokio::test]
    async fn slow_server_hits_the_per_call_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("too late"))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let mut config = ClientConfig::new("sk-or-test");
        config.base_url = server.uri();
        config.timeout_secs = 1;
        let runner = TaskRunner::new(
            Arc::new(OpenRouterClient::new(&config).unwrap()),
            RunnerConfig {
                call_timeout_secs: 2,
                ..RunnerConfig::default()
            },
        )
        .with_pacing(NoPacing);

        let err = runner
            .execute_step(&Step::new("a", "b"), "")
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "expected a timeout, got {err}");
        assert!(err.to_string().contains("timed out after 2s"));
    }
}
