mod support;

#[cfg(test)]
mod compare_tests {
    use openrouter_agent::{
        compare::compare_models,
        connectivity::{DEFAULT_CHECK_MODEL, check_connection},
        error::completion_error::CompletionError,
    };

    use crate::support::ScriptedClient;

    fn models(ids: &[&str]) -> Vec<(String, String)> {
        ids.iter()
            .map(|id| (id.to_uppercase(), id.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn sweep_continues_past_a_failing_model() {
        let client = ScriptedClient::new()
            .reply("one")
            .fail(CompletionError::Api {
                status: 404,
                body: "model not found".into(),
            })
            .reply("three");

        let replies = compare_models(&client, "Explain", &models(&["a", "b", "c"])).await;

        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0].reply.as_deref(), Ok("one"));
        assert!(replies[1].reply.as_ref().unwrap_err().contains("404"));
        assert_eq!(replies[2].reply.as_deref(), Ok("three"));
        assert_eq!(replies[1].name, "B");
        assert_eq!(client.model_of(2), "c");
        assert_eq!(client.user_content(0), "Explain");
    }

    #[tokio::test]
    async fn empty_model_table_makes_no_calls() {
        let client = ScriptedClient::new();
        let replies = compare_models(&client, "Explain", &[]).await;
        assert!(replies.is_empty());
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn connection_check_sends_greeting() {
        let client = ScriptedClient::new().reply("Hello!");
        let reply = check_connection(&client, DEFAULT_CHECK_MODEL).await.unwrap();

        assert_eq!(reply, "Hello!");
        assert_eq!(client.model_of(0), "openai/gpt-3.5-turbo");
        assert_eq!(client.user_content(0), "Hello, world!");
    }

    #[tokio::test]
    async fn connection_check_surfaces_errors() {
        let client = ScriptedClient::new().fail(CompletionError::MissingApiKey);
        assert!(check_connection(&client, "m").await.is_err());
    }
}
