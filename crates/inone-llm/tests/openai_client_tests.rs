use inone_llm::{GenerationRequest, OpenAIClient, SummaryRequest, Summarizer, TextGenerator};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_response(contents: &[&str]) -> serde_json::Value {
    let choices: Vec<_> = contents
        .iter()
        .enumerate()
        .map(|(index, content)| {
            json!({
                "index": index,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            })
        })
        .collect();

    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini",
        "choices": choices,
        "usage": { "prompt_tokens": 5, "completion_tokens": 15, "total_tokens": 20 }
    })
}

#[tokio::test]
async fn test_generate_maps_choices_to_replies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({ "n": 3, "max_tokens": 50 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(&[
            "Sounds good!",
            "Let me check and get back to you.",
            "Sure, what time?",
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAIClient::new("sk-test").unwrap().with_base_url(server.uri());
    let replies = client
        .generate(GenerationRequest::new("Lunch tomorrow?").max_length(50).num_sequences(3))
        .await
        .unwrap();

    assert_eq!(replies, vec![
        "Sounds good!".to_string(),
        "Let me check and get back to you.".to_string(),
        "Sure, what time?".to_string(),
    ]);
}

#[tokio::test]
async fn test_summarize_trims_first_choice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "model": "gpt-4.1-mini", "temperature": 0 })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_response(&["  Ship on Friday.\n"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAIClient::new("sk-test")
        .unwrap()
        .with_base_url(server.uri())
        .with_models("gpt-4.1-mini", "gpt-4.1-mini");

    let summary = client.summarize(SummaryRequest::new("long chat")).await.unwrap();
    assert_eq!(summary, "Ship on Friday.");
}

#[tokio::test]
async fn test_api_error_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = OpenAIClient::new("sk-bad").unwrap().with_base_url(server.uri());
    let err = client.summarize(SummaryRequest::new("text")).await.unwrap_err();

    assert!(err.to_string().contains("401"));
}
