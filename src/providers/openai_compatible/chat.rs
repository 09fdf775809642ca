//! Chat-completions request building.

use super::types::{ChatCompletionRequest, ChatMessage};
use crate::types::TextRequest;

/// The system instruction travels as a leading `system` message.
/// Reasoning effort has no equivalent here and is ignored.
pub fn build_chat_request(model: &str, request: &TextRequest) -> ChatCompletionRequest {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = &request.system_instruction {
        messages.push(ChatMessage::system(system));
    }
    messages.push(ChatMessage::user(&request.prompt));

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::openai_compatible::types::ChatCompletionResponse;
    use serde_json::json;

    #[test]
    fn system_message_is_prepended() {
        let req = TextRequest::new("write a tagline")
            .with_system_instruction("You are a copywriter.")
            .with_reasoning_effort(true);
        let body = serde_json::to_value(build_chat_request("gpt-4o", &req)).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-4o",
                "messages": [
                    { "role": "system", "content": "You are a copywriter." },
                    { "role": "user", "content": "write a tagline" }
                ]
            })
        );
    }

    #[test]
    fn without_system_instruction_only_user_message() {
        let body = build_chat_request("m", &TextRequest::new("hi"));
        assert_eq!(body.messages, vec![ChatMessage::user("hi")]);
    }

    #[test]
    fn missing_content_is_empty_text() {
        let resp: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [{ "message": { "role": "assistant" } }] }))
                .unwrap();
        assert_eq!(resp.into_text().unwrap(), "");

        let resp: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "content": "first" } },
                { "message": { "content": "second" } }
            ]
        }))
        .unwrap();
        assert_eq!(resp.into_text().unwrap(), "first");
    }

    #[test]
    fn reply_without_choices_is_an_error() {
        let resp: ChatCompletionResponse = serde_json::from_value(json!({
            "error": { "message": "upstream provider failed", "code": 502 }
        }))
        .unwrap();
        assert_eq!(resp.into_text().unwrap_err(), "upstream provider failed");

        let resp: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert_eq!(resp.into_text().unwrap_err(), "response contained no choices");
    }
}
