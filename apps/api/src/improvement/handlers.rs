//! Axum route handlers for the prompt improvement API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::improvement::dispatcher::PromptRequest;
use crate::improvement::short_input::PreviousIntent;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Wire body. Fields are optional here so a missing one becomes a
/// `VALIDATION_ERROR` body instead of axum's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct ImprovePromptBody {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub model_choice: Option<String>,
    #[serde(default, deserialize_with = "deserialize_previous_intent")]
    pub previous_intent: Option<PreviousIntent>,
}

/// `previous_intent` is only a hint: any non-null value that is not a known
/// intent string is treated as `Other` rather than failing the request.
fn deserialize_previous_intent<'de, D>(deserializer: D) -> Result<Option<PreviousIntent>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(PreviousIntent::from(s.as_str())),
        Some(_) => Some(PreviousIntent::Other),
    })
}

#[derive(Debug, Serialize)]
pub struct ImprovePromptResponse {
    pub improved_prompt: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/improve-prompt
///
/// Returns a canned reply for trivial inputs, otherwise the provider's
/// improved version of the prompt.
pub async fn handle_improve_prompt(
    State(state): State<AppState>,
    payload: Result<Json<ImprovePromptBody>, JsonRejection>,
) -> Result<Json<ImprovePromptResponse>, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let request = validate(body)?;
    let improved_prompt = state.dispatcher.improve(&request).await?;
    Ok(Json(ImprovePromptResponse { improved_prompt }))
}

fn validate(body: ImprovePromptBody) -> Result<PromptRequest, AppError> {
    let prompt = body
        .prompt
        .ok_or_else(|| AppError::Validation("prompt is required".to_string()))?;
    if prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }
    let model_choice = body
        .model_choice
        .ok_or_else(|| AppError::Validation("model_choice is required".to_string()))?;

    Ok(PromptRequest {
        prompt,
        model_choice,
        previous_intent: body.previous_intent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(prompt: Option<&str>, model_choice: Option<&str>) -> ImprovePromptBody {
        ImprovePromptBody {
            prompt: prompt.map(str::to_string),
            model_choice: model_choice.map(str::to_string),
            previous_intent: None,
        }
    }

    #[test]
    fn test_validate_requires_prompt() {
        let err = validate(body(None, Some("gemini"))).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "prompt is required"));
    }

    #[test]
    fn test_validate_rejects_blank_prompt() {
        let err = validate(body(Some("  \n "), Some("gemini"))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_requires_model_choice() {
        let err = validate(body(Some("hi"), None)).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "model_choice is required"));
    }

    #[test]
    fn test_validate_keeps_prompt_untrimmed() {
        let request = validate(body(Some("  write a parser "), Some("llama3"))).unwrap();
        assert_eq!(request.prompt, "  write a parser ");
        assert_eq!(request.model_choice, "llama3");
    }

    #[test]
    fn test_body_accepts_null_previous_intent() {
        let body: ImprovePromptBody = serde_json::from_str(
            r#"{"prompt":"ok","model_choice":"gemini","previous_intent":null}"#,
        )
        .unwrap();
        assert_eq!(body.previous_intent, None);

        let body: ImprovePromptBody = serde_json::from_str(
            r#"{"prompt":"ok","model_choice":"gemini","previous_intent":"coding"}"#,
        )
        .unwrap();
        assert_eq!(body.previous_intent, Some(PreviousIntent::Coding));
    }

    #[test]
    fn test_body_treats_unknown_previous_intent_as_other() {
        for raw in [r#""video""#, "5", "true", r#"{"kind":"coding"}"#, "[]"] {
            let body: ImprovePromptBody = serde_json::from_str(&format!(
                r#"{{"prompt":"ok","model_choice":"gemini","previous_intent":{raw}}}"#
            ))
            .unwrap();
            assert_eq!(body.previous_intent, Some(PreviousIntent::Other), "input {raw}");
        }
    }

    #[test]
    fn test_body_without_previous_intent() {
        let body: ImprovePromptBody =
            serde_json::from_str(r#"{"prompt":"ok","model_choice":"gemini"}"#).unwrap();
        assert_eq!(body.previous_intent, None);
    }
}
