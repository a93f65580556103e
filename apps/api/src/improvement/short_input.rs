//! Short input classifier — greetings, farewells and acknowledgements get a
//! canned reply instead of a provider call.
//!
//! Matching is exact after trim + lowercase: "hi there" is NOT a greeting.

use crate::improvement::prompts::{
    ACK_CODING_RESPONSE, ACK_GENERIC_RESPONSE, ACK_IMAGE_GENERATION_RESPONSE, FAREWELL_RESPONSE,
    GREETING_RESPONSE,
};

const GREETINGS: &[&str] = &["hi", "hello", "hey"];
const FAREWELLS: &[&str] = &["bye", "see you", "goodbye"];
const ACKNOWLEDGEMENTS: &[&str] = &[
    "ok",
    "thanks",
    "thank you",
    "cool",
    "great",
    "got it",
    "nice",
    "awesome",
];

/// What the caller says the previous exchange was about.
/// Supplied per request; the server keeps no session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviousIntent {
    ImageGeneration,
    Coding,
    Other,
}

impl From<&str> for PreviousIntent {
    fn from(value: &str) -> Self {
        match value {
            "image_generation" => PreviousIntent::ImageGeneration,
            "coding" => PreviousIntent::Coding,
            _ => PreviousIntent::Other,
        }
    }
}

/// Which canned reply a short input maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedResponse {
    Greeting,
    Farewell,
    AckImageGeneration,
    AckCoding,
    AckGeneric,
}

impl CannedResponse {
    pub fn text(&self) -> &'static str {
        match self {
            CannedResponse::Greeting => GREETING_RESPONSE,
            CannedResponse::Farewell => FAREWELL_RESPONSE,
            CannedResponse::AckImageGeneration => ACK_IMAGE_GENERATION_RESPONSE,
            CannedResponse::AckCoding => ACK_CODING_RESPONSE,
            CannedResponse::AckGeneric => ACK_GENERIC_RESPONSE,
        }
    }
}

/// Classifies trivial inputs. Returns `None` when the prompt should go to a provider.
pub fn classify_short(
    text: &str,
    previous_intent: Option<PreviousIntent>,
) -> Option<CannedResponse> {
    let normalized = text.trim().to_lowercase();
    let normalized = normalized.as_str();

    if GREETINGS.contains(&normalized) {
        return Some(CannedResponse::Greeting);
    }
    if FAREWELLS.contains(&normalized) {
        return Some(CannedResponse::Farewell);
    }
    if ACKNOWLEDGEMENTS.contains(&normalized) {
        return Some(match previous_intent {
            Some(PreviousIntent::ImageGeneration) => CannedResponse::AckImageGeneration,
            Some(PreviousIntent::Coding) => CannedResponse::AckCoding,
            Some(PreviousIntent::Other) | None => CannedResponse::AckGeneric,
        });
    }
    None
}
