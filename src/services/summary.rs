//! Lesson summarization through the Gemini API.
//!
//! One fire-and-forget request per summary: no retry, no streaming, no
//! caching of failed attempts. The caller must not create a lesson unless
//! the summary came back.

use log::{error, info};
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variable holding the Gemini credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Placeholder sometimes left in .env templates; treated as absent.
const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

#[derive(Error, Debug)]
pub enum SummaryError {
    /// No credential configured. Deterministic, reported before any I/O.
    #[error("La clé API Gemini n'est pas configurée. Veuillez l'ajouter à votre fichier .env et redémarrer l'application.")]
    MissingApiKey,

    /// The remote call failed or returned an unusable response.
    #[error("Impossible de communiquer avec l'API Gemini. Veuillez vérifier votre clé API et votre connexion Internet.")]
    ServiceUnavailable,
}

// Wire types for the generateContent endpoint.

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Gemini-backed summary generator.
pub struct SummaryService {
    client: Client,
}

impl SummaryService {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Summarize `raw_text` into a short French study summary.
    pub async fn summarize(&self, raw_text: &str) -> Result<String, SummaryError> {
        let api_key = api_key().ok_or(SummaryError::MissingApiKey)?;

        let prompt = build_prompt(raw_text);
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_ENDPOINT, GEMINI_MODEL, api_key
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                error!("summary: request failed: {}", e);
                SummaryError::ServiceUnavailable
            })?
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                error!("summary: unreadable response: {}", e);
                SummaryError::ServiceUnavailable
            })?;

        let summary = extract_text(&response);
        if summary.is_empty() {
            error!("summary: response contained no candidate text");
            return Err(SummaryError::ServiceUnavailable);
        }

        info!("summary: generated {} characters", summary.len());
        Ok(summary)
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}

fn api_key() -> Option<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() && key != API_KEY_PLACEHOLDER => Some(key),
        _ => None,
    }
}

/// Fixed French instruction plus the cleaned source text.
fn build_prompt(raw_text: &str) -> String {
    format!(
        "Résume le texte suivant pour un étudiant, en te concentrant sur les concepts clés. \
         Le résumé doit être clair, concis, en français et ne pas dépasser 4 phrases. \
         Voici le texte :\n\n\"{}\"",
        normalize_whitespace(raw_text)
    )
}

/// Collapse runs of whitespace; extracted text often carries layout
/// newlines from PDF or OCR sources.
fn normalize_whitespace(text: &str) -> String {
    let re = Regex::new(r"\s+").expect("static regex");
    re.replace_all(text.trim(), " ").into_owned()
}

fn extract_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .map(|c| {
            c.content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_the_instruction_and_the_text() {
        let prompt = build_prompt("La thermodynamique est la branche de la physique.");

        assert!(prompt.starts_with("Résume le texte suivant pour un étudiant"));
        assert!(prompt.contains("ne pas dépasser 4 phrases"));
        assert!(prompt.contains("\"La thermodynamique est la branche de la physique.\""));
    }

    #[test]
    fn prompt_collapses_layout_whitespace() {
        let prompt = build_prompt("  Ligne une\n\n   Ligne deux\t finale  ");
        assert!(prompt.contains("\"Ligne une Ligne deux finale\""));
    }

    #[test]
    fn request_body_matches_the_generate_content_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Bonjour".to_string(),
                }],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Bonjour");
    }

    #[test]
    fn candidate_text_is_joined_and_trimmed() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Un résumé "},{"text":"en deux parties."}]}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_text(&response), "Un résumé en deux parties.");
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(extract_text(&response), "");
    }

    // Single test for every credential state: the test runner is
    // multi-threaded and these all mutate the same process variable.
    #[tokio::test]
    async fn absent_or_placeholder_key_fails_before_any_network_call() {
        std::env::set_var(API_KEY_ENV, API_KEY_PLACEHOLDER);
        assert!(api_key().is_none());

        std::env::set_var(API_KEY_ENV, "   ");
        assert!(api_key().is_none());

        std::env::remove_var(API_KEY_ENV);
        assert!(api_key().is_none());

        let service = SummaryService::new();
        let err = service.summarize("texte").await.unwrap_err();
        assert!(matches!(err, SummaryError::MissingApiKey));
        assert!(err.to_string().contains("clé API Gemini"));
    }
}
