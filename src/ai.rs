//! Narrative critique of a filename from Gemini.
//!
//! The commentary is advisory only. [`analyze`] never fails: every error is
//! logged and replaced by a fixed Arabic message for the report.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// Shown when the model answers with no text.
pub const EMPTY_FALLBACK: &str = "لم يتمكن الذكاء الاصطناعي من تحليل الملف.";
/// Shown when the call itself fails.
pub const ERROR_FALLBACK: &str = "حدث خطأ أثناء الاتصال بالذكاء الاصطناعي لتحليل الملف.";

#[derive(Debug, Error)]
pub enum AiError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service answered HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Something that can comment on a filename.
#[async_trait]
pub trait Commentator: Send + Sync {
    /// Raw commentary text. May be empty.
    async fn comment(&self, filename: &str) -> Result<String, AiError>;
}

/// Commentary for `filename`, with fallbacks substituted for empty answers and errors.
pub async fn analyze(commentator: &dyn Commentator, filename: &str) -> String {
    match commentator.comment(filename).await {
        Ok(text) if text.trim().is_empty() => {
            log::warn!("commentary for {filename:?} came back empty");
            EMPTY_FALLBACK.to_string()
        }
        Ok(text) => text,
        Err(err) => {
            log::warn!("commentary for {filename:?} failed: {err}");
            ERROR_FALLBACK.to_string()
        }
    }
}

pub fn build_prompt(filename: &str) -> String {
    format!(
        r#"Analyze this BIM filename according to ISO 19650 standards: "{filename}".
Standard segments: Project-Originator-Volume-Level-Type-Role-Number.
Provide your analysis in Arabic.
1. Confirm if the segments look like standard BIM codes (e.g., is "AR" likely Architecture?).
2. Identify any logical errors beyond just character length.
3. Suggest corrections if the file seems related to Revit or Navisworks.
Keep the tone professional and helpful for a BIM Manager."#
    )
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Gemini `generateContent` over plain REST.
pub struct GeminiCommentator {
    client: reqwest::Client,
    config: Config,
}

impl GeminiCommentator {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model_id
        )
    }
}

#[async_trait]
impl Commentator for GeminiCommentator {
    async fn comment(&self, filename: &str) -> Result<String, AiError> {
        let api_key = self.config.api_key.as_deref().ok_or(AiError::MissingApiKey)?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(filename)),
                }],
            }],
        };

        log::debug!("requesting commentary from {}", self.config.model_id);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.text())
    }
}
