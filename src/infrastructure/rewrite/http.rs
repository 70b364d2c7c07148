//! HTTP rewrite service adapter
//!
//! Talks to the note backend's enhance and translate endpoints.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::application::ports::{RewriteError, TextRewriter};
use crate::domain::Language;

// Request/response types for the rewrite endpoints

#[derive(Debug, Serialize)]
struct EnhanceRequest<'a> {
    text: &'a str,
    lang: &'static str,
}

#[derive(Debug, Deserialize)]
struct EnhanceResponse {
    enhanced_text: String,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    target_lang: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translated_text: String,
}

/// Rewrite adapter for the note backend
pub struct HttpRewriter {
    base_url: String,
    auth_token: Option<String>,
    client: reqwest::Client,
}

impl HttpRewriter {
    /// Create a new rewriter against the given backend base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            client: reqwest::Client::new(),
        }
    }

    /// Attach a bearer token for backends that authenticate requests
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: Some(token.into()),
            client: reqwest::Client::new(),
        }
    }

    /// Build the endpoint URL
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// POST a JSON body and decode the JSON response
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RewriteError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let mut request = self.client.post(self.endpoint(path)).json(body);
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RewriteError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(RewriteError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RewriteError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RewriteError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| RewriteError::ParseError(e.to_string()))
    }

    /// Trim the result and reject blank responses
    fn non_empty(text: String) -> Result<String, RewriteError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(RewriteError::EmptyResponse);
        }
        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl TextRewriter for HttpRewriter {
    async fn enhance(&self, text: &str, lang: Language) -> Result<String, RewriteError> {
        let response: EnhanceResponse = self
            .post_json(
                "enhance-text",
                &EnhanceRequest {
                    text,
                    lang: lang.code(),
                },
            )
            .await?;

        Self::non_empty(response.enhanced_text)
    }

    async fn translate(&self, text: &str, target: Language) -> Result<String, RewriteError> {
        let response: TranslateResponse = self
            .post_json(
                "translate",
                &TranslateRequest {
                    text,
                    target_lang: target.code(),
                },
            )
            .await?;

        Self::non_empty(response.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let rewriter = HttpRewriter::new("http://localhost:8000/");
        assert_eq!(
            rewriter.endpoint("enhance-text"),
            "http://localhost:8000/enhance-text"
        );
    }

    #[test]
    fn enhance_request_serializes_expected_shape() {
        let request = EnhanceRequest {
            text: "hello",
            lang: Language::En.code(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["text"], "hello");
        assert_eq!(value["lang"], "en");
    }

    #[test]
    fn translate_request_serializes_expected_shape() {
        let request = TranslateRequest {
            text: "hello",
            target_lang: Language::Hi.code(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["text"], "hello");
        assert_eq!(value["target_lang"], "hi");
    }

    #[test]
    fn blank_responses_are_rejected() {
        assert!(matches!(
            HttpRewriter::non_empty("   ".to_string()),
            Err(RewriteError::EmptyResponse)
        ));
        assert_eq!(
            HttpRewriter::non_empty("  ok \n".to_string()).unwrap(),
            "ok"
        );
    }
}
