//! Rewrite service port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Language;

/// Rewrite service errors
#[derive(Debug, Clone, Error)]
pub enum RewriteError {
    #[error("Not authorized to use the rewrite service")]
    Unauthorized,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty rewrite response")]
    EmptyResponse,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the enhance and translate collaborators.
///
/// Failures never touch the editor buffer; the caller surfaces them and
/// leaves the content as it was.
#[async_trait]
pub trait TextRewriter: Send + Sync {
    /// Clean up grammar and phrasing without changing the language.
    ///
    /// # Arguments
    /// * `text` - The text to enhance
    /// * `lang` - The language the text is written in
    async fn enhance(&self, text: &str, lang: Language) -> Result<String, RewriteError>;

    /// Translate the text into the target language.
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `target` - The language to translate into
    async fn translate(&self, text: &str, target: Language) -> Result<String, RewriteError>;
}

/// Blanket implementation for shared rewriter types
#[async_trait]
impl<T: TextRewriter + ?Sized> TextRewriter for std::sync::Arc<T> {
    async fn enhance(&self, text: &str, lang: Language) -> Result<String, RewriteError> {
        self.as_ref().enhance(text, lang).await
    }

    async fn translate(&self, text: &str, target: Language) -> Result<String, RewriteError> {
        self.as_ref().translate(text, target).await
    }
}

/// Blanket implementation for boxed rewriter types
#[async_trait]
impl TextRewriter for Box<dyn TextRewriter> {
    async fn enhance(&self, text: &str, lang: Language) -> Result<String, RewriteError> {
        self.as_ref().enhance(text, lang).await
    }

    async fn translate(&self, text: &str, target: Language) -> Result<String, RewriteError> {
        self.as_ref().translate(text, target).await
    }
}
