use std::time::Instant;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::llm::OpenRouterClient;
use crate::scraper::{build_prompt, extract_paragraphs, truncate_chars, PageFetcher, MAX_ARTICLE_CHARS};

pub const WELCOME_MESSAGE: &str = "Welcome to Article Summarizer API";

/// Fetches an article, extracts its paragraphs and asks the model for a summary.
#[derive(Clone)]
pub struct Gateway {
    fetcher: PageFetcher,
    llm: OpenRouterClient,
}

impl Gateway {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(config.fetch_timeout)?,
            llm: OpenRouterClient::new(config)?,
        })
    }

    pub fn info(&self) -> &'static str {
        WELCOME_MESSAGE
    }

    pub async fn summarize(&self, url: &str) -> Result<String> {
        let fetch_start = Instant::now();
        let html = self.fetcher.fetch_html(url).await.inspect_err(|e| {
            tracing::warn!(url, error = %e, "article fetch failed");
        })?;
        tracing::debug!(url, bytes = html.len(), elapsed = ?fetch_start.elapsed(), "fetched article");

        let article_text = extract_paragraphs(&html);
        if article_text.is_empty() {
            // Forwarded anyway; the model decides what to do with an empty article.
            tracing::warn!(url, "no paragraph text found");
        }
        let truncated = truncate_chars(&article_text, MAX_ARTICLE_CHARS);
        tracing::debug!(
            extracted = article_text.chars().count(),
            sent = truncated.chars().count(),
            "extracted article text"
        );

        let prompt = build_prompt(truncated);

        let llm_start = Instant::now();
        let summary = self.llm.summarize(&prompt).await.inspect_err(|e| match e {
            AppError::SummarizationService(status) => {
                tracing::error!(model = self.llm.model(), %status, "summarization service error");
            }
            other => tracing::error!(model = self.llm.model(), error = %other, "summarization failed"),
        })?;
        tracing::info!(url, elapsed = ?llm_start.elapsed(), "summary received");

        Ok(summary)
    }
}
