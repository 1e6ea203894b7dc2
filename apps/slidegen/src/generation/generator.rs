//! Content generation — one schema-constrained chat completion per subject.
//!
//! Flow: build prompt → request with JSON-schema response format →
//!       first choice content → decode into `Topic`.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{
    CONTENT_PROMPT_TEMPLATE, CONTENT_SCHEMA_DESCRIPTION, CONTENT_SCHEMA_NAME, CONTENT_SYSTEM,
};
use crate::generation::topic::{topic_schema, Topic};
use crate::llm_client::{
    ChatCompletionRequest, ChatMessage, ChatTransport, JsonSchemaFormat, ResponseFormat,
};

/// Decoded content together with the exact text it was decoded from.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    /// Message content as returned by the model, untouched.
    pub raw: String,
    pub topic: Topic,
}

pub struct ContentGenerator {
    transport: Arc<dyn ChatTransport>,
    model: String,
    /// Derived once from `Topic`; reused for every request.
    schema: serde_json::Value,
}

impl ContentGenerator {
    pub fn new(transport: Arc<dyn ChatTransport>, model: impl Into<String>) -> Self {
        Self {
            transport,
            model: model.into(),
            schema: topic_schema(),
        }
    }

    /// Builds the chat request for a subject: system persona, then user prompt.
    pub fn build_request(&self, subject_name: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(CONTENT_SYSTEM),
                ChatMessage::user(build_content_prompt(subject_name)),
            ],
            response_format: ResponseFormat::JsonSchema {
                json_schema: JsonSchemaFormat {
                    name: CONTENT_SCHEMA_NAME.to_string(),
                    description: Some(CONTENT_SCHEMA_DESCRIPTION.to_string()),
                    schema: self.schema.clone(),
                    strict: None,
                },
            },
        }
    }

    /// Asks the model for presentation content on `subject_name` and decodes it.
    pub async fn generate_content(&self, subject_name: &str) -> Result<GeneratedContent, AppError> {
        info!("Requesting content from model {}", self.model);

        let response = self
            .transport
            .create_chat_completion(self.build_request(subject_name))
            .await?;

        if let Some(choice) = response.choices.first() {
            debug!(
                "Completion {}: choice {} finish_reason={:?}",
                response.id.as_deref().unwrap_or("<no id>"),
                choice.index,
                choice.finish_reason
            );
        }

        let raw = response.first_content()?.to_string();
        info!("AI response received ({} bytes)", raw.len());

        let topic: Topic = serde_json::from_str(&raw)?;
        if topic.title.trim().is_empty() {
            warn!("Model returned an empty title");
        }
        debug!("Decoded topic: {topic:?}");

        Ok(GeneratedContent { raw, topic })
    }
}

pub fn build_content_prompt(subject_name: &str) -> String {
    CONTENT_PROMPT_TEMPLATE.replace("{subject_name}", subject_name)
}
