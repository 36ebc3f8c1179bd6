//! Vision request asking the model to describe a photographed game as JSON.

use async_trait::async_trait;

use crate::ai_types::{ChatRequest, ContentPart, ImageUrl, Message, MessageContent, ResponseFormat};
use crate::client::LlmClient;
use crate::error::LlmError;

/// Upper bound on completion tokens for a recognition answer.
pub const RECOGNITION_MAX_TOKENS: u32 = 500;

pub const RECOGNITION_SYSTEM_PROMPT: &str = "You identify physical games from photos. \
Reply with a single valid JSON object only: no markdown, no code fences, no extra text.";

pub const RECOGNITION_USER_PROMPT: &str = r#"This photo shows a physical game (board game, card game, video game or similar). Identify it and answer with a JSON object using exactly these keys:
{
  "title": "Game title",
  "description": "Short description of the game",
  "category": "Category such as Board Game, Card Game or Video Game",
  "genre": "Genre such as Strategy, RPG, Puzzle, Action or Adventure",
  "platform": "Platform for video games (PC, PS5, PS4, Xbox, Nintendo Switch, ...); empty string for board and card games",
  "year": 2023,
  "image_url": "URL of a high-quality cover or box image from a reliable source, if known"
}
The year must be a number. Be as accurate as possible with title, genre, platform and year. Return only the JSON object."#;

/// A vision-capable completion endpoint.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Sends a base64-encoded JPEG together with the fixed recognition prompt
    /// and returns the raw textual answer.
    async fn describe_image(&self, image_base64: &str) -> Result<String, LlmError>;
}

pub(crate) fn recognition_request(model: &str, image_base64: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_owned(),
        messages: vec![
            Message {
                role: "system".to_owned(),
                content: MessageContent::Text(RECOGNITION_SYSTEM_PROMPT.to_owned()),
            },
            Message {
                role: "user".to_owned(),
                content: MessageContent::Parts(vec![
                    ContentPart::Text { text: RECOGNITION_USER_PROMPT.to_owned() },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: format!("data:image/jpeg;base64,{image_base64}") },
                    },
                ]),
            },
        ],
        response_format: ResponseFormat::json_object(),
        max_tokens: RECOGNITION_MAX_TOKENS,
    }
}

#[async_trait]
impl VisionModel for LlmClient {
    async fn describe_image(&self, image_base64: &str) -> Result<String, LlmError> {
        let request = recognition_request(&self.model, image_base64);
        let content = self.chat_completion(&request).await?;
        tracing::debug!(model = %self.model, chars = content.len(), "recognition response received");
        Ok(content)
    }
}
