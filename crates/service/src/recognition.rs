//! Photo → game attributes pipeline.

use std::path::Path;
use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use gamedex_core::{GameAttributes, LlmConfig, MetadataConfig, extract_attributes};
use gamedex_llm::{LlmClient, LlmError, VisionModel};
use gamedex_metadata::{MetadataEnricher, MetadataError, RawgClient};

use crate::error::RecognitionError;

pub struct RecognitionService {
    vision: Option<Arc<dyn VisionModel>>,
    enricher: Option<MetadataEnricher>,
}

impl RecognitionService {
    /// `vision: None` makes every recognition fail the credential check;
    /// `enricher: None` skips metadata enrichment.
    #[must_use]
    pub fn new(vision: Option<Arc<dyn VisionModel>>, enricher: Option<MetadataEnricher>) -> Self {
        Self { vision, enricher }
    }

    /// Builds the service from explicit configuration.
    ///
    /// A missing model key is not an error here: it surfaces as
    /// [`RecognitionError::NotConfigured`] on the first `recognize` call,
    /// before any network traffic. A missing or unusable metadata setup
    /// only disables enrichment.
    pub fn from_config(llm: &LlmConfig, metadata: &MetadataConfig) -> Result<Self, RecognitionError> {
        let vision: Option<Arc<dyn VisionModel>> = match LlmClient::from_config(llm) {
            Ok(client) => Some(Arc::new(client)),
            Err(LlmError::MissingApiKey) => {
                tracing::info!("OPENAI_API_KEY not set, recognition unavailable");
                None
            },
            Err(e) => return Err(RecognitionError::from(e)),
        };
        let enricher = match RawgClient::new(metadata) {
            Ok(client) => Some(MetadataEnricher::new(Arc::new(client))),
            Err(MetadataError::MissingApiKey) => {
                tracing::info!("RAWG_API_KEY not set, metadata enrichment disabled");
                None
            },
            Err(e) => {
                tracing::warn!(error = %e, "metadata client unavailable, enrichment disabled");
                None
            },
        };
        Ok(Self::new(vision, enricher))
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.vision.is_some()
    }

    #[must_use]
    pub fn enrichment_enabled(&self) -> bool {
        self.enricher.is_some()
    }

    /// Recognizes the game in a JPEG photo.
    ///
    /// Single attempt: a model failure is returned as is. Enrichment runs
    /// only for a non-empty title and never fails the call.
    pub async fn recognize(&self, image: &[u8]) -> Result<GameAttributes, RecognitionError> {
        let vision = self.vision()?;

        let encoded = general_purpose::STANDARD.encode(image);
        let raw = vision.describe_image(&encoded).await?;
        let attrs = extract_attributes(&raw)?;
        if attrs.is_blank() {
            tracing::warn!("model response carried no game attributes");
            return Err(RecognitionError::Unrecognized);
        }

        let result = match &self.enricher {
            Some(enricher) if attrs.has_title() => {
                let title = attrs.title.clone();
                enricher.enrich(&title, attrs).await
            },
            _ => attrs,
        };
        tracing::info!(title = %result.title, "game recognized");
        Ok(result)
    }

    /// Reads `path` and recognizes the photo it contains. The credential
    /// check runs before the file is read.
    pub async fn recognize_file(&self, path: &Path) -> Result<GameAttributes, RecognitionError> {
        self.vision()?;
        let image = tokio::fs::read(path).await.map_err(|source| RecognitionError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.recognize(&image).await
    }

    fn vision(&self) -> Result<&Arc<dyn VisionModel>, RecognitionError> {
        self.vision.as_ref().ok_or_else(|| RecognitionError::from(LlmError::MissingApiKey))
    }
}

impl std::fmt::Debug for RecognitionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecognitionService")
            .field("configured", &self.is_configured())
            .field("enrichment", &self.enrichment_enabled())
            .finish()
    }
}

#[cfg(test)]
#[path = "recognition_tests.rs"]
mod tests;
