//! Mock model driver for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use viralpost_core::{GenerationStatus, MediaSource};
use viralpost_error::{GeminiError, GeminiErrorKind, ViralpostResult};
use viralpost_interface::{
    ImageGeneration, ImageRequest, ImageResponse, ResponsePart, StructuredText,
    StructuredTextRequest, ViralpostDriver,
};

/// How the text endpoint answers.
#[derive(Debug, Clone)]
pub enum TextBehavior {
    /// Reply with this payload
    Payload(String),
    /// Reply without any payload
    Empty,
    /// Fail with the given error
    Error(GeminiErrorKind),
    /// Never answer
    Pending,
}

/// How the image endpoint answers.
#[derive(Debug, Clone)]
pub enum ImageBehavior {
    /// Reply with these parts
    Parts(Vec<ResponsePart>),
    /// Fail with the given error
    Error(GeminiErrorKind),
    /// Never answer
    Pending,
}

/// Something observable that happened during a generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The status callback fired
    Status(GenerationStatus),
    /// The text endpoint was called
    TextCall,
    /// The image endpoint was called
    ImageCall,
}

/// Mock driver for testing.
///
/// Records every request it receives and appends to a shared event log so
/// tests can check ordering against status updates.
pub struct MockDriver {
    text: TextBehavior,
    image: ImageBehavior,
    text_requests: Arc<Mutex<Vec<StructuredTextRequest>>>,
    image_requests: Arc<Mutex<Vec<ImageRequest>>>,
    events: Arc<Mutex<Vec<Event>>>,
}

impl MockDriver {
    /// Create a driver with explicit behaviors.
    pub fn new(text: TextBehavior, image: ImageBehavior) -> Self {
        Self {
            text,
            image,
            text_requests: Arc::new(Mutex::new(Vec::new())),
            image_requests: Arc::new(Mutex::new(Vec::new())),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Text step succeeds with `payload`, image step returns one PNG part.
    pub fn with_payload(payload: impl Into<String>, image_data: &str) -> Self {
        Self::new(
            TextBehavior::Payload(payload.into()),
            ImageBehavior::Parts(vec![png_part(image_data)]),
        )
    }

    /// Number of text requests received.
    pub fn text_calls(&self) -> usize {
        self.text_requests.lock().unwrap().len()
    }

    /// Number of image requests received.
    pub fn image_calls(&self) -> usize {
        self.image_requests.lock().unwrap().len()
    }

    /// The most recent image request.
    pub fn last_image_request(&self) -> Option<ImageRequest> {
        self.image_requests.lock().unwrap().last().cloned()
    }

    /// The most recent text request.
    pub fn last_text_request(&self) -> Option<StructuredTextRequest> {
        self.text_requests.lock().unwrap().last().cloned()
    }

    /// Shared event log; status callbacks may append to it too.
    pub fn events(&self) -> Arc<Mutex<Vec<Event>>> {
        Arc::clone(&self.events)
    }
}

/// An inline PNG part carrying `data`.
pub fn png_part(data: &str) -> ResponsePart {
    ResponsePart::InlineData {
        mime_type: Some("image/png".to_string()),
        data: MediaSource::Base64(data.to_string()),
    }
}

impl ViralpostDriver for MockDriver {
    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[async_trait]
impl StructuredText for MockDriver {
    async fn generate_json(&self, req: &StructuredTextRequest) -> ViralpostResult<Option<String>> {
        self.text_requests.lock().unwrap().push(req.clone());
        self.events.lock().unwrap().push(Event::TextCall);

        match &self.text {
            TextBehavior::Payload(payload) => Ok(Some(payload.clone())),
            TextBehavior::Empty => Ok(None),
            TextBehavior::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
            TextBehavior::Pending => std::future::pending().await,
        }
    }
}

#[async_trait]
impl ImageGeneration for MockDriver {
    async fn generate_image(&self, req: &ImageRequest) -> ViralpostResult<ImageResponse> {
        self.image_requests.lock().unwrap().push(req.clone());
        self.events.lock().unwrap().push(Event::ImageCall);

        match &self.image {
            ImageBehavior::Parts(parts) => Ok(ImageResponse::new(parts.clone())),
            ImageBehavior::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
            ImageBehavior::Pending => std::future::pending().await,
        }
    }
}
