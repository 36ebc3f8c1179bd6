//! Service layer for gamedex
//!
//! Ties the collaborators together: photo → recognized attributes, and the
//! catalog session that keeps an in-memory collection in step with storage.

mod catalog;
mod error;
mod recognition;

pub use catalog::CatalogSession;
pub use error::{RecognitionError, ServiceError};
pub use recognition::RecognitionService;
