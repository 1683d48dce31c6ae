//! HTTP interface for the resume editor.
//!
//! This crate serves the editing and rendering surfaces on top of a
//! [`DocumentRepository`](resume_persistence::DocumentRepository):
//! - Editor page and save endpoint
//! - Edit operations applied to the editor's document
//! - Print-ready preview
//! - Version listing
//! - Health check
//!
//! # Example
//!
//! ```ignore
//! use resume_api::{serve, ApiConfig, AppState};
//! use resume_persistence::{DocumentRepository, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repository = DocumentRepository::from_config(&StoreConfig::new("~/resume"));
//!     let config = ApiConfig::default();
//!     let state = AppState::new(config.clone(), repository);
//!
//!     serve(config, state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;
pub mod types;

pub use config::{ApiConfig, CorsPolicy};
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
