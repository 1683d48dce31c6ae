//! Document model for the resume editor.
//!
//! This crate defines the canonical shape of a résumé document, how
//! untrusted structured input is normalized into that shape, the canonical
//! on-disk serialization, and the pure edit operations used by the editor.

pub mod document;
pub mod edit;
pub mod error;
pub mod normalize;

// Re-export main types
pub use document::{Achievement, Experience, Profile, ResumeDocument, SkillGroup};
pub use edit::{DocumentEdit, Section};
pub use error::{DocumentError, EditError};
pub use normalize::{normalize, parse, serialize};
