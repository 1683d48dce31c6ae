//! API request handlers.

pub mod document;
pub mod health;
pub mod pages;
pub mod versions;

pub use document::*;
pub use health::*;
pub use pages::*;
pub use versions::*;
