//! UI Components for the GraminScore page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - Image upload form with drag & drop zone

mod hero;
mod upload;
mod footer;

pub use hero::*;
pub use upload::*;
pub use footer::*;
