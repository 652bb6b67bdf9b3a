//! Right-to-left text shaping.
//!
//! Two independent transforms over extracted text:
//!
//! * [`direction::fix`] — line-level word-order correction for visually
//!   ordered PDF output. Its result is the canonical logical-order text
//!   used for storage and search.
//! * [`reshape::reshape`] — display-only conversion to contextual Arabic
//!   letterforms in visual order, for rendering surfaces without native
//!   bidirectional support. Its output must never be stored, indexed, or
//!   passed back through [`direction::fix`].

pub mod direction;
pub mod joining;
pub mod reshape;

pub use direction::fix;
pub use reshape::reshape;
