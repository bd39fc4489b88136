//! Core data model for `intercept-axum`.
//!
//! This crate holds the framework-agnostic half of the interception layer:
//! the type-erased phase subject, the per-phase subject slot owned by the
//! pipeline, the receive-phase request composite, the finalized outgoing
//! content representation, and the error type shared by every transform
//! operation.
//!
//! ## Modules
//!
//! - [`error`](crate::InterceptError): the subject-type-mismatch error and
//!   the pass-through carrier for transform failures
//! - `subject`: [`Subject`], [`PhaseState`], [`ReceiveRequest`], [`TypeInfo`]
//! - `content`: [`OutgoingContent`]

mod content;
mod error;
mod subject;

pub use content::*;
pub use error::*;
pub use subject::*;
