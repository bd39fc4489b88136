//! # intercept-axum
//!
//! A typed interception layer for axum-style request pipelines: extensions
//! transform the body of an in-flight HTTP call at well-defined phase
//! boundaries, without getting access to the pipeline's dispatch machinery.
//!
//! The pipeline invokes each interceptor with one of four context shapes,
//! chosen by the phase it is executing:
//!
//! - [`CallContext`]: whole-call interception, no body semantics
//! - [`CallReceiveContext`]: transform the raw inbound body stream into a
//!   typed value
//! - [`CallRespondContext`]: transform the response value before it is
//!   converted to wire-ready content
//! - [`CallRespondAfterTransformContext`]: rewrite the finalized
//!   [`OutgoingContent`] right before it is written out
//!
//! Each context narrows what a transform may observe and produce. Violating
//! a context's precondition on the current subject shape surfaces as
//! [`InterceptError::UnexpectedSubjectType`] instead of silently corrupting
//! the in-flight call state.
//!
//! [`CallContext`]: context::CallContext
//! [`CallReceiveContext`]: context::CallReceiveContext
//! [`CallRespondContext`]: context::CallRespondContext
//! [`CallRespondAfterTransformContext`]: context::CallRespondAfterTransformContext

pub mod context;

pub use intercept_axum_core::{
    BoxError, BoxedSubject, InterceptError, OutgoingContent, PhaseState, ReceiveRequest, Subject,
    TypeInfo,
};

pub mod prelude {
    //! The most common types for interceptor authors.
    pub use crate::context::{
        CallContext, CallReceiveContext, CallRespondAfterTransformContext, CallRespondContext,
    };
    pub use crate::{BoxedSubject, InterceptError, OutgoingContent, ReceiveRequest, Subject, TypeInfo};
}
