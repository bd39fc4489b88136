//! Respond-phase contexts, before and after wire conversion.

use std::future::Future;
use std::mem;

use bytes::Bytes;
use http::StatusCode;
use intercept_axum_core::{
    BoxedSubject, InterceptError, OutgoingContent, PhaseState, Subject,
};

use super::CallHandlingContext;

/// Name reported when the after-transform precondition fails: the finalized
/// wire-ready representation.
pub const OUTGOING_CONTENT_TYPE: &str = "OutgoingContent";

/// Context for the respond phase. Allows transformations of the response
/// value before it is converted to wire-ready content.
pub struct CallRespondContext<'a> {
    inner: CallHandlingContext<'a, BoxedSubject>,
}

impl<'a> CallRespondContext<'a> {
    /// Wrap the respond-phase state for one interceptor invocation.
    pub fn new(state: &'a mut PhaseState<BoxedSubject>) -> Self {
        Self {
            inner: CallHandlingContext::new(state),
        }
    }

    /// Transform the response value.
    ///
    /// No shape precondition: the respond phase operates on the
    /// unconstrained response object before format negotiation, and the
    /// subject is unconditionally replaced with the transform's result.
    ///
    /// # Errors
    ///
    /// Only errors returned by `transform` itself, propagated unmodified.
    pub async fn transform_response_body<F, Fut, T>(
        &mut self,
        transform: F,
    ) -> Result<(), InterceptError>
    where
        F: FnOnce(BoxedSubject) -> Fut,
        Fut: Future<Output = Result<T, InterceptError>>,
        T: Subject,
    {
        let state = self.inner.state_mut();

        // Unit placeholder while the transform runs; unobservable behind the
        // context's exclusive borrow.
        let current = state.replace_subject(Box::new(()));
        let next = transform(current).await?;
        state.replace_subject(Box::new(next));
        Ok(())
    }
}

/// Context for interceptors that run after the response has been converted
/// to [`OutgoingContent`]. Allows transformations of the finalized
/// representation right before it is written to the client.
pub struct CallRespondAfterTransformContext<'a> {
    inner: CallHandlingContext<'a, BoxedSubject>,
}

impl<'a> CallRespondAfterTransformContext<'a> {
    /// Wrap the late respond-phase state for one interceptor invocation.
    pub fn new(state: &'a mut PhaseState<BoxedSubject>) -> Self {
        Self {
            inner: CallHandlingContext::new(state),
        }
    }

    /// Transform the finalized outgoing content.
    ///
    /// # Errors
    ///
    /// [`InterceptError::UnexpectedSubjectType`] if conversion has not run
    /// yet, that is, the current subject is not [`OutgoingContent`]; the
    /// subject holder is left untouched in that case. Errors returned by
    /// `transform` itself propagate unmodified.
    pub async fn transform_response_body<F, Fut>(
        &mut self,
        transform: F,
    ) -> Result<(), InterceptError>
    where
        F: FnOnce(OutgoingContent) -> Fut,
        Fut: Future<Output = Result<OutgoingContent, InterceptError>>,
    {
        let state = self.inner.state_mut();

        let content = state
            .subject_mut()
            .as_mut()
            .downcast_mut::<OutgoingContent>()
            .map(|content| mem::replace(content, OutgoingContent::new(StatusCode::OK, Bytes::new())));
        let Some(content) = content else {
            let err = InterceptError::unexpected_subject(
                OUTGOING_CONTENT_TYPE,
                state.subject().as_ref(),
            );
            tracing::debug!(error = %err, "rejected after-transform body rewrite");
            return Err(err);
        };

        let next = transform(content).await?;
        state.replace_subject(Box::new(next));
        Ok(())
    }
}
