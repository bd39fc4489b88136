//! Receive-phase context.

use std::future::Future;
use std::mem;

use axum::body::Body;
use intercept_axum_core::{InterceptError, PhaseState, ReceiveRequest, Subject};

use super::CallHandlingContext;

/// Name reported when the receive precondition fails: the raw inbound
/// stream type.
pub const RAW_BODY_TYPE: &str = "Body";

/// Context for the receive phase. Allows transformations of the body that is
/// being received from the client.
pub struct CallReceiveContext<'a> {
    inner: CallHandlingContext<'a, ReceiveRequest>,
}

impl<'a> CallReceiveContext<'a> {
    /// Wrap the receive-phase state for one interceptor invocation.
    pub fn new(state: &'a mut PhaseState<ReceiveRequest>) -> Self {
        Self {
            inner: CallHandlingContext::new(state),
        }
    }

    /// Transform the raw inbound body stream into an arbitrary value.
    ///
    /// The current subject must still be the raw [`Body`] stream: either no
    /// interceptor has consumed it yet, or an earlier transform produced
    /// another stream. On success the subject becomes a new
    /// [`ReceiveRequest`] holding the transform's result; the declared
    /// target type and the reusability flag are carried over unchanged. The
    /// replacement is written in one non-suspending step after the
    /// transform completes, so later interceptors never observe a
    /// half-updated request.
    ///
    /// # Errors
    ///
    /// [`InterceptError::UnexpectedSubjectType`] if the current value is not
    /// a raw body stream; the subject holder is left untouched in that
    /// case. Errors returned by `transform` itself propagate unmodified.
    pub async fn transform_request_body<F, Fut, T>(
        &mut self,
        transform: F,
    ) -> Result<(), InterceptError>
    where
        F: FnOnce(Body) -> Fut,
        Fut: Future<Output = Result<T, InterceptError>>,
        T: Subject,
    {
        let state = self.inner.state_mut();

        let raw = state
            .subject_mut()
            .value_mut()
            .downcast_mut::<Body>()
            .map(|body| mem::replace(body, Body::empty()));
        let Some(raw) = raw else {
            let err = InterceptError::unexpected_subject(RAW_BODY_TYPE, state.subject().value());
            tracing::debug!(error = %err, "rejected receive body transform");
            return Err(err);
        };

        let value = transform(raw).await?;

        let request = state.subject();
        let next = ReceiveRequest::new(request.type_info(), value, request.is_reusable());
        state.replace_subject(next);
        Ok(())
    }
}
