//! Phase-scoped contexts handed to interceptors.
//!
//! Each context is a capability-restricted view over one phase's
//! [`PhaseState`]: it borrows the state for exactly one interceptor
//! invocation and exposes only the transform operation that phase allows.
//! Capability narrowing is done with distinct types per phase, not with
//! runtime phase checks.

pub mod receive;
pub mod respond;

pub use receive::CallReceiveContext;
pub use respond::{CallRespondAfterTransformContext, CallRespondContext};

use intercept_axum_core::PhaseState;

/// Shared base of the phase contexts.
///
/// Carries the one capability every phase has: finishing the call early.
/// Crate-private, so extension code can only reach what its phase's context
/// re-exposes; none of the variants re-expose `finish`.
pub(crate) struct CallHandlingContext<'a, S> {
    state: &'a mut PhaseState<S>,
}

impl<'a, S> CallHandlingContext<'a, S> {
    pub(crate) fn new(state: &'a mut PhaseState<S>) -> Self {
        Self { state }
    }

    /// Skip the remaining interceptors of the current phase chain and let
    /// the pipeline proceed to call completion.
    #[allow(dead_code)] // internal usage for tests only
    pub(crate) fn finish(&mut self) {
        self.state.finish();
    }

    pub(crate) fn state_mut(&mut self) -> &mut PhaseState<S> {
        self.state
    }
}

/// Context for a generic call phase.
///
/// A typed marker with no operations: handing an interceptor a
/// `CallContext` states that its scope is the whole call, with no body
/// semantics.
pub struct CallContext<'a> {
    #[allow(dead_code)] // carries the base capability, reached by tests only
    inner: CallHandlingContext<'a, ()>,
}

impl<'a> CallContext<'a> {
    /// Wrap the call-phase state for one interceptor invocation.
    pub fn new(state: &'a mut PhaseState<()>) -> Self {
        Self {
            inner: CallHandlingContext::new(state),
        }
    }
}
