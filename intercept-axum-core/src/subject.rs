//! Phase subjects and the per-phase subject slot.
//!
//! The "subject" is the current value flowing through one phase of one call:
//! the raw body stream at the start of the receive phase, whatever a
//! transform produced after that, the unconstrained response object in the
//! respond phase, the finalized outgoing content after conversion. Because
//! transforms may produce values of any type, subjects are stored
//! type-erased; [`Subject`] keeps `Debug` reachable so a type mismatch can
//! describe what it actually found.

use std::any::{self, Any, TypeId};
use std::fmt;

/// A type-erased phase subject.
///
/// Blanket-implemented for every `'static + Debug + Send` type, so any value
/// a transform produces qualifies.
pub trait Subject: Any + fmt::Debug + Send {}

impl<T: Any + fmt::Debug + Send> Subject for T {}

/// Owned, type-erased subject value.
pub type BoxedSubject = Box<dyn Subject>;

impl dyn Subject {
    /// Whether the subject is a value of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Borrow the subject as a `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref()
    }

    /// Mutably borrow the subject as a `T`, if it is one.
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut()
    }
}

/// Static type metadata: the target type a caller declared when receiving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    /// Capture the type metadata of `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// The captured [`TypeId`].
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The captured type name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// The receive-phase subject: the declared target type, the current value,
/// and whether the value may be consumed more than once.
///
/// The declared target type and the reusability flag never change across the
/// receive-phase transform chain; only the value advances. The receive
/// context enforces this by carrying both over whenever it replaces the
/// value, and the fields are private so nothing else can touch them.
///
/// `value` expects a concrete subject type; passing an already-boxed
/// [`BoxedSubject`] would nest the box.
#[derive(Debug)]
pub struct ReceiveRequest {
    type_info: TypeInfo,
    value: BoxedSubject,
    reusable: bool,
}

impl ReceiveRequest {
    /// Create a receive request for a declared target type.
    pub fn new(type_info: TypeInfo, value: impl Subject, reusable: bool) -> Self {
        Self {
            type_info,
            value: Box::new(value),
            reusable,
        }
    }

    /// The target type declared by the receiving caller.
    pub fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    /// The current value.
    pub fn value(&self) -> &dyn Subject {
        self.value.as_ref()
    }

    /// Mutable access to the current value.
    pub fn value_mut(&mut self) -> &mut dyn Subject {
        self.value.as_mut()
    }

    /// Whether the value may be consumed more than once.
    pub fn is_reusable(&self) -> bool {
        self.reusable
    }
}

/// The subject holder for one phase of one call.
///
/// Owned by the pipeline's phase-execution loop; each interceptor's context
/// borrows it for exactly one invocation, so there is never a concurrent
/// writer. Also carries the control flag an early [`finish`](Self::finish)
/// sets, which the loop checks between interceptors.
#[derive(Debug)]
pub struct PhaseState<S> {
    subject: S,
    finished: bool,
}

impl<S> PhaseState<S> {
    /// Start a phase with its initial subject.
    pub fn new(subject: S) -> Self {
        Self {
            subject,
            finished: false,
        }
    }

    /// The current subject.
    pub fn subject(&self) -> &S {
        &self.subject
    }

    /// Mutable access to the current subject.
    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    /// Replace the subject, returning the previous one. A single
    /// non-suspending write; transforms never run inside it.
    pub fn replace_subject(&mut self, subject: S) -> S {
        std::mem::replace(&mut self.subject, subject)
    }

    /// Mark the phase finished: remaining interceptors of the current chain
    /// are skipped and the pipeline proceeds to call completion.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Whether an interceptor asked to finish the phase early.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
