use thiserror::Error;

/// Errors reported by cursors and by terminal consumers that cannot produce a
/// value.
///
/// Failures inside user-supplied functions are not represented here. They
/// unwind through the traversal untouched, or travel as the user's own error
/// type through [`Sequence::try_for_each()`](crate::Sequence::try_for_each).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// `Cursor::pull()` was called after the cursor had been released.
    #[error("cursor pulled after it was released")]
    PulledAfterRelease,

    /// `Cursor::release()` was called on a cursor that was already released.
    #[error("cursor released more than once")]
    ReleasedTwice,

    /// A reduction that needs at least one element got none.
    #[error("cannot reduce an empty sequence")]
    EmptySequence,
}

pub type Result<T> = core::result::Result<T, Error>;
