use core::marker::PhantomData;
use core::mem;

use crate::coro::Coro;
use crate::error::Error;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::suspend::Suspend;
use Suspend::{Return, Yield};

enum State<K> {
    Suspended(K),
    Exhausted,
    // A resume unwound while the state machine was out of the cursor.
    Poisoned,
    Released,
}

/// A demand-driven view of a sequence: each [`pull()`](Cursor::pull) resumes
/// the paused traversal for exactly one element.
///
/// The traversal is held as a paused [`Coro`] between pulls. Releasing the
/// cursor drops it, which in turn drops every upstream state machine it owns.
/// Release happens exactly once: either through [`release()`](Cursor::release)
/// or when the cursor is dropped, whichever comes first.
///
/// If resuming the traversal panics (for example, a mapping function failed),
/// the cursor is poisoned: the paused state is gone, and later pulls report
/// exhaustion instead of re-entering a failed traversal.
///
/// # Examples
///
/// ```rust
/// use coseq::Error;
/// use coseq::from_iter;
/// use coseq::pull;
///
/// let mut letters = from_iter(['a', 'b', 'c']);
/// let mut cursor = pull(&mut letters);
/// assert_eq!(cursor.pull(), Ok(Some('a')));
/// assert_eq!(cursor.pull(), Ok(Some('b')));
/// cursor.release().unwrap();
/// assert_eq!(cursor.pull(), Err(Error::PulledAfterRelease));
/// ```
pub struct Cursor<K, T> {
    state: State<K>,
    _phantom: PhantomData<fn() -> T>,
}

impl<K, T> Cursor<K, T>
where
    K: Coro<T>,
{
    /// Wraps a paused traversal.
    pub fn new(coro: K) -> Self {
        Cursor {
            state: State::Suspended(coro),
            _phantom: PhantomData,
        }
    }

    /// Resumes the traversal for one element.
    ///
    /// Returns `Ok(None)` once the traversal is exhausted (or poisoned), and
    /// keeps returning it. Returns `Err(Error::PulledAfterRelease)` if the
    /// cursor has been released.
    pub fn pull(&mut self) -> Result<Option<T>> {
        match mem::replace(&mut self.state, State::Poisoned) {
            State::Suspended(coro) => match coro.resume() {
                Yield(y, next) => {
                    self.state = State::Suspended(next);
                    Ok(Some(y))
                }
                Return => {
                    tracing::trace!("cursor exhausted");
                    self.state = State::Exhausted;
                    Ok(None)
                }
            },
            State::Exhausted => {
                self.state = State::Exhausted;
                Ok(None)
            }
            State::Poisoned => {
                tracing::debug!("pulled from a poisoned cursor");
                Ok(None)
            }
            State::Released => {
                tracing::debug!("pulled from a released cursor");
                self.state = State::Released;
                Err(Error::PulledAfterRelease)
            }
        }
    }

    /// Stops the traversal and drops its paused state.
    ///
    /// Returns `Err(Error::ReleasedTwice)` if the cursor was already
    /// released. Releasing an exhausted or poisoned cursor is fine.
    pub fn release(&mut self) -> Result<()> {
        match mem::replace(&mut self.state, State::Released) {
            State::Released => {
                tracing::debug!("cursor released twice");
                Err(Error::ReleasedTwice)
            }
            State::Suspended(coro) => {
                drop(coro);
                tracing::trace!("cursor released mid-traversal");
                Ok(())
            }
            State::Exhausted | State::Poisoned => Ok(()),
        }
    }

    pub fn is_released(&self) -> bool {
        matches!(self.state, State::Released)
    }

    pub fn is_poisoned(&self) -> bool {
        matches!(self.state, State::Poisoned)
    }
}

impl<K, T> Drop for Cursor<K, T> {
    fn drop(&mut self) {
        if let State::Suspended(_) = self.state {
            tracing::trace!("cursor released on drop");
        }
    }
}

impl<K, T> core::fmt::Debug for Cursor<K, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = match self.state {
            State::Suspended(_) => "Suspended",
            State::Exhausted => "Exhausted",
            State::Poisoned => "Poisoned",
            State::Released => "Released",
        };
        f.debug_struct("Cursor").field("state", &state).finish()
    }
}

/// Iterates the remaining elements of a cursor. The cursor is released when
/// the iterator is dropped.
pub struct IntoIter<K, T>(Cursor<K, T>);

impl<K, T> Iterator for IntoIter<K, T>
where
    K: Coro<T>,
{
    type Item = T;
    fn next(&mut self) -> Option<T> {
        // The wrapped cursor can't be released while it's owned here.
        self.0.pull().ok().flatten()
    }
}

impl<K, T> IntoIterator for Cursor<K, T>
where
    K: Coro<T>,
{
    type Item = T;
    type IntoIter = IntoIter<K, T>;
    fn into_iter(self) -> IntoIter<K, T> {
        IntoIter(self)
    }
}

/// Opens a [`Cursor`] over a new traversal of `source`.
///
/// The cursor borrows `source` for as long as it lives.
pub fn pull<S>(source: &mut S) -> Cursor<S::Resume<'_>, S::Item>
where
    S: Sequence,
{
    Cursor::new(source.start())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coro::IterCoro;

    fn cursor_over<const N: usize>(
        items: [i32; N],
    ) -> Cursor<IterCoro<core::array::IntoIter<i32, N>>, i32> {
        Cursor::new(IterCoro(items.into_iter()))
    }

    #[test]
    fn pulls_in_order_then_stays_exhausted() {
        let mut cursor = cursor_over([1, 2]);
        assert_eq!(cursor.pull(), Ok(Some(1)));
        assert_eq!(cursor.pull(), Ok(Some(2)));
        assert_eq!(cursor.pull(), Ok(None));
        assert_eq!(cursor.pull(), Ok(None));
    }

    #[test]
    fn pull_after_release_is_rejected() {
        let mut cursor = cursor_over([1, 2]);
        assert_eq!(cursor.pull(), Ok(Some(1)));
        assert_eq!(cursor.release(), Ok(()));
        assert!(cursor.is_released());
        assert_eq!(cursor.pull(), Err(Error::PulledAfterRelease));
        assert_eq!(cursor.pull(), Err(Error::PulledAfterRelease));
    }

    #[test]
    fn release_twice_is_rejected() {
        let mut cursor = cursor_over([1]);
        assert_eq!(cursor.release(), Ok(()));
        assert_eq!(cursor.release(), Err(Error::ReleasedTwice));
    }

    #[test]
    fn release_after_exhaustion() {
        let mut cursor = cursor_over([]);
        assert_eq!(cursor.pull(), Ok(None));
        assert_eq!(cursor.release(), Ok(()));
    }

    #[test]
    fn into_iter_drains_remaining() {
        let mut cursor = cursor_over([1, 2, 3]);
        assert_eq!(cursor.pull(), Ok(Some(1)));
        let rest: alloc::vec::Vec<_> = cursor.into_iter().collect();
        assert_eq!(rest, [2, 3]);
    }
}
