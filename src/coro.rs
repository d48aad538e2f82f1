use either::Either;

use crate::suspend::Suspend;
use Suspend::{Return, Yield};

/// A paused traversal of a sequence: a state machine that, when resumed,
/// either yields one element of type `Y` together with its own next state, or
/// returns because the traversal is over.
///
/// `resume()` consumes the state machine. It hands a new one back to the
/// caller *only* if an element was yielded, so it is impossible to resume a
/// traversal that has already returned. There is nothing like
/// `Iterator::fuse()` to reach for, because there is no contract to violate.
///
/// Every [`Sequence`](crate::Sequence) can start one of these for a single
/// traversal, which is what lets a [`Cursor`](crate::Cursor) pause a sequence
/// between pulls without threads or native generators. Dropping a paused state
/// machine is how a traversal is abandoned: any upstream state machines it owns
/// are dropped along with it.
///
/// Every state machine resumes into a value of its own type, so a cursor can
/// keep it in place between pulls.
///
/// # Examples
///
/// ```rust
/// use coseq::{Coro, Return, Suspend, Yield};
///
/// struct Countdown(u32);
/// impl Coro<u32> for Countdown {
///     fn resume(self) -> Suspend<u32, Self> {
///         match self.0 {
///             0 => Return,
///             n => Yield(n, Countdown(n - 1)),
///         }
///     }
/// }
///
/// Countdown(3)
///     .assert_yields(3)
///     .assert_yields(2)
///     .assert_yields(1)
///     .assert_returns();
/// ```
pub trait Coro<Y>: Sized {
    /// Advances the state machine by one element.
    fn resume(self) -> Suspend<Y, Self>;

    /// Resumes the state machine and asserts that it yields `expected`.
    /// Panics if it returns instead, or yields something else.
    ///
    /// This is most useful for testing, as calls chain:
    ///
    /// ```rust
    /// use coseq::Coro;
    /// use coseq::Sequence;
    /// use coseq::from_iter;
    ///
    /// let mut words = from_iter(["foo", "bar"]).map(str::len);
    /// words.start().assert_yields(3).assert_yields(3).assert_returns();
    /// ```
    fn assert_yields(self, expected: Y) -> Self
    where
        Y: PartialEq + core::fmt::Debug,
    {
        match self.resume() {
            Yield(actual, next) => {
                assert_eq!(
                    actual, expected,
                    "expected Yield({expected:?}), got Yield({actual:?})"
                );
                next
            }
            Return => panic!("expected Yield({expected:?}), got Return"),
        }
    }

    /// Resumes the state machine and asserts that it returns.
    fn assert_returns(self)
    where
        Y: core::fmt::Debug,
    {
        if let Yield(actual, _) = self.resume() {
            panic!("expected Return, got Yield({actual:?})")
        }
    }
}

/// Drives an iterator one `next()` at a time.
#[derive(Clone, Debug)]
pub struct IterCoro<I>(pub(crate) I);

impl<I: Iterator> Coro<I::Item> for IterCoro<I> {
    fn resume(mut self) -> Suspend<I::Item, Self> {
        match self.0.next() {
            Some(y) => Yield(y, self),
            None => Return,
        }
    }
}

/// Either of two state machines that yield the same type is itself a state
/// machine, and stays on the side it started on.
impl<Y, A, B> Coro<Y> for Either<A, B>
where
    A: Coro<Y>,
    B: Coro<Y>,
{
    fn resume(self) -> Suspend<Y, Self> {
        match self {
            Either::Left(a) => a.resume().map_next(Either::Left),
            Either::Right(b) => b.resume().map_next(Either::Right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_coro_yields_in_order() {
        IterCoro([1, 2, 3].into_iter())
            .assert_yields(1)
            .assert_yields(2)
            .assert_yields(3)
            .assert_returns();
    }

    #[test]
    fn iter_coro_empty() {
        IterCoro(core::iter::empty::<i32>()).assert_returns();
    }

    #[test]
    fn either_stays_on_its_side() {
        let left: Either<_, IterCoro<core::ops::Range<i32>>> =
            Either::Left(IterCoro([7, 8].into_iter()));
        left.assert_yields(7).assert_yields(8).assert_returns();

        let right: Either<IterCoro<core::array::IntoIter<i32, 0>>, _> =
            Either::Right(IterCoro(1..3));
        right.assert_yields(1).assert_yields(2).assert_returns();
    }

    #[test]
    #[should_panic(expected = "expected Yield(2), got Yield(1)")]
    fn assert_yields_reports_mismatch() {
        IterCoro([1].into_iter()).assert_yields(2);
    }

    #[test]
    #[should_panic(expected = "expected Return, got Yield(1)")]
    fn assert_returns_reports_yield() {
        IterCoro([1].into_iter()).assert_returns();
    }
}
