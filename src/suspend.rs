/// The state of a [`Coro`](crate::Coro) after a call to `resume()` has
/// finished.
///
///   * `Yield(y, n)`: the state machine produced the element `y` and is paused
///     in state `n`, ready to be resumed for the next element.
///   * `Return`: the state machine is exhausted. Because `resume()` consumed
///     it and nothing was handed back, it cannot be resumed again.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Suspend<Y, N> {
    Yield(Y, N),
    Return,
}

use Suspend::*;

impl<Y, N> Suspend<Y, N> {
    /// Returns the yielded element and the next state, or `None` if the
    /// state machine returned.
    ///
    /// Compare to `Result::ok()` or `ControlFlow::continue_value()`.
    pub fn into_yield(self) -> Option<(Y, N)> {
        match self {
            Yield(y, n) => Some((y, n)),
            Return => None,
        }
    }

    /// Transforms the yielded element, leaving the next state untouched.
    pub fn map_yield<Y2>(self, f: impl FnOnce(Y) -> Y2) -> Suspend<Y2, N> {
        match self {
            Yield(y, n) => Yield(f(y), n),
            Return => Return,
        }
    }

    /// Transforms the next state, leaving the yielded element untouched.
    pub fn map_next<N2>(self, f: impl FnOnce(N) -> N2) -> Suspend<Y, N2> {
        match self {
            Yield(y, n) => Yield(y, f(n)),
            Return => Return,
        }
    }
}
