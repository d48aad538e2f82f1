use core::ops::ControlFlow;

use crate::coro::Coro;
use crate::sequence::Sequence;
use crate::suspend::Suspend;

/// See [`unfold()`].
#[derive(Clone, Debug)]
pub struct Unfold<St, F> {
    seed: St,
    step: F,
}

impl<St, F, T> Sequence for Unfold<St, F>
where
    St: Clone,
    F: FnMut(St) -> Option<(T, St)>,
{
    type Item = T;
    type Resume<'a>
        = UnfoldCoro<St, &'a mut F>
    where
        Self: 'a;

    fn start(&mut self) -> Self::Resume<'_> {
        UnfoldCoro {
            state: self.seed.clone(),
            step: &mut self.step,
        }
    }

    fn produce<C>(&mut self, mut consumer: C)
    where
        C: FnMut(T) -> ControlFlow<()>,
    {
        let mut state = self.seed.clone();
        while let Some((y, next)) = (self.step)(state) {
            if consumer(y).is_break() {
                return;
            }
            state = next;
        }
    }
}

pub struct UnfoldCoro<St, F> {
    state: St,
    step: F,
}

impl<St, F, T> Coro<T> for UnfoldCoro<St, F>
where
    F: FnMut(St) -> Option<(T, St)>,
{
    fn resume(self) -> Suspend<T, Self> {
        let Self { state, mut step } = self;
        match step(state) {
            Some((y, state)) => Suspend::Yield(y, UnfoldCoro { state, step }),
            None => Suspend::Return,
        }
    }
}

/// Generates a sequence from a seed and a step function, with no upstream.
///
/// Each traversal starts from a clone of `seed`. `step` maps the current state
/// to `Some((element, next_state))` to continue, or `None` to stop right there.
/// Nothing checks that `step` ever returns `None`; a step that never does
/// describes an infinite sequence, which is fine as long as the consumer
/// stops.
///
/// # Examples
///
/// ```rust
/// use coseq::Sequence;
/// use coseq::unfold;
///
/// let mut countdown = unfold(|n: u32| (n > 0).then(|| (n, n - 1)), 10);
/// assert_eq!(
///     countdown.collect::<Vec<_>>(),
///     [10, 9, 8, 7, 6, 5, 4, 3, 2, 1]
/// );
/// ```
pub fn unfold<St, F, T>(step: F, seed: St) -> Unfold<St, F>
where
    St: Clone,
    F: FnMut(St) -> Option<(T, St)>,
{
    Unfold { seed, step }
}
