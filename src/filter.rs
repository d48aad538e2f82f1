use core::ops::ControlFlow;
use core::ops::ControlFlow::Continue;

use crate::coro::Coro;
use crate::sequence::Sequence;
use crate::suspend::Suspend;

/// See [`filter()`].
#[derive(Clone, Debug)]
pub struct Filter<S, P> {
    source: S,
    pred: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, pred: P) -> Self {
        Filter { source, pred }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type Resume<'a>
        = FilterCoro<S::Resume<'a>, &'a mut P>
    where
        Self: 'a;

    fn start(&mut self) -> Self::Resume<'_> {
        FilterCoro {
            coro: self.source.start(),
            pred: &mut self.pred,
        }
    }

    fn produce<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> ControlFlow<()>,
    {
        let pred = &mut self.pred;
        self.source
            .produce(|y| if pred(&y) { consumer(y) } else { Continue(()) });
    }
}

pub struct FilterCoro<K, P> {
    coro: K,
    pred: P,
}

impl<T, K, P> Coro<T> for FilterCoro<K, P>
where
    K: Coro<T>,
    P: FnMut(&T) -> bool,
{
    fn resume(self) -> Suspend<T, Self> {
        let Self { mut coro, mut pred } = self;
        // Rejected elements are skipped within a single resume.
        loop {
            match coro.resume() {
                Suspend::Yield(y, next) if pred(&y) => {
                    return Suspend::Yield(y, FilterCoro { coro: next, pred });
                }
                Suspend::Yield(_, next) => coro = next,
                Suspend::Return => return Suspend::Return,
            }
        }
    }
}

/// Keeps only the elements of `source` for which `pred` holds.
///
/// # Examples
///
/// ```rust
/// use coseq::Sequence;
/// use coseq::filter;
/// use coseq::from_iter;
///
/// let mut evens = filter(|x: &i32| x % 2 == 0, from_iter([1, 2, 3, 4]));
/// assert_eq!(evens.collect::<Vec<_>>(), [2, 4]);
/// ```
pub fn filter<S, P>(pred: P, source: S) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter::new(source, pred)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::from_iter;

    #[test]
    fn keeps_matching_elements() {
        let mut evens = filter(|x: &i32| x % 2 == 0, from_iter([1, 2, 3, 4]));
        assert_eq!(evens.collect::<Vec<_>>(), [2, 4]);
    }

    #[test]
    fn coro_skips_rejected_runs() {
        let mut big = from_iter([1, 10, 2, 3, 20, 4]).filter(|&x| x >= 10);
        big.start().assert_yields(10).assert_yields(20).assert_returns();
    }

    #[test]
    fn rejecting_everything_is_empty() {
        let mut none = from_iter([1, 2, 3]).filter(|_| false);
        assert_eq!(none.count(), 0);
        none.start().assert_returns();
    }
}
