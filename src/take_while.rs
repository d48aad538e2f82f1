use core::ops::ControlFlow;
use core::ops::ControlFlow::Break;

use crate::coro::Coro;
use crate::sequence::Sequence;
use crate::suspend::Suspend;

/// See [`take_while()`].
#[derive(Clone, Debug)]
pub struct TakeWhile<S, P> {
    source: S,
    pred: P,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(source: S, pred: P) -> Self {
        TakeWhile { source, pred }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type Resume<'a>
        = TakeWhileCoro<S::Resume<'a>, &'a mut P>
    where
        Self: 'a;

    fn start(&mut self) -> Self::Resume<'_> {
        TakeWhileCoro {
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
            .produce(|y| if pred(&y) { consumer(y) } else { Break(()) });
    }
}

pub struct TakeWhileCoro<K, P> {
    coro: K,
    pred: P,
}

impl<T, K, P> Coro<T> for TakeWhileCoro<K, P>
where
    K: Coro<T>,
    P: FnMut(&T) -> bool,
{
    fn resume(self) -> Suspend<T, Self> {
        let Self { coro, mut pred } = self;
        match coro.resume() {
            Suspend::Yield(y, next) if pred(&y) => {
                Suspend::Yield(y, TakeWhileCoro { coro: next, pred })
            }
            // Returning drops `next`, which stops the upstream traversal.
            Suspend::Yield(_, _) | Suspend::Return => Suspend::Return,
        }
    }
}

/// Yields the leading elements of `source` for which `pred` holds, and stops
/// the whole traversal at the first element that fails it. That element is
/// not yielded, and nothing after it is computed.
///
/// # Examples
///
/// ```rust
/// use coseq::Sequence;
/// use coseq::from_iter;
/// use coseq::take_while;
///
/// let mut prefix = take_while(|&x: &i32| x < 3, from_iter([1, 2, 3, 4, 1]));
/// assert_eq!(prefix.collect::<Vec<_>>(), [1, 2]);
/// ```
pub fn take_while<S, P>(pred: P, source: S) -> TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile::new(source, pred)
}
