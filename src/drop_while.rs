use core::ops::ControlFlow;
use core::ops::ControlFlow::Continue;

use crate::coro::Coro;
use crate::sequence::Sequence;
use crate::suspend::Suspend;

/// See [`drop_while()`].
#[derive(Clone, Debug)]
pub struct DropWhile<S, P> {
    source: S,
    pred: P,
}

impl<S, P> DropWhile<S, P> {
    pub(crate) fn new(source: S, pred: P) -> Self {
        DropWhile { source, pred }
    }
}

impl<S, P> Sequence for DropWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type Resume<'a>
        = DropWhileCoro<S::Resume<'a>, &'a mut P>
    where
        Self: 'a;

    fn start(&mut self) -> Self::Resume<'_> {
        DropWhileCoro {
            coro: self.source.start(),
            pred: &mut self.pred,
            dropping: true,
        }
    }

    fn produce<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> ControlFlow<()>,
    {
        let pred = &mut self.pred;
        let mut dropping = true;
        self.source.produce(|y| {
            if dropping && pred(&y) {
                return Continue(());
            }
            dropping = false;
            consumer(y)
        });
    }
}

pub struct DropWhileCoro<K, P> {
    coro: K,
    pred: P,
    dropping: bool,
}

impl<T, K, P> Coro<T> for DropWhileCoro<K, P>
where
    K: Coro<T>,
    P: FnMut(&T) -> bool,
{
    fn resume(self) -> Suspend<T, Self> {
        let Self {
            mut coro,
            mut pred,
            dropping,
        } = self;
        loop {
            match coro.resume() {
                Suspend::Yield(y, next) if dropping && pred(&y) => coro = next,
                Suspend::Yield(y, next) => {
                    return Suspend::Yield(
                        y,
                        DropWhileCoro {
                            coro: next,
                            pred,
                            dropping: false,
                        },
                    );
                }
                Suspend::Return => return Suspend::Return,
            }
        }
    }
}

/// Skips the leading elements of `source` for which `pred` holds, then yields
/// everything after, starting with the first element that failed `pred`.
///
/// Once an element fails `pred`, `pred` is never called again in that
/// traversal.
///
/// # Examples
///
/// ```rust
/// use coseq::Sequence;
/// use coseq::drop_while;
/// use coseq::from_iter;
///
/// let mut rest = drop_while(|&x: &i32| x < 3, from_iter([1, 2, 3, 4, 1]));
/// assert_eq!(rest.collect::<Vec<_>>(), [3, 4, 1]);
/// ```
pub fn drop_while<S, P>(pred: P, source: S) -> DropWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    DropWhile::new(source, pred)
}
