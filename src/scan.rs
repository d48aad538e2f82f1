use core::marker::PhantomData;
use core::ops::ControlFlow;
use core::ops::ControlFlow::Break;

use crate::coro::Coro;
use crate::sequence::Sequence;
use crate::suspend::Suspend;

/// See [`scan()`].
#[derive(Clone, Debug)]
pub struct Scan<S, B, F> {
    source: S,
    init: B,
    f: F,
}

impl<S, B, F> Scan<S, B, F> {
    pub(crate) fn new(source: S, init: B, f: F) -> Self {
        Scan { source, init, f }
    }
}

impl<S, B, F> Sequence for Scan<S, B, F>
where
    S: Sequence,
    B: Clone,
    F: FnMut(B, S::Item) -> B,
{
    type Item = B;
    type Resume<'a>
        = ScanCoro<S::Item, S::Resume<'a>, B, &'a mut F>
    where
        Self: 'a;

    fn start(&mut self) -> Self::Resume<'_> {
        ScanCoro {
            coro: self.source.start(),
            acc: self.init.clone(),
            f: &mut self.f,
            started: false,
            _phantom: PhantomData,
        }
    }

    fn produce<C>(&mut self, mut consumer: C)
    where
        C: FnMut(B) -> ControlFlow<()>,
    {
        if consumer(self.init.clone()).is_break() {
            return;
        }
        let f = &mut self.f;
        // Taken while `f` runs.
        let mut acc = Some(self.init.clone());
        self.source.produce(|y| match acc.take() {
            Some(prev) => {
                let next = f(prev, y);
                acc = Some(next.clone());
                consumer(next)
            }
            None => Break(()),
        });
    }
}

pub struct ScanCoro<T, K, B, F> {
    coro: K,
    acc: B,
    f: F,
    started: bool,
    _phantom: PhantomData<T>,
}

impl<T, K, B, F> Coro<B> for ScanCoro<T, K, B, F>
where
    K: Coro<T>,
    B: Clone,
    F: FnMut(B, T) -> B,
{
    fn resume(self) -> Suspend<B, Self> {
        let Self {
            coro,
            acc,
            mut f,
            started,
            ..
        } = self;
        if !started {
            return Suspend::Yield(
                acc.clone(),
                ScanCoro {
                    coro,
                    acc,
                    f,
                    started: true,
                    _phantom: PhantomData,
                },
            );
        }
        match coro.resume() {
            Suspend::Yield(y, next) => {
                let acc = f(acc, y);
                Suspend::Yield(
                    acc.clone(),
                    ScanCoro {
                        coro: next,
                        acc,
                        f,
                        started,
                        _phantom: PhantomData,
                    },
                )
            }
            Suspend::Return => Suspend::Return,
        }
    }
}

/// Yields `init`, then folds each element of `source` into the accumulator
/// with `f` and yields every intermediate result.
///
/// The result has exactly one more element than `source`. Each call to `f`
/// sees the accumulator produced by the previous call.
///
/// # Examples
///
/// ```rust
/// use coseq::Sequence;
/// use coseq::from_iter;
/// use coseq::scan;
///
/// let mut sums = scan(|acc, x| acc + x, 0, from_iter([1, 2, 3, 4]));
/// assert_eq!(sums.collect::<Vec<_>>(), [0, 1, 3, 6, 10]);
/// ```
pub fn scan<S, B, F>(f: F, init: B, source: S) -> Scan<S, B, F>
where
    S: Sequence,
    B: Clone,
    F: FnMut(B, S::Item) -> B,
{
    Scan::new(source, init, f)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::*;
    use crate::from_iter;

    #[test]
    fn running_totals() {
        let mut sums = scan(|a: i32, x: i32| a + x, 0, from_iter([1, 2, 3, 4]));
        assert_eq!(sums.collect::<Vec<_>>(), [0, 1, 3, 6, 10]);
    }

    #[test]
    fn empty_upstream_yields_only_init() {
        let mut sums = scan(|a: i32, x: i32| a + x, 42, from_iter(Vec::<i32>::new()));
        assert_eq!(sums.collect::<Vec<_>>(), [42]);
    }

    #[test]
    fn order_of_application() {
        let mut diffs = scan(|a: i32, x: i32| a - x, 100, from_iter([1, 2, 3, 4]));
        assert_eq!(diffs.collect::<Vec<_>>(), [100, 99, 97, 94, 90]);
    }

    #[test]
    fn accumulator_of_another_type() {
        let mut prefixes = from_iter(['a', 'b', 'c', 'd']).scan(
            String::from("foo"),
            |s, c| {
                let mut out = String::from(c);
                out.push_str(&s);
                out
            },
        );
        assert_eq!(
            prefixes.collect::<Vec<_>>(),
            ["foo", "afoo", "bafoo", "cbafoo", "dcbafoo"]
        );
    }

    #[test]
    fn coro_yields_init_first() {
        let mut sums = from_iter([5, 5]).scan(1, |a, x| a * x);
        sums.start()
            .assert_yields(1)
            .assert_yields(5)
            .assert_yields(25)
            .assert_returns();
    }

    #[test]
    fn stop_after_init_skips_upstream() {
        let mut pulled = 0;
        let mut sums = from_iter([1, 2, 3])
            .map(|x: i32| {
                pulled += 1;
                x
            })
            .scan(0, |a, x| a + x);
        let mut cursor = sums.cursor();
        assert_eq!(cursor.pull(), Ok(Some(0)));
        drop(cursor);
        drop(sums);
        assert_eq!(pulled, 0);
    }
}
