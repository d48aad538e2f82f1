use core::marker::PhantomData;
use core::ops::ControlFlow;

use crate::coro::Coro;
use crate::sequence::Sequence;
use crate::suspend::Suspend;

/// See [`zip_with()`].
#[derive(Clone, Debug)]
pub struct ZipWith<S1, S2, F> {
    left: S1,
    right: S2,
    f: F,
}

impl<S1, S2, F> ZipWith<S1, S2, F> {
    pub(crate) fn new(left: S1, right: S2, f: F) -> Self {
        ZipWith { left, right, f }
    }
}

impl<S1, S2, F, C> Sequence for ZipWith<S1, S2, F>
where
    S1: Sequence,
    S2: Sequence,
    F: FnMut(S1::Item, S2::Item) -> C,
{
    type Item = C;
    type Resume<'a>
        = ZipWithCoro<
        (S1::Item, S2::Item),
        S1::Resume<'a>,
        S2::Resume<'a>,
        &'a mut F,
    >
    where
        Self: 'a;

    fn start(&mut self) -> Self::Resume<'_> {
        ZipWithCoro {
            left: self.left.start(),
            right: self.right.start(),
            f: &mut self.f,
            _phantom: PhantomData,
        }
    }

    fn produce<K>(&mut self, mut consumer: K)
    where
        K: FnMut(C) -> ControlFlow<()>,
    {
        let f = &mut self.f;
        // Both cursors are released when they go out of scope, including when
        // `f` or `consumer` unwinds.
        let mut left = self.left.cursor();
        let mut right = self.right.cursor();
        loop {
            let Ok(Some(a)) = left.pull() else {
                tracing::trace!("zip_with: left side exhausted");
                break;
            };
            let Ok(Some(b)) = right.pull() else {
                tracing::trace!("zip_with: right side exhausted");
                break;
            };
            if consumer(f(a, b)).is_break() {
                break;
            }
        }
    }
}

pub struct ZipWithCoro<T, K1, K2, F> {
    left: K1,
    right: K2,
    f: F,
    _phantom: PhantomData<T>,
}

impl<A, B, C, K1, K2, F> Coro<C> for ZipWithCoro<(A, B), K1, K2, F>
where
    K1: Coro<A>,
    K2: Coro<B>,
    F: FnMut(A, B) -> C,
{
    fn resume(self) -> Suspend<C, Self> {
        use Suspend::{Return, Yield};
        let Self {
            left, right, mut f, ..
        } = self;
        match left.resume() {
            Yield(a, left) => match right.resume() {
                Yield(b, right) => Yield(
                    f(a, b),
                    ZipWithCoro {
                        left,
                        right,
                        f,
                        _phantom: PhantomData,
                    },
                ),
                // `a` and the rest of the left side are dropped here.
                Return => Return,
            },
            Return => Return,
        }
    }
}

/// Combines the elements of two sequences pairwise with `f`, stopping as soon
/// as either side is exhausted.
///
/// The two sources are consumed at their own pace through two cursors: each
/// step pulls one element from the left and then one from the right. The
/// result is as long as the shorter source. When one side runs out, an element
/// already pulled from the other side is discarded, and both cursors are
/// released before the traversal returns.
///
/// # Examples
///
/// ```rust
/// use coseq::Sequence;
/// use coseq::from_iter;
/// use coseq::zip_with;
///
/// let mut squares = zip_with(
///     |a: i32, b: i32| a * b,
///     from_iter([1, 2, 3, 4]),
///     from_iter([1, 2, 3, 4, 5]),
/// );
/// assert_eq!(squares.collect::<Vec<_>>(), [1, 4, 9, 16]);
/// ```
pub fn zip_with<S1, S2, C, F>(f: F, left: S1, right: S2) -> ZipWith<S1, S2, F>
where
    S1: Sequence,
    S2: Sequence,
    F: FnMut(S1::Item, S2::Item) -> C,
{
    ZipWith::new(left, right, f)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::from_iter;

    #[test]
    fn multiplies_pairwise() {
        let mut products = zip_with(
            |a: i32, b: i32| a * b,
            from_iter([1, 2, 3, 4]),
            from_iter([1, 2, 3, 4, 5]),
        );
        assert_eq!(products.collect::<Vec<_>>(), [1, 4, 9, 16]);
    }

    #[test]
    fn empty_right_side() {
        let mut products = zip_with(
            |a: i32, b: i32| a * b,
            from_iter([1, 2, 3, 4]),
            from_iter(Vec::<i32>::new()),
        );
        assert_eq!(products.count(), 0);
    }

    #[test]
    fn different_item_types() {
        let mut points = from_iter(["2021-01-15", "2021-01-16"])
            .zip_with(from_iter([0.981, 0.973]), |date, meas| (date, meas));
        assert_eq!(
            points.collect::<Vec<_>>(),
            [("2021-01-15", 0.981), ("2021-01-16", 0.973)]
        );
    }

    #[test]
    fn coro_pairs_until_shorter_side_returns() {
        let mut sums =
            from_iter([1, 2, 3]).zip_with(from_iter([10, 20]), |a, b| a + b);
        sums.start().assert_yields(11).assert_yields(22).assert_returns();
    }

    #[test]
    fn left_exhaustion_does_not_pull_right() {
        let mut right_pulls = 0;
        let mut sums = from_iter([1]).zip_with(
            from_iter(1..).map(|x: i32| {
                right_pulls += 1;
                x
            }),
            |a: i32, b| a + b,
        );
        assert_eq!(sums.collect::<Vec<_>>(), [2]);
        drop(sums);
        assert_eq!(right_pulls, 1);
    }
}
