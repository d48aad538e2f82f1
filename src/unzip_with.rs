use core::marker::PhantomData;
use core::ops::ControlFlow;

use crate::coro::Coro;
use crate::sequence::Sequence;
use crate::suspend::Suspend;

/// See [`unzip_with()`].
#[derive(Clone, Debug)]
pub struct UnzipWith<S, F> {
    source: S,
    f: F,
}

impl<S, F> UnzipWith<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        UnzipWith { source, f }
    }
}

impl<S, F, B, C> Sequence for UnzipWith<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> (B, C),
{
    type Item = (B, C);
    type Resume<'a>
        = UnzipWithCoro<S::Item, S::Resume<'a>, &'a mut F>
    where
        Self: 'a;

    fn start(&mut self) -> Self::Resume<'_> {
        UnzipWithCoro {
            coro: self.source.start(),
            f: &mut self.f,
            _phantom: PhantomData,
        }
    }

    fn produce<K>(&mut self, mut consumer: K)
    where
        K: FnMut((B, C)) -> ControlFlow<()>,
    {
        let f = &mut self.f;
        self.source.produce(|y| consumer(f(y)));
    }
}

pub struct UnzipWithCoro<T, K, F> {
    coro: K,
    f: F,
    _phantom: PhantomData<T>,
}

impl<T, B, C, K, F> Coro<(B, C)> for UnzipWithCoro<T, K, F>
where
    K: Coro<T>,
    F: FnMut(T) -> (B, C),
{
    fn resume(self) -> Suspend<(B, C), Self> {
        let Self { coro, mut f, .. } = self;
        coro.resume().map_yield(&mut f).map_next(|coro| UnzipWithCoro {
            coro,
            f,
            _phantom: PhantomData,
        })
    }
}

/// Splits each element of `source` into two parts with `f`.
///
/// Both parts travel together: the result is one sequence of pairs, not two
/// sequences that could be traversed separately. Use
/// [`Sequence::unzip()`] to gather the two channels into two containers.
///
/// # Examples
///
/// ```rust
/// use coseq::Sequence;
/// use coseq::from_iter;
/// use coseq::unzip_with;
///
/// let readings = [("2021-01-15", 0.981), ("2021-01-16", 0.973)];
/// let (dates, values): (Vec<_>, Vec<_>) =
///     unzip_with(|(date, value)| (date, value), from_iter(readings)).unzip();
/// assert_eq!(dates, ["2021-01-15", "2021-01-16"]);
/// assert_eq!(values, [0.981, 0.973]);
/// ```
pub fn unzip_with<S, B, C, F>(f: F, source: S) -> UnzipWith<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> (B, C),
{
    UnzipWith::new(source, f)
}
