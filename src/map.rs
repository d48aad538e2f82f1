use core::marker::PhantomData;
use core::ops::ControlFlow;

use crate::coro::Coro;
use crate::sequence::Sequence;
use crate::suspend::Suspend;

/// See [`map()`].
#[derive(Clone, Debug)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Map { source, f }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;
    type Resume<'a>
        = MapCoro<S::Item, S::Resume<'a>, &'a mut F>
    where
        Self: 'a;

    fn start(&mut self) -> Self::Resume<'_> {
        MapCoro::new(self.source.start(), &mut self.f)
    }

    fn produce<C>(&mut self, mut consumer: C)
    where
        C: FnMut(U) -> ControlFlow<()>,
    {
        let f = &mut self.f;
        self.source.produce(|y| consumer(f(y)));
    }
}

pub struct MapCoro<T, K, F> {
    coro: K,
    f: F,
    _phantom: PhantomData<T>,
}

impl<T, K, F> MapCoro<T, K, F> {
    fn new(coro: K, f: F) -> Self {
        MapCoro {
            coro,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<T, U, K, F> Coro<U> for MapCoro<T, K, F>
where
    K: Coro<T>,
    F: FnMut(T) -> U,
{
    fn resume(self) -> Suspend<U, Self> {
        let Self { coro, mut f, .. } = self;
        match coro.resume() {
            Suspend::Yield(y, next) => Suspend::Yield(f(y), MapCoro::new(next, f)),
            Suspend::Return => Suspend::Return,
        }
    }
}

/// Applies `f` to each element of `source`.
///
/// `f` runs lazily, once per element actually requested: if the consumer
/// stops early, `f` never sees the elements after the one it stopped on.
///
/// # Examples
///
/// ```rust
/// use coseq::Sequence;
/// use coseq::from_iter;
/// use coseq::map;
///
/// let mut doubled = map(|x| x * 2, from_iter([1, 2, 3, 4]));
/// assert_eq!(doubled.collect::<Vec<_>>(), [2, 4, 6, 8]);
/// ```
pub fn map<S, U, F>(f: F, source: S) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    Map::new(source, f)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::ops::ControlFlow::{Break, Continue};

    use super::*;
    use crate::from_iter;

    #[test]
    fn maps_each_element() {
        let mut doubled = map(|x: i32| x * 2, from_iter([1, 2, 3, 4]));
        assert_eq!(doubled.collect::<Vec<_>>(), [2, 4, 6, 8]);
    }

    #[test]
    fn coro_maps_each_element() {
        let mut lengths = from_iter(["a", "bb", "ccc"]).map(str::len);
        lengths
            .start()
            .assert_yields(1)
            .assert_yields(2)
            .assert_yields(3)
            .assert_returns();
    }

    #[test]
    fn stops_calling_f_after_consumer_breaks() {
        let mut calls = 0;
        let mut seen = Vec::new();
        map(
            |x: i32| {
                calls += 1;
                x
            },
            from_iter(1..),
        )
        .produce(|x| {
            seen.push(x);
            if seen.len() == 3 { Break(()) } else { Continue(()) }
        });
        assert_eq!(seen, [1, 2, 3]);
        assert_eq!(calls, 3);
    }

    #[test]
    fn changes_item_type() {
        let mut shown = from_iter([1, 22, 333]).map(|n: i32| n.to_string());
        assert_eq!(shown.collect::<Vec<_>>(), ["1", "22", "333"]);
    }
}
