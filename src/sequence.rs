use core::ops::ControlFlow;

use either::Either;
use ControlFlow::{Break, Continue};

use crate::coro::Coro;
use crate::cursor::Cursor;
use crate::drop_while::DropWhile;
use crate::error::Error;
use crate::filter::Filter;
use crate::map::Map;
use crate::scan::Scan;
use crate::suspend::Suspend;
use crate::take_while::TakeWhile;
use crate::unzip_with::UnzipWith;
use crate::zip_with::ZipWith;

/// A stream of values produced on demand, one traversal at a time.
///
/// A sequence is not a collection. It is a recipe: nothing happens until it
/// is traversed, and every traversal runs the whole chain of stages again from
/// the start. Traversals borrow the sequence mutably, so the same value can be
/// traversed any number of times, but only one traversal is active at once.
///
/// There are two ways to traverse a sequence:
///
///   * *Push*: [`produce()`](Sequence::produce) calls a consumer once per
///     element, in order, until the sequence is exhausted or the consumer
///     returns `ControlFlow::Break(())`. Stopping early is not an error;
///     `produce()` returns normally either way, and by the time it does, no
///     further element has been computed.
///   * *Pull*: [`start()`](Sequence::start) hands out a paused [`Coro`] for
///     one traversal, which a [`Cursor`] resumes one element at a time. This
///     is what lets two sequences be consumed at independent paces, as
///     [`zip_with()`](Sequence::zip_with) does.
///
/// Implementors only need `start()`. `produce()` drives the state machine by
/// default; the stages in this crate override it with a direct push loop.
///
/// # Examples
///
/// ```rust
/// use coseq::Sequence;
/// use coseq::from_iter;
///
/// let mut evens_doubled = from_iter(1..=10)
///     .filter(|n| n % 2 == 0)
///     .map(|n| n * 2);
/// assert_eq!(evens_doubled.collect::<Vec<_>>(), [4, 8, 12, 16, 20]);
/// // A second traversal starts over.
/// assert_eq!(evens_doubled.count(), 5);
/// ```
pub trait Sequence {
    type Item;

    /// The paused state of one traversal. It borrows the sequence, including
    /// any closures the stages own, until it is dropped.
    type Resume<'a>: Coro<Self::Item>
    where
        Self: 'a;

    /// Starts a new traversal, paused before its first element.
    fn start(&mut self) -> Self::Resume<'_>;

    /// Pushes each element into `consumer`, in order, until the sequence is
    /// exhausted or `consumer` breaks.
    fn produce<F>(&mut self, mut consumer: F)
    where
        F: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let mut coro = self.start();
        while let Suspend::Yield(y, next) = coro.resume() {
            if consumer(y).is_break() {
                return;
            }
            coro = next;
        }
    }

    /// Opens a [`Cursor`] over a new traversal. See [`pull()`](crate::pull).
    fn cursor(&mut self) -> Cursor<Self::Resume<'_>, Self::Item> {
        Cursor::new(self.start())
    }

    /// Applies `f` to each element. See [`map()`](crate::map).
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Keeps the elements satisfying `pred`. See [`filter()`](crate::filter).
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Skips the leading elements satisfying `pred`. See
    /// [`drop_while()`](crate::drop_while).
    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, pred)
    }

    /// Keeps the leading elements satisfying `pred`. See
    /// [`take_while()`](crate::take_while).
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    /// Yields `init` and then every intermediate accumulator. See
    /// [`scan()`](crate::scan).
    fn scan<B, F>(self, init: B, f: F) -> Scan<Self, B, F>
    where
        Self: Sized,
        B: Clone,
        F: FnMut(B, Self::Item) -> B,
    {
        Scan::new(self, init, f)
    }

    /// Combines elements pairwise with `other`. See
    /// [`zip_with()`](crate::zip_with).
    fn zip_with<S2, C, F>(self, other: S2, f: F) -> ZipWith<Self, S2, F>
    where
        Self: Sized,
        S2: Sequence,
        F: FnMut(Self::Item, S2::Item) -> C,
    {
        ZipWith::new(self, other, f)
    }

    /// Splits each element into a pair. See
    /// [`unzip_with()`](crate::unzip_with).
    fn unzip_with<B, C, F>(self, f: F) -> UnzipWith<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> (B, C),
    {
        UnzipWith::new(self, f)
    }

    /// Calls `f` on every element.
    fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        self.produce(|y| {
            f(y);
            Continue(())
        })
    }

    /// Calls `f` on every element until it fails, and returns the failure.
    ///
    /// No element after the failing one is computed.
    ///
    /// ```rust
    /// use coseq::Sequence;
    /// use coseq::from_iter;
    ///
    /// let mut seen = Vec::new();
    /// let result = from_iter(["1", "2", "x", "4"]).try_for_each(|s| {
    ///     seen.push(s.parse::<i32>()?);
    ///     Ok::<_, std::num::ParseIntError>(())
    /// });
    /// assert!(result.is_err());
    /// assert_eq!(seen, [1, 2]);
    /// ```
    fn try_for_each<E, F>(&mut self, mut f: F) -> core::result::Result<(), E>
    where
        F: FnMut(Self::Item) -> core::result::Result<(), E>,
    {
        let mut outcome = Ok(());
        self.produce(|y| match f(y) {
            Ok(()) => Continue(()),
            Err(e) => {
                outcome = Err(e);
                Break(())
            }
        });
        outcome
    }

    /// Gathers every element into a container.
    fn collect<B>(&mut self) -> B
    where
        B: Default + Extend<Self::Item>,
    {
        let mut out = B::default();
        self.for_each(|y| out.extend(core::iter::once(y)));
        out
    }

    /// Gathers a sequence of pairs into two containers.
    ///
    /// ```rust
    /// use coseq::Sequence;
    /// use coseq::from_iter;
    ///
    /// let (words, lengths): (Vec<_>, Vec<_>) = from_iter(["to", "be"])
    ///     .unzip_with(|w| (w, w.len()))
    ///     .unzip();
    /// assert_eq!(words, ["to", "be"]);
    /// assert_eq!(lengths, [2, 2]);
    /// ```
    fn unzip<A, B, FromA, FromB>(&mut self) -> (FromA, FromB)
    where
        Self: Sequence<Item = (A, B)>,
        FromA: Default + Extend<A>,
        FromB: Default + Extend<B>,
    {
        let mut left = FromA::default();
        let mut right = FromB::default();
        self.for_each(|(a, b)| {
            left.extend(core::iter::once(a));
            right.extend(core::iter::once(b));
        });
        (left, right)
    }

    /// Folds every element into an accumulator, left to right.
    fn fold<B, F>(&mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        let mut cursor = self.cursor();
        while let Ok(Some(y)) = cursor.pull() {
            acc = f(acc, y);
        }
        acc
    }

    /// Folds the elements using the first one as the initial accumulator.
    ///
    /// Fails with [`Error::EmptySequence`] if there is no first element.
    ///
    /// ```rust
    /// use coseq::Error;
    /// use coseq::Sequence;
    /// use coseq::from_iter;
    ///
    /// assert_eq!(from_iter([3, 1, 4]).reduce(i32::max), Ok(4));
    /// assert_eq!(
    ///     from_iter(Vec::<i32>::new()).reduce(i32::max),
    ///     Err(Error::EmptySequence)
    /// );
    /// ```
    fn reduce<F>(&mut self, mut f: F) -> crate::error::Result<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut acc = None;
        self.for_each(|y| {
            acc = Some(match acc.take() {
                Some(prev) => f(prev, y),
                None => y,
            });
        });
        acc.ok_or(Error::EmptySequence)
    }

    /// Whether any element satisfies `pred`. Stops at the first one that does.
    fn any<P>(&mut self, mut pred: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        let mut found = false;
        self.produce(|y| {
            if pred(y) {
                found = true;
                Break(())
            } else {
                Continue(())
            }
        });
        found
    }

    /// Whether every element satisfies `pred`. Stops at the first one that
    /// doesn't.
    fn all<P>(&mut self, mut pred: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        !self.any(|y| !pred(y))
    }

    /// Traverses the sequence and counts its elements.
    fn count(&mut self) -> usize {
        let mut n = 0;
        self.for_each(|_| n += 1);
        n
    }
}

impl<S> Sequence for &mut S
where
    S: Sequence,
{
    type Item = S::Item;
    type Resume<'a>
        = S::Resume<'a>
    where
        Self: 'a;

    fn start(&mut self) -> Self::Resume<'_> {
        (**self).start()
    }

    fn produce<F>(&mut self, consumer: F)
    where
        F: FnMut(Self::Item) -> ControlFlow<()>,
    {
        (**self).produce(consumer)
    }
}

/// Either of two sequences with the same item type is a sequence. This lets a
/// pipeline pick its stages at run time without boxing.
///
/// ```rust
/// use coseq::Sequence;
/// use coseq::from_iter;
/// use either::Either;
///
/// fn numbers(only_odd: bool) -> impl Sequence<Item = i32> {
///     let all = from_iter(1..=6);
///     if only_odd {
///         Either::Left(all.filter(|n| n % 2 == 1))
///     } else {
///         Either::Right(all)
///     }
/// }
///
/// assert_eq!(numbers(true).collect::<Vec<_>>(), [1, 3, 5]);
/// assert_eq!(numbers(false).count(), 6);
/// ```
impl<A, B> Sequence for Either<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Resume<'a>
        = Either<A::Resume<'a>, B::Resume<'a>>
    where
        Self: 'a;

    fn start(&mut self) -> Self::Resume<'_> {
        match self {
            Either::Left(a) => Either::Left(a.start()),
            Either::Right(b) => Either::Right(b.start()),
        }
    }

    fn produce<F>(&mut self, consumer: F)
    where
        F: FnMut(Self::Item) -> ControlFlow<()>,
    {
        match self {
            Either::Left(a) => a.produce(consumer),
            Either::Right(b) => b.produce(consumer),
        }
    }
}
