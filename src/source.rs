use core::marker::PhantomData;
use core::ops::ControlFlow;

use crate::coro::Coro;
use crate::coro::IterCoro;
use crate::sequence::Sequence;

/// See [`from_iter()`].
#[derive(Clone, Debug)]
pub struct FromIter<I>(I);

impl<I> Sequence for FromIter<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;
    type Resume<'a>
        = IterCoro<I>
    where
        Self: 'a;

    fn start(&mut self) -> IterCoro<I> {
        IterCoro(self.0.clone())
    }

    fn produce<F>(&mut self, mut consumer: F)
    where
        F: FnMut(I::Item) -> ControlFlow<()>,
    {
        for y in self.0.clone() {
            if consumer(y).is_break() {
                return;
            }
        }
    }
}

/// Creates a sequence over the elements of an iterable.
///
/// Every traversal clones the underlying iterator in its initial position, so
/// the sequence can be traversed many times and each traversal sees every
/// element again.
///
/// # Examples
///
/// ```rust
/// use coseq::Sequence;
/// use coseq::from_iter;
///
/// let mut numbers = from_iter(vec![1, 2, 3]);
/// assert_eq!(numbers.collect::<Vec<_>>(), [1, 2, 3]);
/// assert_eq!(numbers.collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn from_iter<I>(iterable: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    FromIter(iterable.into_iter())
}

/// See [`from_coro()`].
pub struct FromCoro<F, T> {
    factory: F,
    _phantom: PhantomData<fn() -> T>,
}

impl<F, K, T> Sequence for FromCoro<F, T>
where
    F: FnMut() -> K,
    K: Coro<T>,
{
    type Item = T;
    type Resume<'a>
        = K
    where
        Self: 'a;

    fn start(&mut self) -> K {
        (self.factory)()
    }
}

/// Creates a sequence from a factory of state machines. The factory is called
/// once at the start of every traversal.
///
/// This is the most direct way to write a custom source: implement [`Coro`]
/// for the paused state of a traversal, and let `from_coro()` supply the
/// push side.
///
/// # Examples
///
/// ```rust
/// use coseq::Coro;
/// use coseq::Return;
/// use coseq::Sequence;
/// use coseq::Suspend;
/// use coseq::Yield;
/// use coseq::from_coro;
///
/// struct Fib(u64, u64, usize);
/// impl Coro<u64> for Fib {
///     fn resume(self) -> Suspend<u64, Self> {
///         let Fib(a, b, left) = self;
///         if left == 0 { Return } else { Yield(a, Fib(b, a + b, left - 1)) }
///     }
/// }
///
/// let mut fib = from_coro(|| Fib(0, 1, 8));
/// assert_eq!(fib.collect::<Vec<_>>(), [0, 1, 1, 2, 3, 5, 8, 13]);
/// ```
pub fn from_coro<F, K, T>(factory: F) -> FromCoro<F, T>
where
    F: FnMut() -> K,
    K: Coro<T>,
{
    FromCoro {
        factory,
        _phantom: PhantomData,
    }
}
