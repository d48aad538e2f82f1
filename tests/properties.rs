// Property tests for the laws the combinators obey on finite inputs.

use std::ops::ControlFlow;

use coseq::Sequence;
use coseq::drop_while;
use coseq::filter;
use coseq::from_iter;
use coseq::map;
use coseq::scan;
use coseq::take_while;
use coseq::unfold;
use coseq::unzip_with;
use coseq::zip_with;
use proptest::collection::vec;
use proptest::prelude::*;

fn small_ints() -> impl Strategy<Value = Vec<i32>> {
    vec(-1000i32..1000, 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn map_identity_preserves_elements(xs in small_ints()) {
        let mut same = from_iter(xs.clone()).map(|x| x);
        prop_assert_eq!(same.collect::<Vec<_>>(), xs);
    }

    #[test]
    fn map_matches_iterator_map(xs in small_ints()) {
        let mut shifted = map(|x: i32| x * 3 - 1, from_iter(xs.clone()));
        let expected: Vec<i32> = xs.iter().map(|x| x * 3 - 1).collect();
        prop_assert_eq!(shifted.collect::<Vec<_>>(), expected);
    }

    #[test]
    fn filter_constant_predicates(xs in small_ints()) {
        prop_assert_eq!(filter(|_: &i32| true, from_iter(xs.clone())).collect::<Vec<_>>(), xs.clone());
        prop_assert_eq!(filter(|_: &i32| false, from_iter(xs)).count(), 0);
    }

    #[test]
    fn filter_keeps_order(xs in small_ints(), m in 1i32..5) {
        let mut kept = from_iter(xs.clone()).filter(|x| x % m == 0);
        let expected: Vec<i32> = xs.into_iter().filter(|x| x % m == 0).collect();
        prop_assert_eq!(kept.collect::<Vec<_>>(), expected);
    }

    #[test]
    fn zip_with_is_as_long_as_shorter(xs in small_ints(), ys in small_ints()) {
        let mut pairs = zip_with(|a: i32, b: i32| (a, b), from_iter(xs.clone()), from_iter(ys.clone()));
        let zipped = pairs.collect::<Vec<_>>();
        prop_assert_eq!(zipped.len(), xs.len().min(ys.len()));
        let expected: Vec<(i32, i32)> = xs.into_iter().zip(ys).collect();
        prop_assert_eq!(zipped, expected);
    }

    #[test]
    fn scan_yields_init_then_one_per_element(xs in small_ints(), init in -10i64..10) {
        let mut sums = scan(|acc: i64, x: i32| acc + i64::from(x), init, from_iter(xs.clone()));
        let running = sums.collect::<Vec<_>>();
        prop_assert_eq!(running.len(), xs.len() + 1);
        prop_assert_eq!(running[0], init);
        let total: i64 = xs.iter().map(|&x| i64::from(x)).sum();
        prop_assert_eq!(running[xs.len()], init + total);
    }

    #[test]
    fn take_while_then_drop_while_splits(xs in small_ints(), bound in -1000i32..1000) {
        let mut prefix = take_while(|&x: &i32| x < bound, from_iter(xs.clone()));
        let mut rest = drop_while(|&x: &i32| x < bound, from_iter(xs.clone()));
        let mut rejoined = prefix.collect::<Vec<_>>();
        rejoined.extend(rest.collect::<Vec<_>>());
        prop_assert_eq!(rejoined, xs);
    }

    #[test]
    fn unzip_with_inverts_zip_with(xs in small_ints(), ys in small_ints()) {
        let mut zipped = zip_with(|a: i32, b: i32| (a, b), from_iter(xs.clone()), from_iter(ys.clone()));
        let (left, right): (Vec<_>, Vec<_>) = unzip_with(|p| p, &mut zipped).unzip();
        let n = xs.len().min(ys.len());
        prop_assert_eq!(&left[..], &xs[..n]);
        prop_assert_eq!(&right[..], &ys[..n]);
    }

    #[test]
    fn early_stop_evaluates_exactly_k(k in 1usize..30) {
        let mut evaluated = 0usize;
        let mut seen = 0usize;
        map(|x: u64| { evaluated += 1; x }, unfold(|n: u64| Some((n, n + 1)), 0))
            .produce(|_| {
                seen += 1;
                if seen == k { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
            });
        prop_assert_eq!(seen, k);
        prop_assert_eq!(evaluated, k);
    }

    #[test]
    fn push_and_pull_agree(xs in small_ints(), bound in -1000i32..1000) {
        let mut pipeline = from_iter(xs)
            .drop_while(|&x| x < bound)
            .map(|x| x / 2)
            .filter(|x| x % 3 != 0)
            .scan(0i32, |acc, x| acc.wrapping_add(x));
        let pushed = pipeline.collect::<Vec<_>>();
        let pulled = pipeline.cursor().into_iter().collect::<Vec<_>>();
        prop_assert_eq!(pushed, pulled);
    }
}
