#[cfg(test)]
use fp_idioms::list::{
    checked_sum_list, inc_list, inc_list_mapped, sum_list, sum_list_fold, sum_list_tail,
};
use proptest::prelude::*;

pub fn arb_small_ints() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i32>().prop_map(i64::from), 0..256)
}

#[test]
fn float_sums_agree() {
    let xs = [3.3, 2.8, -1.2];
    let expected = 3.3 + 2.8 + -1.2;
    for got in [sum_list(&xs), sum_list_tail(&xs), sum_list_fold(&xs)] {
        assert!((got - expected).abs() < 1e-9);
    }
}

#[test]
fn float_increment() {
    let mut xs = vec![2.3, 4.5, 7.6];
    inc_list(&mut xs);
    for (got, want) in xs.iter().zip([3.3, 5.5, 8.6]) {
        assert!((got - want).abs() < 1e-9);
    }
}

#[test]
fn checked_sum_reports_overflow_anywhere_in_the_list() {
    assert_eq!(checked_sum_list(&[1u32, u32::MAX, 0]), None);
    assert_eq!(checked_sum_list(&[0u32, 0, 0]), Some(0));
}

#[cfg(test)]
proptest! {
    #[test]
    fn three_sums_agree(xs in arb_small_ints()) {
        let recursive = sum_list(&xs);
        prop_assert_eq!(recursive, sum_list_tail(&xs));
        prop_assert_eq!(recursive, sum_list_fold(&xs));
        prop_assert_eq!(checked_sum_list(&xs), Some(recursive));
    }

    #[test]
    fn increment_shifts_the_sum(xs in arb_small_ints()) {
        let bumped = inc_list_mapped(&xs);
        prop_assert_eq!(bumped.len(), xs.len());
        prop_assert_eq!(sum_list(&bumped), sum_list(&xs) + xs.len() as i64);
    }
}
