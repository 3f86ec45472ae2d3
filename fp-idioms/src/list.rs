//! Summing and incrementing lists: structural recursion, tail recursion, and higher-order folds.

use std::ops::Add;

use crate::frame::{ListFrame, MappableFrame, PartiallyApplied};
use crate::recursive::Collapsible;

/// Numbers with an additive identity, a unit step, and overflow-aware addition.
pub trait Numeric: Copy + Add<Output = Self> {
    const ZERO: Self;
    const ONE: Self;

    /// `None` when the sum is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_numeric_int!(i32, i64, u32, u64);

impl Numeric for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

/// A borrowed slice viewed as a cons list, one element per frame.
#[derive(Debug, Clone, Copy)]
pub struct ConsSlice<'a, T>(pub &'a [T]);

impl<'a, T: Copy> Collapsible for ConsSlice<'a, T> {
    type FrameToken = ListFrame<T, PartiallyApplied>;

    #[inline(always)]
    fn into_frame(self) -> <Self::FrameToken as MappableFrame>::Frame<Self> {
        match self.0.split_first() {
            Some((head, rest)) => ListFrame::Cons(*head, ConsSlice(rest)),
            None => ListFrame::Nil,
        }
    }
}

/// Sum by structural recursion: an empty list sums to zero, otherwise the head plus the sum of
/// the tail. Runs on the frame stack machine, so long lists do not grow the call stack.
pub fn sum_list<T: Numeric>(list: &[T]) -> T {
    ConsSlice(list).collapse_frames(|frame| match frame {
        ListFrame::Cons(head, rest) => head + rest,
        ListFrame::Nil => T::ZERO,
    })
}

/// Same recursion as [`sum_list`], but absent if any partial sum overflows.
pub fn checked_sum_list<T: Numeric>(list: &[T]) -> Option<T> {
    ConsSlice(list)
        .try_collapse_frames(|frame| match frame {
            ListFrame::Cons(head, rest) => head.checked_add(rest).ok_or(()),
            ListFrame::Nil => Ok(T::ZERO),
        })
        .ok()
}

/// Sum with an accumulator, walking the list head first.
pub fn sum_list_tail<T: Numeric>(list: &[T]) -> T {
    let mut acc = T::ZERO;
    let mut rest = list;
    while let Some((head, tail)) = rest.split_first() {
        acc = *head + acc;
        rest = tail;
    }
    acc
}

/// Sum with a fold.
pub fn sum_list_fold<T: Numeric>(list: &[T]) -> T {
    list.iter().fold(T::ZERO, |acc, x| acc + *x)
}

/// Add one to every element in place.
pub fn inc_list<T: Numeric>(list: &mut [T]) {
    list.iter_mut().for_each(|x| *x = *x + T::ONE);
}

/// Add one to every element, leaving the input untouched.
pub fn inc_list_mapped<T: Numeric>(list: &[T]) -> Vec<T> {
    list.iter().map(|x| *x + T::ONE).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sums_to_zero() {
        let empty: [i32; 0] = [];
        assert_eq!(sum_list(&empty), 0);
        assert_eq!(sum_list_tail(&empty), 0);
        assert_eq!(sum_list_fold(&empty), 0);
    }

    #[test]
    fn sums_mixed_signs() {
        let xs = [-3, 2, 5];
        assert_eq!(sum_list(&xs), 4);
        assert_eq!(sum_list_tail(&xs), 4);
        assert_eq!(sum_list_fold(&xs), 4);
    }

    #[test]
    fn overflow_is_absent() {
        assert_eq!(checked_sum_list(&[i32::MAX, 1]), None);
        assert_eq!(checked_sum_list(&[1, 2, 3]), Some(6));
    }

    #[test]
    fn inc_in_place_and_mapped_agree() {
        let mut xs = vec![-2, 4, 5, 1];
        let mapped = inc_list_mapped(&xs);
        inc_list(&mut xs);
        assert_eq!(xs, vec![-1, 5, 6, 2]);
        assert_eq!(mapped, xs);
    }

    #[test]
    fn long_list_is_stack_safe() {
        let xs = vec![1u64; 200_000];
        assert_eq!(sum_list(&xs), 200_000);
    }
}
