/// A single 'frame' containing values that can be mapped over via `map_frame`.
///
/// # Motivation
///
/// Generally speaking, you won't use this trait yourself. It's used by the internal plumbing of
/// [`crate::Collapsible`] to implement recursive traversals, such as [`crate::sum_list`].
///
/// # Implementing this trait
///
/// This trait is usually implemented for some marker token, because rust does not
/// allow for implementing a trait for a partially applied type. That is, we can implement
/// a trait for `ListFrame<i32, usize>` but we can't implement a trait for just `ListFrame<i32, _>`.
///
/// For this reason, a common convention is to implement this trait using the uninhabited
///  [`PartiallyApplied`] enum marker, eg
///
/// ```rust
/// # use fp_idioms::{MappableFrame, PartiallyApplied};
/// # #[derive(Debug, PartialEq, Eq)]
/// enum PairFrame<A> {
///     Pair(A, A),
///     Single(u8),
/// }
///
/// impl MappableFrame for PairFrame<PartiallyApplied> {
///     type Frame<X> = PairFrame<X>;
///
///     fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
///         match input {
///             PairFrame::Pair(a, b) => PairFrame::Pair(f(a), f(b)),
///             PairFrame::Single(x) => PairFrame::Single(x),
///         }
///     }
/// }
///
/// let frame = PairFrame::Pair(1, 2);
/// let mapped_frame = PairFrame::<PartiallyApplied>::map_frame(frame, |n| n + 10);
///
/// assert_eq!(mapped_frame, PairFrame::Pair(11, 12));
/// ```
pub trait MappableFrame {
    /// the frame type that is mapped over by `map_frame`
    type Frame<X>;

    /// Apply some function `f` to each element inside a frame
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B>;
}

/// An uninhabited type used to define [`MappableFrame`] instances for partially-applied types.
///
/// For example: the MappableFrame instance for `ListFrame<Elem, Next>` cannot be written over the
/// partially-applied type `ListFrame<Elem, _>`, so instead we write it over `ListFrame<Elem, PartiallyApplied>`
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// One layer of a cons list: either an element and the rest of the list, or the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFrame<Elem, Next> {
    Cons(Elem, Next),
    Nil,
}

impl<Elem> MappableFrame for ListFrame<Elem, PartiallyApplied> {
    type Frame<Next> = ListFrame<Elem, Next>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            ListFrame::Cons(elem, next) => ListFrame::Cons(elem, f(next)),
            ListFrame::Nil => ListFrame::Nil,
        }
    }
}

/// This function generates a stack machine for some frame `F::Frame`,
/// expanding some seed value `Seed` into frames via a function `Seed -> Frame<Seed>`
/// and collapsing those values via a function `Frame<Out> -> Out`.
///
/// This function performs a depth-first traversal, expanding and collapsing each branch in turn
///
/// This function is stack safe (it does not use the call stack), but it
/// does use an internal stack data structure and is thus, technically,
/// susceptible to stack overflows if said stack expands
pub fn expand_and_collapse<F: MappableFrame, Seed, Out>(
    seed: Seed,
    mut expand_frame: impl FnMut(Seed) -> F::Frame<Seed>,
    mut collapse_frame: impl FnMut(F::Frame<Out>) -> Out,
) -> Out {
    enum State<Seed, CollapsibleInternal> {
        Expand(usize, Seed),
        Collapse(usize, CollapsibleInternal),
    }

    let mut vals: Vec<Option<Out>> = vec![None];
    let mut stack = vec![State::Expand(0, seed)];

    while let Some(item) = stack.pop() {
        match item {
            State::Expand(val_idx, seed) => {
                let node = expand_frame(seed);
                let mut seeds = Vec::new();
                let node = F::map_frame(node, |seed| {
                    vals.push(None);
                    let idx = vals.len() - 1;
                    seeds.push(State::Expand(idx, seed));
                    idx
                });

                stack.push(State::Collapse(val_idx, node));
                stack.extend(seeds);
            }
            State::Collapse(val_idx, node) => {
                let node = F::map_frame(node, |k| {
                    vals[k].take().expect("child collapsed before parent")
                });
                vals[val_idx] = Some(collapse_frame(node));
            }
        };
    }
    vals[0].take().expect("root slot filled by final collapse")
}

/// This function generates a fallible stack machine for some frame `F::Frame`,
/// expanding some seed value `Seed` into frames via a function `Seed -> Result<Frame<Seed>, E>`
/// and collapsing those values via a function `Frame<Out> -> Result<Out, E>`.
///
/// The first `Err` returned by either function halts the traversal; no further frames
/// are expanded or collapsed.
pub fn try_expand_and_collapse<F: MappableFrame, Seed, Out, E>(
    seed: Seed,
    mut expand_frame: impl FnMut(Seed) -> Result<F::Frame<Seed>, E>,
    mut collapse_frame: impl FnMut(F::Frame<Out>) -> Result<Out, E>,
) -> Result<Out, E> {
    enum State<Seed, CollapsibleInternal> {
        Expand(usize, Seed),
        Collapse(usize, CollapsibleInternal),
    }

    let mut vals: Vec<Option<Out>> = vec![None];
    let mut stack = vec![State::Expand(0, seed)];

    while let Some(item) = stack.pop() {
        match item {
            State::Expand(val_idx, seed) => {
                let node = expand_frame(seed)?;
                let mut seeds = Vec::new();
                let node = F::map_frame(node, |seed| {
                    vals.push(None);
                    let idx = vals.len() - 1;
                    seeds.push(State::Expand(idx, seed));
                    idx
                });

                stack.push(State::Collapse(val_idx, node));
                stack.extend(seeds);
            }
            State::Collapse(val_idx, node) => {
                let node = F::map_frame(node, |k| {
                    vals[k].take().expect("child collapsed before parent")
                });
                vals[val_idx] = Some(collapse_frame(node)?);
            }
        };
    }
    Ok(vals[0].take().expect("root slot filled by final collapse"))
}

#[cfg(test)]
mod tests {
    use super::*;

    type Frame = ListFrame<u32, PartiallyApplied>;

    #[test]
    fn collapses_in_list_order() {
        let out = expand_and_collapse::<Frame, u32, String>(
            3,
            |n| if n == 0 { ListFrame::Nil } else { ListFrame::Cons(n, n - 1) },
            |frame| match frame {
                ListFrame::Cons(n, rest) => format!("{}{}", n, rest),
                ListFrame::Nil => String::new(),
            },
        );

        assert_eq!(out, "321");
    }

    #[test]
    fn first_error_halts_expansion() {
        let mut expanded = Vec::new();
        let out = try_expand_and_collapse::<Frame, u32, u32, &'static str>(
            5,
            |n| {
                expanded.push(n);
                match n {
                    3 => Err("hit three"),
                    0 => Ok(ListFrame::Nil),
                    n => Ok(ListFrame::Cons(n, n - 1)),
                }
            },
            |frame| match frame {
                ListFrame::Cons(n, rest) => Ok(n + rest),
                ListFrame::Nil => Ok(0),
            },
        );

        assert_eq!(out, Err("hit three"));
        assert_eq!(expanded, vec![5, 4, 3]);
    }
}
