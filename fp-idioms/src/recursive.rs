use crate::frame::{expand_and_collapse, try_expand_and_collapse, MappableFrame};

/// The ability to recursively collapse some type into some output type, frame by frame.
/// For example, a borrowed slice can be viewed as a cons list:
///
/// ```rust
/// use fp_idioms::{Collapsible, ListFrame, MappableFrame, PartiallyApplied};
///
/// struct Chars<'a>(&'a [char]);
///
/// impl<'a> Collapsible for Chars<'a> {
///     type FrameToken = ListFrame<char, PartiallyApplied>;
///
///     fn into_frame(self) -> <Self::FrameToken as MappableFrame>::Frame<Self> {
///         match self.0.split_first() {
///             Some((c, rest)) => ListFrame::Cons(*c, Chars(rest)),
///             None => ListFrame::Nil,
///         }
///     }
/// }
///
/// let s = Chars(&['a', 'b', 'c']).collapse_frames(|frame| match frame {
///     ListFrame::Cons(c, rest) => format!("{}{}", c, rest),
///     ListFrame::Nil => String::new(),
/// });
/// assert_eq!(s, "abc");
/// ```
pub trait Collapsible
where
    Self: Sized,
{
    type FrameToken: MappableFrame;

    /// Given an instance of this type, generate a frame holding the data owned by it,
    /// with any recursive instances of 'Self' owned by this node as the frame elements
    fn into_frame(self) -> <Self::FrameToken as MappableFrame>::Frame<Self>;

    /// Given an instance of this type, collapse it into a single value of type 'Out' by
    /// traversing the recursive structure of 'self', generating frames, and collapsing
    /// those frames using some function from 'Frame<Out> -> Out'
    fn collapse_frames<Out>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<Out>) -> Out,
    ) -> Out {
        expand_and_collapse::<Self::FrameToken, Self, Out>(self, Self::into_frame, collapse_frame)
    }

    /// Like `collapse_frames`, but the collapse function may fail. The first failure is returned
    /// and no further frames are collapsed.
    fn try_collapse_frames<Out, E>(
        self,
        collapse_frame: impl FnMut(<Self::FrameToken as MappableFrame>::Frame<Out>) -> Result<Out, E>,
    ) -> Result<Out, E> {
        try_expand_and_collapse::<Self::FrameToken, Self, Out, E>(
            self,
            |seed| Ok(seed.into_frame()),
            collapse_frame,
        )
    }
}
