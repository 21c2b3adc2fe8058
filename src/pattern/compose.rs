//! Composition algebra: pairwise sequencing with void elision and tuple flattening.

use std::sync::Arc;

use super::core::Pattern;

/// Marker for values that occupy a capture slot.
///
/// `()` deliberately does not implement this trait: it is the void capture
/// produced by literals and is elided by [`Concat`]. Tuples do not implement
/// it either, which is what lets an accumulated tuple flatten instead of nest.
///
/// Implement it for your own types to use them as the output of a custom
/// [`super::Component`] inside a composed chain.
pub trait CaptureValue {}

impl CaptureValue for String {}
impl CaptureValue for Arc<str> {}
impl CaptureValue for Box<str> {}
impl<T: CaptureValue> CaptureValue for Option<T> {}

macro_rules! capture_value {
    ($($ty:ty),* $(,)?) => {
        $(impl CaptureValue for $ty {})*
    };
}

capture_value!(bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Combine the capture of the left pattern with the capture of the right one.
///
/// See the table in the [module documentation](super) for the full algebra.
pub trait Concat<Rhs> {
    /// The combined capture type.
    type Output;

    /// Combine two captures.
    fn concat(self, rhs: Rhs) -> Self::Output;
}

// Void ⊕ Void → Void
impl Concat<()> for () {
    type Output = ();

    #[inline]
    fn concat(self, _rhs: ()) {}
}

// Void ⊕ T → T
impl<B: CaptureValue> Concat<B> for () {
    type Output = B;

    #[inline]
    fn concat(self, rhs: B) -> B {
        rhs
    }
}

// T ⊕ Void → T
impl<A: CaptureValue> Concat<()> for A {
    type Output = A;

    #[inline]
    fn concat(self, _rhs: ()) -> A {
        self
    }
}

// T1 ⊕ T2 → (T1, T2)
impl<A: CaptureValue, B: CaptureValue> Concat<B> for A {
    type Output = (A, B);

    #[inline]
    fn concat(self, rhs: B) -> (A, B) {
        (self, rhs)
    }
}

/// (T1..Tn) ⊕ Void → (T1..Tn)
macro_rules! tuple_keep {
    ($($ty:ident),+) => {
        impl<$($ty),+> Concat<()> for ($($ty,)+) {
            type Output = ($($ty,)+);

            #[inline]
            fn concat(self, _rhs: ()) -> Self::Output {
                self
            }
        }
    };
}

/// (T1..Tn) ⊕ T → (T1..Tn, T)
macro_rules! tuple_extend {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty,)+ Next: CaptureValue> Concat<Next> for ($($ty,)+) {
            type Output = ($($ty,)+ Next);

            #[inline]
            fn concat(self, rhs: Next) -> Self::Output {
                let ($($var,)+) = self;
                ($($var,)+ rhs)
            }
        }
    };
}

/// Void ⊕ (T1..Tn) → (T1..Tn)
macro_rules! tuple_after_void {
    ($($ty:ident),+) => {
        impl<$($ty),+> Concat<($($ty,)+)> for () {
            type Output = ($($ty,)+);

            #[inline]
            fn concat(self, rhs: ($($ty,)+)) -> Self::Output {
                rhs
            }
        }
    };
}

/// T ⊕ (T1..Tn) → (T, T1..Tn)
macro_rules! tuple_prepend {
    ($($ty:ident $var:ident),+) => {
        impl<Head: CaptureValue, $($ty),+> Concat<($($ty,)+)> for Head {
            type Output = (Head, $($ty,)+);

            #[inline]
            fn concat(self, rhs: ($($ty,)+)) -> Self::Output {
                let ($($var,)+) = rhs;
                (self, $($var,)+)
            }
        }
    };
}

tuple_keep!(A1, A2);
tuple_keep!(A1, A2, A3);
tuple_keep!(A1, A2, A3, A4);
tuple_keep!(A1, A2, A3, A4, A5);
tuple_keep!(A1, A2, A3, A4, A5, A6);
tuple_keep!(A1, A2, A3, A4, A5, A6, A7);
tuple_keep!(A1, A2, A3, A4, A5, A6, A7, A8);

tuple_extend!(A1 a1, A2 a2);
tuple_extend!(A1 a1, A2 a2, A3 a3);
tuple_extend!(A1 a1, A2 a2, A3 a3, A4 a4);
tuple_extend!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
tuple_extend!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
tuple_extend!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);

tuple_after_void!(A1, A2);
tuple_after_void!(A1, A2, A3);
tuple_after_void!(A1, A2, A3, A4);
tuple_after_void!(A1, A2, A3, A4, A5);
tuple_after_void!(A1, A2, A3, A4, A5, A6);
tuple_after_void!(A1, A2, A3, A4, A5, A6, A7);
tuple_after_void!(A1, A2, A3, A4, A5, A6, A7, A8);

tuple_prepend!(A1 a1, A2 a2);
tuple_prepend!(A1 a1, A2 a2, A3 a3);
tuple_prepend!(A1 a1, A2 a2, A3 a3, A4 a4);
tuple_prepend!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
tuple_prepend!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
tuple_prepend!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);

/// Run `first` then `second`, restoring the cursor to its starting value if
/// either side fails.
///
/// Each pairwise composition only restores its own snapshot. In a chain
/// `((A then B) then C)` a failure in `C` restores to the outer snapshot,
/// which is also where `A` started, so longer chains need no extra
/// checkpoints.
pub(crate) fn concatenate<A, B>(first: Pattern<A>, second: Pattern<B>) -> Pattern<A::Output>
where
    A: Concat<B> + 'static,
    B: 'static,
    A::Output: 'static,
{
    Pattern::from_fn(move |segments, cursor| {
        let start = *cursor;
        let Some(lhs) = first.attempt(segments, cursor) else {
            *cursor = start;
            return None;
        };
        let Some(rhs) = second.attempt(segments, cursor) else {
            *cursor = start;
            return None;
        };
        Some(lhs.concat(rhs))
    })
}
