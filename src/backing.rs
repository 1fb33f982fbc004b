use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

mod private {
    pub trait Sealed {}
}

/// An unsigned integer whose bits store the members of an [`EnumSet`].
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `u128`. This trait is sealed
/// and cannot be implemented outside of this crate.
///
/// [`EnumSet`]: crate::EnumSet
pub trait Backing:
    private::Sealed
    + Copy
    + Eq
    + Hash
    + Debug
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
{
    /// Number of usable bits.
    const BITS: u32;

    /// The value with no bits set.
    const ZERO: Self;

    /// Returns a value with only bit `pos` set.
    ///
    /// `pos` must be smaller than [`BITS`](Backing::BITS).
    fn bit(pos: u32) -> Self;

    /// Returns a value with the lowest `width` bits set.
    ///
    /// Saturates at all bits set if `width >= BITS`.
    fn low_mask(width: u32) -> Self;

    /// Returns the number of set bits.
    fn count_ones(self) -> u32;

    /// Returns the number of unset bits below the lowest set bit, or
    /// [`BITS`](Backing::BITS) if no bit is set.
    fn trailing_zeros(self) -> u32;
}

macro_rules! impl_backing {
    ($($int:ty),+ $(,)?) => {
        $(
            impl private::Sealed for $int {}

            impl Backing for $int {
                const BITS: u32 = <$int>::BITS;
                const ZERO: Self = 0;

                #[inline]
                fn bit(pos: u32) -> Self {
                    1 << pos
                }

                #[inline]
                fn low_mask(width: u32) -> Self {
                    if width >= Self::BITS {
                        // shift would overflow
                        !0
                    } else {
                        (1 << width) - 1
                    }
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$int>::count_ones(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$int>::trailing_zeros(self)
                }
            }
        )+
    };
}

impl_backing!(u8, u16, u32, u64, u128);
