/// A type whose values map to small, non-negative bit positions.
///
/// This is what an [`EnumSet`] needs from its element type. Usually
/// implemented for a fieldless enum through [`enum_index!`], which uses the
/// variants' discriminants as indices.
///
/// Implementations must uphold:
/// - `to_index` returns a value smaller than `COUNT`,
/// - `from_index(v.to_index()) == Some(v)` for every value `v`.
///
/// # Examples
/// ```
/// use light_enumset::{EnumIndex, enum_index};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Mollusc {
///     Snail,
///     Slug,
///     Clam,
/// }
///
/// enum_index!(Mollusc { Snail, Slug, Clam });
///
/// assert_eq!(Mollusc::COUNT, 3);
/// assert_eq!(Mollusc::Clam.to_index(), 2);
/// assert_eq!(Mollusc::from_index(1), Some(Mollusc::Slug));
/// assert_eq!(Mollusc::from_index(3), None);
/// ```
///
/// [`EnumSet`]: crate::EnumSet
/// [`enum_index!`]: crate::enum_index
pub trait EnumIndex: Copy {
    /// One past the largest index any value of this type maps to.
    const COUNT: u32;

    /// Returns the bit position of this value.
    fn to_index(self) -> u32;

    /// Returns the value at the given bit position, or `None` if no value
    /// maps to it.
    fn from_index(index: u32) -> Option<Self>;
}

/// Implements [`EnumIndex`] for a fieldless enum.
///
/// Every variant has to be listed. Indices are the discriminants, so explicit
/// discriminants are allowed as long as they are small and non-negative;
/// `COUNT` becomes the largest discriminant plus one.
///
/// # Examples
/// ```
/// use light_enumset::{EnumIndex, enum_index};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Level {
///     Low = 1,
///     High = 4,
/// }
///
/// enum_index!(Level { Low, High });
///
/// assert_eq!(Level::COUNT, 5);
/// assert_eq!(Level::from_index(4), Some(Level::High));
/// assert_eq!(Level::from_index(2), None);
/// ```
///
/// [`EnumIndex`]: crate::EnumIndex
#[macro_export]
macro_rules! enum_index {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::EnumIndex for $name {
            const COUNT: u32 = {
                let indices = [$($name::$variant as u32),+];
                let mut count = 0;
                let mut i = 0;
                while i < indices.len() {
                    if indices[i] >= count {
                        count = indices[i] + 1;
                    }
                    i += 1;
                }
                count
            };

            #[inline]
            fn to_index(self) -> u32 {
                self as u32
            }

            #[inline]
            fn from_index(index: u32) -> ::core::option::Option<Self> {
                $(
                    if index == $name::$variant as u32 {
                        return ::core::option::Option::Some($name::$variant);
                    }
                )+
                ::core::option::Option::None
            }
        }
    };
}
