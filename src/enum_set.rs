use crate::{Backing, EnumIndex};
use core::fmt::{Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::{FusedIterator, Iterator};
use core::marker::PhantomData;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub,
    SubAssign,
};

/// A set of `T` values stored as the bits of a single `U` integer.
///
/// The value with index `i` (see [`EnumIndex::to_index`]) is a member if bit
/// `i` of the backing integer is set. `U` defaults to `u32`, enough for
/// enumerations with up to 32 values. Pick `u64` or `u128` for larger ones and
/// `u8` or `u16` to save space on small ones. An enumeration that does not fit
/// its backing type is rejected at compile time:
///
/// ```compile_fail
/// use light_enumset::{EnumSet, enum_index};
///
/// #[derive(Clone, Copy)]
/// enum Wide {
///     First = 0,
///     Last = 8,
/// }
///
/// enum_index!(Wide { First, Last });
///
/// // 9 indices do not fit into 8 bits
/// let set = EnumSet::<Wide, u8>::new();
/// ```
///
/// The set is a plain `Copy` value without allocation. Iterators borrow it,
/// so it cannot be modified while an iterator is alive.
pub struct EnumSet<T: EnumIndex, U: Backing = u32> {
    bits: U,
    _marker: PhantomData<T>,
}

impl<T: EnumIndex, U: Backing> EnumSet<T, U> {
    const FITS_BACKING: () = assert!(
        T::COUNT <= U::BITS,
        "EnumIndex::COUNT exceeds the bit width of the backing type."
    );

    /// The empty set, usable in const contexts.
    pub const EMPTY: Self = Self::new();

    /// Creates an empty set.
    ///
    /// # Compiler Errors
    /// Prevents compilation if `T::COUNT` is larger than the bit width of `U`.
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let birds = EnumSet::<Bird>::new();
    /// assert!(birds.is_empty());
    /// assert_eq!(birds.len(), 0);
    /// ```
    #[allow(clippy::let_unit_value)]
    pub const fn new() -> Self {
        let () = Self::FITS_BACKING;
        Self {
            bits: U::ZERO,
            _marker: PhantomData,
        }
    }

    /// Creates a set containing only `value`.
    ///
    /// # Panics
    /// Panics if the index of `value` is not smaller than the bit width of `U`.
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let birds = EnumSet::<Bird>::only(Bird::Albatross);
    /// assert!(birds.contains(Bird::Albatross));
    /// assert_eq!(birds.len(), 1);
    /// ```
    #[inline]
    pub fn only(value: T) -> Self {
        Self::from_bits(Self::bit_for(value))
    }

    /// Creates a set containing every index in `0..T::COUNT` that maps to a
    /// value.
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let birds = EnumSet::<Bird>::all();
    /// assert_eq!(birds.len(), 3);
    /// ```
    pub fn all() -> Self {
        Self::from_bits(Self::member_mask())
    }

    /// Creates a set from its raw bitmask, as returned by [`serialize`].
    ///
    /// No validation takes place. Bits that do not correspond to a value are
    /// kept but never reported as members.
    ///
    /// [`serialize`]: EnumSet::serialize
    #[inline]
    pub fn from_bits(bits: U) -> Self {
        let mut set = Self::new();
        set.bits = bits;
        set
    }

    #[inline]
    fn bit_for(value: T) -> U {
        let idx = value.to_index();
        assert!(
            idx < U::BITS,
            "Enum index {idx} out of bounds for {}-bit backing",
            U::BITS
        );
        U::bit(idx)
    }

    // bits whose index maps to a value of T, gaps between discriminants
    // excluded
    fn member_mask() -> U {
        let mut mask = U::ZERO;
        for idx in 0..T::COUNT {
            if T::from_index(idx).is_some() {
                mask |= U::bit(idx);
            }
        }
        mask
    }

    /// Adds `value` to the set.
    ///
    /// Returns whether the value was newly inserted.
    ///
    /// # Panics
    /// Panics if the index of `value` is not smaller than the bit width of `U`.
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let mut birds = EnumSet::<Bird>::new();
    /// assert!(birds.insert(Bird::Fulmar));
    /// assert!(!birds.insert(Bird::Fulmar));
    /// assert_eq!(birds.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        let bit = Self::bit_for(value);
        let added = self.bits & bit == U::ZERO;
        self.bits |= bit;
        added
    }

    /// Adds every member of `other` to the set (in-place union).
    #[inline]
    pub fn insert_all(&mut self, other: Self) {
        self.bits |= other.bits;
    }

    /// Removes `value` from the set.
    ///
    /// Returns whether the value was a member. Removing a non-member is a
    /// no-op.
    ///
    /// # Panics
    /// Panics if the index of `value` is not smaller than the bit width of `U`.
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let mut birds = EnumSet::<Bird>::from([Bird::Penguin, Bird::Fulmar]);
    /// assert!(birds.remove(Bird::Penguin));
    /// assert!(!birds.remove(Bird::Albatross));
    /// assert_eq!(birds, EnumSet::only(Bird::Fulmar));
    /// ```
    #[inline]
    pub fn remove(&mut self, value: T) -> bool {
        let bit = Self::bit_for(value);
        let present = self.bits & bit != U::ZERO;
        self.bits &= !bit;
        present
    }

    /// Removes every member of `other` from the set (in-place difference).
    #[inline]
    pub fn remove_all(&mut self, other: Self) {
        self.bits &= !other.bits;
    }

    /// Keeps only the members that are also in `other` (in-place
    /// intersection).
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let mut birds = EnumSet::<Bird>::from([Bird::Penguin, Bird::Fulmar]);
    /// birds.intersect_with(EnumSet::from([Bird::Fulmar, Bird::Albatross]));
    /// assert_eq!(birds, EnumSet::only(Bird::Fulmar));
    /// ```
    #[inline]
    pub fn intersect_with(&mut self, other: Self) {
        self.bits &= other.bits;
    }

    /// Flips membership of every member of `other` (in-place symmetric
    /// difference).
    #[inline]
    pub fn toggle_all(&mut self, other: Self) {
        self.bits ^= other.bits;
    }

    /// Removes all members.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = U::ZERO;
    }

    /// Replaces the raw bitmask with `bits` verbatim.
    ///
    /// Counterpart of [`serialize`]. Nothing is validated: bits beyond the
    /// indices of `T` are stored and returned by [`serialize`] again, but they
    /// are never members.
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let mut birds = EnumSet::<Bird>::new();
    /// birds.deserialize(0b101);
    /// assert_eq!(birds, EnumSet::from([Bird::Penguin, Bird::Fulmar]));
    /// ```
    ///
    /// [`serialize`]: EnumSet::serialize
    #[inline]
    pub fn deserialize(&mut self, bits: U) {
        self.bits = bits;
    }

    /// Returns a copy of the set with `value` added.
    #[inline]
    #[must_use]
    pub fn with(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Returns a copy of the set with `value` removed.
    #[inline]
    #[must_use]
    pub fn without(mut self, value: T) -> Self {
        self.remove(value);
        self
    }

    /// Returns the set of values that are in `self` or `other`.
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let a = EnumSet::<Bird>::only(Bird::Penguin);
    /// let b = EnumSet::<Bird>::only(Bird::Fulmar);
    /// assert_eq!(a.union(b), EnumSet::from([Bird::Penguin, Bird::Fulmar]));
    /// assert_eq!(a.union(b), a + b);
    /// ```
    #[inline]
    #[must_use]
    pub fn union(mut self, other: Self) -> Self {
        self.insert_all(other);
        self
    }

    /// Returns the set of values that are in `self` but not in `other`.
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let a = EnumSet::<Bird>::from([Bird::Penguin, Bird::Albatross]);
    /// let b = EnumSet::<Bird>::from([Bird::Albatross, Bird::Fulmar]);
    /// assert_eq!(a.difference(b), EnumSet::only(Bird::Penguin));
    /// assert_eq!(a.difference(b), a - b);
    /// ```
    #[inline]
    #[must_use]
    pub fn difference(mut self, other: Self) -> Self {
        self.remove_all(other);
        self
    }

    /// Returns the set of values that are in both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn intersection(mut self, other: Self) -> Self {
        self.intersect_with(other);
        self
    }

    /// Returns the set of values that are in exactly one of `self` and
    /// `other`.
    #[inline]
    #[must_use]
    pub fn symmetric_difference(mut self, other: Self) -> Self {
        self.toggle_all(other);
        self
    }

    /// Returns the set of all values that are not in `self`.
    ///
    /// Only indices that map to a value are flipped. Unknown bits from
    /// [`deserialize`] are dropped.
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let birds = EnumSet::<Bird>::only(Bird::Albatross);
    /// assert_eq!(birds.complement(), EnumSet::from([Bird::Penguin, Bird::Fulmar]));
    /// assert_eq!(!birds, birds.complement());
    /// ```
    ///
    /// [`deserialize`]: EnumSet::deserialize
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        Self::all().difference(self)
    }

    /// Returns `true` if `value` is a member.
    ///
    /// # Panics
    /// Panics if the index of `value` is not smaller than the bit width of `U`.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.bits & Self::bit_for(value) != U::ZERO
    }

    /// Returns the number of members.
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let birds = EnumSet::<Bird>::from([Bird::Penguin, Bird::Fulmar, Bird::Penguin]);
    /// assert_eq!(birds.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        (self.bits & Self::member_mask()).count_ones() as usize
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits & Self::member_mask() == U::ZERO
    }

    /// Returns the raw bitmask: bit `i` is set if the value with index `i` is
    /// a member.
    ///
    /// This is the storage and wire representation of the set. Persist it
    /// together with the choice of `T` and `U` and restore it with
    /// [`deserialize`] or [`from_bits`].
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let birds = EnumSet::<Bird, u8>::from([Bird::Albatross, Bird::Fulmar]);
    /// assert_eq!(birds.serialize(), 0b110);
    /// assert_eq!(EnumSet::<Bird, u8>::from_bits(birds.serialize()), birds);
    /// ```
    ///
    /// [`deserialize`]: EnumSet::deserialize
    /// [`from_bits`]: EnumSet::from_bits
    #[inline]
    pub fn serialize(&self) -> U {
        self.bits
    }

    /// Returns the member with the lowest index or `None` if the set is empty.
    #[inline]
    pub fn first(&self) -> Option<T> {
        self.iter().next()
    }

    /// Returns `true` if every member of `self` is also a member of `other`.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.bits & !other.bits & Self::member_mask() == U::ZERO
    }

    /// Returns `true` if every member of `other` is also a member of `self`.
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no members in common.
    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.bits & other.bits & Self::member_mask() == U::ZERO
    }

    /// Returns an iterator over the members in ascending index order.
    ///
    /// Insertion order is not tracked. The iterator borrows the set, so the
    /// set cannot be changed until the iterator is dropped. Calling `iter`
    /// again starts over.
    ///
    /// # Examples
    /// ```
    /// # use light_enumset::{EnumSet, enum_index};
    /// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// # enum Bird { Penguin, Albatross, Fulmar }
    /// # enum_index!(Bird { Penguin, Albatross, Fulmar });
    /// let birds = EnumSet::<Bird>::from([Bird::Fulmar, Bird::Penguin]);
    /// let mut iter = birds.iter();
    /// assert_eq!(iter.next(), Some(Bird::Penguin));
    /// assert_eq!(iter.next(), Some(Bird::Fulmar));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, U> {
        Iter {
            set: self,
            members: Self::member_mask(),
            pos: 0,
        }
    }
}

impl<T: EnumIndex, U: Backing> Clone for EnumSet<T, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: EnumIndex, U: Backing> Copy for EnumSet<T, U> {}

impl<T: EnumIndex, U: Backing> PartialEq for EnumSet<T, U> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: EnumIndex, U: Backing> Eq for EnumSet<T, U> {}

impl<T: EnumIndex, U: Backing> Hash for EnumSet<T, U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T: EnumIndex, U: Backing> Default for EnumSet<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EnumIndex + Debug, U: Backing> Debug for EnumSet<T, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: EnumIndex, U: Backing> From<T> for EnumSet<T, U> {
    fn from(value: T) -> Self {
        Self::only(value)
    }
}

/// Collects a fixed list of values. Duplicates have no additional effect.
///
/// # Panics
/// Panics if the index of any value is not smaller than the bit width of `U`.
impl<T: EnumIndex, U: Backing, const N: usize> From<[T; N]> for EnumSet<T, U> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Collects values of any count. Duplicates have no additional effect.
///
/// # Panics
/// Panics if the index of any value is not smaller than the bit width of `U`.
impl<T: EnumIndex, U: Backing> FromIterator<T> for EnumSet<T, U> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: EnumIndex, U: Backing> Extend<T> for EnumSet<T, U> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: EnumIndex, U: Backing> Extend<&'a T> for EnumSet<T, U> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'set, T: EnumIndex, U: Backing> IntoIterator for &'set EnumSet<T, U> {
    type Item = T;
    type IntoIter = Iter<'set, T, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: EnumIndex, U: Backing, O: Into<EnumSet<T, U>>> Add<O> for EnumSet<T, U> {
    type Output = Self;

    fn add(self, rhs: O) -> Self::Output {
        self.union(rhs.into())
    }
}

impl<T: EnumIndex, U: Backing, O: Into<EnumSet<T, U>>> AddAssign<O> for EnumSet<T, U> {
    fn add_assign(&mut self, rhs: O) {
        self.insert_all(rhs.into())
    }
}

impl<T: EnumIndex, U: Backing, O: Into<EnumSet<T, U>>> Sub<O> for EnumSet<T, U> {
    type Output = Self;

    fn sub(self, rhs: O) -> Self::Output {
        self.difference(rhs.into())
    }
}

impl<T: EnumIndex, U: Backing, O: Into<EnumSet<T, U>>> SubAssign<O> for EnumSet<T, U> {
    fn sub_assign(&mut self, rhs: O) {
        self.remove_all(rhs.into())
    }
}

impl<T: EnumIndex, U: Backing, O: Into<EnumSet<T, U>>> BitAnd<O> for EnumSet<T, U> {
    type Output = Self;

    fn bitand(self, rhs: O) -> Self::Output {
        self.intersection(rhs.into())
    }
}

impl<T: EnumIndex, U: Backing, O: Into<EnumSet<T, U>>> BitAndAssign<O> for EnumSet<T, U> {
    fn bitand_assign(&mut self, rhs: O) {
        self.intersect_with(rhs.into())
    }
}

impl<T: EnumIndex, U: Backing, O: Into<EnumSet<T, U>>> BitOr<O> for EnumSet<T, U> {
    type Output = Self;

    fn bitor(self, rhs: O) -> Self::Output {
        self.union(rhs.into())
    }
}

impl<T: EnumIndex, U: Backing, O: Into<EnumSet<T, U>>> BitOrAssign<O> for EnumSet<T, U> {
    fn bitor_assign(&mut self, rhs: O) {
        self.insert_all(rhs.into())
    }
}

impl<T: EnumIndex, U: Backing, O: Into<EnumSet<T, U>>> BitXor<O> for EnumSet<T, U> {
    type Output = Self;

    fn bitxor(self, rhs: O) -> Self::Output {
        self.symmetric_difference(rhs.into())
    }
}

impl<T: EnumIndex, U: Backing, O: Into<EnumSet<T, U>>> BitXorAssign<O> for EnumSet<T, U> {
    fn bitxor_assign(&mut self, rhs: O) {
        self.toggle_all(rhs.into())
    }
}

impl<T: EnumIndex, U: Backing> Not for EnumSet<T, U> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

/// Iterator over the members of an [`EnumSet`] in ascending index order.
///
/// Returned by [`EnumSet::iter()`].
pub struct Iter<'set, T: EnumIndex, U: Backing> {
    set: &'set EnumSet<T, U>,
    members: U,
    pos: u32,
}

impl<T: EnumIndex, U: Backing> Iter<'_, T, U> {
    // members at or above the cursor
    #[inline]
    fn remaining(&self) -> U {
        self.set.bits & self.members & !U::low_mask(self.pos)
    }
}

impl<T: EnumIndex, U: Backing> Clone for Iter<'_, T, U> {
    fn clone(&self) -> Self {
        Self {
            set: self.set,
            members: self.members,
            pos: self.pos,
        }
    }
}

impl<T: EnumIndex + Debug, U: Backing> Debug for Iter<'_, T, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T: EnumIndex, U: Backing> Iterator for Iter<'_, T, U> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < T::COUNT {
            let rest = self.remaining();
            if rest == U::ZERO {
                self.pos = T::COUNT;
                return None;
            }
            let idx = rest.trailing_zeros();
            self.pos = idx + 1;
            if let Some(value) = T::from_index(idx) {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.pos >= T::COUNT {
            return (0, Some(0));
        }
        let len = self.remaining().count_ones() as usize;
        (len, Some(len))
    }
}

impl<T: EnumIndex, U: Backing> ExactSizeIterator for Iter<'_, T, U> {}

impl<T: EnumIndex, U: Backing> FusedIterator for Iter<'_, T, U> {}
