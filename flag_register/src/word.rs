//! Backing words for flag registers.
//!
//! A register's capacity is the bit width of its backing word, so the word
//! type is the only thing that selects between 8, 16 and 32 flags. The set
//! of words is closed: [`FlagWord`] is sealed and implemented for `u8`,
//! `u16` and `u32` only.

use core::fmt::{Binary, Debug};
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use bytemuck::Pod;

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer that can back a [`FlagRegister`](crate::FlagRegister).
///
/// Implemented for `u8`, `u16` and `u32`. The trait is sealed.
pub trait FlagWord:
    sealed::Sealed
    + Pod
    + Eq
    + Hash
    + Debug
    + Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Number of flags a word holds.
    const BITS: usize;

    /// All flags clear.
    const ZERO: Self;

    /// All flags set.
    const ALL: Self;

    /// Matching atomic cell used by [`SharedFlagRegister`](crate::SharedFlagRegister).
    #[cfg(feature = "atomic")]
    type Atomic: Send + Sync + Debug + Default;

    /// Mask with only bit `index` set.
    ///
    /// `index` must be below [`Self::BITS`]; callers check bounds first.
    fn bit(index: usize) -> Self;

    /// Number of set bits.
    fn count_set(self) -> usize;

    #[cfg(feature = "atomic")]
    #[doc(hidden)]
    fn atomic_load(cell: &Self::Atomic) -> Self;

    #[cfg(feature = "atomic")]
    #[doc(hidden)]
    fn atomic_store(cell: &Self::Atomic, value: Self);

    #[cfg(feature = "atomic")]
    #[doc(hidden)]
    fn atomic_swap(cell: &Self::Atomic, value: Self) -> Self;

    #[cfg(feature = "atomic")]
    #[doc(hidden)]
    fn atomic_or(cell: &Self::Atomic, mask: Self) -> Self;

    #[cfg(feature = "atomic")]
    #[doc(hidden)]
    fn atomic_and(cell: &Self::Atomic, mask: Self) -> Self;

    #[cfg(feature = "atomic")]
    #[doc(hidden)]
    fn atomic_xor(cell: &Self::Atomic, mask: Self) -> Self;

    /// Compare-exchange loop applying `f`, returns the previous value.
    #[cfg(feature = "atomic")]
    #[doc(hidden)]
    fn atomic_update(cell: &Self::Atomic, f: impl FnMut(Self) -> Self) -> Self;
}

macro_rules! impl_flag_word {
    ($($ty:ty => $atomic:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FlagWord for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;
                const ALL: Self = !0;

                #[cfg(feature = "atomic")]
                type Atomic = core::sync::atomic::$atomic;

                #[inline(always)]
                fn bit(index: usize) -> Self {
                    (1 as $ty) << index
                }

                #[inline(always)]
                fn count_set(self) -> usize {
                    self.count_ones() as usize
                }

                #[cfg(feature = "atomic")]
                #[inline(always)]
                fn atomic_load(cell: &Self::Atomic) -> Self {
                    cell.load(core::sync::atomic::Ordering::Acquire)
                }

                #[cfg(feature = "atomic")]
                #[inline(always)]
                fn atomic_store(cell: &Self::Atomic, value: Self) {
                    cell.store(value, core::sync::atomic::Ordering::Release)
                }

                #[cfg(feature = "atomic")]
                #[inline(always)]
                fn atomic_swap(cell: &Self::Atomic, value: Self) -> Self {
                    cell.swap(value, core::sync::atomic::Ordering::AcqRel)
                }

                #[cfg(feature = "atomic")]
                #[inline(always)]
                fn atomic_or(cell: &Self::Atomic, mask: Self) -> Self {
                    cell.fetch_or(mask, core::sync::atomic::Ordering::AcqRel)
                }

                #[cfg(feature = "atomic")]
                #[inline(always)]
                fn atomic_and(cell: &Self::Atomic, mask: Self) -> Self {
                    cell.fetch_and(mask, core::sync::atomic::Ordering::AcqRel)
                }

                #[cfg(feature = "atomic")]
                #[inline(always)]
                fn atomic_xor(cell: &Self::Atomic, mask: Self) -> Self {
                    cell.fetch_xor(mask, core::sync::atomic::Ordering::AcqRel)
                }

                #[cfg(feature = "atomic")]
                #[inline]
                fn atomic_update(cell: &Self::Atomic, mut f: impl FnMut(Self) -> Self) -> Self {
                    use core::sync::atomic::Ordering;

                    // The closure never returns None, so this cannot fail.
                    match cell.fetch_update(Ordering::AcqRel, Ordering::Acquire, |v| Some(f(v))) {
                        Ok(prev) | Err(prev) => prev,
                    }
                }
            }
        )*
    };
}

impl_flag_word!(u8 => AtomicU8, u16 => AtomicU16, u32 => AtomicU32);
