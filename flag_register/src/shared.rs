//! A flag register shared between an interrupt handler and the main loop.
//!
//! [`SharedFlagRegister`] keeps its word in the matching core atomic, so it
//! can live in a `static` and be written through `&self` from any context.
//! Single-flag operations and whole-word loads and stores are one atomic
//! instruction each and are the ones meant for interrupt handlers. Anything
//! that needs several steps works on a [`snapshot`](SharedFlagRegister::snapshot)
//! or goes through [`update`](SharedFlagRegister::update).
//!
//! ```rust
//! use flag_register::SharedFlagRegister;
//!
//! const RX_READY: usize = 0;
//! const TX_DONE: usize = 1;
//!
//! static EVENTS: SharedFlagRegister<u8> = SharedFlagRegister::<u8>::new();
//!
//! // interrupt handler
//! EVENTS.set_flag(RX_READY);
//!
//! // main loop
//! let pending = EVENTS.take();
//! assert!(pending.check_flag(RX_READY));
//! assert!(!pending.check_flag(TX_DONE));
//! assert_eq!(EVENTS.raw_flags(), 0);
//! ```
//!
//! The target must support atomic read-modify-write at the register's
//! width. On cores without it, disable the `atomic` feature and guard a
//! plain [`FlagRegister`] with the platform's critical section.

use core::fmt;

use crate::{FlagRegister, FlagWord};

/// Interrupt-safe cell holding one [`FlagRegister`].
pub struct SharedFlagRegister<T: FlagWord> {
    flags: T::Atomic,
}

macro_rules! impl_const_new {
    ($($ty:ty => $atomic:ident),* $(,)?) => {
        $(
            impl SharedFlagRegister<$ty> {
                /// Creates a register with every flag clear. Usable in a `static`.
                pub const fn new() -> Self {
                    Self {
                        flags: core::sync::atomic::$atomic::new(0),
                    }
                }

                /// Creates a register holding `flags`. Usable in a `static`.
                pub const fn from_raw(flags: $ty) -> Self {
                    Self {
                        flags: core::sync::atomic::$atomic::new(flags),
                    }
                }
            }
        )*
    };
}

impl_const_new!(u8 => AtomicU8, u16 => AtomicU16, u32 => AtomicU32);

impl<T: FlagWord> SharedFlagRegister<T> {
    /// Number of flags held by every register of this width.
    pub const CAPACITY: usize = T::BITS;

    #[inline(always)]
    fn in_range(index: usize) -> bool {
        index < T::BITS
    }

    /// Sets flag `index`. Out-of-range indices are ignored. Interrupt-safe.
    #[inline]
    pub fn set_flag(&self, index: usize) {
        if Self::in_range(index) {
            T::atomic_or(&self.flags, T::bit(index));
        }
    }

    /// Clears flag `index`. Out-of-range indices are ignored. Interrupt-safe.
    #[inline]
    pub fn clear_flag(&self, index: usize) {
        if Self::in_range(index) {
            T::atomic_and(&self.flags, !T::bit(index));
        }
    }

    /// Inverts flag `index`. Out-of-range indices are ignored. Interrupt-safe.
    #[inline]
    pub fn toggle_flag(&self, index: usize) {
        if Self::in_range(index) {
            T::atomic_xor(&self.flags, T::bit(index));
        }
    }

    /// Returns whether flag `index` is set; `false` when out of range.
    /// Interrupt-safe.
    #[inline]
    pub fn check_flag(&self, index: usize) -> bool {
        Self::in_range(index) && (T::atomic_load(&self.flags) & T::bit(index)) != T::ZERO
    }

    /// Clears every flag. Interrupt-safe.
    #[inline]
    pub fn clear_all_flags(&self) {
        T::atomic_store(&self.flags, T::ZERO);
    }

    /// Sets every flag. Interrupt-safe.
    #[inline]
    pub fn set_all_flags(&self) {
        T::atomic_store(&self.flags, T::ALL);
    }

    /// Point-in-time copy of the whole word. Interrupt-safe.
    ///
    /// A later read may already see flags changed by an interrupt.
    #[inline]
    pub fn raw_flags(&self) -> T {
        T::atomic_load(&self.flags)
    }

    /// Overwrites the whole word.
    ///
    /// The store itself is atomic, but it discards any flag an interrupt set
    /// between the caller's last read and this call. Use
    /// [`update`](Self::update) to modify the current value instead.
    #[inline]
    pub fn set_flags(&self, flags: T) {
        T::atomic_store(&self.flags, flags);
    }

    /// Number of flags this register holds: 8, 16 or 32.
    #[inline]
    pub const fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Copies the current value into a plain [`FlagRegister`].
    #[inline]
    pub fn snapshot(&self) -> FlagRegister<T> {
        FlagRegister::from_raw(self.raw_flags())
    }

    /// Reads and clears the register in one atomic step.
    ///
    /// The consumer side of an interrupt event register: every flag set
    /// before the swap is returned exactly once.
    #[inline]
    pub fn take(&self) -> FlagRegister<T> {
        FlagRegister::from_raw(T::atomic_swap(&self.flags, T::ZERO))
    }

    /// Applies `f` to the current value atomically and returns the value it
    /// replaced.
    ///
    /// `f` may run more than once if an interrupt writes the register
    /// between the read and the write back, so it must be free of side
    /// effects.
    ///
    /// ```rust
    /// use flag_register::SharedFlagRegister;
    ///
    /// let shared = SharedFlagRegister::<u16>::from_raw(0b0110);
    /// let before = shared.update(|mut reg| {
    ///     if reg.check_flag(1) {
    ///         reg.clear_flag(1);
    ///         reg.set_flag(8);
    ///     }
    ///     reg
    /// });
    /// assert_eq!(before.raw_flags(), 0b0110);
    /// assert_eq!(shared.raw_flags(), 0b1_0000_0100);
    /// ```
    pub fn update<F>(&self, mut f: F) -> FlagRegister<T>
    where
        F: FnMut(FlagRegister<T>) -> FlagRegister<T>,
    {
        let prev = T::atomic_update(&self.flags, |v| f(FlagRegister::from_raw(v)).raw_flags());
        FlagRegister::from_raw(prev)
    }
}

impl<T: FlagWord> Default for SharedFlagRegister<T> {
    fn default() -> Self {
        Self {
            flags: Default::default(),
        }
    }
}

impl<T: FlagWord> From<FlagRegister<T>> for SharedFlagRegister<T> {
    fn from(reg: FlagRegister<T>) -> Self {
        let shared = Self::default();
        shared.set_flags(reg.raw_flags());
        shared
    }
}

impl<T: FlagWord> fmt::Debug for SharedFlagRegister<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedFlagRegister({})", self.snapshot().binary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHARED: SharedFlagRegister<u32> = SharedFlagRegister::<u32>::new();

    #[test]
    fn single_flag_ops() {
        let reg = SharedFlagRegister::<u8>::new();
        reg.set_flag(1);
        reg.set_flag(6);
        assert_eq!(reg.raw_flags(), 0b0100_0010);
        assert!(reg.check_flag(6));

        reg.clear_flag(6);
        reg.toggle_flag(0);
        assert_eq!(reg.raw_flags(), 0b0000_0011);

        reg.toggle_flag(0);
        assert!(!reg.check_flag(0));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let reg = SharedFlagRegister::<u16>::from_raw(0x00F0);
        reg.set_flag(16);
        reg.clear_flag(20);
        reg.toggle_flag(99);
        assert_eq!(reg.raw_flags(), 0x00F0);
        assert!(!reg.check_flag(16));
    }

    #[test]
    fn whole_register_ops() {
        let reg = SharedFlagRegister::<u16>::default();
        reg.set_all_flags();
        assert_eq!(reg.raw_flags(), u16::MAX);
        reg.clear_all_flags();
        assert_eq!(reg.raw_flags(), 0);
        reg.set_flags(0x1234);
        assert_eq!(reg.snapshot(), FlagRegister::from_raw(0x1234));
        assert_eq!(reg.capacity(), 16);
    }

    #[test]
    fn take_drains() {
        let reg = SharedFlagRegister::<u8>::new();
        reg.set_flag(3);
        let first = reg.take();
        assert!(first.check_flag(3));
        assert!(reg.take().is_empty());
    }

    #[test]
    fn update_returns_previous() {
        let reg: SharedFlagRegister<u8> = FlagRegister::from_raw(0b0001).into();
        let prev = reg.update(|mut r| {
            r.toggle_flag(0);
            r.set_flag(7);
            r
        });
        assert_eq!(prev.raw_flags(), 0b0001);
        assert_eq!(reg.raw_flags(), 0b1000_0000);
    }

    #[test]
    fn static_register() {
        SHARED.set_flag(31);
        assert!(SHARED.check_flag(31));
        SHARED.clear_flag(31);
        assert!(!SHARED.check_flag(31));
    }

    #[cfg(feature = "std")]
    #[test]
    fn concurrent_producers_lose_no_flags() {
        use std::sync::Arc;
        use std::thread;

        let reg = Arc::new(SharedFlagRegister::<u32>::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let reg = Arc::clone(&reg);
                thread::spawn(move || {
                    for i in (t..32).step_by(4) {
                        reg.set_flag(i);
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(reg.raw_flags(), u32::MAX);
    }
}
