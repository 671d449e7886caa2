//! # flag_register
//!
//! A `no_std` compatible bit-flag register for interrupt-driven firmware.
//!
//! A [`FlagRegister<T>`] packs 8, 16 or 32 boolean flags into one `u8`,
//! `u16` or `u32`. Flags are addressed by index, flipped in constant time
//! and read back one at a time or as a whole word.
//!
//! ```rust
//! use flag_register::{FlagRegister, Match, compare_registers};
//!
//! let mut leds = FlagRegister::<u8>::new();
//! leds.set_flag(0);
//! leds.set_flag(2);
//! leds.toggle_flag(2);
//!
//! assert!(leds.check_flag(0));
//! assert!(!leds.check_flag(2));
//! assert_eq!(leds.capacity(), 8);
//!
//! let target = FlagRegister::<u8>::from_raw(0b0000_0011);
//! assert_eq!(compare_registers(&leds, &target), Match::Partial);
//! ```
//!
//! ## Interrupt use
//!
//! [`SharedFlagRegister<T>`] (feature `atomic`, on by default) stores the
//! word in a core atomic so a `static` register can be written from an
//! interrupt handler and drained from the main loop without `unsafe`.
//!
//! ## Features
//!
//! - `std` (default): `std` builds, `thiserror`-derived [`FlagError`]
//! - `alloc`: `String` rendering with `to_binary_string`
//! - `atomic` (default): [`SharedFlagRegister`]
//! - `defmt`: `defmt::Format` for registers, [`Match`] and [`FlagError`]

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub use error::FlagError;

mod render;
mod word;

pub mod compare;
pub mod register;

#[cfg(feature = "atomic")]
pub mod shared;

pub use compare::{Match, compare_registers};
pub use register::{FlagRegister, SetFlags};
pub use render::{Binary, InverseBinary};
pub use word::FlagWord;

#[cfg(feature = "atomic")]
pub use shared::SharedFlagRegister;
