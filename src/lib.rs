// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
//! This library provides emulation of the original Game Boy's (DMG) Z80-like CPU
//! and its peripherals, as described in the publicly available "Game Boy CPU Manual"
//! and the Pan Docs.
//!
//! The crate is split along hardware lines: [`cpu`] implements the instruction
//! interpreter, [`bus`] implements the address-space multiplexer (MMU) and all of
//! the memory-mapped peripherals (cartridge/MBC, timer, PPU, joypad), and
//! [`emulator`] ties them together into the top-level scheduler a host program
//! drives one instruction at a time.
//!
//! This crate does not open files, parse command-line arguments, or draw to a
//! window; it emits [`log`] events but never installs a logger. Those concerns
//! belong to the host binary.

#[cfg(any(test, feature = "debug", feature = "std"))]
#[macro_use]
extern crate std;
extern crate core;
// The alloc crate is optional, and used for allocating the cartridge controller's
// ram on the heap.
#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bus;
pub mod cpu;
pub mod config;
#[cfg(feature = "alloc")]
pub mod emulator;

use core::fmt;

/// The library's exported errors.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum GameboyError {
	/// Unimplemented feature error.
	NotImplemented,
	/// Cartridge operation error.
	Cartridge(&'static str),
	/// Generic IO related error.
	Io(&'static str),
	/// Unexpected address error.
	BadAddress(u16),
	/// Invalid opcode error.
	BadOpcode(u8),
	/// Invalid value written to a register.
	BadValue(u8),
	/// The cartridge header declares a combination this crate doesn't support
	/// (only the MBC1 family and the unbanked ROM-only case are implemented).
	UnsupportedCartridge(u8),
}

impl fmt::Display for GameboyError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			GameboyError::NotImplemented => write!(f, "Not implemented"),
			GameboyError::Cartridge(ref info) => write!(f, "Cartridge error: {}", info),
			GameboyError::Io(ref info) => write!(f, "IO error: {}", info),
			GameboyError::BadAddress(address) => write!(f, "Bad address: 0x{:x}", address),
			GameboyError::BadOpcode(value) => write!(f, "Bad opcode: 0x{:x}", value),
			GameboyError::BadValue(value) => write!(f, "Bad value: {}", value),
			GameboyError::UnsupportedCartridge(cart_type) => {
				write!(f, "Unsupported cartridge type: 0x{:x}", cart_type)
			}
		}
	}
}

impl fmt::Debug for GameboyError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		(self as &dyn fmt::Display).fmt(f)
	}
}

// `std::error::Error` would be the idiomatic finish here, but this crate stays
// `no_std` by default (see DESIGN.md); hosts built with the `std` feature can
// wrap `GameboyError` in their own error type via the `Display` impl above.
