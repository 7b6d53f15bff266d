// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! The cartridge controller - decodes the DMG header and implements MBC1
//! bank switching for ROM and external RAM.

#[cfg(feature = "alloc")]
use alloc::boxed::Box;
#[cfg(feature = "alloc")]
use alloc::vec;

use crate::GameboyError;
use super::Memory;
use super::memory_range::*;

/// cartridge addresses-related constants.
#[allow(missing_docs)]
pub mod consts {
	use super::*;

	/// Game title.
	pub const ROM_GAME_TITLE: MemoryRange = make_range!(0x0134, 0x0142);

	/// Cartridge type. 0 - ROM Only, 1/2/3 - ROM+MBC1(+RAM)(+Battery);
	/// anything else is recognized for error reporting but not emulated.
	pub const ROM_CARTRIDGE_TYPE: usize = 0x0147;
	/// ROM size code. Number of 16 KiB banks is `2 << code`.
	pub const ROM_SIZE_CODE: usize = 0x0148;
	/// External RAM size code.
	pub const RAM_SIZE_CODE: usize = 0x0149;

	/// A write to this range enables/disables external RAM.
	pub const RAM_ENABLE: MemoryRange = make_range!(0x0000, 0x1FFF);
	/// A write to this range selects the low 5 bits of the active ROM bank.
	pub const ROM_BANK_SELECT: MemoryRange = make_range!(0x2000, 0x3FFF);
	/// A write to this range selects the RAM bank number, which doubles as
	/// the upper 2 bits of the ROM bank number in mode 0.
	pub const RAM_BANK_SELECT: MemoryRange = make_range!(0x4000, 0x5FFF);
	/// A write to this range selects the memory model in MBC1 cartridges.
	pub const MEMORY_MODEL_SELECT: MemoryRange = make_range!(0x6000, 0x7FFF);

	/// Size of a single ROM bank.
	pub const ROM_BANK_SIZE: usize = 0x4000;
	/// Size of a single external RAM bank.
	pub const RAM_BANK_SIZE: usize = 0x2000;
}

use consts::*;
use super::consts::{MMAP_ROM_BANK0, MMAP_ROM_BANK_SW, MMAP_RAM_BANK_SW};

/// Identifies which bank-switching hardware the cartridge uses.
///
/// Only the unbanked case and the MBC1 family are emulated; every other
/// cartridge-type byte is rejected at construction time with
/// [`GameboyError::UnsupportedCartridge`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CartridgeType {
	/// A 32KB ROM, occupies 0000-7FFF, no external RAM bank switching.
	RomOnly,
	/// Memory bank controller 1: up to 2MB ROM, up to 32KB RAM.
	Mbc1,
}

/// MBC1's bank-switching state, kept separate from [`CartridgeType`] so that
/// `RomOnly` cartridges don't carry dead fields.
#[derive(Clone, Copy, Default)]
struct Mbc1State {
	/// Low 5 bits of the selected ROM bank (0 is remapped to 1 on write).
	rom_bank_number: u8,
	/// RAM bank number; doubles as ROM bank bits 5-6 in mode 0.
	ram_bank_number: u8,
	/// 0 = ROM banking mode, 1 = RAM banking / advanced ROM banking mode.
	mode_flag: u8,
	/// True iff the last write to 0000-1FFF had low nibble 0xA.
	ram_enabled: bool,
}

/// The game's cartridge: ROM bytes, optional external RAM, and the bank
/// switching logic that multiplexes them into the CPU's address space.
pub struct Cartridge<'a> {
	rom: &'a mut [u8],
	ram: &'a mut [u8],
	kind: CartridgeType,
	mbc1: Mbc1State,
	num_rom_banks: usize,
	num_ram_banks: usize,
}

impl<'a> Cartridge<'a> {
	/// Decode the cartridge type from the header byte at 0x0147.
	fn decode_type(cartridge_type: u8) -> Result<CartridgeType, GameboyError> {
		match cartridge_type {
			0x00 => Ok(CartridgeType::RomOnly),
			0x01 | 0x02 | 0x03 => Ok(CartridgeType::Mbc1),
			other => Err(GameboyError::UnsupportedCartridge(other)),
		}
	}

	/// Number of 16 KiB ROM banks declared by the header.
	fn rom_bank_count(rom: &[u8]) -> usize {
		2usize << (rom[ROM_SIZE_CODE] as usize)
	}

	/// Number of 8 KiB external RAM banks declared by the header.
	fn ram_bank_count(rom: &[u8]) -> usize {
		match rom[RAM_SIZE_CODE] {
			0 => 0,
			1 => 1,  // 2 KiB, rounded up to a single (partial) bank
			2 => 1,  // 8 KiB
			3 => 4,  // 32 KiB
			4 => 16, // 128 KiB
			5 => 8,  // 64 KiB
			_ => 0,
		}
	}

	/// Size in bytes of the external RAM the header declares. Used by hosts
	/// to size the backing buffer passed into [`Cartridge::new`].
	pub fn ram_size_bytes(rom: &[u8]) -> usize {
		Self::ram_bank_count(rom) * RAM_BANK_SIZE
	}

	/// Allocate a zeroed external RAM buffer sized from the header.
	#[cfg(feature = "alloc")]
	pub fn make_ram(rom: &[u8]) -> Result<Box<[u8]>, GameboyError> {
		if rom.len() <= RAM_SIZE_CODE {
			return Err(GameboyError::Cartridge("ROM too small to contain a header"));
		}
		Ok(vec![0_u8; Self::ram_size_bytes(rom)].into_boxed_slice())
	}

	/// Initialize a new cartridge given its raw ROM data and a backing RAM
	/// buffer (use [`Cartridge::make_ram`] to size one correctly, or pass an
	/// empty slice for cartridges with no external RAM).
	pub fn new(rom: &'a mut [u8], ram: &'a mut [u8]) -> Result<Self, GameboyError> {
		// Make sure that the rom contains at least a single bank and a header.
		if rom.len() < ROM_BANK_SIZE {
			return Err(GameboyError::Cartridge("ROM smaller than a single bank"));
		}

		let kind = Self::decode_type(rom[ROM_CARTRIDGE_TYPE])?;
		let num_rom_banks = Self::rom_bank_count(rom);
		let num_ram_banks = Self::ram_bank_count(rom);

		log::debug!(
			"cartridge header: type=0x{:x} rom_banks={} ram_banks={}",
			rom[ROM_CARTRIDGE_TYPE],
			num_rom_banks,
			num_ram_banks
		);

		if !num_rom_banks.is_power_of_two() {
			return Err(GameboyError::Cartridge("ROM bank count is not a power of two"));
		}

		Ok(Cartridge {
			rom,
			ram,
			kind,
			mbc1: Mbc1State::default(),
			num_rom_banks,
			num_ram_banks,
		})
	}

	/// Get the title of the game.
	pub fn title(&self) -> &[u8] {
		&self.rom[memory_offset_range!(ROM_GAME_TITLE)]
	}

	/// The bank mapped into 0x0000-0x3FFF.
	fn low_bank(&self) -> usize {
		match self.kind {
			CartridgeType::RomOnly => 0,
			CartridgeType::Mbc1 => {
				if self.mbc1.mode_flag == 1 {
					((self.mbc1.ram_bank_number as usize) << 5) & (self.num_rom_banks - 1)
				} else {
					0
				}
			}
		}
	}

	/// The bank mapped into 0x4000-0x7FFF.
	fn high_bank(&self) -> usize {
		match self.kind {
			CartridgeType::RomOnly => 1 & (self.num_rom_banks - 1),
			CartridgeType::Mbc1 => {
				let bank = ((self.mbc1.ram_bank_number as usize) << 5)
					| (self.mbc1.rom_bank_number as usize);
				bank & (self.num_rom_banks - 1)
			}
		}
	}

	/// The external RAM bank currently selected for 0xA000-0xBFFF.
	fn ram_bank(&self) -> usize {
		match self.kind {
			CartridgeType::RomOnly => 0,
			CartridgeType::Mbc1 => {
				if self.mbc1.mode_flag == 1 {
					self.mbc1.ram_bank_number as usize
				} else {
					0
				}
			}
		}
	}

	fn ram_enabled(&self) -> bool {
		self.num_ram_banks > 0 && self.mbc1.ram_enabled
	}
}

impl<'a> Memory for Cartridge<'a> {
	/// Write data into the cartridge. Within 0000-7FFF this controls bank
	/// switching; within A000-BFFF it writes through to external RAM when
	/// enabled.
	fn write(&mut self, address: u16, value: u8) -> Result<(), GameboyError> {
		match address {
			memory_range!(RAM_ENABLE) => {
				self.mbc1.ram_enabled = (value & 0x0F) == 0x0A;
				Ok(())
			}
			memory_range!(ROM_BANK_SELECT) => {
				let selected = value & 0x1F;
				self.mbc1.rom_bank_number = if selected == 0 { 1 } else { selected };
				Ok(())
			}
			memory_range!(RAM_BANK_SELECT) => {
				self.mbc1.ram_bank_number = value & 0x03;
				Ok(())
			}
			memory_range!(MEMORY_MODEL_SELECT) => {
				self.mbc1.mode_flag = value & 0x01;
				Ok(())
			}
			memory_range!(MMAP_RAM_BANK_SW) => {
				if self.ram_enabled() {
					let offset = (address as usize) - range_start!(MMAP_RAM_BANK_SW);
					let bank = self.ram_bank();
					let idx = bank * RAM_BANK_SIZE + offset;
					if idx < self.ram.len() {
						self.ram[idx] = value;
					}
				}
				Ok(())
			}
			_ => Err(GameboyError::BadAddress(address)),
		}
	}

	fn read(&self, address: u16) -> Result<u8, GameboyError> {
		match address {
			memory_range!(MMAP_ROM_BANK0) => {
				let offset = address as usize;
				Ok(self.rom[self.low_bank() * ROM_BANK_SIZE + offset])
			}
			memory_range!(MMAP_ROM_BANK_SW) => {
				let offset = (address as usize) - ROM_BANK_SIZE;
				Ok(self.rom[self.high_bank() * ROM_BANK_SIZE + offset])
			}
			memory_range!(MMAP_RAM_BANK_SW) => {
				if !self.ram_enabled() {
					return Ok(0xFF);
				}
				let offset = (address as usize) - range_start!(MMAP_RAM_BANK_SW);
				let idx = self.ram_bank() * RAM_BANK_SIZE + offset;
				Ok(*self.ram.get(idx).unwrap_or(&0xFF))
			}
			_ => Err(GameboyError::BadAddress(address)),
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	/// Creates an empty rom for testing, of the given cartridge/ROM/RAM
	/// header configuration.
	pub fn empty_rom(cart_type: u8, rom_size_code: u8, ram_size_code: u8) -> std::vec::Vec<u8> {
		let banks = 2usize << (rom_size_code as usize);
		let mut rom = std::vec![0_u8; banks * ROM_BANK_SIZE];
		rom[ROM_CARTRIDGE_TYPE] = cart_type;
		rom[ROM_SIZE_CODE] = rom_size_code;
		rom[RAM_SIZE_CODE] = ram_size_code;
		rom[memory_offset_range!(ROM_GAME_TITLE)].clone_from_slice(
			b"TEST TITLE\0\0\0\0\0",
		);
		rom
	}

	#[test]
	fn test_cartridge_loading() {
		let mut rom = empty_rom(0x00, 0, 0);
		let mut ram: [u8; 0] = [];
		let cart = Cartridge::new(&mut rom, &mut ram).unwrap();

		assert!(cart.kind == CartridgeType::RomOnly);
		assert!(b"TEST TITLE\0\0\0\0\0" == cart.title());
	}

	#[test]
	fn test_unsupported_cartridge_type_is_rejected() {
		let mut rom = empty_rom(0x19, 0, 0); // MBC5
		let mut ram: [u8; 0] = [];
		let err = Cartridge::new(&mut rom, &mut ram).unwrap_err();
		assert!(err == GameboyError::UnsupportedCartridge(0x19));
	}

	#[test]
	fn test_rom_bank_selection() {
		// 4 banks (64 KiB), code 1.
		let mut rom = empty_rom(0x01, 1, 0);
		let num_banks = Cartridge::rom_bank_count(&rom);
		assert_eq!(num_banks, 4);

		// Stamp each bank with a distinguishable byte at offset 0 of the
		// switchable window so we can tell banks apart through reads.
		for bank in 0..num_banks {
			rom[bank * ROM_BANK_SIZE] = bank as u8;
		}

		let mut ram: [u8; 0] = [];
		let mut cart = Cartridge::new(&mut rom, &mut ram).unwrap();

		cart.write(0x2000, 3).unwrap();
		assert_eq!(cart.read(0x4000).unwrap(), 3);

		// Writing 0 aliases to bank 1, never bank 0, in the switchable window.
		cart.write(0x2000, 0).unwrap();
		assert_eq!(cart.read(0x4000).unwrap(), 1);
	}

	#[test]
	fn test_ram_gating() {
		let mut rom = empty_rom(0x02, 0, 2); // MBC1+RAM, 8 KiB
		let mut ram = [0_u8; RAM_BANK_SIZE];
		let mut cart = Cartridge::new(&mut rom, &mut ram).unwrap();

		// RAM disabled by default: reads are 0xFF, writes are dropped.
		assert_eq!(cart.read(0xA000).unwrap(), 0xFF);
		cart.write(0xA000, 0x42).unwrap();
		assert_eq!(cart.read(0xA000).unwrap(), 0xFF);

		cart.write(0x0000, 0x0A).unwrap();
		cart.write(0xA000, 0x42).unwrap();
		assert_eq!(cart.read(0xA000).unwrap(), 0x42);

		cart.write(0x0000, 0x00).unwrap();
		assert_eq!(cart.read(0xA000).unwrap(), 0xFF);
	}

	#[cfg(feature = "alloc")]
	#[test]
	fn test_make_ram_sizes_from_header() {
		let rom = empty_rom(0x02, 0, 3); // 32 KiB external RAM
		let ram = Cartridge::make_ram(&rom).unwrap();
		assert_eq!(ram.len(), 4 * RAM_BANK_SIZE);
	}
}
