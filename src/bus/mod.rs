// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Emulate the gameboy's memory mapping and bus access.

#[macro_use]
pub mod memory_range;
pub mod cartridge;
pub mod joypad;
pub mod timer;
pub mod ram;
pub mod ppu;
pub mod io;

use io::*;
use ram::*;
use ppu::*;
use timer::*;
use joypad::*;
use cartridge::*;
use memory_range::*;
use timer::consts::MMAP_IO_TIMER;
use ppu::consts::{MMAP_IO_DISPLAY, MMAP_IO_PALETTES};

use crate::GameboyError;
use crate::config::Config;
use crate::cpu::interrupts::*;

/// Bus locations-related constants.
#[allow(missing_docs)]
pub mod consts {
	use super::*;

	pub const MMAP_ROM_BANK0: MemoryRange = make_range!(0x0000, 0x3FFF);
	/// Switchable ROM bank.
	pub const MMAP_ROM_BANK_SW: MemoryRange = make_range!(0x4000, 0x7FFF);
	pub const MMAP_VIDEO_RAM: MemoryRange = make_range!(0x8000, 0x9FFF);
	/// Switchable RAM bank.
	pub const MMAP_RAM_BANK_SW: MemoryRange = make_range!(0xA000, 0xBFFF);
	pub const MMAP_RAM_INTERNAL: MemoryRange = make_range!(0xC000, 0xDFFF);
	/// Maps to the same physical memory as the internal ram.
	pub const MMAP_RAM_ECHO: MemoryRange = make_range!(0xE000, 0xFDFF);
	/// Sprite/Object attribute memory.
	pub const MMAP_SPRITE_OAM: MemoryRange = make_range!(0xFE00, 0xFE9F);
	/// Unused; reads return 0xFF, writes are dropped.
	pub const MMAP_UNUSED: MemoryRange = make_range!(0xFEA0, 0xFEFF);
	pub const MMAP_IO_PORTS: MemoryRange = make_range!(0xFF00, 0xFF7F);
	/// High RAM.
	pub const MMAP_RAM_HIGH: MemoryRange = make_range!(0xFF80, 0xFFFE);
	/// The IE register, mapped on its own at the top of the address space.
	pub const MMAP_INTERRUPT_EN: MemoryRange = make_range!(0xFFFF, 0xFFFF);
}

use consts::*;

/// A peripheral that can be written and read by the cpu.
pub trait Memory {
	/// Write a 8-bit value to the peripheral.
	///
	/// * `address` - The absolute memory address to write into.
	/// * `value` - The value to write.
	fn write(&mut self, address: u16, value: u8) -> Result<(), GameboyError>;

	/// Read a 8-bit value from this peripheral.
	///
	/// * `address` - The absolute memory address to read from.
	fn read(&self, address: u16) -> Result<u8, GameboyError>;
}

/// A virtual representation of Gameboy (Color) memory bus.
///
/// This implementation provides memory/peripheral abstraction.
pub struct SystemBus<'a> {
	pub(crate) cartridge: &'a mut Cartridge<'a>,
	pub(crate) ppu: Ppu,
	pub(crate) io: IOPorts,
	pub(crate) timer: Timer,
	pub(crate) joypad: Joypad,
	pub(crate) ram: InternalRam,

	/// The IF register.
	pub interrupt_flag: InterruptMask,
	/// The IE register.
	pub interrupt_enable: InterruptMask,

	dma: Dma,
}

/// OAM DMA is a 160 M-cycle (640 T-cycle) transfer of 160 bytes from
/// `source..source+0x9F` into OAM, one byte per M-cycle. While it's running
/// the CPU can only see high RAM; every other read returns 0xFF and every
/// other write is dropped.
#[derive(Default)]
struct Dma {
	active: bool,
	source: u16,
	/// Bytes transferred so far, and leftover T-cycles not yet worth a byte.
	transferred: u16,
	cycle_debt: usize,
	/// Last value written to the DMA register, returned verbatim on read.
	register: u8,
}

impl Dma {
	const LENGTH: u16 = 0xA0;
	const CYCLES_PER_BYTE: usize = 4;
}

/// An abstraction for fetching mutable and immutable regions.
macro_rules! get_region {
	($name:tt $(,$mut_:tt)*) => {
		/// Returns the region that contains the given address.
		fn $name(&$($mut_)* self, address: u16) -> Result<&$($mut_)* dyn Memory, GameboyError> {
			match address {
				// Cartridge-mapped offsets
				memory_range!(MMAP_ROM_BANK0) |
				memory_range!(MMAP_ROM_BANK_SW) |
				memory_range!(MMAP_RAM_BANK_SW) => {
					Ok(&$($mut_)* (*self.cartridge))
				}

				// Internal RAM
				memory_range!(MMAP_RAM_INTERNAL) |
				memory_range!(MMAP_RAM_ECHO) |
				memory_range!(MMAP_RAM_HIGH) => {
					Ok(&$($mut_)* self.ram)
				}

				// Timer
				memory_range!(MMAP_IO_TIMER) => {
					Ok(&$($mut_)* self.timer)
				}

				// DMA and internal IO registers
				io::consts::IO_DMA |
				io::consts::IO_IF |
				io::consts::IO_IE => {
					Ok(&$($mut_)* *self)
				}

				// Display
				memory_range!(MMAP_IO_DISPLAY) |
				memory_range!(MMAP_IO_PALETTES) |
				memory_range!(MMAP_VIDEO_RAM) |
				memory_range!(MMAP_SPRITE_OAM) => {
					Ok(&$($mut_)* self.ppu)
				}

				// Joypad
				joypad::consts::IO_P1 => {
					Ok(&$($mut_)* self.joypad)
				}

				// Unused; reads as 0xFF, writes dropped.
				memory_range!(MMAP_UNUSED) => {
					Ok(&$($mut_)* *self)
				}

				// I/O registers
				memory_range!(MMAP_IO_PORTS) => {
					Ok(&$($mut_)* self.io)
				}
				_ => {
					Err(GameboyError::Io("Accessed an unmapped region."))
				}
			}
		}
	}
}

impl<'a> SystemBus<'a> {
	/// Initialize a new address space.
	pub fn new(config: &'a Config, cartridge: &'a mut Cartridge<'a>) -> Self {
		SystemBus {
			cartridge,
			ppu: Ppu::new(),
			io: IOPorts::new(config),
			timer: Timer::new(config),
			joypad: Joypad::new(),
			ram: InternalRam::new(),
			interrupt_flag: 0,
			interrupt_enable: 0,
			dma: Dma::default(),
		}
	}

	/// Update the system bus peripehrals' state according to
	/// the elapsed time.
	pub fn process(&mut self, cycles: usize) {
		let elapsed = if cycles > 0 { cycles } else { 4 };

		self.process_dma(elapsed);

		self.ppu.process(elapsed);
		self.timer.process(elapsed);
		self.joypad.process(elapsed);

		// Update interrupts state
		self.interrupt_flag |= self.ppu.interrupts();
		self.interrupt_flag |= self.timer.interrupts();
		self.interrupt_flag |= self.joypad.interrupts();
		self.interrupt_flag &= self.interrupt_enable;

		self.ppu.clear();
		self.timer.clear();
		self.joypad.clear();
	}

	/// Advance an in-flight OAM DMA transfer by `cycles` T-states, copying
	/// one byte per elapsed M-cycle.
	fn process_dma(&mut self, cycles: usize) {
		if !self.dma.active {
			return;
		}

		self.dma.cycle_debt += cycles;

		while self.dma.cycle_debt >= Dma::CYCLES_PER_BYTE && self.dma.transferred < Dma::LENGTH {
			self.dma.cycle_debt -= Dma::CYCLES_PER_BYTE;

			let offset = self.dma.transferred;
			let data = self.read_unrestricted(self.dma.source + offset).unwrap_or(0xFF);
			self.ppu.oam()[offset as usize] = data;

			self.dma.transferred += 1;
		}

		if self.dma.transferred >= Dma::LENGTH {
			self.dma.active = false;
		}
	}

	/// True while OAM DMA is in flight and restricting CPU visibility to
	/// high RAM.
	pub fn dma_active(&self) -> bool {
		self.dma.active
	}

	fn is_high_ram(address: u16) -> bool {
		matches!(address, memory_range!(MMAP_RAM_HIGH))
	}

	/// Handle a CPU write to a memory region, gated by any in-flight DMA.
	pub fn write(&mut self, address: u16, value: u8) -> Result<(), GameboyError> {
		if self.dma.active && address != io::consts::IO_DMA && !Self::is_high_ram(address) {
			return Ok(());
		}

		self.write_unrestricted(address, value)
	}

	/// Write without DMA gating, used internally and by the DMA engine
	/// itself to copy from the source range.
	fn write_unrestricted(&mut self, address: u16, value: u8) -> Result<(), GameboyError> {
		let peripheral = self.region_mut(address)?;

		peripheral.write(address, value)
	}

	/// Handle a CPU read from a memory region, gated by any in-flight DMA.
	pub fn read(&self, address: u16) -> Result<u8, GameboyError> {
		if self.dma.active && address != io::consts::IO_DMA && !Self::is_high_ram(address) {
			return Ok(0xFF);
		}

		self.read_unrestricted(address)
	}

	/// Read without DMA gating, used internally and by the DMA engine
	/// itself to copy from the source range.
	fn read_unrestricted(&self, address: u16) -> Result<u8, GameboyError> {
		let peripheral = self.region(address)?;
		
		peripheral.read(address)
	}

	/// Returns a waiting interrupt and removes it from the queue.
	pub fn fetch_interrupt(&mut self) -> Option<Interrupt> {
		let mut iter = InterruptIter::new(self.interrupt_flag);
		let interrupt = iter.next();

		// Remove the fetched interrupt (if any) from the interrupt register.
		self.interrupt_flag = iter.mask;

		interrupt
	}

	// Get an immutable region
	get_region!(region);

	// Get a mutable region
	get_region!(region_mut, mut);
}

/// Certain registers needs access to multiple peripherals.
/// These registers will be implemented here.
mod private {
	use super::*;

	// Implement read/write operations for internal registers.
	impl<'a> Memory for SystemBus<'a> {

		fn write(&mut self, address: u16, value: u8) -> Result<(), GameboyError> {
			match address {
				io::consts::IO_DMA => {
					// Starts (or restarts) a 160 M-cycle OAM DMA transfer,
					// advanced incrementally by `process_dma`.
					self.dma.active = true;
					self.dma.source = (value as u16) << 8;
					self.dma.transferred = 0;
					self.dma.cycle_debt = 0;
					self.dma.register = value;

					Ok(())
				}
				io::consts::IO_IF => {
					self.interrupt_flag = value;

					Ok(())
				}
				io::consts::IO_IE => {
					self.interrupt_enable = value;

					Ok(())
				}
				memory_range!(MMAP_UNUSED) => {
					// Writes to the unused region are dropped.
					Ok(())
				}
				_ => {
					panic!("Write operation not implemented for register: {}", address);
				}
			}
		}

		fn read(&self, address: u16) -> Result<u8, GameboyError> {
			match address {
				io::consts::IO_DMA => {
					Ok(self.dma.register)
				}
				io::consts::IO_IF => {
					Ok(self.interrupt_flag)
				}
				io::consts::IO_IE => {
					Ok(self.interrupt_enable)
				}
				memory_range!(MMAP_UNUSED) => {
					Ok(0xFF)
				}
				_ => {
					panic!("Read operation not implemented for register: {}", address);
				}
			}
		}
	}
}

#[cfg(test)]
impl<'a> SystemBus<'a> {
	/// Writes the complete array's bytes to the relevant memory region.
	pub fn write_all(&mut self, address: u16, array: &[u8]) -> Result<(), GameboyError> {
		for (index, value) in array.iter().enumerate() {
			self.write(address + (index as u16), *value)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_range() {
    	let int_enable_ptr: u16 = 0xFFFF;
    	let ram_ptr: u16 = 0xA100;

    	match int_enable_ptr {
    		memory_range!(MMAP_INTERRUPT_EN) => { }
    		_ => { assert!(false); }
    	}

    	match ram_ptr {
    		memory_range!(MMAP_RAM_BANK_SW) => { }
    		_ => { assert!(false); }
    	}
    }

    #[test]
    fn test_dma_restricts_cpu_to_high_ram_until_complete() {
    	let config = Config::default();
    	let mut rom = cartridge::tests::empty_rom(0x00, 0, 0);
    	rom[0x1000] = 0xAB;
    	let mut ram: [u8; 0] = [];
    	let mut cartridge = Cartridge::new(&mut rom, &mut ram).unwrap();
    	let mut bus = SystemBus::new(&config, &mut cartridge);

    	bus.write(0xFF80, 0x11).unwrap();
    	bus.write(io::consts::IO_DMA, 0x10).unwrap(); // source = 0x1000
    	assert!(bus.dma_active());

    	// Mid-transfer: high RAM stays visible, everything else is masked.
    	bus.write(0xC000, 0x99).unwrap();
    	assert_eq!(bus.read(0xC000).unwrap(), 0xFF);
    	assert_eq!(bus.read(0xFF80).unwrap(), 0x11);

    	// 160 bytes at 4 T-cycles each.
    	bus.process(640);
    	assert!(!bus.dma_active());

    	assert_eq!(bus.read(0xC000).unwrap(), 0x00);
    	bus.write(0xC000, 0x99).unwrap();
    	assert_eq!(bus.read(0xC000).unwrap(), 0x99);
    }
}
