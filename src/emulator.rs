// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! The emulation library's front-end API: a host-agnostic scheduler that
//! drives the cpu one instruction at a time and hands a completed
//! framebuffer back to the host once per frame.
//!
//! This module owns no window, no event loop and no wall clock; it only
//! defines the narrow [`HostInput`]/[`HostDisplay`] seams a host implements
//! to plug those in. Requires the `alloc` feature, since events are
//! collected into a heap-allocated `Vec` between turns.

use alloc::vec::Vec;

use crate::cpu::Cpu;
use crate::bus::joypad::Key;
use crate::bus::ppu::consts::{WIDTH, HEIGHT};
use crate::bus::cartridge::Cartridge;
use crate::config::Config;
use crate::GameboyError;

/// Host-supplied keyboard/window event, as polled once per scheduler turn.
pub enum HostEvent {
	/// The host requested a clean shutdown.
	Quit,
	/// A controller button was pressed.
	KeyDown(Key),
	/// A controller button was released.
	KeyUp(Key),
}

/// Collaborator the host implements to feed input into the console.
///
/// Kept deliberately minimal: the core does not know about windows,
/// keyboards, or gamepads, only the abstract button state they produce.
pub trait HostInput {
	/// Drains and returns all events that occurred since the last poll.
	fn poll_events(&mut self) -> Vec<HostEvent>;
}

/// Collaborator the host implements to receive completed frames.
pub trait HostDisplay {
	/// Called once per completed frame with the 160x144 RGB framebuffer.
	fn present(&mut self, framebuffer: &[u32]);
}

/// The top-level scheduler: owns the cpu (and, through it, the whole memory
/// map) and steps it in lockstep with the host's event loop.
pub struct Emulator<'a> {
	/// The gameboy's processor.
	pub cpu: Cpu<'a>,
	/// The emulator's configuration.
	pub config: &'a Config,
	frame_buffer: [u32; WIDTH * HEIGHT],
}

impl<'a> Emulator<'a> {
	/// Creates a new emulator around a cartridge that's already been parsed.
	#[inline(always)]
	pub fn new(config: &'a Config, cartridge: &'a mut Cartridge<'a>) -> Self {
		Emulator {
			cpu: Cpu::new(config, cartridge),
			config,
			frame_buffer: [0; WIDTH * HEIGHT],
		}
	}

	/// Applies a single host input event to the joypad.
	fn handle_event(&mut self, event: HostEvent) {
		match event {
			HostEvent::KeyDown(key) => self.cpu.with_controller(|joypad| joypad.down(key)),
			HostEvent::KeyUp(key) => self.cpu.with_controller(|joypad| joypad.up(key)),
			HostEvent::Quit => {},
		}
	}

	/// Runs the console until the host requests a quit or the cpu errors
	/// out, presenting one completed frame at a time.
	///
	/// Returns the total number of T-cycles executed.
	pub fn run(&mut self, input: &mut dyn HostInput, display: &mut dyn HostDisplay) -> Result<usize, GameboyError> {
		let mut total_cycles: usize = 0;

		'running: loop {
			for event in input.poll_events() {
				match event {
					HostEvent::Quit => break 'running,
					other => self.handle_event(other),
				}
			}

			total_cycles += self.step()?;

			if self.cpu.mmap.ppu.take_frame_ready() {
				self.cpu.flush(&mut self.frame_buffer);
				display.present(&self.frame_buffer);
			}
		}

		Ok(total_cycles)
	}

	/// Executes a single instruction (and its associated peripheral
	/// ticking); exposed so a host can drive its own loop instead of
	/// calling [`Self::run`].
	pub fn step(&mut self) -> Result<usize, GameboyError> {
		self.cpu.execute()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::boxed::Box;
	use crate::bus::cartridge;

	struct CountingDisplay {
		frames: usize,
	}

	impl HostDisplay for CountingDisplay {
		fn present(&mut self, _framebuffer: &[u32]) {
			self.frames += 1;
		}
	}

	#[test]
	fn test_step_advances_cycles() -> Result<(), GameboyError> {
		let config = Config::default();
		let mut rom = cartridge::tests::empty_rom(0x00, 0, 0);
		let mut ram: Box<[u8]> = Cartridge::make_ram(&rom)?;
		let mut cartridge = Cartridge::new(&mut rom, &mut ram)?;

		let mut emulator = Emulator::new(&config, &mut cartridge);
		let cycles = emulator.step()?;

		assert!(cycles > 0);

		Ok(())
	}

	#[test]
	fn test_quit_event_stops_run_without_presenting() -> Result<(), GameboyError> {
		let config = Config::default();
		let mut rom = cartridge::tests::empty_rom(0x00, 0, 0);
		let mut ram: Box<[u8]> = Cartridge::make_ram(&rom)?;
		let mut cartridge = Cartridge::new(&mut rom, &mut ram)?;

		let mut emulator = Emulator::new(&config, &mut cartridge);

		struct QuitImmediately;
		impl HostInput for QuitImmediately {
			fn poll_events(&mut self) -> Vec<HostEvent> {
				let mut events = Vec::new();
				events.push(HostEvent::Quit);
				events
			}
		}

		let mut input = QuitImmediately;
		let mut display = CountingDisplay { frames: 0 };

		emulator.run(&mut input, &mut display)?;

		assert_eq!(0, display.frames);

		Ok(())
	}
}
