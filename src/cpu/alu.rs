// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Gameboy cpu's arithmetic and logic unit.

use super::Cpu;
use super::instructions::InsnResult;
use super::state::registers::*;

/// Implementation of 8-bit arithmetic, logic and rotate/shift operations.
pub mod alu8 {
	use super::*;

	/// The shape every binary ALU op (add/sub/and/or/...) takes, so that
	/// [`op_registers`], [`op_mem`] and [`op_imm`] can dispatch generically.
	pub type Op = fn(&mut Cpu, u8, u8) -> u8;

	fn set_zero_flag(cpu: &mut Cpu, result: u8) {
		cpu.registers.set_flag(Flag::Z, result == 0);
	}

	/// Adds the given arguments, sets the relevant flags accordingly
	/// and returns the result.
	pub fn add(cpu: &mut Cpu, lhs: u8, rhs: u8) -> u8 {
		let (result, carry) = lhs.overflowing_add(rhs);
		let half_carry = (lhs & 0xF) + (rhs & 0xF) > 0xF;

		cpu.registers.set_flag(Flag::N, false);
		cpu.registers.set_flag(Flag::H, half_carry);
		cpu.registers.set_flag(Flag::C, carry);
		set_zero_flag(cpu, result);

		result
	}

	/// Adds the given arguments together with the carry flag.
	pub fn adc(cpu: &mut Cpu, lhs: u8, rhs: u8) -> u8 {
		let carry_in = cpu.registers.flag(Flag::C) as u8;
		let result = lhs.wrapping_add(rhs).wrapping_add(carry_in);

		let half_carry = (lhs & 0xF) + (rhs & 0xF) + carry_in > 0xF;
		let carry = (lhs as u16) + (rhs as u16) + (carry_in as u16) > 0xFF;

		cpu.registers.set_flag(Flag::N, false);
		cpu.registers.set_flag(Flag::H, half_carry);
		cpu.registers.set_flag(Flag::C, carry);
		set_zero_flag(cpu, result);

		result
	}

	/// Subtracts `rhs` from `lhs`, sets the relevant flags and returns the
	/// result.
	pub fn sub(cpu: &mut Cpu, lhs: u8, rhs: u8) -> u8 {
		let (result, borrow) = lhs.overflowing_sub(rhs);
		let half_borrow = (lhs & 0xF) < (rhs & 0xF);

		cpu.registers.set_flag(Flag::N, true);
		cpu.registers.set_flag(Flag::H, half_borrow);
		cpu.registers.set_flag(Flag::C, borrow);
		set_zero_flag(cpu, result);

		result
	}

	/// Subtracts `rhs` and the carry flag from `lhs`.
	pub fn sbc(cpu: &mut Cpu, lhs: u8, rhs: u8) -> u8 {
		let carry_in = cpu.registers.flag(Flag::C) as u8;
		let result = lhs.wrapping_sub(rhs).wrapping_sub(carry_in);

		let half_borrow = (lhs & 0xF) < (rhs & 0xF) + carry_in;
		let borrow = (lhs as u16) < (rhs as u16) + (carry_in as u16);

		cpu.registers.set_flag(Flag::N, true);
		cpu.registers.set_flag(Flag::H, half_borrow);
		cpu.registers.set_flag(Flag::C, borrow);
		set_zero_flag(cpu, result);

		result
	}

	/// Bitwise AND; always sets the half-carry flag.
	pub fn and(cpu: &mut Cpu, lhs: u8, rhs: u8) -> u8 {
		let result = lhs & rhs;

		cpu.registers.set_flag(Flag::N, false);
		cpu.registers.set_flag(Flag::H, true);
		cpu.registers.set_flag(Flag::C, false);
		set_zero_flag(cpu, result);

		result
	}

	/// Bitwise OR.
	pub fn or(cpu: &mut Cpu, lhs: u8, rhs: u8) -> u8 {
		let result = lhs | rhs;

		cpu.registers.set_flag(Flag::N, false);
		cpu.registers.set_flag(Flag::H, false);
		cpu.registers.set_flag(Flag::C, false);
		set_zero_flag(cpu, result);

		result
	}

	/// Bitwise XOR.
	pub fn xor(cpu: &mut Cpu, lhs: u8, rhs: u8) -> u8 {
		let result = lhs ^ rhs;

		cpu.registers.set_flag(Flag::N, false);
		cpu.registers.set_flag(Flag::H, false);
		cpu.registers.set_flag(Flag::C, false);
		set_zero_flag(cpu, result);

		result
	}

	/// Compares `lhs` and `rhs` as `sub` would, without keeping the result.
	pub fn cp(cpu: &mut Cpu, lhs: u8, rhs: u8) -> u8 {
		sub(cpu, lhs, rhs);
		lhs
	}

	/// Applies a binary op to `dst` and `src`, storing the result back into
	/// `dst`.
	pub fn op_registers(op: Op, cpu: &mut Cpu, dst: Register, src: Register) -> InsnResult {
		let lhs = cpu.registers.get(dst) as u8;
		let rhs = cpu.registers.get(src) as u8;
		let result = op(cpu, lhs, rhs);

		cpu.registers.set(dst, result as u16);

		Ok(4)
	}

	/// Applies a binary op to A and the byte at (HL), storing the result
	/// back into A.
	pub fn op_mem(op: Op, cpu: &mut Cpu) -> InsnResult {
		let lhs = cpu.registers.get(Register::A) as u8;
		let address = cpu.registers.get(Register::HL);
		let rhs: u8 = cpu.mmap.read(address)?;
		let result = op(cpu, lhs, rhs);

		cpu.registers.set(Register::A, result as u16);

		Ok(8)
	}

	/// Applies a binary op to A and an immediate byte, storing the result
	/// back into A.
	pub fn op_imm(op: Op, cpu: &mut Cpu) -> InsnResult {
		let lhs = cpu.registers.get(Register::A) as u8;
		let rhs: u8 = cpu.fetch()?;
		let result = op(cpu, lhs, rhs);

		cpu.registers.set(Register::A, result as u16);

		Ok(8)
	}

	/// Increments an 8-bit register, setting Z/N/H (C is left untouched).
	pub fn inc_register(cpu: &mut Cpu, reg: Register) -> InsnResult {
		let value = cpu.registers.get(reg) as u8;
		let result = value.wrapping_add(1);

		cpu.registers.set_flag(Flag::Z, result == 0);
		cpu.registers.set_flag(Flag::N, false);
		cpu.registers.set_flag(Flag::H, (value & 0xF) == 0xF);

		cpu.registers.set(reg, result as u16);

		Ok(4)
	}

	/// Decrements an 8-bit register, setting Z/N/H (C is left untouched).
	pub fn dec_register(cpu: &mut Cpu, reg: Register) -> InsnResult {
		let value = cpu.registers.get(reg) as u8;
		let result = value.wrapping_sub(1);

		cpu.registers.set_flag(Flag::Z, result == 0);
		cpu.registers.set_flag(Flag::N, true);
		cpu.registers.set_flag(Flag::H, (value & 0xF) == 0);

		cpu.registers.set(reg, result as u16);

		Ok(4)
	}

	/// Increments the byte at (HL).
	pub fn inc_mem(cpu: &mut Cpu) -> InsnResult {
		let address = cpu.registers.get(Register::HL);
		let value: u8 = cpu.mmap.read(address)?;
		let result = value.wrapping_add(1);

		cpu.registers.set_flag(Flag::Z, result == 0);
		cpu.registers.set_flag(Flag::N, false);
		cpu.registers.set_flag(Flag::H, (value & 0xF) == 0xF);

		cpu.mmap.write(address, result)?;

		Ok(12)
	}

	/// Decrements the byte at (HL).
	pub fn dec_mem(cpu: &mut Cpu) -> InsnResult {
		let address = cpu.registers.get(Register::HL);
		let value: u8 = cpu.mmap.read(address)?;
		let result = value.wrapping_sub(1);

		cpu.registers.set_flag(Flag::Z, result == 0);
		cpu.registers.set_flag(Flag::N, true);
		cpu.registers.set_flag(Flag::H, (value & 0xF) == 0);

		cpu.mmap.write(address, result)?;

		Ok(12)
	}

	fn set_rotate_flags(cpu: &mut Cpu, result: u8, carry: bool) {
		cpu.registers.set_flag(Flag::Z, result == 0);
		cpu.registers.set_flag(Flag::N, false);
		cpu.registers.set_flag(Flag::H, false);
		cpu.registers.set_flag(Flag::C, carry);
	}

	/// Rotates left, copying the outgoing bit 7 into both the carry flag
	/// and bit 0.
	pub fn rlc(cpu: &mut Cpu, value: u8) -> u8 {
		let carry = value & 0x80 != 0;
		let result = value.rotate_left(1);

		set_rotate_flags(cpu, result, carry);

		result
	}

	/// Rotates right, copying the outgoing bit 0 into both the carry flag
	/// and bit 7.
	pub fn rrc(cpu: &mut Cpu, value: u8) -> u8 {
		let carry = value & 0x01 != 0;
		let result = value.rotate_right(1);

		set_rotate_flags(cpu, result, carry);

		result
	}

	/// Rotates left through the carry flag.
	pub fn rl(cpu: &mut Cpu, value: u8) -> u8 {
		let carry_in = cpu.registers.flag(Flag::C) as u8;
		let carry_out = value & 0x80 != 0;
		let result = (value << 1) | carry_in;

		set_rotate_flags(cpu, result, carry_out);

		result
	}

	/// Rotates right through the carry flag.
	pub fn rr(cpu: &mut Cpu, value: u8) -> u8 {
		let carry_in = cpu.registers.flag(Flag::C) as u8;
		let carry_out = value & 0x01 != 0;
		let result = (value >> 1) | (carry_in << 7);

		set_rotate_flags(cpu, result, carry_out);

		result
	}

	/// Shifts left, shifting in a zero at bit 0.
	pub fn sla(cpu: &mut Cpu, value: u8) -> u8 {
		let carry = value & 0x80 != 0;
		let result = value << 1;

		set_rotate_flags(cpu, result, carry);

		result
	}

	/// Shifts right arithmetically, keeping bit 7 (the sign bit) unchanged.
	pub fn sra(cpu: &mut Cpu, value: u8) -> u8 {
		let carry = value & 0x01 != 0;
		let result = (value >> 1) | (value & 0x80);

		set_rotate_flags(cpu, result, carry);

		result
	}

	/// Shifts right logically, shifting in a zero at bit 7.
	pub fn srl(cpu: &mut Cpu, value: u8) -> u8 {
		let carry = value & 0x01 != 0;
		let result = value >> 1;

		set_rotate_flags(cpu, result, carry);

		result
	}

	/// Swaps the low and high nibbles.
	pub fn swap(cpu: &mut Cpu, value: u8) -> u8 {
		let result = (value << 4) | (value >> 4);

		cpu.registers.set_flag(Flag::Z, result == 0);
		cpu.registers.set_flag(Flag::N, false);
		cpu.registers.set_flag(Flag::H, false);
		cpu.registers.set_flag(Flag::C, false);

		result
	}
}

/// Implementation of 16-bit arithmetic operations.
pub mod alu16 {
	use super::*;

	/// Adds `rhs` to `lhs` the way ADD SP,e8 and LD HL,SP+e8 do: the flags
	/// come from treating it as an 8-bit addition of the low bytes, and Z/N
	/// are left to the caller (both instructions force them to 0).
	pub fn add(cpu: &mut Cpu, lhs: u16, rhs: u16) -> u16 {
		let result = lhs.wrapping_add(rhs);
		let half_carry = (lhs & 0xF) + (rhs & 0xF) > 0xF;
		let carry = (lhs & 0xFF) + (rhs & 0xFF) > 0xFF;

		cpu.registers.set_flag(Flag::N, false);
		cpu.registers.set_flag(Flag::H, half_carry);
		cpu.registers.set_flag(Flag::C, carry);

		result
	}

	/// Adds `rhs` into HL as ADD HL,rr does: Z is left untouched, N is
	/// cleared, H/C come from the carries out of bit 11 and bit 15.
	pub fn add_hl(cpu: &mut Cpu, lhs: u16, rhs: u16) -> u16 {
		let result = lhs.wrapping_add(rhs);
		let half_carry = (lhs & 0xFFF) + (rhs & 0xFFF) > 0xFFF;
		let carry = (lhs as u32) + (rhs as u32) > 0xFFFF;

		cpu.registers.set_flag(Flag::N, false);
		cpu.registers.set_flag(Flag::H, half_carry);
		cpu.registers.set_flag(Flag::C, carry);

		result
	}

	/// Increments a 16-bit register. Unlike the 8-bit form, no flags are
	/// affected.
	pub fn inc_register(cpu: &mut Cpu, reg: Register) -> InsnResult {
		let value = cpu.registers.get(reg);
		cpu.registers.set(reg, value.wrapping_add(1));

		Ok(8)
	}

	/// Decrements a 16-bit register. No flags are affected.
	pub fn dec_register(cpu: &mut Cpu, reg: Register) -> InsnResult {
		let value = cpu.registers.get(reg);
		cpu.registers.set(reg, value.wrapping_sub(1));

		Ok(8)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::bus::cartridge::tests::empty_rom;
	use crate::bus::cartridge::Cartridge;
	use crate::config::Config;

	fn with_cpu<F: FnOnce(&mut Cpu)>(f: F) {
		let config = Config::default();
		let mut rom = empty_rom(0x00, 0, 0);
		let mut ram: [u8; 0] = [];
		let mut cartridge = Cartridge::new(&mut rom, &mut ram).unwrap();
		let mut cpu = Cpu::new(&config, &mut cartridge);

		f(&mut cpu);
	}

	#[test]
	fn test_add_sets_half_carry_and_carry() {
		with_cpu(|cpu| {
			let result = alu8::add(cpu, 0x0F, 0x01);
			assert_eq!(result, 0x10);
			assert!(cpu.registers.flag(Flag::H));
			assert!(!cpu.registers.flag(Flag::C));

			let result = alu8::add(cpu, 0xFF, 0x01);
			assert_eq!(result, 0x00);
			assert!(cpu.registers.flag(Flag::Z));
			assert!(cpu.registers.flag(Flag::C));
		});
	}

	#[test]
	fn test_sub_sets_borrow_flags() {
		with_cpu(|cpu| {
			let result = alu8::sub(cpu, 0x00, 0x01);
			assert_eq!(result, 0xFF);
			assert!(cpu.registers.flag(Flag::N));
			assert!(cpu.registers.flag(Flag::H));
			assert!(cpu.registers.flag(Flag::C));
		});
	}

	#[test]
	fn test_adc_includes_carry_in() {
		with_cpu(|cpu| {
			cpu.registers.set_flag(Flag::C, true);
			let result = alu8::adc(cpu, 0x0E, 0x01);
			assert_eq!(result, 0x10);
			assert!(cpu.registers.flag(Flag::H));
		});
	}

	#[test]
	fn test_rlc_wraps_bit_7_into_carry_and_bit_0() {
		with_cpu(|cpu| {
			let result = alu8::rlc(cpu, 0x80);
			assert_eq!(result, 0x01);
			assert!(cpu.registers.flag(Flag::C));
			assert!(!cpu.registers.flag(Flag::Z));
		});
	}

	#[test]
	fn test_srl_shifts_in_zero_and_keeps_bit_0_in_carry() {
		with_cpu(|cpu| {
			let result = alu8::srl(cpu, 0x01);
			assert_eq!(result, 0x00);
			assert!(cpu.registers.flag(Flag::Z));
			assert!(cpu.registers.flag(Flag::C));
		});
	}

	#[test]
	fn test_swap_exchanges_nibbles() {
		with_cpu(|cpu| {
			assert_eq!(alu8::swap(cpu, 0xA5), 0x5A);
		});
	}

	#[test]
	fn test_add_hl_sets_half_carry_on_bit_11_and_carry_on_bit_15() {
		with_cpu(|cpu| {
			let result = alu16::add_hl(cpu, 0x0FFF, 0x0001);
			assert_eq!(result, 0x1000);
			assert!(cpu.registers.flag(Flag::H));
			assert!(!cpu.registers.flag(Flag::C));

			let result = alu16::add_hl(cpu, 0xFFFF, 0x0001);
			assert_eq!(result, 0x0000);
			assert!(cpu.registers.flag(Flag::C));
		});
	}
}
