// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Human readable disassembly of opcodes, used by the trace logger.
//!
//! This module never advances the program counter or otherwise mutates
//! the cpu; it only peeks at memory to render a mnemonic. It avoids the
//! `alloc` crate so that it stays available under a bare no_std build.

use core::fmt;

use super::Cpu;
use crate::GameboyError;

const REGS8: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
const CB_OPS: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];
const ALU_OPS: [&str; 8] = ["ADD A,", "ADC A,", "SUB A,", "SBC A,", "AND A,", "XOR A,", "OR A,", "CP A,"];

/// A disassembled instruction, renderable via [`fmt::Display`].
///
/// Holds the raw opcode and up to two trailing immediate bytes; formatting
/// decides how many of them are actually part of the mnemonic.
pub struct Disassembly {
	opcode: u8,
	cb_opcode: u8,
	imm8: u8,
	imm16: u16,
}

/// Reads the instruction starting at `address` and returns a [`Disassembly`]
/// that renders it as a short mnemonic, without mutating the cpu's state.
pub fn disassemble(cpu: &Cpu, address: u16) -> Result<Disassembly, GameboyError> {
	let opcode = cpu.mmap.read(address)?;
	let next = cpu.mmap.read(address.wrapping_add(1))?;
	let hi = cpu.mmap.read(address.wrapping_add(2))? as u16;

	Ok(Disassembly {
		opcode,
		cb_opcode: next,
		imm8: next,
		imm16: (next as u16) | (hi << 8),
	})
}

impl fmt::Display for Disassembly {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let imm8 = self.imm8;
		let imm16 = self.imm16;

		match self.opcode {
			0xcb => fmt_cb(f, self.cb_opcode),

			0x00 => write!(f, "NOP"),
			0x01 => write!(f, "LD BC,${:04x}", imm16),
			0x02 => write!(f, "LD (BC),A"),
			0x03 => write!(f, "INC BC"),
			0x06 => write!(f, "LD B,${:02x}", imm8),
			0x07 => write!(f, "RLCA"),
			0x08 => write!(f, "LD (${:04x}),SP", imm16),
			0x0a => write!(f, "LD A,(BC)"),
			0x0e => write!(f, "LD C,${:02x}", imm8),
			0x0f => write!(f, "RRCA"),
			0x10 => write!(f, "STOP"),
			0x11 => write!(f, "LD DE,${:04x}", imm16),
			0x17 => write!(f, "RLA"),
			0x18 => write!(f, "JR ${:02x}", imm8),
			0x1a => write!(f, "LD A,(DE)"),
			0x1f => write!(f, "RRA"),
			0x20 => write!(f, "JR NZ,${:02x}", imm8),
			0x21 => write!(f, "LD HL,${:04x}", imm16),
			0x22 => write!(f, "LD (HL+),A"),
			0x27 => write!(f, "DAA"),
			0x28 => write!(f, "JR Z,${:02x}", imm8),
			0x2a => write!(f, "LD A,(HL+)"),
			0x2f => write!(f, "CPL"),
			0x30 => write!(f, "JR NC,${:02x}", imm8),
			0x31 => write!(f, "LD SP,${:04x}", imm16),
			0x32 => write!(f, "LD (HL-),A"),
			0x37 => write!(f, "SCF"),
			0x38 => write!(f, "JR C,${:02x}", imm8),
			0x3a => write!(f, "LD A,(HL-)"),
			0x3f => write!(f, "CCF"),
			0x76 => write!(f, "HALT"),
			0xc3 => write!(f, "JP ${:04x}", imm16),
			0xc6 => write!(f, "ADD A,${:02x}", imm8),
			0xc7 => write!(f, "RST 00H"),
			0xc9 => write!(f, "RET"),
			0xcd => write!(f, "CALL ${:04x}", imm16),
			0xce => write!(f, "ADC A,${:02x}", imm8),
			0xcf => write!(f, "RST 08H"),
			0xd6 => write!(f, "SUB A,${:02x}", imm8),
			0xd7 => write!(f, "RST 10H"),
			0xd9 => write!(f, "RETI"),
			0xde => write!(f, "SBC A,${:02x}", imm8),
			0xdf => write!(f, "RST 18H"),
			0xe0 => write!(f, "LDH (${:02x}),A", imm8),
			0xe2 => write!(f, "LD (C),A"),
			0xe6 => write!(f, "AND A,${:02x}", imm8),
			0xe7 => write!(f, "RST 20H"),
			0xe8 => write!(f, "ADD SP,${:02x}", imm8),
			0xe9 => write!(f, "JP (HL)"),
			0xea => write!(f, "LD (${:04x}),A", imm16),
			0xee => write!(f, "XOR A,${:02x}", imm8),
			0xef => write!(f, "RST 28H"),
			0xf0 => write!(f, "LDH A,(${:02x})", imm8),
			0xf2 => write!(f, "LD A,(C)"),
			0xf3 => write!(f, "DI"),
			0xf6 => write!(f, "OR A,${:02x}", imm8),
			0xf7 => write!(f, "RST 30H"),
			0xf8 => write!(f, "LD HL,SP+${:02x}", imm8),
			0xf9 => write!(f, "LD SP,HL"),
			0xfa => write!(f, "LD A,(${:04x})", imm16),
			0xfb => write!(f, "EI"),
			0xfe => write!(f, "CP A,${:02x}", imm8),
			0xff => write!(f, "RST 38H"),

			opcode if (0x40..0x80).contains(&opcode) && opcode != 0x76 => {
				let dst = REGS8[((opcode >> 3) & 0x7) as usize];
				let src = REGS8[(opcode & 0x7) as usize];
				write!(f, "LD {},{}", dst, src)
			},

			opcode if (0x80..0xc0).contains(&opcode) => {
				let src = REGS8[(opcode & 0x7) as usize];
				write!(f, "{}{}", ALU_OPS[((opcode - 0x80) / 8) as usize], src)
			},

			opcode => write!(f, "DB ${:02x}", opcode),
		}
	}
}

fn fmt_cb(f: &mut fmt::Formatter, opcode: u8) -> fmt::Result {
	let operand = REGS8[(opcode & 0x7) as usize];
	let bit = (opcode >> 3) & 0x7;

	match opcode {
		0x00..=0x3f => write!(f, "{} {}", CB_OPS[(bit & 0x7) as usize], operand),
		0x40..=0x7f => write!(f, "BIT {},{}", bit, operand),
		0x80..=0xbf => write!(f, "RES {},{}", bit, operand),
		_ => write!(f, "SET {},{}", bit, operand),
	}
}

#[cfg(test)]
#[cfg(feature = "alloc")]
mod tests {
	use super::*;
	use super::super::tests::with_cpu;
	use super::super::state::registers::Register;
	use alloc::format;

	#[test]
	fn test_disassemble_nop() -> Result<(), GameboyError> {
		with_cpu(|cpu| {
			cpu.mmap.write(0x0000, 0x0A)?;
			cpu.mmap.write(cpu.registers.get(Register::PC), 0x00)?;

			let text = format!("{}", disassemble(cpu, cpu.registers.get(Register::PC))?);
			assert_eq!("NOP", text);

			Ok(())
		})
	}

	#[test]
	fn test_disassemble_ld_immediate() -> Result<(), GameboyError> {
		with_cpu(|cpu| {
			cpu.mmap.write(0x0000, 0x0A)?;
			let pc = cpu.registers.get(Register::PC);
			cpu.mmap.write(pc, 0x06)?;
			cpu.mmap.write(pc.wrapping_add(1), 0x42)?;

			let text = format!("{}", disassemble(cpu, pc)?);
			assert_eq!("LD B,$42", text);

			Ok(())
		})
	}

	#[test]
	fn test_disassemble_cb_bit() {
		let text = format!("{}", Disassembly { opcode: 0xcb, cb_opcode: 0x7f, imm8: 0, imm16: 0 });
		assert_eq!("BIT 7,A", text);
	}
}
