// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Generated instruction bodies for the CB-prefixed rotate/shift, bit-test
//! and bit-set opcodes. Each CB row covers the same operation across the
//! eight operands B, C, D, E, H, L, (HL), A; `res` (0x80-0xBF) lives in
//! [`super::instructions`] since it predates this module.

use super::Cpu;
use super::alu::alu8;
use super::instructions::InsnResult;
use super::state::registers::*;

fn rotate_register(cpu: &mut Cpu, reg: Register, op: fn(&mut Cpu, u8) -> u8) -> InsnResult {
	let value = cpu.registers.get(reg) as u8;
	let result = op(cpu, value);
	cpu.registers.set(reg, result as u16);

	Ok(8)
}

fn rotate_memory(cpu: &mut Cpu, op: fn(&mut Cpu, u8) -> u8) -> InsnResult {
	let address = cpu.registers.get(Register::HL);
	let value = cpu.mmap.read(address)?;
	let result = op(cpu, value);
	cpu.mmap.write(address, result)?;

	Ok(16)
}

fn test_register_bit(cpu: &mut Cpu, reg: Register, bit: u8) -> InsnResult {
	let value = cpu.registers.get(reg) as u8;
	test_bit_flags(cpu, value, bit);

	Ok(8)
}

fn test_memory_bit(cpu: &mut Cpu, bit: u8) -> InsnResult {
	let address = cpu.registers.get(Register::HL);
	let value = cpu.mmap.read(address)?;
	test_bit_flags(cpu, value, bit);

	Ok(12)
}

/// BIT leaves C untouched, clears N, sets H, and sets Z to the complement
/// of the tested bit.
fn test_bit_flags(cpu: &mut Cpu, value: u8, bit: u8) {
	cpu.registers.set_flag(Flag::Z, (value >> bit) & 1 == 0);
	cpu.registers.set_flag(Flag::N, false);
	cpu.registers.set_flag(Flag::H, true);
}

fn set_register_bit(cpu: &mut Cpu, reg: Register, bit: u8) -> InsnResult {
	let value = cpu.registers.get(reg);
	cpu.registers.set(reg, value | (1 << bit));

	Ok(8)
}

fn set_memory_bit(cpu: &mut Cpu, bit: u8) -> InsnResult {
	let address = cpu.registers.get(Register::HL);
	let data = cpu.mmap.read(address)?;
	cpu.mmap.write(address, data | (1 << bit))?;

	Ok(16)
}

/// RLC B
pub fn opcode_cb00(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::B, alu8::rlc)
}

/// RLC C
pub fn opcode_cb01(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::C, alu8::rlc)
}

/// RLC D
pub fn opcode_cb02(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::D, alu8::rlc)
}

/// RLC E
pub fn opcode_cb03(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::E, alu8::rlc)
}

/// RLC H
pub fn opcode_cb04(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::H, alu8::rlc)
}

/// RLC L
pub fn opcode_cb05(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::L, alu8::rlc)
}

/// RLC (HL)
pub fn opcode_cb06(cpu: &mut Cpu) -> InsnResult {
	rotate_memory(cpu, alu8::rlc)
}

/// RLC A
pub fn opcode_cb07(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::A, alu8::rlc)
}

/// RRC B
pub fn opcode_cb08(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::B, alu8::rrc)
}

/// RRC C
pub fn opcode_cb09(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::C, alu8::rrc)
}

/// RRC D
pub fn opcode_cb0a(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::D, alu8::rrc)
}

/// RRC E
pub fn opcode_cb0b(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::E, alu8::rrc)
}

/// RRC H
pub fn opcode_cb0c(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::H, alu8::rrc)
}

/// RRC L
pub fn opcode_cb0d(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::L, alu8::rrc)
}

/// RRC (HL)
pub fn opcode_cb0e(cpu: &mut Cpu) -> InsnResult {
	rotate_memory(cpu, alu8::rrc)
}

/// RRC A
pub fn opcode_cb0f(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::A, alu8::rrc)
}

/// RL B
pub fn opcode_cb10(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::B, alu8::rl)
}

/// RL C
pub fn opcode_cb11(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::C, alu8::rl)
}

/// RL D
pub fn opcode_cb12(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::D, alu8::rl)
}

/// RL E
pub fn opcode_cb13(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::E, alu8::rl)
}

/// RL H
pub fn opcode_cb14(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::H, alu8::rl)
}

/// RL L
pub fn opcode_cb15(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::L, alu8::rl)
}

/// RL (HL)
pub fn opcode_cb16(cpu: &mut Cpu) -> InsnResult {
	rotate_memory(cpu, alu8::rl)
}

/// RL A
pub fn opcode_cb17(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::A, alu8::rl)
}

/// RR B
pub fn opcode_cb18(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::B, alu8::rr)
}

/// RR C
pub fn opcode_cb19(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::C, alu8::rr)
}

/// RR D
pub fn opcode_cb1a(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::D, alu8::rr)
}

/// RR E
pub fn opcode_cb1b(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::E, alu8::rr)
}

/// RR H
pub fn opcode_cb1c(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::H, alu8::rr)
}

/// RR L
pub fn opcode_cb1d(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::L, alu8::rr)
}

/// RR (HL)
pub fn opcode_cb1e(cpu: &mut Cpu) -> InsnResult {
	rotate_memory(cpu, alu8::rr)
}

/// RR A
pub fn opcode_cb1f(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::A, alu8::rr)
}

/// SLA B
pub fn opcode_cb20(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::B, alu8::sla)
}

/// SLA C
pub fn opcode_cb21(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::C, alu8::sla)
}

/// SLA D
pub fn opcode_cb22(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::D, alu8::sla)
}

/// SLA E
pub fn opcode_cb23(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::E, alu8::sla)
}

/// SLA H
pub fn opcode_cb24(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::H, alu8::sla)
}

/// SLA L
pub fn opcode_cb25(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::L, alu8::sla)
}

/// SLA (HL)
pub fn opcode_cb26(cpu: &mut Cpu) -> InsnResult {
	rotate_memory(cpu, alu8::sla)
}

/// SLA A
pub fn opcode_cb27(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::A, alu8::sla)
}

/// SRA B
pub fn opcode_cb28(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::B, alu8::sra)
}

/// SRA C
pub fn opcode_cb29(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::C, alu8::sra)
}

/// SRA D
pub fn opcode_cb2a(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::D, alu8::sra)
}

/// SRA E
pub fn opcode_cb2b(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::E, alu8::sra)
}

/// SRA H
pub fn opcode_cb2c(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::H, alu8::sra)
}

/// SRA L
pub fn opcode_cb2d(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::L, alu8::sra)
}

/// SRA (HL)
pub fn opcode_cb2e(cpu: &mut Cpu) -> InsnResult {
	rotate_memory(cpu, alu8::sra)
}

/// SRA A
pub fn opcode_cb2f(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::A, alu8::sra)
}

/// SWAP B
pub fn opcode_cb30(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::B, alu8::swap)
}

/// SWAP C
pub fn opcode_cb31(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::C, alu8::swap)
}

/// SWAP D
pub fn opcode_cb32(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::D, alu8::swap)
}

/// SWAP E
pub fn opcode_cb33(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::E, alu8::swap)
}

/// SWAP H
pub fn opcode_cb34(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::H, alu8::swap)
}

/// SWAP L
pub fn opcode_cb35(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::L, alu8::swap)
}

/// SWAP (HL)
pub fn opcode_cb36(cpu: &mut Cpu) -> InsnResult {
	rotate_memory(cpu, alu8::swap)
}

/// SWAP A
pub fn opcode_cb37(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::A, alu8::swap)
}

/// SRL B
pub fn opcode_cb38(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::B, alu8::srl)
}

/// SRL C
pub fn opcode_cb39(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::C, alu8::srl)
}

/// SRL D
pub fn opcode_cb3a(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::D, alu8::srl)
}

/// SRL E
pub fn opcode_cb3b(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::E, alu8::srl)
}

/// SRL H
pub fn opcode_cb3c(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::H, alu8::srl)
}

/// SRL L
pub fn opcode_cb3d(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::L, alu8::srl)
}

/// SRL (HL)
pub fn opcode_cb3e(cpu: &mut Cpu) -> InsnResult {
	rotate_memory(cpu, alu8::srl)
}

/// SRL A
pub fn opcode_cb3f(cpu: &mut Cpu) -> InsnResult {
	rotate_register(cpu, Register::A, alu8::srl)
}

/// bit 0, B
pub fn opcode_cb40(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::B, 0)
}

/// bit 0, C
pub fn opcode_cb41(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::C, 0)
}

/// bit 0, D
pub fn opcode_cb42(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::D, 0)
}

/// bit 0, E
pub fn opcode_cb43(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::E, 0)
}

/// bit 0, H
pub fn opcode_cb44(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::H, 0)
}

/// bit 0, L
pub fn opcode_cb45(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::L, 0)
}

/// bit 0, (HL)
pub fn opcode_cb46(cpu: &mut Cpu) -> InsnResult {
	test_memory_bit(cpu, 0)
}

/// bit 0, A
pub fn opcode_cb47(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::A, 0)
}

/// bit 1, B
pub fn opcode_cb48(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::B, 1)
}

/// bit 1, C
pub fn opcode_cb49(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::C, 1)
}

/// bit 1, D
pub fn opcode_cb4a(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::D, 1)
}

/// bit 1, E
pub fn opcode_cb4b(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::E, 1)
}

/// bit 1, H
pub fn opcode_cb4c(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::H, 1)
}

/// bit 1, L
pub fn opcode_cb4d(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::L, 1)
}

/// bit 1, (HL)
pub fn opcode_cb4e(cpu: &mut Cpu) -> InsnResult {
	test_memory_bit(cpu, 1)
}

/// bit 1, A
pub fn opcode_cb4f(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::A, 1)
}

/// bit 2, B
pub fn opcode_cb50(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::B, 2)
}

/// bit 2, C
pub fn opcode_cb51(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::C, 2)
}

/// bit 2, D
pub fn opcode_cb52(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::D, 2)
}

/// bit 2, E
pub fn opcode_cb53(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::E, 2)
}

/// bit 2, H
pub fn opcode_cb54(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::H, 2)
}

/// bit 2, L
pub fn opcode_cb55(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::L, 2)
}

/// bit 2, (HL)
pub fn opcode_cb56(cpu: &mut Cpu) -> InsnResult {
	test_memory_bit(cpu, 2)
}

/// bit 2, A
pub fn opcode_cb57(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::A, 2)
}

/// bit 3, B
pub fn opcode_cb58(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::B, 3)
}

/// bit 3, C
pub fn opcode_cb59(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::C, 3)
}

/// bit 3, D
pub fn opcode_cb5a(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::D, 3)
}

/// bit 3, E
pub fn opcode_cb5b(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::E, 3)
}

/// bit 3, H
pub fn opcode_cb5c(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::H, 3)
}

/// bit 3, L
pub fn opcode_cb5d(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::L, 3)
}

/// bit 3, (HL)
pub fn opcode_cb5e(cpu: &mut Cpu) -> InsnResult {
	test_memory_bit(cpu, 3)
}

/// bit 3, A
pub fn opcode_cb5f(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::A, 3)
}

/// bit 4, B
pub fn opcode_cb60(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::B, 4)
}

/// bit 4, C
pub fn opcode_cb61(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::C, 4)
}

/// bit 4, D
pub fn opcode_cb62(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::D, 4)
}

/// bit 4, E
pub fn opcode_cb63(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::E, 4)
}

/// bit 4, H
pub fn opcode_cb64(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::H, 4)
}

/// bit 4, L
pub fn opcode_cb65(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::L, 4)
}

/// bit 4, (HL)
pub fn opcode_cb66(cpu: &mut Cpu) -> InsnResult {
	test_memory_bit(cpu, 4)
}

/// bit 4, A
pub fn opcode_cb67(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::A, 4)
}

/// bit 5, B
pub fn opcode_cb68(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::B, 5)
}

/// bit 5, C
pub fn opcode_cb69(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::C, 5)
}

/// bit 5, D
pub fn opcode_cb6a(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::D, 5)
}

/// bit 5, E
pub fn opcode_cb6b(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::E, 5)
}

/// bit 5, H
pub fn opcode_cb6c(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::H, 5)
}

/// bit 5, L
pub fn opcode_cb6d(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::L, 5)
}

/// bit 5, (HL)
pub fn opcode_cb6e(cpu: &mut Cpu) -> InsnResult {
	test_memory_bit(cpu, 5)
}

/// bit 5, A
pub fn opcode_cb6f(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::A, 5)
}

/// bit 6, B
pub fn opcode_cb70(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::B, 6)
}

/// bit 6, C
pub fn opcode_cb71(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::C, 6)
}

/// bit 6, D
pub fn opcode_cb72(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::D, 6)
}

/// bit 6, E
pub fn opcode_cb73(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::E, 6)
}

/// bit 6, H
pub fn opcode_cb74(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::H, 6)
}

/// bit 6, L
pub fn opcode_cb75(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::L, 6)
}

/// bit 6, (HL)
pub fn opcode_cb76(cpu: &mut Cpu) -> InsnResult {
	test_memory_bit(cpu, 6)
}

/// bit 6, A
pub fn opcode_cb77(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::A, 6)
}

/// bit 7, B
pub fn opcode_cb78(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::B, 7)
}

/// bit 7, C
pub fn opcode_cb79(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::C, 7)
}

/// bit 7, D
pub fn opcode_cb7a(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::D, 7)
}

/// bit 7, E
pub fn opcode_cb7b(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::E, 7)
}

/// bit 7, H
pub fn opcode_cb7c(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::H, 7)
}

/// bit 7, L
pub fn opcode_cb7d(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::L, 7)
}

/// bit 7, (HL)
pub fn opcode_cb7e(cpu: &mut Cpu) -> InsnResult {
	test_memory_bit(cpu, 7)
}

/// bit 7, A
pub fn opcode_cb7f(cpu: &mut Cpu) -> InsnResult {
	test_register_bit(cpu, Register::A, 7)
}

/// set 0, B
pub fn opcode_cbc0(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::B, 0)
}

/// set 0, C
pub fn opcode_cbc1(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::C, 0)
}

/// set 0, D
pub fn opcode_cbc2(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::D, 0)
}

/// set 0, E
pub fn opcode_cbc3(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::E, 0)
}

/// set 0, H
pub fn opcode_cbc4(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::H, 0)
}

/// set 0, L
pub fn opcode_cbc5(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::L, 0)
}

/// set 0, (HL)
pub fn opcode_cbc6(cpu: &mut Cpu) -> InsnResult {
	set_memory_bit(cpu, 0)
}

/// set 0, A
pub fn opcode_cbc7(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::A, 0)
}

/// set 1, B
pub fn opcode_cbc8(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::B, 1)
}

/// set 1, C
pub fn opcode_cbc9(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::C, 1)
}

/// set 1, D
pub fn opcode_cbca(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::D, 1)
}

/// set 1, E
pub fn opcode_cbcb(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::E, 1)
}

/// set 1, H
pub fn opcode_cbcc(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::H, 1)
}

/// set 1, L
pub fn opcode_cbcd(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::L, 1)
}

/// set 1, (HL)
pub fn opcode_cbce(cpu: &mut Cpu) -> InsnResult {
	set_memory_bit(cpu, 1)
}

/// set 1, A
pub fn opcode_cbcf(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::A, 1)
}

/// set 2, B
pub fn opcode_cbd0(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::B, 2)
}

/// set 2, C
pub fn opcode_cbd1(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::C, 2)
}

/// set 2, D
pub fn opcode_cbd2(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::D, 2)
}

/// set 2, E
pub fn opcode_cbd3(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::E, 2)
}

/// set 2, H
pub fn opcode_cbd4(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::H, 2)
}

/// set 2, L
pub fn opcode_cbd5(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::L, 2)
}

/// set 2, (HL)
pub fn opcode_cbd6(cpu: &mut Cpu) -> InsnResult {
	set_memory_bit(cpu, 2)
}

/// set 2, A
pub fn opcode_cbd7(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::A, 2)
}

/// set 3, B
pub fn opcode_cbd8(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::B, 3)
}

/// set 3, C
pub fn opcode_cbd9(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::C, 3)
}

/// set 3, D
pub fn opcode_cbda(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::D, 3)
}

/// set 3, E
pub fn opcode_cbdb(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::E, 3)
}

/// set 3, H
pub fn opcode_cbdc(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::H, 3)
}

/// set 3, L
pub fn opcode_cbdd(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::L, 3)
}

/// set 3, (HL)
pub fn opcode_cbde(cpu: &mut Cpu) -> InsnResult {
	set_memory_bit(cpu, 3)
}

/// set 3, A
pub fn opcode_cbdf(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::A, 3)
}

/// set 4, B
pub fn opcode_cbe0(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::B, 4)
}

/// set 4, C
pub fn opcode_cbe1(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::C, 4)
}

/// set 4, D
pub fn opcode_cbe2(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::D, 4)
}

/// set 4, E
pub fn opcode_cbe3(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::E, 4)
}

/// set 4, H
pub fn opcode_cbe4(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::H, 4)
}

/// set 4, L
pub fn opcode_cbe5(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::L, 4)
}

/// set 4, (HL)
pub fn opcode_cbe6(cpu: &mut Cpu) -> InsnResult {
	set_memory_bit(cpu, 4)
}

/// set 4, A
pub fn opcode_cbe7(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::A, 4)
}

/// set 5, B
pub fn opcode_cbe8(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::B, 5)
}

/// set 5, C
pub fn opcode_cbe9(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::C, 5)
}

/// set 5, D
pub fn opcode_cbea(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::D, 5)
}

/// set 5, E
pub fn opcode_cbeb(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::E, 5)
}

/// set 5, H
pub fn opcode_cbec(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::H, 5)
}

/// set 5, L
pub fn opcode_cbed(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::L, 5)
}

/// set 5, (HL)
pub fn opcode_cbee(cpu: &mut Cpu) -> InsnResult {
	set_memory_bit(cpu, 5)
}

/// set 5, A
pub fn opcode_cbef(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::A, 5)
}

/// set 6, B
pub fn opcode_cbf0(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::B, 6)
}

/// set 6, C
pub fn opcode_cbf1(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::C, 6)
}

/// set 6, D
pub fn opcode_cbf2(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::D, 6)
}

/// set 6, E
pub fn opcode_cbf3(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::E, 6)
}

/// set 6, H
pub fn opcode_cbf4(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::H, 6)
}

/// set 6, L
pub fn opcode_cbf5(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::L, 6)
}

/// set 6, (HL)
pub fn opcode_cbf6(cpu: &mut Cpu) -> InsnResult {
	set_memory_bit(cpu, 6)
}

/// set 6, A
pub fn opcode_cbf7(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::A, 6)
}

/// set 7, B
pub fn opcode_cbf8(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::B, 7)
}

/// set 7, C
pub fn opcode_cbf9(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::C, 7)
}

/// set 7, D
pub fn opcode_cbfa(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::D, 7)
}

/// set 7, E
pub fn opcode_cbfb(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::E, 7)
}

/// set 7, H
pub fn opcode_cbfc(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::H, 7)
}

/// set 7, L
pub fn opcode_cbfd(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::L, 7)
}

/// set 7, (HL)
pub fn opcode_cbfe(cpu: &mut Cpu) -> InsnResult {
	set_memory_bit(cpu, 7)
}

/// set 7, A
pub fn opcode_cbff(cpu: &mut Cpu) -> InsnResult {
	set_register_bit(cpu, Register::A, 7)
}
