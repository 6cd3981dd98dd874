// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Register access.
//!
//! Registers and fields are described by `const` values and accessed through a
//! [`Csr`] wrapper, so drivers read like `csr.wo(CNT, value)` or
//! `csr.rf(CNT_RDFIFO_COUNT)`. The actual bus cycles go through the [`Bus`]
//! trait, which lets the same driver run against memory-mapped hardware
//! ([`Mmio`]) or a model of it.

/// Raw access to a block of peripheral registers. Offsets are in bytes from the
/// start of the block.
pub trait Bus {
    fn read32(&self, offset: usize) -> u32;
    fn write32(&mut self, offset: usize, value: u32);
    fn write16(&mut self, offset: usize, value: u16);
    fn write8(&mut self, offset: usize, value: u8);

    /// Bus address of a register, as seen by a DMA controller.
    fn address(&self, offset: usize) -> usize;
}

/// Volatile accesses to a memory-mapped register window.
#[derive(Debug)]
pub struct Mmio {
    base_addr: usize,
}

impl Mmio {
    /// # Safety
    ///
    /// `base_addr` must point at the register window of the peripheral and no
    /// other `Mmio` may be driving the same window.
    pub const unsafe fn new(base_addr: usize) -> Self {
        Self { base_addr }
    }

    fn ptr<T>(&self, offset: usize) -> *mut T {
        (self.base_addr + offset) as *mut T
    }
}

impl Bus for Mmio {
    fn read32(&self, offset: usize) -> u32 {
        unsafe { self.ptr::<u32>(offset).read_volatile() }
    }

    fn write32(&mut self, offset: usize, value: u32) {
        unsafe { self.ptr::<u32>(offset).write_volatile(value) }
    }

    fn write16(&mut self, offset: usize, value: u16) {
        unsafe { self.ptr::<u16>(offset).write_volatile(value) }
    }

    fn write8(&mut self, offset: usize, value: u8) {
        unsafe { self.ptr::<u8>(offset).write_volatile(value) }
    }

    fn address(&self, offset: usize) -> usize {
        self.base_addr + offset
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Width {
    W8,
    W16,
    W32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Register {
    offset: usize,
    width: Width,
}

impl Register {
    pub const fn new(offset: usize) -> Self {
        Self {
            offset,
            width: Width::W32,
        }
    }

    pub const fn new16(offset: usize) -> Self {
        Self {
            offset,
            width: Width::W16,
        }
    }

    pub const fn new8(offset: usize) -> Self {
        Self {
            offset,
            width: Width::W8,
        }
    }

    /// The register `index` words after this one. Used for register arrays.
    pub const fn at(self, index: usize) -> Self {
        Self {
            offset: self.offset + index * 4,
            width: self.width,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// A bit field inside a 32-bit register.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Field {
    width: u32,
    shift: u32,
    register: Register,
}

impl Field {
    pub const fn new(width: u32, shift: u32, register: Register) -> Self {
        Self {
            width,
            shift,
            register,
        }
    }

    const fn mask(&self) -> u32 {
        (((1u64 << self.width) - 1) as u32) << self.shift
    }
}

pub struct Csr<B> {
    bus: B,
}

impl<B: Bus> Csr<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn free(self) -> B {
        self.bus
    }

    /// Reads a whole 32-bit register.
    pub fn r(&self, reg: Register) -> u32 {
        debug_assert_eq!(reg.width, Width::W32);
        self.bus.read32(reg.offset)
    }

    /// Writes a whole register. Narrow registers take the low bits of `value`.
    pub fn wo(&mut self, reg: Register, value: u32) {
        match reg.width {
            Width::W32 => self.bus.write32(reg.offset, value),
            Width::W16 => self.bus.write16(reg.offset, value as u16),
            Width::W8 => self.bus.write8(reg.offset, value as u8),
        }
    }

    /// Reads a field, shifted down to bit 0.
    pub fn rf(&self, field: Field) -> u32 {
        (self.r(field.register) & field.mask()) >> field.shift
    }

    /// Masks and shifts `value` into position for `field` without touching the
    /// hardware. Combine the results and write them with [`Csr::wo`].
    pub fn ms(&self, field: Field, value: u32) -> u32 {
        (value << field.shift) & field.mask()
    }

    pub fn address(&self, reg: Register) -> usize {
        self.bus.address(reg.offset)
    }
}
