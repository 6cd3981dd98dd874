// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Peripheral clock gating.

/// Peripherals the AES driver brings up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PeripheralId {
    Aes = 0,
    Dma = 1,
}

/// The SoC's power management controller, as far as the drivers in this crate
/// are concerned.
pub trait PeripheralClock {
    fn enable_peripheral_clock(&mut self, id: PeripheralId);
    fn disable_peripheral_clock(&mut self, id: PeripheralId);
}
