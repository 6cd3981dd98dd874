// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! DMA controller interface.
//!
//! The AES driver does not own the DMA controller. It only needs to point two
//! channels at its FIFOs, start them and wait for them, which is what [`Dma`]
//! describes. Addresses are bus addresses and lengths are in 32-bit words.

use core::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DmaChannel {
    Channel0 = 0,
    Channel1 = 1,
    Channel2 = 2,
    Channel3 = 3,
    Channel4 = 4,
    Channel5 = 5,
    Channel6 = 6,
    Channel7 = 7,
}

/// Hardware request line that paces a peripheral transfer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DmaPeripheralId {
    /// AES input FIFO has room.
    AesIn,
    /// AES output FIFO has data.
    AesOut,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DmaTransferDirection {
    MemoryToPeripheral,
    PeripheralToMemory,
}

/// Number of words moved per peripheral request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DmaChunkSize {
    C1 = 1,
    C2 = 2,
    C4 = 4,
    C8 = 8,
    C16 = 16,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DmaError {
    /// The channel was started without being configured first.
    NotConfigured(DmaChannel),
    /// The channel is still running a previous transfer.
    Busy(DmaChannel),
}

impl fmt::Display for DmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DmaError::NotConfigured(ch) => write!(f, "DMA channel {} is not configured", *ch as u8),
            DmaError::Busy(ch) => write!(f, "DMA channel {} is busy", *ch as u8),
        }
    }
}

pub trait Dma {
    /// Sets up `channel` for transfers paced by `peripheral`. The configuration
    /// sticks until the channel is configured again.
    fn configure_peripheral_transfer(
        &mut self,
        channel: DmaChannel,
        peripheral: DmaPeripheralId,
        direction: DmaTransferDirection,
        chunk_size: DmaChunkSize,
    );

    /// Arms `channel` to move `words` words from `src` to `dst` and returns
    /// without waiting. The fixed (peripheral) side does not increment.
    fn start_transfer(
        &mut self,
        channel: DmaChannel,
        src: usize,
        dst: usize,
        words: usize,
    ) -> Result<(), DmaError>;

    /// Blocks until `channel` has moved every word it was armed with.
    fn wait_transfer(&mut self, channel: DmaChannel);

    /// Disables `channel`, dropping whatever it had left to move.
    fn stop(&mut self, channel: DmaChannel);
}
