// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AES engine driver.
//!
//! The engine keeps 64 keyslots of 128-bit keys, runs ECB, CTR, CBC decryption
//! and CCM over up to [`MAX_BLOCKS`] blocks per operation, and is fed either by
//! the CPU through its FIFOs or by two DMA channels.
//!
//! ```ignore
//! let mut aes = Aes::new(unsafe { Mmio::new(AES_BASE) }, dma, NoCache);
//! aes.init(&mut pmc);
//! aes.set_key(slot, KeyType::Normal, Order::BIG_NORMAL, false, &key)?;
//!
//! let mut ctx = AesContext::new();
//! ctx.set_ctr_iv(Order::BIG_NORMAL, &iv);
//! aes.select_keyslot(slot)?
//!     .ctr(&ctx, CryptoBuffers::new_in_place(&mut data), true)?;
//! ```

mod context;
mod keyslot;
mod modes;
pub mod regs;
mod transfer;


pub use {
    context::{add_counter, AesContext, CryptParams, Endianness, Order, WordOrder},
    keyslot::{ActiveKeyslot, KeyType, Keyslot},
    modes::Operation,
    transfer::{CryptoBuffers, DmaTransfer},
};

use {
    crate::{
        cache::CacheMaintenance,
        csr::{Bus, Csr},
        dma::{Dma, DmaChannel, DmaChunkSize, DmaError, DmaPeripheralId, DmaTransferDirection},
        pmc::{PeripheralClock, PeripheralId},
    },
    core::fmt,
    regs::*,
};

/// Largest block count of one hardware operation. Kept even so DMA can always
/// move 32-byte bursts.
pub const MAX_BLOCKS: usize = 0xFFFE;

pub const BLOCK_WORDS: usize = 4;

/// Memory to write FIFO.
pub const AES_TX_DMA_CHANNEL: DmaChannel = DmaChannel::Channel0;
/// Read FIFO to memory.
pub const AES_RX_DMA_CHANNEL: DmaChannel = DmaChannel::Channel1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The engine has not been brought up, or was shut down with [`Aes::deinit`].
    NotInitialized,
    InvalidKeyslot(u8),
    /// Input and output buffers have different lengths.
    BufferLengthMismatch,
    /// The length in words is not a whole number of blocks.
    UnalignedLength(usize),
    NoBlocks,
    TooManyBlocks(usize),
    InvalidMacSize(u32),
    UnsupportedMode,
    Dma(DmaError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInitialized => f.write_str("AES engine is not initialized"),
            Error::InvalidKeyslot(slot) => write!(f, "keyslot {slot:#04x} does not exist"),
            Error::BufferLengthMismatch => f.write_str("input and output lengths differ"),
            Error::UnalignedLength(words) => {
                write!(f, "{words} words is not a multiple of the AES block size")
            }
            Error::NoBlocks => f.write_str("nothing to process"),
            Error::TooManyBlocks(blocks) => {
                write!(f, "{blocks} blocks exceeds the limit of {MAX_BLOCKS}")
            }
            Error::InvalidMacSize(size) => write!(f, "invalid CCM MAC size {size}"),
            Error::UnsupportedMode => f.write_str("mode is not supported"),
            Error::Dma(err) => write!(f, "DMA failed: {err}"),
        }
    }
}

impl From<DmaError> for Error {
    fn from(err: DmaError) -> Self {
        Error::Dma(err)
    }
}

pub struct Aes<B, D, C> {
    csr: Csr<B>,
    dma: D,
    cache: C,
    initialized: bool,
    selected: Option<Keyslot>,
}

impl<B: Bus, D: Dma, C: CacheMaintenance> Aes<B, D, C> {
    pub fn new(bus: B, dma: D, cache: C) -> Self {
        Self {
            csr: Csr::new(bus),
            dma,
            cache,
            initialized: false,
            selected: None,
        }
    }

    /// Hands back the register window and the collaborators.
    pub fn free(self) -> (B, D, C) {
        (self.csr.free(), self.dma, self.cache)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The keyslot latched by the last [`Aes::select_keyslot`].
    pub fn selected_keyslot(&self) -> Option<Keyslot> {
        self.selected
    }

    /// Brings up the engine and the DMA channels it uses.
    pub fn init(&mut self, clocks: &mut impl PeripheralClock) {
        if self.initialized {
            warn!("AES engine initialized twice");
        }

        clocks.enable_peripheral_clock(PeripheralId::Dma);
        clocks.enable_peripheral_clock(PeripheralId::Aes);

        // Stopped, interrupts masked, both FIFOs empty.
        self.csr
            .wo(CNT, (Cnt::FLUSH_READ_FIFO | Cnt::FLUSH_WRITE_FIFO).bits());
        self.csr.wo(MACBLKCNT, 0);
        self.csr.wo(BLKCNT, 0);

        self.dma.configure_peripheral_transfer(
            AES_TX_DMA_CHANNEL,
            DmaPeripheralId::AesIn,
            DmaTransferDirection::MemoryToPeripheral,
            DmaChunkSize::C8,
        );
        self.dma.configure_peripheral_transfer(
            AES_RX_DMA_CHANNEL,
            DmaPeripheralId::AesOut,
            DmaTransferDirection::PeripheralToMemory,
            DmaChunkSize::C8,
        );

        self.initialized = true;
        self.selected = None;
        debug!("AES engine up");
    }

    /// Shuts the engine down ahead of a power state change. The engine can
    /// wedge across the transition if it is left configured.
    pub fn deinit(&mut self, clocks: &mut impl PeripheralClock) {
        self.dma.stop(AES_TX_DMA_CHANNEL);
        self.dma.stop(AES_RX_DMA_CHANNEL);

        self.csr
            .wo(CNT, (Cnt::FLUSH_READ_FIFO | Cnt::FLUSH_WRITE_FIFO).bits());
        self.csr.wo(CNT, 0);
        self.csr.wo(KEYCNT, 0);

        clocks.disable_peripheral_clock(PeripheralId::Aes);

        self.initialized = false;
        self.selected = None;
        debug!("AES engine down");
    }

    fn ensure_initialized(&self) -> Result<(), Error> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }
}
