// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AES engine register map.

use {
    crate::csr::{Field, Register},
    bitflags::bitflags,
};

pub const AES_BASE: usize = 0x1000_9000;

pub const CNT: Register = Register::new(0x000);
/// CCM associated data length in blocks.
pub const MACBLKCNT: Register = Register::new16(0x004);
pub const BLKCNT: Register = Register::new16(0x006);
pub const WRFIFO: Register = Register::new(0x008);
pub const RDFIFO: Register = Register::new(0x00C);
pub const KEYSEL: Register = Register::new8(0x010);
pub const KEYCNT: Register = Register::new8(0x011);
/// Counter/IV/nonce, 4 words. Word 0 is the least significant.
pub const CTR: Register = Register::new(0x020);
/// CCM MAC, 4 words. Word 0 is the least significant.
pub const MAC: Register = Register::new(0x030);
/// Register banks of the legacy keyslots 0-3.
pub const TWL_KEY: Register = Register::new(0x040);
/// Key FIFOs for keyslots 4 and up, one per key type.
pub const KEYFIFO: Register = Register::new(0x100);

pub const TWL_KEYSLOT_STRIDE: usize = 0x30;
pub const TWL_KEY_TYPE_STRIDE: usize = 0x10;

pub const CNT_WRFIFO_COUNT: Field = Field::new(5, 0, CNT);
pub const CNT_RDFIFO_COUNT: Field = Field::new(5, 5, CNT);
pub const CNT_WRFIFO_DMA_SIZE: Field = Field::new(2, 12, CNT);
pub const CNT_RDFIFO_DMA_SIZE: Field = Field::new(2, 14, CNT);
pub const CNT_MAC_SIZE: Field = Field::new(3, 16, CNT);
pub const CNT_MODE: Field = Field::new(3, 27, CNT);

/// Depth of each data FIFO in words.
pub const FIFO_WORDS: usize = 16;

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Cnt: u32 {
        const FLUSH_READ_FIFO  = 1 << 10;
        const FLUSH_WRITE_FIFO = 1 << 11;
        /// Copy CCM associated data to the read FIFO as well.
        const PASS_PAYLOAD     = 1 << 19;
        /// Take the expected CCM MAC from the MAC registers instead of the write FIFO.
        const MAC_SRC_REG      = 1 << 20;
        /// Read only. Set when a CCM decryption authenticated.
        const MAC_VALID        = 1 << 21;
        const OUTPUT_BIG       = 1 << 22;
        const INPUT_BIG        = 1 << 23;
        const OUTPUT_NORMAL    = 1 << 24;
        const INPUT_NORMAL     = 1 << 25;
        /// Latch `KEYSEL` as the keyslot for the following operations.
        const UPDATE_KEYSLOT   = 1 << 26;
        const IRQ_ENABLE       = 1 << 30;
        /// Starts an operation when written, reads as busy.
        const ENABLE           = 1 << 31;

        const _ = !0;
    }
}

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct KeyCnt: u8 {
        /// Derive keys with the legacy scrambler instead of the native one.
        const TWL_SCRAMBLER = 1 << 6;
        const FLUSH_KEY_FIFO = 1 << 7;
    }
}

pub const KEYCNT_KEYSLOT_MASK: u8 = 0x3F;

/// Values of [`CNT_MODE`]. CBC encryption (5) exists in hardware but is not
/// offered by this driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u32)]
pub enum Mode {
    CcmDecrypt = 0,
    CcmEncrypt = 1,
    Ctr = 2,
    CbcDecrypt = 4,
    EcbDecrypt = 6,
    EcbEncrypt = 7,
}
