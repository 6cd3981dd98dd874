// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyslot programming and selection.

use {
    super::{regs::*, Aes, Error, Order},
    crate::{
        cache::CacheMaintenance,
        csr::{Bus, Register},
        dma::Dma,
    },
};

/// Index of a hardware keyslot, `0x00..=0x3F`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Keyslot(u8);

impl Keyslot {
    pub const COUNT: u8 = 0x40;

    /// Highest of the legacy keyslots, which sit in directly addressed
    /// registers instead of behind the key FIFOs.
    pub const LAST_TWL: u8 = 0x03;

    pub const fn new(index: u8) -> Result<Self, Error> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(Error::InvalidKeyslot(index))
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn is_twl(self) -> bool {
        self.0 <= Self::LAST_TWL
    }
}

impl TryFrom<u8> for Keyslot {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

/// Writing a [`KeyType::Y`] key makes the engine derive the normal key of the
/// slot from its X and Y keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyType {
    Normal = 0,
    X = 1,
    Y = 2,
}

impl<B: Bus, D: Dma, C: CacheMaintenance> Aes<B, D, C> {
    /// Loads a key into `keyslot`.
    ///
    /// `twl_scrambler` picks the legacy key scrambler for slots above 3. The
    /// legacy slots always use it, so the flag is ignored for them.
    pub fn set_key(
        &mut self,
        keyslot: Keyslot,
        key_type: KeyType,
        order: Order,
        twl_scrambler: bool,
        key: &[u32; 4],
    ) -> Result<(), Error> {
        self.ensure_initialized()?;

        self.csr.wo(CNT, order.input_bits().bits());

        if keyslot.is_twl() {
            let bank = TWL_KEY.offset()
                + usize::from(keyslot.index()) * TWL_KEYSLOT_STRIDE
                + key_type as usize * TWL_KEY_TYPE_STRIDE;
            for (i, &word) in key.iter().enumerate() {
                let reg = Register::new(bank).at(order.register_index(i));
                self.csr.wo(reg, word);
            }
        } else {
            let mut keycnt = KeyCnt::FLUSH_KEY_FIFO;
            keycnt.set(KeyCnt::TWL_SCRAMBLER, twl_scrambler);
            self.csr.wo(
                KEYCNT,
                u32::from(keycnt.bits() | (keyslot.index() & KEYCNT_KEYSLOT_MASK)),
            );

            let fifo = KEYFIFO.at(key_type as usize);
            for &word in key {
                self.csr.wo(fifo, word);
            }
        }

        trace!("key {:?} loaded into keyslot {:#04x}", key_type, keyslot.index());
        Ok(())
    }

    /// Latches `keyslot` for the following operations. The returned token is
    /// the only way to run one, and it keeps the engine borrowed so the slot
    /// cannot change underneath it.
    pub fn select_keyslot(
        &mut self,
        keyslot: Keyslot,
    ) -> Result<ActiveKeyslot<'_, B, D, C>, Error> {
        self.ensure_initialized()?;

        self.csr.wo(KEYSEL, u32::from(keyslot.index()));
        self.csr.wo(CNT, Cnt::UPDATE_KEYSLOT.bits());
        self.selected = Some(keyslot);

        debug!("selected keyslot {:#04x}", keyslot.index());
        Ok(ActiveKeyslot { aes: self, keyslot })
    }
}

/// A selected keyslot. Crypto operations are methods on this type.
pub struct ActiveKeyslot<'a, B, D, C> {
    pub(super) aes: &'a mut Aes<B, D, C>,
    keyslot: Keyslot,
}

impl<B, D, C> ActiveKeyslot<'_, B, D, C> {
    pub fn keyslot(&self) -> Keyslot {
        self.keyslot
    }
}
