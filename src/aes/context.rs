// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Caller-owned operation state: nonce/counter and data ordering.

use super::regs::Cnt;

/// Byte order of each 32-bit word as the engine consumes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

/// Order in which the 4 words of a block are consumed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WordOrder {
    /// Last word first. This is the engine's native layout.
    Reversed,
    Normal,
}

/// How 32-bit words map onto the bytes of an AES block.
///
/// The engine reads each word most significant byte first and takes the words
/// of a block last to first. [`Endianness::Big`] swaps the bytes of each word,
/// [`WordOrder::Normal`] takes the words first to last. On a little-endian core
/// [`Order::BIG_NORMAL`] therefore passes memory bytes through unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Order {
    pub endianness: Endianness,
    pub word_order: WordOrder,
}

impl Order {
    pub const BIG_NORMAL: Order = Order::new(Endianness::Big, WordOrder::Normal);
    pub const BIG_REVERSED: Order = Order::new(Endianness::Big, WordOrder::Reversed);
    pub const LITTLE_NORMAL: Order = Order::new(Endianness::Little, WordOrder::Normal);
    pub const LITTLE_REVERSED: Order = Order::new(Endianness::Little, WordOrder::Reversed);

    pub const ALL: [Order; 4] = [
        Order::BIG_NORMAL,
        Order::BIG_REVERSED,
        Order::LITTLE_NORMAL,
        Order::LITTLE_REVERSED,
    ];

    pub const fn new(endianness: Endianness, word_order: WordOrder) -> Self {
        Self {
            endianness,
            word_order,
        }
    }

    /// Control bits selecting this order for data written to the engine. Also
    /// applies to key, counter and MAC register writes.
    pub fn input_bits(self) -> Cnt {
        let mut bits = Cnt::empty();
        bits.set(Cnt::INPUT_BIG, self.endianness == Endianness::Big);
        bits.set(Cnt::INPUT_NORMAL, self.word_order == WordOrder::Normal);
        bits
    }

    /// Control bits selecting this order for data read from the engine.
    pub fn output_bits(self) -> Cnt {
        let mut bits = Cnt::empty();
        bits.set(Cnt::OUTPUT_BIG, self.endianness == Endianness::Big);
        bits.set(Cnt::OUTPUT_NORMAL, self.word_order == WordOrder::Normal);
        bits
    }

    /// The AES block the engine sees when given `words` in this order.
    pub fn words_to_block(self, words: &[u32; 4]) -> [u8; 16] {
        let mut block = [0u8; 16];
        for (i, bytes) in block.chunks_exact_mut(4).enumerate() {
            let word = match self.word_order {
                WordOrder::Normal => words[i],
                WordOrder::Reversed => words[3 - i],
            };
            let word = match self.endianness {
                Endianness::Big => word.swap_bytes(),
                Endianness::Little => word,
            };
            bytes.copy_from_slice(&word.to_be_bytes());
        }
        block
    }

    /// The words that make the engine see `block` in this order.
    pub fn block_to_words(self, block: &[u8; 16]) -> [u32; 4] {
        let mut words = [0u32; 4];
        for (i, bytes) in block.chunks_exact(4).enumerate() {
            let mut word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            if self.endianness == Endianness::Big {
                word = word.swap_bytes();
            }
            match self.word_order {
                WordOrder::Normal => words[i] = word,
                WordOrder::Reversed => words[3 - i] = word,
            }
        }
        words
    }

    /// Register arrays hold the least significant word at index 0, so words in
    /// normal order go in back to front.
    pub(crate) fn register_index(self, word: usize) -> usize {
        match self.word_order {
            WordOrder::Normal => 3 - word,
            WordOrder::Reversed => word,
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::BIG_NORMAL
    }
}

/// Data ordering for the input and output streams.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CryptParams {
    pub input: Order,
    pub output: Order,
}

impl CryptParams {
    pub fn bits(self) -> Cnt {
        self.input.input_bits() | self.output.output_bits()
    }
}

/// Per-operation state owned by the caller.
///
/// Holds either a CCM nonce or a CTR/CBC counter in the same field. Set the
/// one the next operation needs; nothing checks which was set last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AesContext {
    ctr_iv_nonce_params: Order,
    ctr_iv_nonce: [u32; 4],
    aes_params: CryptParams,
}

impl AesContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a 96-bit CCM nonce. It becomes the low 96 bits of the counter
    /// field, the top word is zero.
    pub fn set_nonce(&mut self, order: Order, nonce: &[u32; 3]) {
        self.ctr_iv_nonce_params = order;
        self.ctr_iv_nonce = match order.word_order {
            WordOrder::Normal => [0, nonce[0], nonce[1], nonce[2]],
            WordOrder::Reversed => [nonce[0], nonce[1], nonce[2], 0],
        };
    }

    /// Stores a 128-bit CTR counter or CBC IV.
    pub fn set_ctr_iv(&mut self, order: Order, ctr_iv: &[u32; 4]) {
        self.ctr_iv_nonce_params = order;
        self.ctr_iv_nonce = *ctr_iv;
    }

    pub fn set_crypt_params(&mut self, input: Order, output: Order) {
        self.aes_params = CryptParams { input, output };
    }

    pub fn ctr_iv_nonce(&self) -> &[u32; 4] {
        &self.ctr_iv_nonce
    }

    pub fn ctr_iv_nonce_params(&self) -> Order {
        self.ctr_iv_nonce_params
    }

    pub fn crypt_params(&self) -> CryptParams {
        self.aes_params
    }

    /// Steps the stored counter past `blocks` blocks, with the counter read in
    /// the order it was stored with.
    pub fn advance_counter(&mut self, blocks: u32) {
        let order = self.ctr_iv_nonce_params;
        let counter = u128::from_be_bytes(order.words_to_block(&self.ctr_iv_nonce));
        let counter = counter.wrapping_add(u128::from(blocks));
        self.ctr_iv_nonce = order.block_to_words(&counter.to_be_bytes());
    }
}

/// Adds `val` to a 128-bit counter kept in the engine's native word order
/// (word 0 least significant), wrapping at 2^128.
pub fn add_counter(ctr: &mut [u32; 4], val: u32) {
    let mut carry = u64::from(val);
    for word in ctr.iter_mut() {
        if carry == 0 {
            break;
        }
        let sum = u64::from(*word) + carry;
        *word = sum as u32;
        carry = sum >> 32;
    }
}
