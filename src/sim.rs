// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host model of the AES engine and its surroundings, for tests.
//!
//! The model sits behind the same seams the driver talks to on hardware: a
//! [`Bus`] for the register window, a [`Dma`] that really moves words between
//! host memory and the FIFOs, a cache that logs maintenance calls and a clock
//! controller that logs gating. Blocks are processed as soon as a full one sits
//! in the write FIFO and the read FIFO has room for the result.

use {
    crate::{
        aes::{regs::*, Aes, Order, AES_RX_DMA_CHANNEL},
        cache::CacheMaintenance,
        csr::Bus,
        dma::{Dma, DmaChannel, DmaChunkSize, DmaError, DmaPeripheralId, DmaTransferDirection},
        pmc::{PeripheralClock, PeripheralId},
    },
    ::aes::{
        cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit},
        Aes128,
    },
    std::{cell::RefCell, collections::VecDeque, rc::Rc},
};

const KEY_SCRAMBLER_3DS: u128 = 0x1FF9E9AAC5FE0408024591DC5D52768A;
const KEY_SCRAMBLER_TWL: u128 = 0xFFFEFB4E295902582A680F5F1A4F3E79;

/// Normal key derived from X and Y by the native scrambler.
pub fn scramble_3ds(x: [u8; 16], y: [u8; 16]) -> [u8; 16] {
    let (x, y) = (u128::from_be_bytes(x), u128::from_be_bytes(y));
    ((x.rotate_left(2) ^ y).wrapping_add(KEY_SCRAMBLER_3DS))
        .rotate_right(41)
        .to_be_bytes()
}

/// Normal key derived from X and Y by the legacy scrambler, which works on
/// little-endian keys.
pub fn scramble_twl(x: [u8; 16], y: [u8; 16]) -> [u8; 16] {
    let (x, y) = (u128::from_le_bytes(x), u128::from_le_bytes(y));
    ((x ^ y).wrapping_add(KEY_SCRAMBLER_TWL))
        .rotate_left(42)
        .to_le_bytes()
}

pub fn encrypt_block(key: &[u8; 16], block: [u8; 16]) -> [u8; 16] {
    let mut block = GenericArray::from(block);
    Aes128::new(GenericArray::from_slice(key)).encrypt_block(&mut block);
    block.into()
}

fn xor(a: [u8; 16], b: [u8; 16]) -> [u8; 16] {
    core::array::from_fn(|i| a[i] ^ b[i])
}

/// A 4-word register array as the block it holds. Word 0 is the least
/// significant.
fn regs_to_block(regs: &[u32; 4]) -> [u8; 16] {
    let mut block = [0u8; 16];
    for (i, bytes) in block.chunks_exact_mut(4).enumerate() {
        bytes.copy_from_slice(&regs[3 - i].to_be_bytes());
    }
    block
}

fn block_to_regs(block: &[u8; 16]) -> [u32; 4] {
    core::array::from_fn(|i| {
        let at = 12 - 4 * i;
        u32::from_be_bytes([block[at], block[at + 1], block[at + 2], block[at + 3]])
    })
}

fn input_order(cnt: Cnt) -> Order {
    Order::ALL
        .into_iter()
        .find(|order| order.input_bits() == cnt & (Cnt::INPUT_BIG | Cnt::INPUT_NORMAL))
        .unwrap_or_default()
}

fn output_order(cnt: Cnt) -> Order {
    Order::ALL
        .into_iter()
        .find(|order| order.output_bits() == cnt & (Cnt::OUTPUT_BIG | Cnt::OUTPUT_NORMAL))
        .unwrap_or_default()
}

/// The associated data as the CBC-MAC consumes it: length prefixed and zero
/// padded to whole blocks.
fn format_associated_data(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    if data.len() < 0xFF00 {
        out.extend_from_slice(&(data.len() as u16).to_be_bytes());
    } else {
        out.extend_from_slice(&[0xFF, 0xFE]);
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    }
    out.extend_from_slice(data);
    out.resize(out.len().div_ceil(16) * 16, 0);
    out
}

#[derive(Debug, Default, Copy, Clone)]
struct Slot {
    normal: [u8; 16],
    x: [u8; 16],
    y: [u8; 16],
}

struct Ccm {
    nonce: [u8; 12],
    mac_size: usize,
    mac: [u8; 16],
    associated_data: Vec<u8>,
}

impl Ccm {
    fn counter_block(&self, index: u32) -> [u8; 16] {
        let mut block = [0u8; 16];
        block[0] = 2;
        block[1..13].copy_from_slice(&self.nonce);
        block[13..].copy_from_slice(&index.to_be_bytes()[1..]);
        block
    }
}

struct Operation {
    mode: u32,
    key: [u8; 16],
    input: Order,
    output: Order,
    associated_left: usize,
    blocks: usize,
    blocks_left: usize,
    /// Counter for CTR, previous ciphertext block for CBC.
    chain: [u8; 16],
    ccm: Option<Ccm>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    Clean { start: usize, length: usize },
    /// `rx_words` is how many words the read channel had moved when the
    /// invalidate happened.
    Invalidate {
        start: usize,
        length: usize,
        rx_words: usize,
    },
}

struct Transfer {
    src: usize,
    dst: usize,
    words: usize,
    moved: usize,
}

#[derive(Default)]
struct DmaState {
    configured: [Option<(DmaPeripheralId, DmaTransferDirection, DmaChunkSize)>; 8],
    transfers: [Option<Transfer>; 8],
    rx_words: usize,
}

pub struct Engine {
    cnt: u32,
    mac_valid: bool,
    blkcnt: u16,
    macblkcnt: u16,
    keysel: u8,
    keycnt: u8,
    ctr: [u32; 4],
    mac: [u32; 4],
    twl_banks: [[[u32; 4]; 3]; 4],
    key_fifos: [Vec<u32>; 3],
    slots: [Slot; 64],
    key: [u8; 16],
    wrfifo: VecDeque<u32>,
    rdfifo: VecDeque<u32>,
    op: Option<Operation>,
    dma: DmaState,

    /// Every CNT write that started an operation.
    pub starts: Vec<u32>,
    pub cache_events: Vec<CacheEvent>,
    pub clock_events: Vec<(PeripheralId, bool)>,
    pub dma_starts: Vec<(DmaChannel, DmaChunkSize)>,
    pub dma_stops: Vec<DmaChannel>,
    pub fail_next_dma_start: Option<DmaError>,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            cnt: 0,
            mac_valid: false,
            blkcnt: 0,
            macblkcnt: 0,
            keysel: 0,
            keycnt: 0,
            ctr: [0; 4],
            mac: [0; 4],
            twl_banks: [[[0; 4]; 3]; 4],
            key_fifos: Default::default(),
            slots: [Slot::default(); 64],
            key: [0; 16],
            wrfifo: VecDeque::new(),
            rdfifo: VecDeque::new(),
            op: None,
            dma: DmaState::default(),
            starts: Vec::new(),
            cache_events: Vec::new(),
            clock_events: Vec::new(),
            dma_starts: Vec::new(),
            dma_stops: Vec::new(),
            fail_next_dma_start: None,
        }
    }
}

impl Engine {
    /// Normal key currently held by `slot`.
    pub fn slot_key(&self, slot: u8) -> [u8; 16] {
        self.slots[usize::from(slot)].normal
    }

    /// Leaves junk in both FIFOs, as an aborted operation would.
    pub fn inject_stale(&mut self, words: &[u32]) {
        self.wrfifo.extend(words);
        self.rdfifo.extend(words);
    }

    pub fn busy(&self) -> bool {
        self.op.is_some()
    }

    fn read_cnt(&self) -> u32 {
        let mut cnt = self.cnt & !(Cnt::ENABLE | Cnt::MAC_VALID).bits();
        cnt |= self.wrfifo.len() as u32;
        cnt |= (self.rdfifo.len() as u32) << 5;
        if self.mac_valid {
            cnt |= Cnt::MAC_VALID.bits();
        }
        if self.busy() {
            cnt |= Cnt::ENABLE.bits();
        }
        cnt
    }

    fn write_cnt(&mut self, value: u32) {
        let bits = Cnt::from_bits_retain(value);
        if bits.contains(Cnt::FLUSH_READ_FIFO) {
            self.rdfifo.clear();
        }
        if bits.contains(Cnt::FLUSH_WRITE_FIFO) {
            self.wrfifo.clear();
        }
        if bits.contains(Cnt::UPDATE_KEYSLOT) {
            self.key = self.slots[usize::from(self.keysel & KEYCNT_KEYSLOT_MASK)].normal;
        }

        self.cnt = value
            & !(Cnt::FLUSH_READ_FIFO | Cnt::FLUSH_WRITE_FIFO | Cnt::UPDATE_KEYSLOT | Cnt::MAC_VALID)
                .bits()
            & !0x3FF;

        if bits.contains(Cnt::ENABLE) {
            self.starts.push(value);
            self.start(bits);
        } else {
            self.op = None;
        }
    }

    fn start(&mut self, cnt: Cnt) {
        let mode = (cnt.bits() >> 27) & 7;
        let mac_size = ((cnt.bits() >> 16) & 7) as usize * 2 + 2;
        let blocks = usize::from(self.blkcnt);
        let ctr = regs_to_block(&self.ctr);

        let ccm = (mode <= 1).then(|| {
            assert!(
                mode == 1 || cnt.contains(Cnt::MAC_SRC_REG),
                "MAC from FIFO is not modelled"
            );
            assert!(
                !cnt.contains(Cnt::PASS_PAYLOAD),
                "associated data pass-through is not modelled"
            );
            let mut nonce = [0u8; 12];
            nonce.copy_from_slice(&ctr[4..]);
            Ccm {
                nonce,
                mac_size,
                mac: [0; 16],
                associated_data: Vec::new(),
            }
        });

        self.mac_valid = false;
        self.op = Some(Operation {
            mode,
            key: self.key,
            input: input_order(cnt),
            output: output_order(cnt),
            associated_left: if ccm.is_some() {
                usize::from(self.macblkcnt)
            } else {
                0
            },
            blocks,
            blocks_left: blocks,
            chain: ctr,
            ccm,
        });

        if let Some(op) = self.op.as_mut() {
            if op.associated_left == 0 {
                if let Some(ccm) = op.ccm.as_mut() {
                    ccm_begin(op.key, ccm, blocks);
                }
            }
        }
        self.process();
    }

    fn process(&mut self) {
        while self.wrfifo.len() >= 4 && self.rdfifo.len() <= FIFO_WORDS - 4 {
            let Some(op) = self.op.as_mut() else {
                return;
            };
            let words: [u32; 4] =
                core::array::from_fn(|_| self.wrfifo.pop_front().unwrap_or(0));
            let block = op.input.words_to_block(&words);

            if op.associated_left > 0 {
                op.associated_left -= 1;
                if let Some(ccm) = op.ccm.as_mut() {
                    ccm.associated_data.extend_from_slice(&block);
                    if op.associated_left == 0 {
                        ccm_begin(op.key, ccm, op.blocks);
                    }
                }
                continue;
            }

            let out = op.transform(block);
            self.rdfifo.extend(op.output.block_to_words(&out));
            op.blocks_left -= 1;

            if op.blocks_left == 0 {
                if let Some(ccm) = op.ccm.as_ref() {
                    let tag = ccm_tag(op.key, ccm);
                    if op.mode == 1 {
                        self.mac = block_to_regs(&tag);
                    } else {
                        self.mac_valid = tag == regs_to_block(&self.mac);
                    }
                }
                self.op = None;
            }
        }
    }

    fn write_reg_array(&mut self, offset: usize, value: u32) {
        let value = if Cnt::from_bits_retain(self.cnt).contains(Cnt::INPUT_BIG) {
            value.swap_bytes()
        } else {
            value
        };
        let word = (offset % 0x10) / 4;

        match offset {
            0x020..=0x02F => self.ctr[word] = value,
            0x030..=0x03F => self.mac[word] = value,
            0x040..=0x0FF => {
                let bank = offset - TWL_KEY.offset();
                let slot = bank / TWL_KEYSLOT_STRIDE;
                let key_type = (bank % TWL_KEYSLOT_STRIDE) / TWL_KEY_TYPE_STRIDE;
                self.twl_banks[slot][key_type][word] = value;

                let key = regs_to_block(&self.twl_banks[slot][key_type]);
                let slot = &mut self.slots[slot];
                match key_type {
                    0 => slot.normal = key,
                    1 => slot.x = key,
                    _ => {
                        slot.y = key;
                        slot.normal = scramble_twl(slot.x, slot.y);
                    }
                }
            }
            _ => panic!("write to unmapped register {offset:#x}"),
        }
    }

    fn write_key_fifo(&mut self, key_type: usize, value: u32) {
        let fifo = &mut self.key_fifos[key_type];
        fifo.push(value);
        if fifo.len() < 4 {
            return;
        }

        let words = [fifo[0], fifo[1], fifo[2], fifo[3]];
        fifo.clear();
        let key = input_order(Cnt::from_bits_retain(self.cnt)).words_to_block(&words);
        let twl = KeyCnt::from_bits_retain(self.keycnt).contains(KeyCnt::TWL_SCRAMBLER);
        let slot = &mut self.slots[usize::from(self.keycnt & KEYCNT_KEYSLOT_MASK)];
        match key_type {
            0 => slot.normal = key,
            1 => slot.x = key,
            _ => {
                slot.y = key;
                slot.normal = if twl {
                    scramble_twl(slot.x, slot.y)
                } else {
                    scramble_3ds(slot.x, slot.y)
                };
            }
        }
    }

    fn push_wrfifo(&mut self, value: u32) {
        assert!(self.wrfifo.len() < FIFO_WORDS, "write FIFO overflow");
        self.wrfifo.push_back(value);
        self.process();
    }

    fn pop_rdfifo(&mut self) -> u32 {
        let Some(value) = self.rdfifo.pop_front() else {
            panic!("read from empty read FIFO");
        };
        self.process();
        value
    }

    /// Moves words for every running channel until `channel` is done.
    fn run_dma(&mut self, channel: DmaChannel) {
        let wrfifo = SimBus::BASE + WRFIFO.offset();
        let rdfifo = SimBus::BASE + RDFIFO.offset();

        loop {
            match &self.dma.transfers[channel as usize] {
                Some(transfer) if transfer.moved < transfer.words => {}
                _ => return,
            }

            let mut progress = false;
            for index in 0..self.dma.transfers.len() {
                let Some(mut transfer) = self.dma.transfers[index].take() else {
                    continue;
                };
                while transfer.moved < transfer.words {
                    if transfer.dst == wrfifo && self.wrfifo.len() < FIFO_WORDS {
                        let src = transfer.src as *const u32;
                        let word = unsafe { src.add(transfer.moved).read() };
                        self.push_wrfifo(word);
                    } else if transfer.src == rdfifo && !self.rdfifo.is_empty() {
                        let word = self.pop_rdfifo();
                        unsafe { (transfer.dst as *mut u32).add(transfer.moved).write(word) };
                        self.dma.rx_words += 1;
                    } else {
                        break;
                    }
                    transfer.moved += 1;
                    progress = true;
                }
                self.dma.transfers[index] = Some(transfer);
            }
            assert!(progress, "DMA stalled on channel {}", channel as u8);
        }
    }
}

fn ccm_begin(key: [u8; 16], ccm: &mut Ccm, blocks: usize) {
    let mut b0 = [0u8; 16];
    let adata = u8::from(!ccm.associated_data.is_empty());
    b0[0] = adata << 6 | (((ccm.mac_size - 2) / 2) as u8) << 3 | 2;
    b0[1..13].copy_from_slice(&ccm.nonce);
    b0[13..].copy_from_slice(&((blocks * 16) as u32).to_be_bytes()[1..]);

    let mut mac = encrypt_block(&key, b0);
    if !ccm.associated_data.is_empty() {
        for chunk in format_associated_data(&ccm.associated_data).chunks_exact(16) {
            let mut block = [0u8; 16];
            block.copy_from_slice(chunk);
            mac = encrypt_block(&key, xor(mac, block));
        }
    }
    ccm.mac = mac;
}

fn ccm_tag(key: [u8; 16], ccm: &Ccm) -> [u8; 16] {
    let mut tag = xor(ccm.mac, encrypt_block(&key, ccm.counter_block(0)));
    tag[ccm.mac_size..].fill(0);
    tag
}

impl Operation {
    fn transform(&mut self, block: [u8; 16]) -> [u8; 16] {
        let cipher = Aes128::new(GenericArray::from_slice(&self.key));
        let encrypt = |block: [u8; 16]| {
            let mut block = GenericArray::from(block);
            cipher.encrypt_block(&mut block);
            <[u8; 16]>::from(block)
        };

        match self.mode {
            0 | 1 => {
                let index = (self.blocks - self.blocks_left + 1) as u32;
                let Some(ccm) = self.ccm.as_mut() else {
                    unreachable!("CCM without CCM state");
                };
                let pad = encrypt(ccm.counter_block(index));
                let (plain, out) = if self.mode == 1 {
                    (block, xor(block, pad))
                } else {
                    (xor(block, pad), xor(block, pad))
                };
                ccm.mac = encrypt(xor(ccm.mac, plain));
                out
            }
            2 => {
                let out = xor(block, encrypt(self.chain));
                self.chain = u128::from_be_bytes(self.chain).wrapping_add(1).to_be_bytes();
                out
            }
            4 => {
                let mut plain = GenericArray::from(block);
                cipher.decrypt_block(&mut plain);
                let out = xor(plain.into(), self.chain);
                self.chain = block;
                out
            }
            6 => {
                let mut plain = GenericArray::from(block);
                cipher.decrypt_block(&mut plain);
                plain.into()
            }
            7 => encrypt(block),
            mode => panic!("mode {mode} is not modelled"),
        }
    }
}

pub struct SimBus(Rc<RefCell<Engine>>);

impl SimBus {
    pub const BASE: usize = AES_BASE;
}

impl Bus for SimBus {
    fn read32(&self, offset: usize) -> u32 {
        let mut engine = self.0.borrow_mut();
        let out_big = Cnt::from_bits_retain(engine.cnt).contains(Cnt::OUTPUT_BIG);
        let swap = |v: u32| if out_big { v.swap_bytes() } else { v };

        match offset {
            0x000 => engine.read_cnt(),
            0x00C => engine.pop_rdfifo(),
            0x030..=0x03F => swap(engine.mac[(offset % 0x10) / 4]),
            _ => panic!("read from unmodelled register {offset:#x}"),
        }
    }

    fn write32(&mut self, offset: usize, value: u32) {
        let mut engine = self.0.borrow_mut();
        match offset {
            0x000 => engine.write_cnt(value),
            0x008 => engine.push_wrfifo(value),
            0x020..=0x0FF => engine.write_reg_array(offset, value),
            0x100 | 0x104 | 0x108 => {
                engine.write_key_fifo((offset - KEYFIFO.offset()) / 4, value)
            }
            _ => panic!("32-bit write to {offset:#x}"),
        }
    }

    fn write16(&mut self, offset: usize, value: u16) {
        let mut engine = self.0.borrow_mut();
        match offset {
            0x004 => engine.macblkcnt = value,
            0x006 => engine.blkcnt = value,
            _ => panic!("16-bit write to {offset:#x}"),
        }
    }

    fn write8(&mut self, offset: usize, value: u8) {
        let mut engine = self.0.borrow_mut();
        match offset {
            0x010 => engine.keysel = value,
            0x011 => {
                if KeyCnt::from_bits_retain(value).contains(KeyCnt::FLUSH_KEY_FIFO) {
                    engine.key_fifos.iter_mut().for_each(Vec::clear);
                }
                engine.keycnt = value;
            }
            _ => panic!("8-bit write to {offset:#x}"),
        }
    }

    fn address(&self, offset: usize) -> usize {
        Self::BASE + offset
    }
}

pub struct SimDma(Rc<RefCell<Engine>>);

impl Dma for SimDma {
    fn configure_peripheral_transfer(
        &mut self,
        channel: DmaChannel,
        peripheral: DmaPeripheralId,
        direction: DmaTransferDirection,
        chunk_size: DmaChunkSize,
    ) {
        self.0.borrow_mut().dma.configured[channel as usize] =
            Some((peripheral, direction, chunk_size));
    }

    fn start_transfer(
        &mut self,
        channel: DmaChannel,
        src: usize,
        dst: usize,
        words: usize,
    ) -> Result<(), DmaError> {
        let mut engine = self.0.borrow_mut();
        let Some((_, _, chunk_size)) = engine.dma.configured[channel as usize] else {
            return Err(DmaError::NotConfigured(channel));
        };
        if let Some(transfer) = &engine.dma.transfers[channel as usize] {
            if transfer.moved < transfer.words {
                return Err(DmaError::Busy(channel));
            }
        }
        if let Some(err) = engine.fail_next_dma_start.take() {
            return Err(err);
        }

        if channel == AES_RX_DMA_CHANNEL {
            engine.dma.rx_words = 0;
        }
        engine.dma_starts.push((channel, chunk_size));
        engine.dma.transfers[channel as usize] = Some(Transfer {
            src,
            dst,
            words,
            moved: 0,
        });
        Ok(())
    }

    fn wait_transfer(&mut self, channel: DmaChannel) {
        self.0.borrow_mut().run_dma(channel);
    }

    fn stop(&mut self, channel: DmaChannel) {
        let mut engine = self.0.borrow_mut();
        engine.dma.transfers[channel as usize] = None;
        engine.dma_stops.push(channel);
    }
}

pub struct SimCache(Rc<RefCell<Engine>>);

impl CacheMaintenance for SimCache {
    fn clean_region(&mut self, start: usize, length: usize) {
        self.0
            .borrow_mut()
            .cache_events
            .push(CacheEvent::Clean { start, length });
    }

    fn invalidate_region(&mut self, start: usize, length: usize) {
        let mut engine = self.0.borrow_mut();
        let rx_words = engine.dma.rx_words;
        engine.cache_events.push(CacheEvent::Invalidate {
            start,
            length,
            rx_words,
        });
    }
}

pub struct SimClock(Rc<RefCell<Engine>>);

impl PeripheralClock for SimClock {
    fn enable_peripheral_clock(&mut self, id: PeripheralId) {
        self.0.borrow_mut().clock_events.push((id, true));
    }

    fn disable_peripheral_clock(&mut self, id: PeripheralId) {
        self.0.borrow_mut().clock_events.push((id, false));
    }
}

pub type SimAes = Aes<SimBus, SimDma, SimCache>;

#[derive(Clone, Default)]
pub struct Sim {
    pub engine: Rc<RefCell<Engine>>,
}

impl Sim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(&self) -> SimClock {
        SimClock(self.engine.clone())
    }

    /// A driver that has not been initialized yet.
    pub fn aes(&self) -> SimAes {
        Aes::new(
            SimBus(self.engine.clone()),
            SimDma(self.engine.clone()),
            SimCache(self.engine.clone()),
        )
    }

    pub fn ready_aes(&self) -> SimAes {
        let mut aes = self.aes();
        aes.init(&mut self.clock());
        aes
    }
}

#[cfg(test)]
mod tests {
    use {super::*, hex_literal::hex};

    #[test]
    fn native_scrambler_matches_byte_wise_rotation() {
        fn rotate_left_bytes(a: [u8; 16], rot: usize) -> [u8; 16] {
            let (bytes, bits) = (rot / 8, rot % 8);
            core::array::from_fn(|i| {
                let high = a[(i + bytes) % 16] << bits;
                let low = a[(i + bytes + 1) % 16].checked_shr(8 - bits as u32);
                high | low.unwrap_or(0)
            })
        }

        let x = hex!("000102030405060708090a0b0c0d0e0f");
        let y = hex!("f0e1d2c3b4a5968778695a4b3c2d1e0f");
        let summed = u128::from_be_bytes(xor(rotate_left_bytes(x, 2), y))
            .wrapping_add(KEY_SCRAMBLER_3DS)
            .to_be_bytes();

        assert_eq!(scramble_3ds(x, y), rotate_left_bytes(summed, 87));
    }

    #[test]
    fn associated_data_formatting() {
        assert_eq!(format_associated_data(&[0xaa; 16]).len(), 32);
        assert_eq!(&format_associated_data(&[0xaa; 16])[..3], &[0x00, 0x10, 0xaa]);
        assert_eq!(
            &format_associated_data(&[0; 0xFF00])[..6],
            &[0xFF, 0xFE, 0, 0, 0xFF, 0]
        );
    }
}
