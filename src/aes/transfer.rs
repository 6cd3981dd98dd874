// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Moving data through the engine: FIFO pumping, DMA hand-off and the cache
//! maintenance DMA needs.

use {
    super::{
        regs::*, Aes, CryptParams, Error, Order, AES_RX_DMA_CHANNEL, AES_TX_DMA_CHANNEL,
        BLOCK_WORDS, MAX_BLOCKS,
    },
    crate::{
        cache::CacheMaintenance,
        csr::{Bus, Register},
        dma::{Dma, DmaChunkSize, DmaPeripheralId, DmaTransferDirection},
    },
    core::{marker::PhantomData, ptr::NonNull},
};

/// Input and output of one operation, in words.
///
/// The two sides are either distinct buffers of equal length or the same
/// buffer, in which case the data is transformed in place.
pub struct CryptoBuffers<'a> {
    input: NonNull<[u32]>,
    output: NonNull<[u32]>,
    _marker: PhantomData<&'a mut [u32]>,
}

impl<'a> CryptoBuffers<'a> {
    pub fn new(input: &'a [u32], output: &'a mut [u32]) -> Result<Self, Error> {
        if input.len() != output.len() {
            return Err(Error::BufferLengthMismatch);
        }
        Ok(Self {
            input: NonNull::from(input),
            output: NonNull::from(output),
            _marker: PhantomData,
        })
    }

    pub fn new_in_place(data: &'a mut [u32]) -> Self {
        let ptr = NonNull::from(data);
        Self {
            input: ptr,
            output: ptr,
            _marker: PhantomData,
        }
    }

    /// Length in words.
    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn in_place(&self) -> bool {
        self.input.cast::<u32>() == self.output.cast::<u32>()
    }

    /// Splits the buffers into consecutive pieces of at most `words` words.
    pub(super) fn chunks(self, words: usize) -> Chunks<'a> {
        Chunks {
            buffers: self,
            offset: 0,
            words,
        }
    }

    fn input_addr(&self) -> usize {
        self.input.cast::<u32>().as_ptr() as usize
    }

    fn output_addr(&self) -> usize {
        self.output.cast::<u32>().as_ptr() as usize
    }

    fn read(&self, index: usize) -> u32 {
        debug_assert!(index < self.len());
        unsafe { self.input.cast::<u32>().as_ptr().add(index).read() }
    }

    fn write(&mut self, index: usize, word: u32) {
        debug_assert!(index < self.len());
        unsafe { self.output.cast::<u32>().as_ptr().add(index).write(word) }
    }
}

pub(super) struct Chunks<'a> {
    buffers: CryptoBuffers<'a>,
    offset: usize,
    words: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = CryptoBuffers<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.buffers.len() - self.offset;
        if remaining == 0 || self.words == 0 {
            return None;
        }
        let len = remaining.min(self.words);

        // The pieces never overlap each other, and every piece stays inside
        // the borrow the parent was built from.
        let chunk = unsafe {
            let input = self.buffers.input.cast::<u32>().as_ptr().add(self.offset);
            let output = self.buffers.output.cast::<u32>().as_ptr().add(self.offset);
            CryptoBuffers {
                input: NonNull::new_unchecked(core::ptr::slice_from_raw_parts_mut(input, len)),
                output: NonNull::new_unchecked(core::ptr::slice_from_raw_parts_mut(output, len)),
                _marker: PhantomData,
            }
        };
        self.offset += len;
        Some(chunk)
    }
}

/// Checks a buffer length in words and turns it into a block count.
pub(super) fn blocks_of(words: usize) -> Result<usize, Error> {
    if words % BLOCK_WORDS != 0 {
        return Err(Error::UnalignedLength(words));
    }
    match words / BLOCK_WORDS {
        0 => Err(Error::NoBlocks),
        blocks if blocks > MAX_BLOCKS => Err(Error::TooManyBlocks(blocks)),
        blocks => Ok(blocks),
    }
}

/// A validated operation, ready to be started.
pub(super) struct Job<'b> {
    pub mode: Mode,
    /// Mode specific control bits, merged into the start write.
    pub flags: u32,
    pub params: CryptParams,
    pub associated_data: &'b [u32],
    pub blocks: usize,
    pub dma: bool,
}

impl<'b> Job<'b> {
    pub fn new(
        mode: Mode,
        params: CryptParams,
        buffers: &CryptoBuffers<'_>,
        associated_data: &'b [u32],
        dma: bool,
    ) -> Result<Self, Error> {
        let blocks = blocks_of(buffers.len())?;
        if associated_data.len() % BLOCK_WORDS != 0 {
            return Err(Error::UnalignedLength(associated_data.len()));
        }
        let associated_blocks = associated_data.len() / BLOCK_WORDS;
        if associated_blocks > MAX_BLOCKS {
            return Err(Error::TooManyBlocks(associated_blocks));
        }

        Ok(Self {
            mode,
            flags: 0,
            params,
            associated_data,
            blocks,
            dma,
        })
    }

    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags |= flags;
        self
    }

    fn chunk_size(&self) -> DmaChunkSize {
        if self.blocks % 2 == 0 {
            DmaChunkSize::C8
        } else {
            DmaChunkSize::C4
        }
    }
}

/// Write FIFO request size: the request fires once this many words are free.
fn wrfifo_dma_size(chunk: DmaChunkSize) -> u32 {
    (FIFO_WORDS as u32 - chunk as u32) / 4
}

/// Read FIFO request size: the request fires once this many words are queued.
fn rdfifo_dma_size(chunk: DmaChunkSize) -> u32 {
    chunk as u32 / 4 - 1
}

impl<B: Bus, D: Dma, C: CacheMaintenance> Aes<B, D, C> {
    /// Writes a 4-word register array with the order's input bits in force.
    pub(super) fn write_words(&mut self, reg: Register, order: Order, words: &[u32; 4]) {
        self.csr.wo(CNT, order.input_bits().bits());
        for (i, &word) in words.iter().enumerate() {
            self.csr.wo(reg.at(order.register_index(i)), word);
        }
    }

    /// Reads a 4-word register array. The output bits of the last start
    /// write decide the byte order.
    pub(super) fn read_words(&self, reg: Register, order: Order) -> [u32; 4] {
        core::array::from_fn(|i| self.csr.r(reg.at(order.register_index(i))))
    }

    /// Runs `job` to completion.
    pub(super) fn run(
        &mut self,
        job: Job<'_>,
        mut buffers: CryptoBuffers<'_>,
    ) -> Result<(), Error> {
        let chunk = job.chunk_size();

        let cnt = Cnt::ENABLE | Cnt::FLUSH_READ_FIFO | Cnt::FLUSH_WRITE_FIFO | job.params.bits();
        let mut value = cnt.bits() | job.flags | self.csr.ms(CNT_MODE, job.mode as u32);
        if job.dma {
            value |= self.csr.ms(CNT_WRFIFO_DMA_SIZE, wrfifo_dma_size(chunk))
                | self.csr.ms(CNT_RDFIFO_DMA_SIZE, rdfifo_dma_size(chunk));
        }

        self.csr
            .wo(MACBLKCNT, (job.associated_data.len() / BLOCK_WORDS) as u32);
        self.csr.wo(BLKCNT, job.blocks as u32);
        self.csr.wo(CNT, value);
        trace!("{:?}: started {} blocks, dma {}", job.mode, job.blocks, job.dma);

        if job.dma {
            self.start_dma(&buffers, chunk)?.wait();
        } else {
            self.pump(job.associated_data, &mut buffers);
        }

        self.wait_idle();
        trace!("{:?}: done", job.mode);
        Ok(())
    }

    /// Feeds the write FIFO and drains the read FIFO until every output word
    /// has been read. Associated data goes in first and produces no output.
    fn pump(&mut self, associated_data: &[u32], buffers: &mut CryptoBuffers<'_>) {
        let len = buffers.len();
        let total_in = associated_data.len() + len;
        let mut written = 0;
        let mut read = 0;

        while read < len {
            let free = FIFO_WORDS - self.csr.rf(CNT_WRFIFO_COUNT) as usize;
            for _ in 0..free.min(total_in - written) {
                let word = match associated_data.get(written) {
                    Some(&word) => word,
                    None => buffers.read(written - associated_data.len()),
                };
                self.csr.wo(WRFIFO, word);
                written += 1;
            }

            let queued = self.csr.rf(CNT_RDFIFO_COUNT) as usize;
            for _ in 0..queued.min(len - read) {
                let word = self.csr.r(RDFIFO);
                buffers.write(read, word);
                read += 1;
            }
        }
    }

    /// Points both channels at the FIFOs and starts them, output side first so
    /// no result is dropped.
    fn start_dma(
        &mut self,
        buffers: &CryptoBuffers<'_>,
        chunk: DmaChunkSize,
    ) -> Result<DmaTransfer<'_, D, C>, Error> {
        let words = buffers.len();
        let bytes = words * 4;
        let (input, output) = (buffers.input_addr(), buffers.output_addr());

        self.cache.clean_region(input, bytes);
        if !buffers.in_place() {
            self.cache.clean_region(output, bytes);
        }

        self.dma.configure_peripheral_transfer(
            AES_TX_DMA_CHANNEL,
            DmaPeripheralId::AesIn,
            DmaTransferDirection::MemoryToPeripheral,
            chunk,
        );
        self.dma.configure_peripheral_transfer(
            AES_RX_DMA_CHANNEL,
            DmaPeripheralId::AesOut,
            DmaTransferDirection::PeripheralToMemory,
            chunk,
        );

        let rdfifo = self.csr.address(RDFIFO);
        let wrfifo = self.csr.address(WRFIFO);
        let started = self
            .dma
            .start_transfer(AES_RX_DMA_CHANNEL, rdfifo, output, words)
            .and_then(|()| {
                self.dma
                    .start_transfer(AES_TX_DMA_CHANNEL, input, wrfifo, words)
            });

        if let Err(err) = started {
            warn!("AES DMA failed to start: {}", err);
            self.dma.stop(AES_TX_DMA_CHANNEL);
            self.dma.stop(AES_RX_DMA_CHANNEL);
            self.csr
                .wo(CNT, (Cnt::FLUSH_READ_FIFO | Cnt::FLUSH_WRITE_FIFO).bits());
            return Err(err.into());
        }

        Ok(DmaTransfer {
            dma: &mut self.dma,
            cache: &mut self.cache,
            output,
            bytes,
            finished: false,
        })
    }

    fn wait_idle(&self) {
        while Cnt::from_bits_retain(self.csr.r(CNT)).contains(Cnt::ENABLE) {}
    }
}

/// A running DMA transfer through the engine.
///
/// The output range is invalidated from the data cache only once both channels
/// are done, so nothing stale can be read back. Dropping the handle waits too.
#[must_use]
pub struct DmaTransfer<'t, D: Dma, C: CacheMaintenance> {
    dma: &'t mut D,
    cache: &'t mut C,
    output: usize,
    bytes: usize,
    finished: bool,
}

impl<D: Dma, C: CacheMaintenance> DmaTransfer<'_, D, C> {
    pub fn wait(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.dma.wait_transfer(AES_TX_DMA_CHANNEL);
        self.dma.wait_transfer(AES_RX_DMA_CHANNEL);
        self.cache.invalidate_region(self.output, self.bytes);
        self.finished = true;
    }
}

impl<D: Dma, C: CacheMaintenance> Drop for DmaTransfer<'_, D, C> {
    fn drop(&mut self) {
        self.finish();
    }
}
