// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cipher modes, run on the selected keyslot.

use {
    super::{
        regs::*,
        transfer::Job,
        ActiveKeyslot, AesContext, CryptoBuffers, Error, BLOCK_WORDS, MAX_BLOCKS,
    },
    crate::{cache::CacheMaintenance, csr::Bus, dma::Dma},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl<B: Bus, D: Dma, C: CacheMaintenance> ActiveKeyslot<'_, B, D, C> {
    pub fn ecb(
        &mut self,
        ctx: &AesContext,
        buffers: CryptoBuffers<'_>,
        op: Operation,
        dma: bool,
    ) -> Result<(), Error> {
        let mode = match op {
            Operation::Encrypt => Mode::EcbEncrypt,
            Operation::Decrypt => Mode::EcbDecrypt,
        };
        let job = Job::new(mode, ctx.crypt_params(), &buffers, &[], dma)?;
        self.aes.run(job, buffers)
    }

    /// Encrypts or decrypts with the counter held in `ctx`. The engine counts
    /// up once per block, the context itself is left untouched.
    pub fn ctr(
        &mut self,
        ctx: &AesContext,
        buffers: CryptoBuffers<'_>,
        dma: bool,
    ) -> Result<(), Error> {
        let job = Job::new(Mode::Ctr, ctx.crypt_params(), &buffers, &[], dma)?;
        self.aes
            .write_words(CTR, ctx.ctr_iv_nonce_params(), ctx.ctr_iv_nonce());
        self.aes.run(job, buffers)
    }

    /// CTR over buffers of any whole number of blocks, split into as many
    /// engine operations as needed. Leaves `ctx` holding the counter of the
    /// block after the last one processed, so the stream can be continued.
    pub fn ctr_stream(
        &mut self,
        ctx: &mut AesContext,
        buffers: CryptoBuffers<'_>,
        dma: bool,
    ) -> Result<(), Error> {
        if buffers.len() % BLOCK_WORDS != 0 {
            return Err(Error::UnalignedLength(buffers.len()));
        }
        if buffers.is_empty() {
            return Err(Error::NoBlocks);
        }

        for chunk in buffers.chunks(MAX_BLOCKS * BLOCK_WORDS) {
            let blocks = chunk.len() / BLOCK_WORDS;
            self.ctr(ctx, chunk, dma)?;
            ctx.advance_counter(blocks as u32);
        }
        Ok(())
    }

    /// CBC with the IV held in `ctx`. Only decryption is available.
    pub fn cbc(
        &mut self,
        ctx: &AesContext,
        buffers: CryptoBuffers<'_>,
        op: Operation,
        dma: bool,
    ) -> Result<(), Error> {
        if op == Operation::Encrypt {
            warn!("CBC encryption requested");
            return Err(Error::UnsupportedMode);
        }

        let job = Job::new(Mode::CbcDecrypt, ctx.crypt_params(), &buffers, &[], dma)?;
        self.aes
            .write_words(CTR, ctx.ctr_iv_nonce_params(), ctx.ctr_iv_nonce());
        self.aes.run(job, buffers)
    }

    /// CCM with the nonce held in `ctx`.
    ///
    /// `mac` carries the tag in the data order of `ctx`, `mac_size` bytes long
    /// and zero beyond that. Encryption fills it in. Decryption checks it
    /// against all 16 bytes the engine computes, so the padding has to be zero
    /// as well.
    ///
    /// The engine derives every counter from the one nonce, which is good for
    /// [`MAX_BLOCKS`] blocks. Picking a fresh nonce per call is up to the
    /// caller.
    ///
    /// Returns whether the data authenticated. Encryption always returns
    /// `true`.
    pub fn ccm(
        &mut self,
        ctx: &AesContext,
        buffers: CryptoBuffers<'_>,
        associated_data: &[u32],
        mac_size: u32,
        mac: &mut [u32; 4],
        op: Operation,
    ) -> Result<bool, Error> {
        if mac_size % 2 != 0 || !(2..=16).contains(&mac_size) {
            return Err(Error::InvalidMacSize(mac_size));
        }

        let params = ctx.crypt_params();
        // PASS_PAYLOAD stays clear, the caller already holds the associated
        // data.
        let (mode, flags) = match op {
            Operation::Encrypt => (Mode::CcmEncrypt, Cnt::empty()),
            Operation::Decrypt => (Mode::CcmDecrypt, Cnt::MAC_SRC_REG),
        };

        let job = Job::new(mode, params, &buffers, associated_data, false)?
            .with_flags(flags.bits() | self.aes.csr.ms(CNT_MAC_SIZE, (mac_size - 2) / 2));

        self.aes
            .write_words(CTR, ctx.ctr_iv_nonce_params(), ctx.ctr_iv_nonce());
        if op == Operation::Decrypt {
            self.aes.write_words(MAC, params.input, mac);
        }

        self.aes.run(job, buffers)?;

        match op {
            Operation::Encrypt => {
                *mac = self.aes.read_words(MAC, params.output);
                Ok(true)
            }
            Operation::Decrypt => {
                let valid = Cnt::from_bits_retain(self.aes.csr.r(CNT)).contains(Cnt::MAC_VALID);
                if !valid {
                    debug!("CCM MAC mismatch");
                }
                Ok(valid)
            }
        }
    }
}
