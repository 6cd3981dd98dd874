// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data cache maintenance around DMA.

/// Cache operations on a physical address range. Implementations round the
/// range out to whole cache lines.
pub trait CacheMaintenance {
    /// Writes dirty lines in the range back to memory.
    fn clean_region(&mut self, start: usize, length: usize);

    /// Discards the range from the cache so the next read comes from memory.
    fn invalidate_region(&mut self, start: usize, length: usize);
}

/// For systems running with the data cache disabled.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCache;

impl CacheMaintenance for NoCache {
    fn clean_region(&mut self, _start: usize, _length: usize) {}

    fn invalidate_region(&mut self, _start: usize, _length: usize) {}
}

pub fn invalidate_slice<T>(cache: &mut impl CacheMaintenance, slice: &[T]) {
    let start_addr = slice.as_ptr() as usize;
    cache.invalidate_region(start_addr, core::mem::size_of_val(slice));
}

pub fn clean_slice<T>(cache: &mut impl CacheMaintenance, slice: &[T]) {
    let start_addr = slice.as_ptr() as usize;
    cache.clean_region(start_addr, core::mem::size_of_val(slice));
}
