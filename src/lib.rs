// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible in the other modules.
mod fmt;

pub mod aes;
pub mod cache;
pub mod csr;
pub mod dma;
#[cfg(feature = "logging")]
pub mod logging;
pub mod pmc;

#[cfg(test)]
mod sim;
