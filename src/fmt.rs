// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging macros. They forward to `log` when the `logging` feature is on and
//! compile to nothing otherwise.

#![macro_use]
#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "logging")]
            ::log::trace!($s $(, $x)*);
            #[cfg(not(feature = "logging"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "logging")]
            ::log::debug!($s $(, $x)*);
            #[cfg(not(feature = "logging"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "logging")]
            ::log::warn!($s $(, $x)*);
            #[cfg(not(feature = "logging"))]
            let _ = ($( & $x ),*);
        }
    };
}
