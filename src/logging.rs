// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A `log` backend over any `core::fmt::Write` sink, usually a UART.

use core::{
    cell::RefCell,
    fmt::Write,
    sync::atomic::{AtomicUsize, Ordering},
};

/// Place one in a `static` and hand it to [`init_logging`].
pub struct WriterLogger<W> {
    writer: critical_section::Mutex<RefCell<W>>,
    tick_count: Option<&'static AtomicUsize>,
}

impl<W> WriterLogger<W> {
    /// `tick_count` is a millisecond counter, used to timestamp lines.
    pub const fn new(writer: W, tick_count: Option<&'static AtomicUsize>) -> Self {
        Self {
            writer: critical_section::Mutex::new(RefCell::new(writer)),
            tick_count,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().into_inner()
    }
}

impl<W: Send + Write> log::Log for WriterLogger<W> {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        critical_section::with(|cs| {
            writeln!(
                self.writer.borrow(cs).borrow_mut(),
                "{} {} [{}] {}",
                record.level(),
                self.tick_count
                    .map(|t| (t.load(Ordering::SeqCst) as f32) / 1000.0)
                    .unwrap_or(0.0),
                record.module_path().unwrap_or("aes"),
                record.args()
            )
            .ok();
        })
    }

    fn flush(&self) {}
}

pub fn init_logging<W: Send + Write + 'static>(
    logger: &'static WriterLogger<W>,
    level: log::LevelFilter,
) {
    log::set_max_level(level);
    log::set_logger(logger).ok();
}
