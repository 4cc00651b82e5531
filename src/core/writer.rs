//! Background writer thread
//!
//! A single consumer drains the ring one line-or-chunk at a time and performs
//! the blocking sink write. Write failures are absorbed and counted; producers
//! are never blocked or notified. The loop exits once the ring reports
//! stopped-and-empty, after which the thread is joinable.

use crate::core::logger::MAX_LOG_ENTRY;
use crate::core::metrics::LoggerMetrics;
use crate::core::ring_buffer::{Drained, RingBuffer};
use crate::core::sink::Sink;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;

pub(crate) fn spawn(
    ring: Arc<RingBuffer>,
    sink: Arc<Mutex<Sink>>,
    metrics: Arc<LoggerMetrics>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("ringlog-writer".to_string())
        .spawn(move || run(&ring, &sink, &metrics))
        .expect("failed to spawn log writer thread")
}

fn run(ring: &RingBuffer, sink: &Mutex<Sink>, metrics: &LoggerMetrics) {
    let mut scratch = [0u8; MAX_LOG_ENTRY];

    loop {
        match ring.drain(&mut scratch) {
            Drained::Data(n) => {
                if n == 0 {
                    continue;
                }
                // The ring lock is already released; only the sink lock is
                // held across the blocking write.
                if sink.lock().write_all(&scratch[..n]).is_err() {
                    metrics.record_write_error();
                }
            }
            Drained::Stopped => break,
        }
    }
}
