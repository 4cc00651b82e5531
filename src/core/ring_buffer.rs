//! Bounded circular byte buffer shared between producers and the writer thread
//!
//! Producers copy whole formatted lines in under the lock; the single consumer
//! extracts bytes up to the next newline so that no physical line is ever
//! split across two file writes. The buffer never grows and never overwrites:
//! when full, excess input bytes are silently dropped.

use parking_lot::{Condvar, Mutex};

/// Default ring capacity in bytes.
pub const BUFFER_SIZE: usize = 8192;

/// Outcome of a [`RingBuffer::drain`] call.
#[derive(Debug, PartialEq, Eq)]
pub enum Drained {
    /// `n` bytes were copied into the caller's scratch buffer.
    Data(usize),
    /// The buffer was stopped and is empty; the consumer should exit.
    Stopped,
}

struct State {
    buf: Box<[u8]>,
    /// Next write position, always `< capacity`.
    head: usize,
    /// Next read position, always `< capacity`.
    tail: usize,
    /// Bytes currently stored; `0 <= count <= capacity`.
    count: usize,
    running: bool,
}

/// Fixed-capacity FIFO byte ring with a mutex/condvar handoff protocol.
pub struct RingBuffer {
    state: Mutex<State>,
    /// Signalled when bytes become available for the consumer.
    readable: Condvar,
    /// Signalled when `count` drops to zero; used by drain-to-empty waits.
    drained: Condvar,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be non-zero");
        Self {
            state: Mutex::new(State {
                buf: vec![0u8; capacity].into_boxed_slice(),
                head: 0,
                tail: 0,
                count: 0,
                running: true,
            }),
            readable: Condvar::new(),
            drained: Condvar::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes currently buffered.
    pub fn len(&self) -> usize {
        self.state.lock().count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy `data` into the ring, stopping early if the ring fills up.
    ///
    /// Returns the number of bytes actually stored; the remainder is dropped
    /// without notification. Producers never wait for the consumer here, the
    /// critical section is a bounded copy. Wakes the consumer if at least one
    /// byte was written.
    pub fn write(&self, data: &[u8]) -> usize {
        let mut st = self.state.lock();

        let available = self.capacity - st.count;
        let n = data.len().min(available);
        if n == 0 {
            return 0;
        }

        // At most two contiguous segments: head..capacity, then the wrap.
        let head = st.head;
        let first = n.min(self.capacity - head);
        st.buf[head..head + first].copy_from_slice(&data[..first]);
        let second = n - first;
        if second > 0 {
            st.buf[..second].copy_from_slice(&data[first..n]);
        }
        st.head = (head + n) % self.capacity;
        st.count += n;

        self.readable.notify_one();
        n
    }

    /// Extract bytes for the consumer, blocking while the ring is empty.
    ///
    /// Copies from `tail` into `out` until `out` is full or a newline byte has
    /// been copied (the newline is included), so a single call yields at most
    /// one log line's worth of bytes. Returns [`Drained::Stopped`] only once
    /// the ring has been stopped *and* fully emptied; pending bytes are always
    /// handed out first. The lock is released before the caller performs any
    /// file I/O.
    pub fn drain(&self, out: &mut [u8]) -> Drained {
        let mut st = self.state.lock();

        loop {
            if st.count > 0 {
                break;
            }
            if !st.running {
                return Drained::Stopped;
            }
            self.readable.wait(&mut st);
        }

        let mut n = 0;
        while st.count > 0 && n < out.len() {
            let byte = st.buf[st.tail];
            out[n] = byte;
            st.tail = (st.tail + 1) % self.capacity;
            st.count -= 1;
            n += 1;
            if byte == b'\n' {
                break;
            }
        }

        if st.count == 0 {
            self.drained.notify_all();
        }
        Drained::Data(n)
    }

    /// Mark the ring as stopped and wake all waiters.
    ///
    /// The consumer keeps draining until the ring is empty, then observes the
    /// stop and exits.
    pub fn stop(&self) {
        let mut st = self.state.lock();
        st.running = false;
        self.readable.notify_all();
        self.drained.notify_all();
        drop(st);
    }

    /// Block until every buffered byte has been handed to the consumer.
    ///
    /// Returns immediately if the ring has been stopped; callers stop the ring
    /// only after this wait so that no buffered line is lost.
    pub fn wait_until_empty(&self) {
        let mut st = self.state.lock();
        while st.count > 0 && st.running {
            self.drained.wait(&mut st);
        }
    }

    #[cfg(test)]
    fn snapshot(&self) -> (usize, usize, usize) {
        let st = self.state.lock();
        (st.head, st.tail, st.count)
    }
}
