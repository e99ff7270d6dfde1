//! Bounded touch event queue for `no_std` environments.
//!
//! Hands touch samples from the touch controller's interrupt (or, in the
//! preview, the UI thread) to the frame scheduler, which drains at most one
//! sample per frame. Built on `critical-section` and `heapless::Deque`.
//!
//! Consecutive `Held` samples are merged: while the scheduler is busy only the
//! latest drag position is kept, and press/release edges are never displaced
//! by moves.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::input::{TouchEvent, TouchInput, TouchPhase};

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub TouchEvent);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, interrupt-safe queue of touch samples.
pub struct TouchChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<TouchEvent, SIZE>>>,
}

impl<const SIZE: usize> TouchChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for the touch controller side.
    pub const fn sender(&self) -> TouchSender<'_, SIZE> {
        TouchSender { channel: self }
    }

    /// Get a receiver handle for the scheduler side.
    pub const fn receiver(&self) -> TouchReceiver<'_, SIZE> {
        TouchReceiver { channel: self }
    }

    /// Queue a touch sample.
    ///
    /// A `Held` sample replaces a `Held` sample still waiting at the back of
    /// the queue. Returns `Err(TrySendError(event))` if the queue is full.
    pub fn try_send(&self, event: TouchEvent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if event.phase == TouchPhase::Held {
                if let Some(last) = queue.back_mut() {
                    if last.phase == TouchPhase::Held {
                        *last = event;
                        return Ok(());
                    }
                }
            }
            queue.push_back(event).map_err(TrySendError)
        })
    }

    /// Take the oldest queued touch sample.
    ///
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<TouchEvent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of samples waiting
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for TouchChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`TouchChannel`].
#[derive(Clone, Copy)]
pub struct TouchSender<'a, const SIZE: usize> {
    channel: &'a TouchChannel<SIZE>,
}

impl<const SIZE: usize> TouchSender<'_, SIZE> {
    pub fn try_send(&self, event: TouchEvent) -> Result<(), TrySendError> {
        self.channel.try_send(event)
    }
}

/// Receiving half of a [`TouchChannel`], polled by the scheduler.
#[derive(Clone, Copy)]
pub struct TouchReceiver<'a, const SIZE: usize> {
    channel: &'a TouchChannel<SIZE>,
}

impl<const SIZE: usize> TouchReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<TouchEvent, TryReceiveError> {
        self.channel.try_receive()
    }
}

impl<const SIZE: usize> TouchInput for TouchReceiver<'_, SIZE> {
    fn poll(&mut self) -> Option<TouchEvent> {
        self.try_receive().ok()
    }
}
