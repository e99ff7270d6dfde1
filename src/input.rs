//! Touch input model
//!
//! The scheduler polls a [`TouchInput`] once per frame and gets at most one
//! event back.

use embedded_graphics::geometry::Point;

/// Edge of a touch contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger went down this frame
    Pressed,
    /// Finger is still down, possibly moved
    Held,
    /// Finger lifted
    Released,
}

/// A single touch sample in display coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    pub point: Point,
    pub phase: TouchPhase,
}

impl TouchEvent {
    pub const fn new(x: i32, y: i32, phase: TouchPhase) -> Self {
        Self {
            point: Point::new(x, y),
            phase,
        }
    }

    pub const fn pressed(x: i32, y: i32) -> Self {
        Self::new(x, y, TouchPhase::Pressed)
    }

    pub const fn held(x: i32, y: i32) -> Self {
        Self::new(x, y, TouchPhase::Held)
    }

    pub const fn released(x: i32, y: i32) -> Self {
        Self::new(x, y, TouchPhase::Released)
    }
}

/// Touch controller interface
///
/// Implement this trait to feed touches from a specific controller.
pub trait TouchInput {
    /// Return the next pending touch sample, if any (non-blocking)
    fn poll(&mut self) -> Option<TouchEvent>;
}
