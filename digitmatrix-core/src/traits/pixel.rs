//! Pixel sink trait for addressable LED chains

use crate::display::Frame;

/// Writes whole frames to a chain of addressable LEDs
///
/// Colors go out in slice order, which is physical chain order. The future
/// completes once the whole frame has been handed to the chain.
pub trait PixelSink {
    fn write(&mut self, frame: &Frame) -> impl core::future::Future<Output = ()>;
}
