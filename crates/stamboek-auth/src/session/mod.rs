//! Signed session cookie handling.

pub mod codec;

pub use codec::SessionCodec;
