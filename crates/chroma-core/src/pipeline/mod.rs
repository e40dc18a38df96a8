//! Image processing pipeline components.
//!
//! The stages each input file moves through:
//! - **discovery**: enumerate candidate files in the input directory
//! - **decode**: load a file into an RGB pixel buffer
//! - **transform**: swap the green and blue channels
//! - **encode**: write the result as JPEG
//! - **batch**: distribute the work across a fixed-size worker pool

pub mod batch;
pub mod decode;
pub mod discovery;
pub mod encode;
pub mod transform;

// Re-exports for convenient access
pub use batch::BatchRunner;
pub use decode::ImageDecoder;
pub use discovery::FileDiscovery;
pub use encode::JpegWriter;
pub use transform::ChannelSwap;
