#![forbid(unsafe_code)]

pub mod error;
pub mod stats;

pub mod domain;
pub mod pixels;

pub mod discover;
pub mod validate;

pub mod extract;
pub mod serialize;

pub mod output;

pub mod convert;

// Re-exports: stable API surface
pub use convert::{ConvertOptions, convert};
pub use domain::{ChunkCoord, ChunkMap, ChunkMatrix, ChunkSize, ImageDescriptor};
pub use extract::extract_chunks;
pub use pixels::{ChannelOrder, PixelSource, RawPixels};
pub use serialize::{Brackets, GroupSize, SerializedChunk, serialize_groups};
