// pixchunk_core/src/domain.rs
use crate::error::{PixchunkError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Width and height of one chunk, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSize {
    width: u32,
    height: u32,
}

impl ChunkSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PixchunkError::InvalidChunkSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of whole chunks that fit in an image, as (columns, rows).
    pub fn grid_for(&self, image_width: u32, image_height: u32) -> (u32, u32) {
        (image_width / self.width, image_height / self.height)
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub path: PathBuf,
    /// Chunk columns.
    pub chx: u32,
    /// Chunk rows.
    pub chy: u32,
}

impl ImageDescriptor {
    pub fn chunk_count(&self) -> usize {
        self.chx as usize * self.chy as usize
    }

    /// File stem used as the base of every output file name.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub column: u32,
    pub row: u32,
}

impl ChunkCoord {
    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// `height` rows of `width` colors, each formatted `#rrggbb`.
pub type ChunkMatrix = Vec<Vec<String>>;

/// Every chunk of one image in row-major order.
#[derive(Clone, Debug, Default)]
pub struct ChunkMap {
    entries: Vec<(ChunkCoord, ChunkMatrix)>,
}

impl ChunkMap {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, coord: ChunkCoord, matrix: ChunkMatrix) {
        self.entries.push((coord, matrix));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(ChunkCoord, ChunkMatrix)] {
        &self.entries
    }

    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&ChunkMatrix> {
        self.entries
            .iter()
            .find(|(c, _)| *c == coord)
            .map(|(_, m)| m)
    }
}
