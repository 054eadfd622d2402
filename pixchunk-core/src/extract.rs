use crate::domain::{ChunkCoord, ChunkMap, ChunkMatrix, ChunkSize, ImageDescriptor};
use crate::error::{PixchunkError, Result};
use crate::pixels::{PixelSource, hex_color};

fn chunk_matrix<S: PixelSource + ?Sized>(
    pixels: &S,
    origin_x: u32,
    origin_y: u32,
    size: ChunkSize,
) -> ChunkMatrix {
    (0..size.height())
        .map(|y| {
            (0..size.width())
                .map(|x| hex_color(pixels.rgb_at(origin_x + x, origin_y + y)))
                .collect()
        })
        .collect()
}

/// Cut `pixels` into the `chx` x `chy` grid described by `desc`.
///
/// Rows are the outer loop, so the map comes out row-major: every column of
/// row 0, then row 1, and so on. Pixels right of or below the last whole chunk
/// are never read.
pub fn extract_chunks<S: PixelSource + ?Sized>(
    desc: &ImageDescriptor,
    pixels: &S,
    size: ChunkSize,
) -> Result<ChunkMap> {
    let (width, height) = pixels.dimensions();
    let (max_x, max_y) = size.grid_for(width, height);
    if desc.chx > max_x || desc.chy > max_y {
        return Err(PixchunkError::Format(format!(
            "{}: {}x{} chunk grid does not fit a {width}x{height} image",
            desc.path.display(),
            desc.chx,
            desc.chy
        )));
    }

    let mut map = ChunkMap::with_capacity(desc.chunk_count());
    for row in 0..desc.chy {
        for column in 0..desc.chx {
            let matrix = chunk_matrix(pixels, column * size.width(), row * size.height(), size);
            map.push(ChunkCoord::new(column, row), matrix);
        }
    }
    tracing::debug!("Successfully processed image: {}", desc.path.display());
    Ok(map)
}
