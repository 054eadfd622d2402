use std::path::PathBuf;

use pixchunk_core::error::Result;
use pixchunk_core::{ConvertOptions, convert};

pub fn handle_convert(input: PathBuf, output: PathBuf, opts: ConvertOptions) -> Result<()> {
    let stats = convert(&input, &output, &opts)?;
    tracing::debug!(
        "images: {} found, {} processed, {} skipped; {} chunks in {} groups, {} files",
        stats.images_found,
        stats.images_processed,
        stats.images_skipped,
        stats.chunks,
        stats.groups,
        stats.files_written
    );
    Ok(())
}
