use crate::discover::{DEFAULT_EXTENSIONS, check_paths, discover_images};
use crate::domain::ChunkSize;
use crate::error::Result;
use crate::extract::extract_chunks;
use crate::output::{OutputOptions, store_group};
use crate::serialize::{Brackets, GroupSize, serialize_groups};
use crate::stats::RunStats;
use crate::validate::{Validation, validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConvertOptions {
    pub chunk_size: ChunkSize,
    /// Chunks per serialized group, 1 to 10.
    pub group_size: usize,
    pub brackets: Brackets,
    pub extensions: Vec<String>,
    pub one_file: bool,
    pub overwrite: bool,
    pub add_code: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            chunk_size: ChunkSize::default(),
            group_size: 2,
            brackets: Brackets::default(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            one_file: false,
            overwrite: false,
            add_code: false,
        }
    }
}

/// Turn every image under `input` into chunk text files inside `output`.
///
/// Path problems, an empty input and write failures end the run. Images that
/// cannot be decoded or are smaller than one chunk are logged and skipped.
pub fn convert(input: &Path, output: &Path, opts: &ConvertOptions) -> Result<RunStats> {
    let group_size = GroupSize::new(opts.group_size)?;
    check_paths(input, output)?;

    let exts: Vec<&str> = opts.extensions.iter().map(String::as_str).collect();
    let images = discover_images(input, &exts)?;
    let out_opts = OutputOptions {
        dir: output.to_path_buf(),
        one_file: opts.one_file,
        overwrite: opts.overwrite,
        add_code: opts.add_code,
    };

    let mut stats = RunStats {
        images_found: images.len() as u64,
        ..Default::default()
    };
    for path in &images {
        let image = match validate(path, opts.chunk_size) {
            Validation::Valid(v) => v,
            Validation::Rejected(r) => {
                tracing::warn!("{r}");
                stats.images_skipped += 1;
                continue;
            }
        };
        let desc = &image.descriptor;
        let chunks = extract_chunks(desc, &image.pixels, opts.chunk_size)?;
        stats.chunks += chunks.len() as u64;

        let mut written = HashSet::new();
        for (chunk, index) in serialize_groups(&chunks, group_size, opts.brackets) {
            written.insert(store_group(&chunk, index, desc, &out_opts)?);
            stats.groups += 1;
        }
        stats.files_written += written.len() as u64;
        stats.images_processed += 1;
    }

    tracing::info!("Program finished");
    Ok(stats)
}
