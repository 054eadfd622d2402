use crate::domain::ImageDescriptor;
use crate::error::Result;
use crate::serialize::SerializedChunk;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const OUTPUT_EXTENSION: &str = "txt";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OutputOptions {
    pub dir: PathBuf,
    /// Write every group of an image into one file.
    pub one_file: bool,
    /// Start each image's output from an empty file.
    pub overwrite: bool,
    /// Wrap the data in a `mem.data` assignment followed by a dispatch loop.
    pub add_code: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WriteMode {
    Append,
    Truncate,
}

impl WriteMode {
    pub fn for_group(index: usize, opts: &OutputOptions) -> Self {
        if opts.one_file || (opts.overwrite && index > 0) {
            WriteMode::Append
        } else {
            WriteMode::Truncate
        }
    }

    fn open(self, path: &Path) -> std::io::Result<File> {
        let mut o = OpenOptions::new();
        o.create(true);
        match self {
            WriteMode::Append => o.append(true),
            WriteMode::Truncate => o.write(true).truncate(true),
        };
        o.open(path)
    }
}

/// `{stem}[{chx},{chy}]({index}).txt`, without `({index})` in one-file mode.
pub fn output_path(dir: &Path, desc: &ImageDescriptor, index: usize, one_file: bool) -> PathBuf {
    let mut name = format!("{}[{},{}]", desc.stem(), desc.chx, desc.chy);
    if !one_file {
        name.push_str(&format!("({index})"));
    }
    name.push('.');
    name.push_str(OUTPUT_EXTENSION);
    dir.join(name)
}

/// Text written for one group.
pub fn render_group(chunk: &SerializedChunk, add_code: bool) -> String {
    let mut out = format!("--{}\n\n", chunk.header);
    if add_code {
        out.push_str("mem.data = ");
    }
    out.push_str(&chunk.data);
    out.push('\n');
    if add_code {
        out.push_str(&format!(
            "\nfor k,v in ipairs({{{}}}) do digiline_send(v, mem.data[k]) end\n",
            chunk.coords.lua_keys()
        ));
    }
    out.push('\n');
    out
}

/// Persist one serialized group and return the file it went to.
pub fn store_group(
    chunk: &SerializedChunk,
    index: usize,
    desc: &ImageDescriptor,
    opts: &OutputOptions,
) -> Result<PathBuf> {
    let path = output_path(&opts.dir, desc, index, opts.one_file);
    if opts.overwrite && index == 0 {
        File::create(&path)?;
    }
    let mut f = WriteMode::for_group(index, opts).open(&path)?;
    f.write_all(render_group(chunk, opts.add_code).as_bytes())?;
    tracing::debug!(
        "Successfully stored image: {}, chunks {} as {}",
        desc.path.display(),
        chunk.header,
        path.display()
    );
    Ok(path)
}
