pub mod handlers;

use crate::presentation::cli::Cli;
use pixchunk_core::error::Result;
use pixchunk_core::{Brackets, ChunkSize, ConvertOptions};

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        verbose: _,
        group_size,
        add_code,
        one_file,
        overwrite,
        chunk_width,
        chunk_height,
        open_bracket,
        close_bracket,
    } = cli;

    let opts = ConvertOptions {
        chunk_size: ChunkSize::new(chunk_width, chunk_height)?,
        group_size: group_size as usize,
        brackets: Brackets {
            open: open_bracket,
            close: close_bracket,
        },
        one_file,
        overwrite,
        add_code,
        ..Default::default()
    };
    handlers::handle_convert(input, output, opts)
}
