use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Cut images into chunks of hex colors for digiline displays",
    long_about = None
)]
pub struct Cli {
    /// Input image, or a directory of images
    pub input: PathBuf,

    /// Directory the chunk files are written to
    pub output: PathBuf,

    /// See more details while the program is running
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of displays (chunks) per file, 1 to 10
    #[arg(
        short,
        long,
        alias = "group_size",
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(1..=10)
    )]
    pub group_size: u8,

    /// Add Lua code to make copy-pasting into a luacontroller easier
    #[arg(short = 'c', long, alias = "add_code")]
    pub add_code: bool,

    /// Store all groups of an image in just one file
    #[arg(short = 'f', long, alias = "one_file")]
    pub one_file: bool,

    /// Overwrite existing files instead of appending to them
    #[arg(long)]
    pub overwrite: bool,

    /// Chunk width in pixels
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..))]
    pub chunk_width: u32,

    /// Chunk height in pixels
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..))]
    pub chunk_height: u32,

    /// Character opening each list in the data block
    #[arg(long, default_value_t = '{')]
    pub open_bracket: char,

    /// Character closing each list in the data block
    #[arg(long, default_value_t = '}')]
    pub close_bracket: char,
}
