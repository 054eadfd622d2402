use crate::domain::{ChunkSize, ImageDescriptor};
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageError, ImageReader};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A decoded image that holds at least one whole chunk.
#[derive(Clone, Debug)]
pub struct ValidImage {
    pub descriptor: ImageDescriptor,
    /// Upright pixels: any EXIF orientation is already applied.
    pub pixels: DynamicImage,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Not an image, corrupted, or decodes to nothing.
    Unreadable(PathBuf),
    /// Narrower or shorter than one chunk.
    TooSmall(PathBuf),
    /// Any other failure while reading the file.
    Decode { path: PathBuf, message: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Unreadable(p) => write!(
                f,
                "Failed to read image (not an image or corrupted): {}",
                p.display()
            ),
            Rejection::TooSmall(p) => write!(
                f,
                "Can't process image (smaller than chunk size): {}",
                p.display()
            ),
            Rejection::Decode { path, message } => write!(f, "{}: {message}", path.display()),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Validation {
    Valid(ValidImage),
    Rejected(Rejection),
}

fn upright(mut img: DynamicImage, orientation: Orientation) -> DynamicImage {
    img.apply_orientation(orientation);
    img
}

fn decode(path: &Path) -> Result<DynamicImage, ImageError> {
    if std::fs::metadata(path)?.len() == 0 {
        return Err(ImageError::IoError(ErrorKind::UnexpectedEof.into()));
    }
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let img = DynamicImage::from_decoder(decoder)?;
    Ok(upright(img, orientation))
}

/// Decode `path` and decide whether it can be cut into `chunk`-sized pieces.
pub fn validate(path: &Path, chunk: ChunkSize) -> Validation {
    let pixels = match decode(path) {
        Ok(p) => p,
        Err(ImageError::Unsupported(_) | ImageError::Decoding(_)) => {
            return Validation::Rejected(Rejection::Unreadable(path.to_path_buf()));
        }
        Err(ImageError::IoError(e))
            if matches!(e.kind(), ErrorKind::UnexpectedEof | ErrorKind::InvalidData) =>
        {
            return Validation::Rejected(Rejection::Unreadable(path.to_path_buf()));
        }
        Err(e) => {
            return Validation::Rejected(Rejection::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    };
    let (width, height) = (pixels.width(), pixels.height());
    if width == 0 || height == 0 {
        return Validation::Rejected(Rejection::Unreadable(path.to_path_buf()));
    }
    let (chx, chy) = chunk.grid_for(width, height);
    if chx == 0 || chy == 0 {
        return Validation::Rejected(Rejection::TooSmall(path.to_path_buf()));
    }
    tracing::debug!("Successfully read image: {}", path.display());
    Validation::Valid(ValidImage {
        descriptor: ImageDescriptor {
            path: path.to_path_buf(),
            chx,
            chy,
        },
        pixels,
    })
}
