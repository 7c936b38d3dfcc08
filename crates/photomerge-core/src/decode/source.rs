//! Source handles and the header-only probe pass.
//!
//! Both decode passes go through here. A pass never shares a reader with
//! the other: [`ImageSource`] hands out a fresh handle per pass, which is
//! what lets the probe consume the header prefix freely.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek, SeekFrom};
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, ImageSource, Orientation};

/// Header information gathered by the probe pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SourceInfo {
    /// Native width as stored, before orientation correction.
    pub width: u32,
    /// Native height as stored, before orientation correction.
    pub height: u32,
    /// EXIF orientation, `Normal` when the source carries none.
    pub orientation: Orientation,
}

impl SourceInfo {
    /// Dimensions after orientation correction.
    pub fn oriented_dimensions(&self) -> (u32, u32) {
        if self.orientation.swaps_dimensions() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

impl ImageSource {
    /// Probe pass: read the image header and EXIF orientation from a fresh
    /// handle without decoding any pixel data.
    pub(crate) fn probe(&self) -> Result<SourceInfo, DecodeError> {
        match self {
            ImageSource::Memory(bytes) => probe_header(Cursor::new(bytes.as_ref())),
            ImageSource::Path(path) => probe_header(BufReader::new(open_file(path)?)),
        }
    }

    /// Decode pass: fully decode the image from a second fresh handle.
    pub(crate) fn decode_image(&self) -> Result<DynamicImage, DecodeError> {
        match self {
            ImageSource::Memory(bytes) => decode_from(Cursor::new(bytes.as_ref())),
            ImageSource::Path(path) => decode_from(BufReader::new(open_file(path)?)),
        }
    }
}

fn open_file(path: &Path) -> Result<File, DecodeError> {
    File::open(path)
        .map_err(|e| DecodeError::SourceUnreadable(format!("{}: {e}", path.display())))
}

fn probe_header<R: BufRead + Seek>(mut reader: R) -> Result<SourceInfo, DecodeError> {
    let orientation = extract_orientation(&mut reader);

    // The EXIF scan leaves the reader mid-stream; the handle supports
    // seeking within a pass, so rewind before reading the header proper.
    reader
        .seek(SeekFrom::Start(0))
        .map_err(|e| DecodeError::SourceUnreadable(e.to_string()))?;

    let (width, height) = ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|e| DecodeError::SourceUnreadable(e.to_string()))?
        .into_dimensions()
        .map_err(|e| DecodeError::SourceUnreadable(e.to_string()))?;

    Ok(SourceInfo {
        width,
        height,
        orientation,
    })
}

fn decode_from<R: BufRead + Seek>(reader: R) -> Result<DynamicImage, DecodeError> {
    ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|e| DecodeError::SourceUnreadable(e.to_string()))?
        .decode()
        .map_err(|e| DecodeError::SourceUnreadable(e.to_string()))
}

/// Extract the EXIF orientation tag, defaulting to `Normal` when the source
/// has no EXIF data or the tag is missing.
fn extract_orientation<R: BufRead + Seek>(reader: &mut R) -> Orientation {
    match Reader::new().read_from_container(reader) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}
