use std::io::{self, Cursor};

/// Reads the pixel width and height declared in a PNG's IHDR chunk.
///
/// Only the header chunks are decoded; pixel data is never touched. Anything
/// that is not a well-formed PNG header yields `InvalidData`.
pub fn read_png_dimensions(data: &[u8]) -> io::Result<(u32, u32)> {
    let decoder = png::Decoder::new(Cursor::new(data));
    let reader = decoder
        .read_info()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("cannot identify PNG image: {}", e)))?;
    let info = reader.info();
    Ok((info.width, info.height))
}
