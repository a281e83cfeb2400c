//! PNG encoding of raw camera frames via `miniz_oxide`.
//!
//! Fixed-output encoder sufficient for the image sink: 8-bit truecolor
//! (RGB or RGBA), filter type 0 on every scanline, one zlib-wrapped IDAT
//! chunk. Not a general-purpose codec — palettes, interlacing, and bit
//! depths other than 8 are out of scope.

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::error::{Error, Result};
use crate::events::PixelEncoding;

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// zlib compression level for the IDAT stream (1-10).
const COMPRESSION_LEVEL: u8 = 6;

impl PixelEncoding {
    /// PNG color type byte (IHDR field 9).
    const fn png_color_type(self) -> u8 {
        match self {
            Self::Rgb8 => 2,  // truecolor
            Self::Rgba8 => 6, // truecolor with alpha
        }
    }
}

/// Encode packed 8-bit pixel rows as a PNG image.
///
/// `data` must hold exactly `width * height * bytes_per_pixel` bytes.
pub fn encode(width: u32, height: u32, encoding: PixelEncoding, data: &[u8]) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(Error::BadFrame("zero image dimension"));
    }
    let stride = (width as usize)
        .checked_mul(encoding.bytes_per_pixel())
        .ok_or(Error::BadFrame("image dimensions overflow"))?;
    let expected = stride
        .checked_mul(height as usize)
        .ok_or(Error::BadFrame("image dimensions overflow"))?;
    if data.len() != expected {
        return Err(Error::BadFrame("payload length does not match dimensions"));
    }

    // Each scanline is prefixed with filter type 0 (None).
    let mut raw = Vec::with_capacity(expected + height as usize);
    for row in data.chunks_exact(stride) {
        raw.push(0);
        raw.extend_from_slice(row);
    }
    let idat = compress_to_vec_zlib(&raw, COMPRESSION_LEVEL);

    let mut ihdr = [0u8; 13];
    ihdr[0..4].copy_from_slice(&width.to_be_bytes());
    ihdr[4..8].copy_from_slice(&height.to_be_bytes());
    ihdr[8] = 8; // bit depth
    ihdr[9] = encoding.png_color_type();
    // bytes 10-12: compression 0, filter 0, interlace 0

    let mut out = Vec::with_capacity(SIGNATURE.len() + ihdr.len() + idat.len() + 3 * 12);
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr);
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

/// Append one chunk: length, type, data, CRC over type + data.
fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);

    let mut crc = Crc32::new();
    crc.update(chunk_type);
    crc.update(data);
    out.extend_from_slice(&crc.finish().to_be_bytes());
}

/// CRC-32/ISO-HDLC as required by the PNG chunk trailer. Bitwise, no
/// table — chunk counts here are tiny and the IDAT payload dominates.
struct Crc32(u32);

impl Crc32 {
    fn new() -> Self {
        Self(0xFFFF_FFFF)
    }

    fn update(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= u32::from(b);
            for _ in 0..8 {
                let lsb = self.0 & 1;
                self.0 >>= 1;
                if lsb != 0 {
                    self.0 ^= 0xEDB8_8320;
                }
            }
        }
    }

    fn finish(self) -> u32 {
        !self.0
    }
}
