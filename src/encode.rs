//! # Output Encoding and Delivery
//!
//! Serializes the rendered canvas to PNG (lossless; alpha carried but not
//! required) and delivers it one of two ways, selected by the caller:
//!
//! - **File delivery**: write the bytes to a caller-supplied path, creating
//!   or overwriting the file. I/O failures surface as
//!   [`RenderError::OutputWrite`] with the offending path attached.
//! - **Text delivery**: return the bytes as a base64 string (standard
//!   alphabet, no line wrapping) for transports that cannot carry raw bytes.
//!
//! Both modes serialize through the same [`png_bytes`] step, so decoding the
//! base64 payload reproduces the file bytes exactly. Exactly one PNG is
//! produced per call.

use crate::RenderError;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use resvg::tiny_skia::Pixmap;
use std::fs;
use std::path::Path;

/// Serialize the canvas to PNG bytes.
pub fn png_bytes(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}

/// Write the canvas as a PNG file, creating or overwriting `path`.
pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<(), RenderError> {
    let bytes = png_bytes(pixmap)?;
    fs::write(path, &bytes).map_err(|source| RenderError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode the canvas as an unwrapped base64 PNG string.
pub fn to_base64(pixmap: &Pixmap) -> Result<String, RenderError> {
    Ok(BASE64_STANDARD.encode(png_bytes(pixmap)?))
}
