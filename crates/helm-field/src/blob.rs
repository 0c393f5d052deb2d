//! Binary field persistence.
//!
//! # Format
//!
//! ```text
//! offset  size              contents
//! 0       8                 magic b"HELMFLD1"
//! 8       4                 width  (u32 little-endian)
//! 12      4                 height (u32 little-endian)
//! 16      16 * width*height (x: f64 LE, y: f64 LE) per cell, row-major
//! ```
//!
//! Values are written verbatim, so a save/load round trip is bit-exact.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use helm_core::Vec2;

use crate::{CurrentField, FieldError, FieldResult};

const MAGIC: &[u8; 8] = b"HELMFLD1";

/// Write `field` to `out` in the blob format above.
pub fn save_blob<W: Write>(field: &CurrentField, out: &mut W) -> FieldResult<()> {
    out.write_all(MAGIC)?;
    out.write_all(&(field.width() as u32).to_le_bytes())?;
    out.write_all(&(field.height() as u32).to_le_bytes())?;
    for cell in field.cells() {
        out.write_all(&cell.x.to_le_bytes())?;
        out.write_all(&cell.y.to_le_bytes())?;
    }
    Ok(())
}

/// Read a field previously written by [`save_blob`].
pub fn load_blob<R: Read>(input: &mut R) -> FieldResult<CurrentField> {
    let mut magic = [0u8; 8];
    read_exact(input, &mut magic)?;
    if &magic != MAGIC {
        return Err(FieldError::Blob("bad magic — not a field blob".into()));
    }

    let mut u32_buf = [0u8; 4];
    read_exact(input, &mut u32_buf)?;
    let width = u32::from_le_bytes(u32_buf) as usize;
    read_exact(input, &mut u32_buf)?;
    let height = u32::from_le_bytes(u32_buf) as usize;

    let cell_count = width
        .checked_mul(height)
        .ok_or_else(|| FieldError::Blob(format!("dimensions {width}x{height} overflow")))?;

    let mut f64_buf = [0u8; 8];
    let mut cells = Vec::with_capacity(cell_count);
    for _ in 0..cell_count {
        read_exact(input, &mut f64_buf)?;
        let x = f64::from_le_bytes(f64_buf);
        read_exact(input, &mut f64_buf)?;
        let y = f64::from_le_bytes(f64_buf);
        cells.push(Vec2::new(x, y));
    }

    CurrentField::from_cells(width, height, cells)
}

/// Save `field` to a file at `path` (buffered).
pub fn save_path(field: &CurrentField, path: &Path) -> FieldResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    save_blob(field, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Load a field from a file at `path` (buffered).
pub fn load_path(path: &Path) -> FieldResult<CurrentField> {
    let mut input = BufReader::new(File::open(path)?);
    load_blob(&mut input)
}

/// `read_exact` with truncation reported as a blob error rather than a bare
/// `UnexpectedEof`.
fn read_exact<R: Read>(input: &mut R, buf: &mut [u8]) -> FieldResult<()> {
    input.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            FieldError::Blob("truncated field blob".into())
        } else {
            FieldError::Io(e)
        }
    })
}
