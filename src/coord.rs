//! Text notation for board coordinates.
//!
//! Columns are letters `a`-`h` (left to right), rows are digits `1`-`8`
//! (top to bottom), so `"d3"` is `(2, 3)`.

use crate::board::Pos;
use crate::constants::SIZE;
use crate::error::EngineError;

const COLUMNS: &str = "abcdefgh";

/// Parse a coordinate like `"d3"` or `"D3"` into a `(row, col)` pair.
pub fn parse_coord(s: &str) -> Result<Pos, EngineError> {
    let invalid = || EngineError::InvalidCoord(s.to_string());
    let mut chars = s.trim().chars();

    let col_ch = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
    let col = COLUMNS.find(col_ch).ok_or_else(invalid)?;
    let row = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(invalid)? as usize;

    if chars.next().is_some() || row == 0 || row > SIZE {
        return Err(invalid());
    }

    Ok((row as i32 - 1, col as i32))
}

/// Convert a `(row, col)` pair to notation. Off-board positions give `"??"`.
pub fn str_coord(pos: Pos) -> String {
    let n = SIZE as i32;
    if !(0..n).contains(&pos.0) || !(0..n).contains(&pos.1) {
        return "??".to_string();
    }
    let col = COLUMNS.as_bytes()[pos.1 as usize] as char;
    format!("{col}{}", pos.0 + 1)
}
