use encoding_rs::SHIFT_JIS;

use crate::error::{Result, ShiwakeError};

/// Decode raw journal-CSV bytes into UTF-8 text.
///
/// Valid UTF-8 passes through unchanged (a leading BOM is stripped);
/// anything else is decoded as Shift_JIS. Bytes that fit neither encoding
/// are an error, never replacement characters. Line endings are
/// normalized to `\n`.
pub fn decode_ledger_bytes(bytes: &[u8]) -> Result<String> {
    let text = match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => SHIFT_JIS
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or(ShiwakeError::Encoding)?
            .into_owned(),
    };
    let text = text.trim_start_matches('\u{feff}');
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}
