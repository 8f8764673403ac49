//! Small parsing helpers shared by the library and its command line front end.

use crate::Result;

/// Parse an offset or length given as `0x`-prefixed hex or as decimal.
///
/// Surrounding whitespace is ignored and both `0x` and `0X` prefixes are accepted.
///
/// # Errors
/// Returns [`crate::Error::Malformed`] if the text is not a valid number.
///
/// # Examples
///
/// ```rust
/// use dumpscope::utils::parse_offset;
///
/// assert_eq!(parse_offset("0x7C00")?, 0x7C00);
/// assert_eq!(parse_offset("512")?, 512);
/// assert!(parse_offset("0xZZ").is_err());
/// # Ok::<(), dumpscope::Error>(())
/// ```
pub fn parse_offset(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        usize::from_str_radix(hex, 16).map_err(|_| malformed_error!("invalid hex offset: {}", text))
    } else {
        trimmed
            .parse::<usize>()
            .map_err(|_| malformed_error!("invalid offset: {}", text))
    }
}
