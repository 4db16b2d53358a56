/// Parse a raw wait status from command-line text.
///
/// Accepts decimal (`512`, `-1`), hexadecimal (`0x200`) and octal (`0o1000`).
/// Hex and octal values up to `0xffffffff` are taken as the `int` bit pattern,
/// so `0xffffffff` is `-1`.
pub fn parse_status(text: &str) -> Result<i32, String> {
    let trimmed = text.trim();
    let radix_digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .map(|d| (16, d))
        .or_else(|| trimmed.strip_prefix("0o").map(|d| (8, d)));

    let parsed = match radix_digits {
        Some((radix, digits)) => u32::from_str_radix(digits, radix)
            .map(|v| v as i32)
            .map_err(|e| e.to_string()),
        None => trimmed.parse::<i32>().map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| format!("Invalid status '{text}': {e}"))
}
