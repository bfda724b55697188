use crate::error::InvalidAnswer;

/// Read the player's answer field as a cube count.
///
/// Surrounding whitespace is ignored. Anything that is not a whole number of
/// at least 1 is rejected. Counts too large for `u32` saturate; they can never
/// match a real structure and are simply wrong answers.
pub fn parse_answer(input: &str) -> Result<u32, InvalidAnswer> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InvalidAnswer::Empty);
    }
    let value: i64 = match trimmed.parse() {
        Ok(value) => value,
        Err(_) if is_long_number(trimmed) => i64::MAX,
        Err(_) => return Err(InvalidAnswer::NotANumber(trimmed.to_string())),
    };
    if value < 1 {
        return Err(InvalidAnswer::NotPositive(value));
    }
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}

fn is_long_number(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
