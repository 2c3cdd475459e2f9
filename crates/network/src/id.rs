use crate::error::ParseIdError;

/// Parses an external object identifier (launch id, campaign id, ...).
///
/// Accepts only plain ASCII digits forming a `u64` other than zero, which no
/// object on the ledger ever carries. Signs and whitespace are rejected.
pub fn parse_id(id: &str) -> Result<u64, ParseIdError> {
    // `u64::from_str` tolerates a leading '+'; a bare sign fails with InvalidDigit.
    let digits = if id.bytes().all(|b| b.is_ascii_digit()) {
        id
    } else {
        "+"
    };
    let obj_id: u64 = digits.parse()?;
    if obj_id == 0 {
        return Err(ParseIdError::Zero);
    }
    Ok(obj_id)
}
