/// Petition signature list identifier.
use std::fmt;

use super::errors::SignatureError;

/// Positive integer naming one petition's signature list.
///
/// Found in the `<meta property="list_id">` tag of the petition page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetitionListId(u64);

impl PetitionListId {
    /// Validate the raw `--list_id` value.
    ///
    /// Surrounding whitespace is ignored. Anything other than a positive
    /// decimal integer is rejected, including `0`, signs, and decimals.
    ///
    /// # Errors
    ///
    /// Returns `SignatureError::Usage` when the value is absent or invalid.
    pub fn parse(raw: Option<&str>) -> Result<Self, SignatureError> {
        let digits = raw.map(str::trim).ok_or(SignatureError::Usage)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SignatureError::Usage);
        }
        match digits.parse::<u64>() {
            Ok(0) | Err(_) => Err(SignatureError::Usage),
            Ok(id) => Ok(Self(id)),
        }
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PetitionListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
