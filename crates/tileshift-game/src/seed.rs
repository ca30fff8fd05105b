//! Reproducibility handle for shuffles.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

/// Failure to parse a [`ShuffleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SeedParseError {
    /// The input does not have exactly 64 characters.
    #[display("seed must be 64 hex characters, got {len}")]
    Length {
        /// Number of characters supplied.
        len: usize,
    },
    /// The input contains a character outside `[0-9a-fA-F]`.
    #[display("seed contains a non-hex character: {character:?}")]
    NotHex {
        /// The offending character.
        character: char,
    },
}

/// Seed of a shuffle walk: 32 opaque bytes.
///
/// Seeds display as 64 lowercase hex characters and parse back from the same
/// format, so a shuffle printed by one run can be replayed by another.
///
/// # Examples
///
/// ```
/// use tileshift_game::ShuffleSeed;
///
/// let seed: ShuffleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleSeed([u8; 32]);

impl ShuffleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }
}

impl fmt::Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ShuffleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::Length { len });
        }
        let mut bytes = [0_u8; 32];
        for (i, character) in s.chars().enumerate() {
            let Some(nibble) = character.to_digit(16) else {
                return Err(SeedParseError::NotHex { character });
            };
            #[expect(clippy::cast_possible_truncation)] // to_digit(16) is at most 15
            let nibble = nibble as u8;
            bytes[i / 2] = (bytes[i / 2] << 4) | nibble;
        }
        Ok(Self(bytes))
    }
}
