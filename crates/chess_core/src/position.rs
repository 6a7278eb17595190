use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PositionError;
use crate::piece::Color;

/// Files are lettered, so a board is at most `a`-`z` wide.
pub const MAX_FILE_COUNT: u8 = 26;

static ALGEBRAIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)(\d+)$").expect("algebraic position pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub file: u8, // 1-based, 1 = a
    pub rank: u8, // 1-based
}

impl Position {
    /// Builds a position from 1-based coordinates. Whether it lies on a given
    /// board is the board's concern; this only rejects zero and unlettered files.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if (1..=MAX_FILE_COUNT).contains(&file) && rank >= 1 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Case-insensitive parse of `<file letter><rank>`, e.g. `"e4"` or `"E4"`.
    pub fn from_algebraic(notation: &str) -> Option<Self> {
        notation.parse().ok()
    }

    pub fn file_letter(&self) -> char {
        // `new` and `from_str` only build lettered files.
        file_letter(i32::from(self.file)).unwrap_or('?')
    }

    pub fn square_color(&self) -> Color {
        square_color(*self)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let caps = ALGEBRAIC
            .captures(raw)
            .ok_or_else(|| PositionError::Malformed(raw.to_string()))?;

        let letters = caps[1].to_lowercase();
        let digits = &caps[2];

        let mut chars = letters.chars();
        let file = match (chars.next(), chars.next()) {
            (Some(letter), None) => file_number(letter),
            _ => None,
        }
        .ok_or_else(|| PositionError::UnknownFile(letters.clone()))?;

        let rank = digits
            .parse::<u8>()
            .ok()
            .filter(|&rank| rank >= 1)
            .ok_or_else(|| PositionError::InvalidRank(digits.to_string()))?;

        Ok(Self { file, rank })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank)
    }
}

/// Letter of a 1-based file number: 1 is `a`, 26 is `z`.
pub fn file_letter(file: i32) -> Option<char> {
    if (1..=i32::from(MAX_FILE_COUNT)).contains(&file) {
        Some(char::from(b'a' + (file - 1) as u8))
    } else {
        None
    }
}

/// 1-based file number of a lowercase file letter.
pub fn file_number(letter: char) -> Option<u8> {
    if letter.is_ascii_lowercase() {
        Some(letter as u8 - b'a' + 1)
    } else {
        None
    }
}

/// Shade of a square, independent of what stands on it. `a1` is dark, which
/// is reported as `Color::Black`.
pub fn square_color(position: Position) -> Color {
    if (u16::from(position.file) + u16::from(position.rank)) % 2 == 0 {
        Color::Black
    } else {
        Color::White
    }
}
