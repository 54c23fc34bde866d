use std::fmt::{Display, Formatter};

use anyhow::Result;

use crate::RepackError;
use crate::config::RowKey;

/// An RGB colour decoded from a `#rrggbb` fill token
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Hue, lightness and saturation, each in `[0, 1]` (hue in `[0, 1)`).
    pub fn to_hls(self) -> (f64, f64, f64) {
        let Color(r, g, b) = self;
        let (r, g, b) = (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);

        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let lightness = (min_c + max_c) / 2.0;
        if max_c == min_c {
            //achromatic
            return (0.0, lightness, 0.0);
        }

        let span = max_c - min_c;
        let saturation = match lightness <= 0.5 {
            true => span / (max_c + min_c),
            false => span / (2.0 - max_c - min_c),
        };

        let rc = (max_c - r) / span;
        let gc = (max_c - g) / span;
        let bc = (max_c - b) / span;
        let hue = if r == max_c {
            bc - gc
        } else if g == max_c {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        ((hue / 6.0).rem_euclid(1.0), lightness, saturation)
    }
}

impl TryFrom<&str> for Color {
    type Error = RepackError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        let malformed = || RepackError::MalformedColorToken {
            token: token.to_owned(),
        };
        let hex = token.trim().strip_prefix('#').ok_or_else(malformed)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| malformed());
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Scalar used to order shapes within a row, derived from their fill token.
///
/// Fails closed with [`MalformedColorToken`](RepackError::MalformedColorToken): a token that
/// is not a `#rrggbb` colour never gets a default key.
pub fn fill_to_intensity(token: &str, key: RowKey) -> Result<f64> {
    let (hue, lightness, _) = Color::try_from(token)?.to_hls();
    Ok(match key {
        RowKey::Lightness => lightness,
        RowKey::Hue => hue,
    })
}
