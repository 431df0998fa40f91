//! Idea appearance: colors, font and border specs, and the default theme.
//!
//! Font sizes and border weights arrive as CSS-ish strings (`"12pt"`,
//! `"1px"`, `"12pt sans-serif"`). Layout uses the bare number: a `12pt` font
//! contributes 12 to an idea's height, regardless of unit.

use crate::error::{MapError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use winnow::ascii::{float, space0, space1};
use winnow::combinator::{alt, opt, terminated};
use winnow::prelude::*;
use winnow::token::rest;

// ─── Color ───────────────────────────────────────────────────────────────

/// 8-bit RGBA color, serialized as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let short = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when translucent. Usable as a CSS color.
    pub fn to_hex(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("bad color {s:?}")))
    }
}

// ─── Lengths ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Px,
    Pt,
}

/// A number with an optional CSS unit, e.g. `12pt` or `1px`. Serialized as
/// that string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub const fn pt(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Pt,
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        terminated(length, space0)
            .parse(input.trim_start())
            .map_err(|e| invalid(input, e))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            Unit::Px => "px",
            Unit::Pt => "pt",
        };
        write!(f, "{}{unit}", self.value)
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Length::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn unit(input: &mut &str) -> ModalResult<Unit> {
    alt(("px".value(Unit::Px), "pt".value(Unit::Pt))).parse_next(input)
}

fn length(input: &mut &str) -> ModalResult<Length> {
    let value: f64 = float.parse_next(input)?;
    let unit = opt(unit).parse_next(input)?.unwrap_or_default();
    Ok(Length { value, unit })
}

fn font_shorthand(input: &mut &str) -> ModalResult<(Length, String)> {
    let size = length.parse_next(input)?;
    let _: &str = space1.parse_next(input)?;
    let family: &str = rest.parse_next(input)?;
    Ok((size, family.trim().to_string()))
}

fn invalid(input: &str, err: impl fmt::Display) -> MapError {
    MapError::InvalidStyle {
        input: input.to_string(),
        reason: err.to_string(),
    }
}

// ─── Font / border ───────────────────────────────────────────────────────

/// Deserializes from either a `{color, size, family}` object or a
/// `"<size> <family>"` shorthand string (white text).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSpec {
    pub color: Color,
    pub size: Length,
    pub family: String,
}

impl FontSpec {
    /// Parse a `"<size> <family>"` shorthand such as `"12pt sans-serif"`.
    pub fn parse(shorthand: &str, color: Color) -> Result<Self> {
        let (size, family) = font_shorthand
            .parse(shorthand.trim())
            .map_err(|e| invalid(shorthand, e))?;
        if family.is_empty() {
            return Err(invalid(shorthand, "missing font family"));
        }
        Ok(Self {
            color,
            size,
            family,
        })
    }

    /// The shorthand handed to a drawing surface, e.g. `12pt sans-serif`.
    pub fn css(&self) -> String {
        format!("{} {}", self.size, self.family)
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct FontFields {
    color: Color,
    size: Length,
    family: String,
}

impl Default for FontFields {
    fn default() -> Self {
        let FontSpec {
            color,
            size,
            family,
        } = FontSpec::default();
        Self {
            color,
            size,
            family,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FontInput {
    Shorthand(String),
    Fields(FontFields),
}

impl<'de> Deserialize<'de> for FontSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match FontInput::deserialize(deserializer)? {
            FontInput::Shorthand(s) => {
                FontSpec::parse(&s, Color::WHITE).map_err(serde::de::Error::custom)
            }
            FontInput::Fields(FontFields {
                color,
                size,
                family,
            }) => Ok(Self {
                color,
                size,
                family,
            }),
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            size: Length::pt(12.0),
            family: "sans-serif".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Border {
    pub weight: Length,
    pub color: Color,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            weight: Length::px(1.0),
            color: Color::BLACK,
        }
    }
}

// ─── Idea style ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shape {
    /// Rounded rectangle with quadratic corners.
    #[default]
    Square,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaStyle {
    pub padding: f64,
    pub radius: f64,
    pub shape: Shape,
    pub font: FontSpec,
    pub border: Border,
    pub fill: Color,
}

impl Default for IdeaStyle {
    fn default() -> Self {
        Self {
            padding: 20.0,
            radius: 15.0,
            shape: Shape::Square,
            font: FontSpec::default(),
            border: Border::default(),
            fill: Color::rgb(0x00, 0x55, 0x00),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_forms() {
        assert_eq!(Color::from_hex("#050"), Some(Color::rgb(0, 0x55, 0)));
        assert_eq!(Color::from_hex("ccc"), Some(Color::rgb(0xcc, 0xcc, 0xcc)));
        assert_eq!(Color::from_hex("#6C5CE7").unwrap().to_hex(), "#6c5ce7");
        assert_eq!(Color::from_hex("#ff000080").unwrap().a, 0x80);
        assert_eq!(Color::from_hex("#12"), None);
        assert_eq!(Color::from_hex("#zzz"), None);
        assert_eq!(Color::from_hex("#+f+f+f"), None);
        assert_eq!(Color::from_hex("+ff"), None);
    }

    #[test]
    fn lengths() {
        assert_eq!(Length::parse("12pt").unwrap(), Length::pt(12.0));
        assert_eq!(Length::parse("1px").unwrap(), Length::px(1.0));
        assert_eq!(Length::parse(" 14 ").unwrap(), Length::px(14.0));
        assert_eq!(Length::parse("1.5px").unwrap(), Length::px(1.5));
        assert!(Length::parse("wide").is_err());
        assert!(Length::parse("12pt bold").is_err());
    }

    #[test]
    fn font_shorthand() {
        let f = FontSpec::parse("12pt sans-serif", Color::WHITE).unwrap();
        assert_eq!(f, FontSpec::default());
        assert_eq!(f.css(), "12pt sans-serif");

        let f = FontSpec::parse("16px Inter, system-ui", Color::BLACK).unwrap();
        assert_eq!(f.size, Length::px(16.0));
        assert_eq!(f.family, "Inter, system-ui");

        assert!(FontSpec::parse("12pt", Color::WHITE).is_err());
        assert!(FontSpec::parse("big serif", Color::WHITE).is_err());
    }

    #[test]
    fn style_strings_deserialize() {
        let border: Border = serde_json::from_str(r##"{ "weight": "2px" }"##).unwrap();
        assert_eq!(border.weight, Length::px(2.0));
        assert_eq!(border.color, Color::BLACK);
        assert_eq!(serde_json::to_string(&border.weight).unwrap(), r#""2px""#);

        let font: FontSpec = serde_json::from_str(r#""14px serif""#).unwrap();
        assert_eq!(font.size, Length::px(14.0));
        assert_eq!(font.family, "serif");

        let font: FontSpec =
            serde_json::from_str(r##"{ "size": "10pt", "color": "#000" }"##).unwrap();
        assert_eq!(font.size, Length::pt(10.0));
        assert_eq!(font.family, "sans-serif");
        assert_eq!(font.color, Color::BLACK);

        assert!(serde_json::from_str::<Border>(r#"{ "weight": "thick" }"#).is_err());
    }

    #[test]
    fn default_style_matches_theme() {
        let s = IdeaStyle::default();
        assert_eq!(s.padding, 20.0);
        assert_eq!(s.radius, 15.0);
        assert_eq!(s.fill.to_hex(), "#005500");
        assert_eq!(s.border.color, Color::BLACK);
        assert_eq!(s.border.weight, Length::px(1.0));
    }
}
