//! Layout attached properties registered by the defaults.

use std::fmt;
use std::str::FromStr;

use crate::property::ParsedProperty;
use crate::widget::Widget;

// ── Alignment ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl FromStr for HorizontalAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err("expected one of left, center, right".into()),
        }
    }
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl FromStr for VerticalAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => Err("expected one of top, center, bottom".into()),
        }
    }
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        })
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────

/// Parse a size or stretch factor: any number, floored and clamped at zero.
pub fn parse_non_negative(s: &str) -> Result<u32, String> {
    let n: f64 = s.trim().parse().map_err(|_| "expected a number".to_string())?;
    if n.is_nan() {
        return Err("expected a number".into());
    }
    // `as` saturates, so +inf maps to u32::MAX.
    Ok(n.floor().max(0.0) as u32)
}

// ── Properties ────────────────────────────────────────────────────────────

pub static HORIZONTAL_ALIGNMENT: ParsedProperty<HorizontalAlignment> =
    ParsedProperty::new("layout.horizontal-alignment", HorizontalAlignment::Center, str::parse);

pub static VERTICAL_ALIGNMENT: ParsedProperty<VerticalAlignment> =
    ParsedProperty::new("layout.vertical-alignment", VerticalAlignment::Center, str::parse);

pub static BOX_SIZE_BASIS: ParsedProperty<u32> =
    ParsedProperty::new("box-layout.size-basis", 0, parse_non_negative);

pub static BOX_STRETCH: ParsedProperty<u32> =
    ParsedProperty::new("box-layout.stretch", 0, parse_non_negative);

pub static SPLIT_STRETCH: ParsedProperty<u32> =
    ParsedProperty::new("split-layout.stretch", 0, parse_non_negative);

pub fn horizontal_alignment(w: &dyn Widget) -> HorizontalAlignment {
    HORIZONTAL_ALIGNMENT.value(w)
}

pub fn vertical_alignment(w: &dyn Widget) -> VerticalAlignment {
    VERTICAL_ALIGNMENT.value(w)
}

pub fn box_size_basis(w: &dyn Widget) -> u32 {
    BOX_SIZE_BASIS.value(w)
}

pub fn box_stretch(w: &dyn Widget) -> u32 {
    BOX_STRETCH.value(w)
}

pub fn split_stretch(w: &dyn Widget) -> u32 {
    SPLIT_STRETCH.value(w)
}
