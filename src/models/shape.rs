use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::FixtureError;

/// The outline shapes the fixture generator knows how to draw
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[serde(rename = "circle")]
    Circle,
    #[serde(rename = "square")]
    Square,
    #[serde(rename = "triangle")]
    Triangle,
    #[serde(rename = "diamond")]
    Diamond,
}

impl ShapeKind {
    /// Generation order used when no explicit selection is configured
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Diamond => "diamond",
        }
    }

    /// Inset from the canvas edge on a 400px reference canvas
    pub fn reference_margin(&self) -> u32 {
        match self {
            ShapeKind::Circle => 40,
            ShapeKind::Square => 60,
            ShapeKind::Triangle | ShapeKind::Diamond => 50,
        }
    }

    /// Margin scaled to `canvas_size`; equals the reference margin at 400px.
    pub fn margin_for(&self, canvas_size: u32) -> u32 {
        (u64::from(self.reference_margin()) * u64::from(canvas_size) / u64::from(REFERENCE_CANVAS_SIZE)) as u32
    }
}

pub const REFERENCE_CANVAS_SIZE: u32 = 400;

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = FixtureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "circle" => Ok(ShapeKind::Circle),
            "square" => Ok(ShapeKind::Square),
            "triangle" => Ok(ShapeKind::Triangle),
            "diamond" => Ok(ShapeKind::Diamond),
            _ => Err(FixtureError::invalid_shape(value.trim())),
        }
    }
}

/// Parse a comma separated shape list such as `circle, diamond`.
///
/// Blank entries are ignored and an empty list selects every shape. The whole
/// list is rejected if any entry is unknown, so nothing gets generated from a
/// partially valid selection.
pub fn parse_shape_list(value: &str) -> Result<Vec<ShapeKind>, FixtureError> {
    let mut shapes = Vec::new();
    for entry in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let shape: ShapeKind = entry.parse()?;
        if !shapes.contains(&shape) {
            shapes.push(shape);
        }
    }

    if shapes.is_empty() {
        return Ok(ShapeKind::ALL.to_vec());
    }
    Ok(shapes)
}
