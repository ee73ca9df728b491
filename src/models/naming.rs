use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use super::{ShapeKind, ThemeVariant};
use crate::errors::FixtureError;

pub const LIGHT_SPLIT_DIR: &str = "test-img";
pub const DARK_SPLIT_DIR: &str = "test-inverse-img";

/// How generated fixtures are named inside the output directory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NamingStrategy {
    /// `{shape}_light.png` and `{shape}_dark.png`
    #[default]
    #[serde(rename = "flat-suffix")]
    FlatSuffix,
    /// `{shape}.png` and `{shape}_inverse.png`
    #[serde(rename = "flat-inverse")]
    FlatInverse,
    /// `test-img/{shape}.png` and `test-inverse-img/{shape}.png`
    #[serde(rename = "split")]
    SplitDirectories,
}

impl NamingStrategy {
    pub fn relative_path(&self, shape: ShapeKind, variant: ThemeVariant) -> PathBuf {
        match (self, variant) {
            (NamingStrategy::FlatSuffix, variant) => {
                PathBuf::from(format!("{}_{}.png", shape.name(), variant.label()))
            }
            (NamingStrategy::FlatInverse, ThemeVariant::Light) => {
                PathBuf::from(format!("{}.png", shape.name()))
            }
            (NamingStrategy::FlatInverse, ThemeVariant::Dark) => {
                PathBuf::from(format!("{}_inverse.png", shape.name()))
            }
            (NamingStrategy::SplitDirectories, ThemeVariant::Light) => {
                PathBuf::from(LIGHT_SPLIT_DIR).join(format!("{}.png", shape.name()))
            }
            (NamingStrategy::SplitDirectories, ThemeVariant::Dark) => {
                PathBuf::from(DARK_SPLIT_DIR).join(format!("{}.png", shape.name()))
            }
        }
    }
}

impl std::fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamingStrategy::FlatSuffix => write!(f, "flat-suffix"),
            NamingStrategy::FlatInverse => write!(f, "flat-inverse"),
            NamingStrategy::SplitDirectories => write!(f, "split"),
        }
    }
}

impl FromStr for NamingStrategy {
    type Err = FixtureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "flat-suffix" | "flat_suffix" => Ok(NamingStrategy::FlatSuffix),
            "flat-inverse" | "flat_inverse" | "inverse" => Ok(NamingStrategy::FlatInverse),
            "split" | "split-directories" | "split_directories" => Ok(NamingStrategy::SplitDirectories),
            _ => Err(FixtureError::invalid_naming(value.trim())),
        }
    }
}
