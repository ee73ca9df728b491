use std::env;
use std::path::PathBuf;

use crate::errors::FixtureError;
use crate::models::{parse_shape_list, NamingStrategy, ShapeKind};
use crate::render::{RenderSettings, DEFAULT_CANVAS_SIZE, DEFAULT_STROKE_WIDTH};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub output_dir: PathBuf,
    pub canvas_size: u32,
    pub stroke_width: u32,
    pub naming: NamingStrategy,
    pub shapes: Vec<ShapeKind>,
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            canvas_size: DEFAULT_CANVAS_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            naming: NamingStrategy::default(),
            shapes: ShapeKind::ALL.to_vec(),
            concurrency: 1,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, FixtureError> {
        Self::from_env_except(&[])
    }

    /// Same as `from_env`, but the `ignored` variables are treated as unset.
    /// Used for keys a command-line flag replaces, so their values are never
    /// parsed.
    pub fn from_env_except(ignored: &[&str]) -> Result<Self, FixtureError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| {
            if ignored.contains(&key) {
                None
            } else {
                env::var(key).ok()
            }
        })
    }

    /// Build a config from an arbitrary variable source. Unset or unparsable
    /// numbers keep their defaults; unknown shape or naming names are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FixtureError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let naming = match lookup("FIXTURE_NAMING") {
            Some(value) => value.parse()?,
            None => defaults.naming,
        };
        let shapes = match lookup("FIXTURE_SHAPES") {
            Some(value) => parse_shape_list(&value)?,
            None => defaults.shapes,
        };

        Ok(Config {
            output_dir: lookup("FIXTURE_OUTPUT_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            canvas_size: lookup("FIXTURE_CANVAS_SIZE")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.canvas_size),
            stroke_width: lookup("FIXTURE_STROKE_WIDTH")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.stroke_width),
            naming,
            shapes,
            concurrency: lookup("FIXTURE_CONCURRENCY")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(defaults.concurrency)
                .max(1),
        })
    }

    pub fn render_settings(&self) -> Result<RenderSettings, FixtureError> {
        RenderSettings::new(self.canvas_size, self.stroke_width)
    }
}

/// `~/Documents/ImageStore/unsorted`, falling back to the working directory
/// when no home directory is known.
pub fn default_output_dir() -> PathBuf {
    let home = env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .or_else(|| env::var_os("USERPROFILE").filter(|h| !h.is_empty()))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    home.join("Documents").join("ImageStore").join("unsorted")
}
