use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use tracing::{error, info};

use crate::{
    config::Config,
    errors::FixtureError,
    models::{NamingStrategy, ShapeKind, ThemeVariant},
    render::ShapeFixtureGenerator,
    services::FixtureWriter,
};

/// One image the batch will produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureJob {
    pub shape: ShapeKind,
    pub variant: ThemeVariant,
    pub relative_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GeneratedFixture {
    pub shape: ShapeKind,
    pub variant: ThemeVariant,
    /// Path relative to the output directory, always `/`-separated
    pub file_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub fixtures: Vec<GeneratedFixture>,
}

impl GenerationReport {
    pub fn count(&self) -> usize {
        self.fixtures.len()
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.fixtures.iter().map(|f| f.file_name.as_str()).collect()
    }
}

/// Generates every configured shape in both themes and writes the results.
///
/// Jobs run in chunks of `concurrency`. The first failure stops the batch:
/// the chunk it belongs to is allowed to finish, no later chunk starts, and
/// the error is returned. Files written before the failure are left in place.
pub struct FixtureBatch {
    generator: ShapeFixtureGenerator,
    writer: FixtureWriter,
    naming: NamingStrategy,
    shapes: Vec<ShapeKind>,
    concurrency: usize,
}

impl FixtureBatch {
    pub fn new(config: &Config) -> Result<Self, FixtureError> {
        let settings = config.render_settings()?;
        Ok(Self {
            generator: ShapeFixtureGenerator::new(settings),
            writer: FixtureWriter::new(config.output_dir.clone()),
            naming: config.naming,
            shapes: config.shapes.clone(),
            concurrency: config.concurrency.max(1),
        })
    }

    pub fn output_dir(&self) -> &Path {
        self.writer.base_dir()
    }

    /// Jobs in generation order: shapes as configured, light before dark.
    pub fn plan(&self) -> Vec<FixtureJob> {
        self.shapes
            .iter()
            .flat_map(|&shape| {
                ThemeVariant::ALL.into_iter().map(move |variant| FixtureJob {
                    shape,
                    variant,
                    relative_path: self.naming.relative_path(shape, variant),
                })
            })
            .collect()
    }

    pub async fn run(&self) -> Result<GenerationReport, FixtureError> {
        let jobs = self.plan();
        info!(
            "Generating {} fixtures in {:?} (naming: {}, concurrency: {})",
            jobs.len(),
            self.writer.base_dir(),
            self.naming,
            self.concurrency
        );

        let mut fixtures = Vec::with_capacity(jobs.len());

        for chunk in jobs.chunks(self.concurrency) {
            let mut handles = Vec::with_capacity(chunk.len());
            for job in chunk.iter().cloned() {
                let generator = self.generator;
                let writer = self.writer.clone();
                handles.push(tokio::spawn(async move {
                    generate_single_fixture(generator, writer, job).await
                }));
            }

            let mut first_error = None;
            for handle in handles {
                match handle.await {
                    Ok(Ok(fixture)) => {
                        info!("Created {}", fixture.file_name);
                        fixtures.push(fixture);
                    }
                    Ok(Err(e)) => {
                        error!("Error generating fixture: {}", e);
                        if first_error.is_none() {
                            first_error = Some(e);
                        }
                    }
                    Err(e) => {
                        error!("Task join error: {}", e);
                        if first_error.is_none() {
                            first_error = Some(FixtureError::Other(anyhow::anyhow!(
                                "fixture task failed: {}",
                                e
                            )));
                        }
                    }
                }
            }

            if let Some(e) = first_error {
                return Err(e);
            }
        }

        info!("Created {} images in {:?}", fixtures.len(), self.writer.base_dir());
        Ok(GenerationReport {
            output_dir: self.writer.base_dir().to_path_buf(),
            fixtures,
        })
    }
}

async fn generate_single_fixture(
    generator: ShapeFixtureGenerator,
    writer: FixtureWriter,
    job: FixtureJob,
) -> Result<GeneratedFixture, FixtureError> {
    let FixtureJob { shape, variant, relative_path } = job;

    let raster = tokio::task::spawn_blocking(move || generator.render(shape, variant.theme()))
        .await
        .map_err(|e| FixtureError::Other(anyhow::anyhow!("render task for {} failed: {}", shape, e)))?;

    let path = writer.write_png(&raster, &relative_path).await?;

    Ok(GeneratedFixture {
        shape,
        variant,
        file_name: display_name(&relative_path),
        path,
    })
}

fn display_name(relative_path: &Path) -> String {
    relative_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
