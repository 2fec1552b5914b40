//! Command-line interface for generating portrait PNG files

use crate::generator::executor::{GenerationParameters, generate};
use crate::io::configuration::{DEFAULT_EYE_COUNT, DEFAULT_OUTER_SHAPE_COUNT, OUTPUT_PREFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::save_png_bytes;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cellface")]
#[command(
    author,
    version,
    about = "Generate seeded cell-creature portraits as PNG images"
)]
/// Command-line arguments for the portrait generator
pub struct Cli {
    /// Number of outer cell shapes placed around the face
    #[arg(short = 'n', long = "shapes", default_value_t = DEFAULT_OUTER_SHAPE_COUNT)]
    pub shapes: usize,

    /// Number of eyes overlaid on the cells (must not exceed --shapes)
    #[arg(short, long, default_value_t = DEFAULT_EYE_COUNT)]
    pub eyes: usize,

    /// Seed for reproducible generation; random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of portraits to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Output directory for generated images
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch portrait generation with progress tracking
pub struct GenerationRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl GenerationRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and write all requested portraits
    ///
    /// With an explicit base seed, portrait `i` of a batch uses seed + i so
    /// the whole batch is reproducible from one number.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, generation or the file write
    /// fails.
    pub fn run(&mut self) -> Result<()> {
        if self.cli.eyes > self.cli.shapes {
            return Err(invalid_parameter(
                "eyes",
                &self.cli.eyes,
                &format!("eye count cannot exceed shape count ({})", self.cli.shapes),
            ));
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            self.generate_one(index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn generate_one(&self, index: usize) -> Result<()> {
        let params = GenerationParameters {
            outer_shape_count: self.cli.shapes,
            eye_count: self.cli.eyes,
            seed: self.cli.seed.map(|base| base.saturating_add(index as u64)),
        };

        let result = generate(&params)?;

        let file_name = format!("{OUTPUT_PREFIX}_{}.png", result.seed_used);
        let output_path = self.cli.output.join(&file_name);
        save_png_bytes(&result.image_bytes, &output_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.record_output(&file_name, result.seed_used);
        }

        Ok(())
    }
}
