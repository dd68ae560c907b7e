//! Command-line interface for batch level generation

use crate::algorithm::generator::{GeneratorConfig, LevelGenerator};
use crate::algorithm::reshape::MajorityRule;
use crate::io::configuration::{
    DEFAULT_FILL_PERCENT, DEFAULT_HEIGHT, DEFAULT_LEVEL_COUNT, DEFAULT_RADIUS,
    DEFAULT_RESHAPE_STEPS, DEFAULT_SEED, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::export_preview;
use crate::io::level::{LevelMetadata, save_level};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cavegen")]
#[command(
    author,
    version,
    about = "Generate cave levels with cellular reshaping and route carving"
)]
/// Command-line arguments for the level generation tool
pub struct Cli {
    /// Output directory for generated levels
    #[arg(value_name = "OUTPUT", default_value = "levels")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Initial wall fill percentage
    #[arg(short, long, default_value_t = DEFAULT_FILL_PERCENT)]
    pub fill: u8,

    /// Moore neighborhood radius for reshape sensors
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: usize,

    /// Number of cellular reshape passes
    #[arg(short = 't', long, default_value_t = DEFAULT_RESHAPE_STEPS)]
    pub steps: usize,

    /// Number of levels to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_LEVEL_COUNT)]
    pub count: usize,

    /// Also export a PNG preview next to each level
    #[arg(short, long)]
    pub preview: bool,

    /// Print derived statistics for each level
    #[arg(long)]
    pub stats: bool,

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

/// Orchestrates batch generation of levels with progress tracking
pub struct BatchGenerator {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl BatchGenerator {
    /// Create a batch generator from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Generate all requested levels
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation or file export fails.
    pub fn process(&mut self) -> Result<()> {
        let config = GeneratorConfig {
            width: self.cli.width,
            height: self.cli.height,
            fill_probability: f64::from(self.cli.fill) / 100.0,
            neighborhood_radius: self.cli.radius,
            reshape_steps: self.cli.steps,
        };

        if let Some(ref mut pm) = self.progress {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            self.generate_level(config, index)?;
            if let Some(ref pm) = self.progress {
                pm.advance();
            }
        }

        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        Ok(())
    }

    // Allow print for user feedback on degraded generation outcomes
    #[allow(clippy::print_stderr)]
    fn generate_level(&mut self, config: GeneratorConfig, index: usize) -> Result<()> {
        let seed = self.cli.seed.wrapping_add(index as u64);
        let mut generator = LevelGenerator::new(config, seed)?;

        let decision = MajorityRule::default();
        let outcome = generator.generate(Some(&decision));

        if !outcome.carve.reached_end && !self.cli.quiet {
            eprintln!("Warning: level {index} route stopped short of the end position");
        }

        let level_path = self.cli.output.join(format!("level_{index:03}.txt"));
        save_level(
            generator.grid(),
            generator.start(),
            generator.end(),
            &LevelMetadata::default(),
            &level_path,
        )?;

        if self.cli.preview {
            let preview_path = level_path.with_extension("png");
            export_preview(
                generator.grid(),
                generator.start(),
                generator.end(),
                &preview_path,
            )?;
        }

        if self.cli.stats {
            Self::print_stats(&mut generator, index, outcome.carve.path.len());
        }

        Ok(())
    }

    // Allow print for the explicitly requested statistics dump
    #[allow(clippy::print_stdout)]
    fn print_stats(generator: &mut LevelGenerator, index: usize, route_len: usize) {
        let report = generator.report();
        println!(
            "level {index}: fill {:.1}%, rooms {}, route {} cells",
            report.fill_fraction * 100.0,
            report.room_count,
            route_len,
        );
        println!(
            "  walls: {} platforms, {} spires, {} solid, {} loners, {} ends",
            report.counts.platforms,
            report.counts.spires,
            report.counts.solids,
            report.counts.loners,
            report.counts.ends,
        );
        println!(
            "  air: {} empty, {} pits, {} tunnels, {} nooks, {} holes",
            report.counts.empties,
            report.counts.pits,
            report.counts.tunnels,
            report.counts.nooks,
            report.counts.holes,
        );
    }
}
