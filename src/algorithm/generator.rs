//! Generation pipeline orchestrator
//!
//! Owns the grid and every derived structure, and sequences the phases:
//! randomize, reshape, partition, route selection, carve. All state is
//! confined to one logical thread of control; nothing here suspends or
//! retries.

use crate::algorithm::carver::{self, CarveOutcome};
use crate::algorithm::reshape::{self, CellDecision};
use crate::algorithm::route::{self, RouteEnds};
use crate::analysis::cache::DerivedAnalysis;
use crate::analysis::classifier::PatternCounts;
use crate::analysis::integral::IntegralImage;
use crate::analysis::report::LevelReport;
use crate::io::error::invalid_parameter;
use crate::spatial::grid::TileGrid;
use crate::spatial::rooms::RoomGraph;
use rand::{SeedableRng, rngs::StdRng};

/// Construction parameters for one generation pipeline
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Probability that randomization blocks a cell, in [0, 1]
    pub fill_probability: f64,
    /// Moore neighborhood radius for reshape sensor vectors
    pub neighborhood_radius: usize,
    /// Number of reshape passes run by the full pipeline
    pub reshape_steps: usize,
}

/// Result of one full generation run
#[derive(Clone, Debug)]
pub struct GenerationOutcome {
    /// Carved route and its termination state
    pub carve: CarveOutcome,
    /// Whether every reshape decision stayed within [0, 1]
    pub decisions_in_range: bool,
}

/// Owns one level through its generation lifecycle
///
/// The generator always terminates and always produces a grid; apart from
/// malformed construction parameters there are no failure paths, only
/// documented degraded outcomes surfaced through [`GenerationOutcome`].
pub struct LevelGenerator {
    config: GeneratorConfig,
    grid: TileGrid,
    analysis: DerivedAnalysis,
    rooms: Option<RoomGraph>,
    route: RouteEnds,
    rng: StdRng,
}

impl LevelGenerator {
    /// Create a generator with validated parameters and a seeded RNG
    ///
    /// # Errors
    ///
    /// Returns an error if either grid dimension is zero or above the
    /// safety limit, or if the fill probability is not within [0, 1].
    pub fn new(config: GeneratorConfig, seed: u64) -> crate::io::error::Result<Self> {
        let grid = TileGrid::new(config.width, config.height)?;

        if !config.fill_probability.is_finite()
            || !(0.0..=1.0).contains(&config.fill_probability)
        {
            return Err(invalid_parameter(
                "fill_probability",
                &config.fill_probability,
                &"must be within [0, 1]",
            ));
        }

        let route = route::default_ends(config.width, config.height);
        Ok(Self {
            config,
            grid,
            analysis: DerivedAnalysis::new(),
            rooms: None,
            route,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Access the construction parameters
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Access the current grid
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Current route start position
    pub const fn start(&self) -> [i32; 2] {
        self.route.start
    }

    /// Current route end position
    pub const fn end(&self) -> [i32; 2] {
        self.route.end
    }

    /// Room graph from the most recent partition, if one has run
    pub const fn room_graph(&self) -> Option<&RoomGraph> {
        self.rooms.as_ref()
    }

    /// Re-randomize the grid from the configured fill probability
    pub fn randomize(&mut self) {
        self.grid
            .randomize(self.config.fill_probability, &mut self.rng);
        self.rooms = None;
    }

    /// Run one reshape pass; returns the decision in-range flag
    pub fn reshape(&mut self, decision: &dyn CellDecision) -> bool {
        let in_range = reshape::reshape(
            &mut self.grid,
            self.config.neighborhood_radius,
            decision,
        );
        self.rooms = None;
        in_range
    }

    /// Run the configured number of reshape passes
    ///
    /// Returns `true` only if every decision of every pass stayed in range.
    pub fn reshape_all(&mut self, decision: &dyn CellDecision) -> bool {
        let mut in_range = true;
        for _ in 0..self.config.reshape_steps {
            in_range &= self.reshape(decision);
        }
        in_range
    }

    /// Summed-area table for the current grid, rebuilt only when stale
    pub fn integral(&mut self) -> &IntegralImage {
        self.analysis.integral(&self.grid)
    }

    /// Classifier counters for the current grid, rebuilt only when stale
    pub fn pattern_counts(&mut self) -> PatternCounts {
        self.analysis.pattern_counts(&self.grid)
    }

    /// Partition the current grid into rooms, replacing any prior graph
    pub fn partition_rooms(&mut self) -> &RoomGraph {
        self.rooms.insert(RoomGraph::partition(&self.grid))
    }

    /// Pick route endpoints from the room graph, partitioning first if needed
    pub fn select_route(&mut self) -> RouteEnds {
        if self.rooms.is_none() {
            self.rooms = Some(RoomGraph::partition(&self.grid));
        }
        let ends = match &self.rooms {
            Some(graph) => route::select_route(
                graph,
                self.grid.width(),
                self.grid.height(),
                &mut self.rng,
            ),
            None => route::default_ends(self.grid.width(), self.grid.height()),
        };
        self.route = ends;
        ends
    }

    /// Carve a route between the selected endpoints
    ///
    /// A small pocket around the start is opened first so the route begins
    /// in air; near corners some pocket coordinates fall outside the grid
    /// and are dropped by the guarded write.
    pub fn carve(&mut self) -> CarveOutcome {
        let [x, y] = self.route.start;
        for dx in -1..=1 {
            for dy in 0..=1 {
                self.grid.set_open(x + dx, y + dy);
            }
        }
        carver::carve_route(&mut self.grid, self.route.start, self.route.end)
    }

    /// Assemble the statistics surface for the current grid
    ///
    /// Partitions rooms first when no graph exists, so the room count is
    /// always populated.
    pub fn report(&mut self) -> LevelReport {
        if self.rooms.is_none() {
            self.rooms = Some(RoomGraph::partition(&self.grid));
        }
        let room_count = self.rooms.as_ref().map_or(0, RoomGraph::room_count);
        let counts = self.analysis.pattern_counts(&self.grid);
        let integral = self.analysis.integral(&self.grid);
        LevelReport::compute(integral, counts, room_count)
    }

    /// Run the full pipeline: randomize, reshape, partition, route, carve
    pub fn generate(&mut self, decision: Option<&dyn CellDecision>) -> GenerationOutcome {
        self.randomize();
        let decisions_in_range = match decision {
            Some(decision) => self.reshape_all(decision),
            None => true,
        };
        self.rooms = Some(RoomGraph::partition(&self.grid));
        self.select_route();
        let carve = self.carve();
        GenerationOutcome {
            carve,
            decisions_in_range,
        }
    }
}
