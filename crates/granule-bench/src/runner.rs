use std::collections::BTreeMap;
use std::time::Instant;

use granule_core::config::SimConfig;
use granule_sim::{ElementTable, SimRng};
use granule_world::World;

use crate::scenes::Scene;

/// Timing data for a single scene run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub seed: u64,
    /// Non-empty voxels visited by the final tick.
    pub active_voxels: u64,
    pub chunk_count: u32,
    pub tick_count: u32,
    /// Chunk remeshes the renderer would have performed over the run.
    pub remeshed_chunks: u64,
    /// Per-element tally after the final tick.
    pub counts: BTreeMap<String, u32>,
    pub timings: TimingSeries,
}

/// Runs scenes headless on the CPU.
pub struct BenchmarkRunner {
    config: SimConfig,
    elements: ElementTable,
    tick_count: u32,
}

impl BenchmarkRunner {
    pub fn new(config: SimConfig, elements: ElementTable, tick_count: u32) -> Self {
        Self {
            config,
            elements,
            tick_count,
        }
    }

    /// Run a single scene and return timing results.
    pub fn run_scene(&self, scene: Scene) -> BenchmarkResult {
        log::info!(
            "Running scene '{}' (seed {}, {} ticks)...",
            scene.name(),
            self.config.seed,
            self.tick_count
        );

        let mut world = World::new(&self.config, self.elements.clone());
        // Scene placement draws from its own stream so it never perturbs the
        // simulation's sequence.
        let mut scene_rng = SimRng::new(self.config.seed.wrapping_add(1));
        scene.populate(&mut world, &mut scene_rng);
        world.drain_changed();

        let mut frame_times = Vec::with_capacity(self.tick_count as usize);
        let mut remeshed_chunks = 0u64;
        let mut active_voxels = 0u64;

        for tick in 1..=self.tick_count {
            scene.feed(&mut world, &mut scene_rng);

            let frame_start = Instant::now();
            let report = world.tick();
            let elapsed = frame_start.elapsed().as_secs_f64() * 1000.0;
            frame_times.push(elapsed);

            active_voxels = report.active_voxels;
            remeshed_chunks += world.drain_changed().len() as u64;

            if self.config.log_every > 0 && tick % self.config.log_every == 0 {
                log::info!("  tick {tick}: {}", format_counts(&world));
            }
        }

        let timings = compute_timings(&frame_times);
        log::info!(
            "  Done: mean={:.2}ms, p95={:.2}ms, p99={:.2}ms",
            timings.mean_ms,
            timings.p95_ms,
            timings.p99_ms
        );

        BenchmarkResult {
            scene_name: scene.name().to_string(),
            seed: self.config.seed,
            active_voxels,
            chunk_count: world.chunk_count() as u32,
            tick_count: self.tick_count,
            remeshed_chunks,
            counts: world
                .counts()
                .into_iter()
                .map(|(name, n)| (name.to_string(), n))
                .collect(),
            timings,
        }
    }
}

fn format_counts(world: &World) -> String {
    world
        .counts()
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(name, n)| format!("{name}={n}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compute timing statistics from a list of frame times in milliseconds.
fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
