use cubecount_core::config::GeneratorConfig;
use cubecount_core::constants::{FOOTPRINT_COUNT, LAYER_COUNT};
use cubecount_world::{seeded, Structure, StructureGenerator};

/// Aggregate numbers over a batch of generated structures.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SampleStats {
    pub samples: u32,
    pub seed: u64,
    /// `layer_histograms[y][n]`: structures with exactly `n` cubes on layer `y`.
    pub layer_histograms: Vec<Vec<u32>>,
    pub min_total: u32,
    pub max_total: u32,
    pub mean_total: f64,
    /// Mean number of cubes hidden from the start view (lower bound).
    pub mean_occluded: f64,
    /// Share of structures with at least one hidden cube.
    pub hidden_ratio: f64,
    pub violations: Vec<Violation>,
}

/// A sampled structure that broke a generator invariant.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Violation {
    pub sample: u32,
    pub reason: String,
}

/// Check one structure against the generator's invariants.
pub fn audit(structure: &Structure, config: &GeneratorConfig) -> Result<(), String> {
    structure.validate().map_err(|e| e.to_string())?;

    let counts = structure.layer_counts();
    if counts.len() > LAYER_COUNT {
        return Err(format!("{} layers, at most {LAYER_COUNT}", counts.len()));
    }
    let base = counts.first().copied().unwrap_or(0);
    if base < config.base_min as usize || base > config.base_max as usize {
        return Err(format!(
            "base layer has {base} cubes, outside {}..={}",
            config.base_min, config.base_max
        ));
    }
    if let Some(y) = (1..counts.len()).find(|&y| counts[y] > counts[y - 1]) {
        return Err(format!(
            "layer {y} has {} cubes, more than the {} below",
            counts[y],
            counts[y - 1]
        ));
    }
    Ok(())
}

/// Generate `samples` structures from `seed` and collect statistics.
pub fn sample(config: &GeneratorConfig, samples: u32, seed: u64) -> SampleStats {
    let generator = StructureGenerator::new(config.clone());
    let mut rng = seeded(seed);

    let mut layer_histograms = vec![vec![0u32; FOOTPRINT_COUNT + 1]; LAYER_COUNT];
    let mut min_total = u32::MAX;
    let mut max_total = 0u32;
    let mut total_sum = 0u64;
    let mut occluded_sum = 0u64;
    let mut with_hidden = 0u32;
    let mut violations = Vec::new();

    for i in 0..samples {
        let structure = generator.generate(&mut rng);

        if let Err(reason) = audit(&structure, generator.config()) {
            log::warn!("Sample {i} violates an invariant: {reason}");
            violations.push(Violation { sample: i, reason });
        }

        let counts = structure.layer_counts();
        for (y, histogram) in layer_histograms.iter_mut().enumerate() {
            let n = counts.get(y).copied().unwrap_or(0).min(FOOTPRINT_COUNT);
            histogram[n] += 1;
        }

        let total = structure.len() as u32;
        min_total = min_total.min(total);
        max_total = max_total.max(total);
        total_sum += total as u64;

        let hidden = structure.occluded_cells().len() as u64;
        occluded_sum += hidden;
        if hidden > 0 {
            with_hidden += 1;
        }
    }

    let n = samples.max(1) as f64;
    SampleStats {
        samples,
        seed,
        layer_histograms,
        min_total: if samples == 0 { 0 } else { min_total },
        max_total,
        mean_total: total_sum as f64 / n,
        mean_occluded: occluded_sum as f64 / n,
        hidden_ratio: with_hidden as f64 / n,
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubecount_core::types::Cell;

    #[test]
    fn test_sample_has_no_violations() {
        let stats = sample(&GeneratorConfig::default(), 1000, 42);
        assert!(stats.violations.is_empty(), "{:?}", stats.violations);
        assert_eq!(stats.samples, 1000);
        assert!(stats.min_total >= 4);
        assert!(stats.max_total <= 27);
        assert!(stats.mean_total >= stats.min_total as f64);
        assert!(stats.mean_total <= stats.max_total as f64);
    }

    #[test]
    fn test_histograms_sum_to_samples() {
        let stats = sample(&GeneratorConfig::default(), 300, 7);
        for histogram in &stats.layer_histograms {
            assert_eq!(histogram.iter().sum::<u32>(), 300);
        }
        // Base layer never drops below the configured minimum.
        assert!(stats.layer_histograms[0][..4].iter().all(|&n| n == 0));
    }

    #[test]
    fn test_same_seed_same_stats() {
        let a = sample(&GeneratorConfig::default(), 200, 99);
        let b = sample(&GeneratorConfig::default(), 200, 99);
        assert_eq!(a.layer_histograms, b.layer_histograms);
        assert_eq!(a.mean_total, b.mean_total);
    }

    #[test]
    fn test_custom_base_range_audited() {
        let config = GeneratorConfig {
            base_min: 9,
            base_max: 9,
        };
        let stats = sample(&config, 100, 5);
        assert!(stats.violations.is_empty(), "{:?}", stats.violations);
        assert_eq!(stats.layer_histograms[0][9], 100);
        assert!(stats.min_total >= 9);
    }

    #[test]
    fn test_zero_samples() {
        let stats = sample(&GeneratorConfig::default(), 0, 1);
        assert_eq!(stats.min_total, 0);
        assert_eq!(stats.max_total, 0);
        assert_eq!(stats.mean_total, 0.0);
    }

    #[test]
    fn test_audit_rejects_small_base() {
        let structure = Structure::from_cells([
            Cell::new(0, 0, 0),
            Cell::new(1, 0, 0),
            Cell::new(0, 1, 0),
        ])
        .expect("on grid");
        let err = audit(&structure, &GeneratorConfig::default()).unwrap_err();
        assert!(err.contains("base layer"), "{err}");
    }

    #[test]
    fn test_audit_rejects_floating_cube() {
        let structure = Structure::from_cells([
            Cell::new(0, 0, 0),
            Cell::new(1, 0, 0),
            Cell::new(2, 0, 0),
            Cell::new(0, 0, 1),
            Cell::new(2, 1, 2),
        ])
        .expect("on grid");
        assert!(audit(&structure, &GeneratorConfig::default()).is_err());
    }
}
