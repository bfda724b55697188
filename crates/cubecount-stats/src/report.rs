use std::path::Path;

use crate::sampler::SampleStats;

const LAYER_NAMES: [&str; 3] = ["base", "middle", "top"];

/// Format sample statistics as a markdown summary.
pub fn format_markdown(stats: &SampleStats) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Samples: {} (seed {})\n\n",
        stats.samples, stats.seed
    ));

    out.push_str("| Cubes |");
    for name in LAYER_NAMES.iter().take(stats.layer_histograms.len()) {
        out.push_str(&format!(" {name} |"));
    }
    out.push('\n');
    out.push_str("|-------|");
    for _ in 0..stats.layer_histograms.len() {
        out.push_str("------|");
    }
    out.push('\n');

    let rows = stats
        .layer_histograms
        .iter()
        .map(|h| h.len())
        .max()
        .unwrap_or(0);
    for n in 0..rows {
        out.push_str(&format!("| {n} |"));
        for histogram in &stats.layer_histograms {
            out.push_str(&format!(" {} |", histogram.get(n).copied().unwrap_or(0)));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "\nTotal cubes: min {}, max {}, mean {:.2}\n",
        stats.min_total, stats.max_total, stats.mean_total
    ));
    out.push_str(&format!(
        "Hidden cubes: mean {:.2}, present in {:.1}% of structures\n",
        stats.mean_occluded,
        stats.hidden_ratio * 100.0
    ));

    if stats.violations.is_empty() {
        out.push_str("Invariants: all samples valid\n");
    } else {
        out.push_str(&format!(
            "INVARIANT VIOLATIONS ({}):\n",
            stats.violations.len()
        ));
        for v in &stats.violations {
            out.push_str(&format!("  - sample {}: {}\n", v.sample, v.reason));
        }
    }

    out
}

/// Save statistics to a JSON file.
pub fn save_report(path: &Path, stats: &SampleStats) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(stats).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{sample, Violation};
    use cubecount_core::config::GeneratorConfig;

    #[test]
    fn test_markdown_has_one_row_per_count() {
        let stats = sample(&GeneratorConfig::default(), 50, 3);
        let md = format_markdown(&stats);
        assert!(md.contains("| Cubes | base | middle | top |"));
        assert!(md.contains("| 9 |"));
        assert!(!md.contains("| 10 |"));
        assert!(md.contains("all samples valid"));
    }

    #[test]
    fn test_markdown_lists_violations() {
        let mut stats = sample(&GeneratorConfig::default(), 5, 3);
        stats.violations.push(Violation {
            sample: 2,
            reason: "cell (0, 1, 0) has no cube beneath it".to_string(),
        });
        let md = format_markdown(&stats);
        assert!(md.contains("INVARIANT VIOLATIONS (1)"));
        assert!(md.contains("sample 2: cell (0, 1, 0)"));
    }

    #[test]
    fn test_json_report_written() {
        let stats = sample(&GeneratorConfig::default(), 20, 11);
        let path = std::env::temp_dir()
            .join(format!("cubecount-stats-{}", std::process::id()))
            .join("report.json");
        save_report(&path, &stats).expect("write report");

        let text = std::fs::read_to_string(&path).expect("read report");
        let loaded: SampleStats = serde_json::from_str(&text).expect("parse report");
        assert_eq!(loaded.samples, 20);
        assert_eq!(loaded.layer_histograms, stats.layer_histograms);

        let _ = std::fs::remove_dir_all(path.parent().expect("parent"));
    }
}
