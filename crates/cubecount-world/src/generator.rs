use cubecount_core::config::GeneratorConfig;
use cubecount_core::constants::FOOTPRINT_COUNT;
use cubecount_core::types::Footprint;

use crate::rng::RandomSource;
use crate::structure::Structure;

/// Cube counts for the three layers of a generated structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerCounts {
    pub base: u32,
    pub middle: u32,
    pub top: u32,
}

impl LayerCounts {
    /// Draw layer counts: base in the configured range, each upper layer in
    /// `0..=` the layer below it. The top layer is only drawn when the middle
    /// layer is non-empty.
    pub fn draw<R: RandomSource + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Self {
        let base = rng.int_inclusive(config.base_min, config.base_max);
        let middle = rng.int_inclusive(0, base);
        let top = if middle > 0 {
            rng.int_inclusive(0, middle)
        } else {
            0
        };
        Self { base, middle, top }
    }

    pub fn total(&self) -> u32 {
        self.base + self.middle + self.top
    }

    /// Clamp so every layer fits the grid and never exceeds the layer below.
    fn clamped(self) -> Self {
        let base = self.base.min(FOOTPRINT_COUNT as u32);
        let middle = self.middle.min(base);
        let top = self.top.min(middle);
        Self { base, middle, top }
    }
}

/// Procedural generator for layered cube structures.
///
/// Placement is deterministic once the layer counts are known: the base layer
/// fills the footprints farthest from the viewer first, so the cubes most
/// likely to be hidden are always present. Each upper layer then picks the
/// nearest footprints of the layer beneath it, keeping the tall columns in
/// front where they cover the back rows.
#[derive(Debug, Clone, Default)]
pub struct StructureGenerator {
    config: GeneratorConfig,
}

impl StructureGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw layer counts from `rng` and build the structure.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Structure {
        let counts = LayerCounts::draw(rng, &self.config);
        let structure = Self::build(counts);
        log::debug!(
            "Generated structure: layers {}/{}/{} ({} cubes)",
            counts.base,
            counts.middle,
            counts.top,
            counts.total()
        );
        structure
    }

    /// Lay out a structure for fixed layer counts.
    pub fn build(counts: LayerCounts) -> Structure {
        let counts = counts.clamped();

        let mut base = farthest_first(Footprint::all().collect());
        base.truncate(counts.base as usize);

        let mut middle = nearest_first(&base);
        middle.truncate(counts.middle as usize);

        let mut top = nearest_first(&middle);
        top.truncate(counts.top as usize);

        Structure::from_layers(&[base, middle, top])
    }
}

/// Stable sort by apparent depth, farthest first. Ties keep their order.
fn farthest_first(mut footprints: Vec<Footprint>) -> Vec<Footprint> {
    footprints.sort_by_key(|fp| std::cmp::Reverse(fp.distance()));
    footprints
}

/// Stable sort by apparent depth, nearest first.
fn nearest_first(footprints: &[Footprint]) -> Vec<Footprint> {
    let mut sorted = footprints.to_vec();
    sorted.sort_by_key(|fp| fp.distance());
    sorted
}
