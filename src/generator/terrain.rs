use super::materials::MaterialPool;
use crate::parsing::GeneratorConfig;
use crate::scene::{Shape, REFLECTIVE_ID};

use anyhow::bail;
use rand::Rng;
use tracing::debug;

pub type Cell = (usize, usize);

/// A local maximum of the terrain. Its influence on a cell is `decay ^ distance`,
/// with the distance measured in cells, so it is exactly 1 on the peak's own cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Peak {
    pub cell: Cell,
    pub decay: f64,
}

impl Peak {
    pub fn new(cell: Cell, decay: f64) -> Self {
        Peak { cell, decay }
    }

    pub fn random<R: Rng>(grid: Cell, decay_range: (f64, f64), rng: &mut R) -> Self {
        let x = rng.gen_range(0..grid.0);
        let z = rng.gen_range(0..grid.1);
        let decay = rng.gen_range(decay_range.0..decay_range.1);
        Peak::new((x, z), decay)
    }

    pub fn distance_to(&self, cell: Cell) -> f64 {
        let dx = cell.0 as f64 - self.cell.0 as f64;
        let dz = cell.1 as f64 - self.cell.1 as f64;
        dx.hypot(dz)
    }

    pub fn contribution(&self, cell: Cell) -> f64 {
        self.decay.powf(self.distance_to(cell))
    }
}

pub fn random_peaks<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<Peak> {
    let grid = config.grid_dimensions();
    (0..config.num_peaks)
        .map(|_| Peak::random(grid, config.decay_range, rng))
        .collect()
}

/// Normalized height of a cell, the strongest contribution of any peak. 0 without peaks.
pub fn height_at(cell: Cell, peaks: &[Peak]) -> f64 {
    peaks
        .iter()
        .map(|peak| peak.contribution(cell))
        .fold(0.0, f64::max)
}

/// Heights of the whole grid, indexed `[x][z]`.
pub fn terrain_heights(grid: Cell, peaks: &[Peak]) -> Vec<Vec<f64>> {
    (0..grid.0)
        .map(|x| (0..grid.1).map(|z| height_at((x, z), peaks)).collect())
        .collect()
}

/// One rect prism per grid cell, in x-major order, each with a randomly chosen material from `pool`.
pub fn build_terrain<R: Rng>(
    config: &GeneratorConfig,
    pool: &MaterialPool,
    rng: &mut R,
) -> anyhow::Result<Vec<Shape>> {
    if pool.is_empty() {
        bail!("no generated materials to choose from for terrain cells");
    }
    let grid = config.grid_dimensions();
    let peaks = random_peaks(config, rng);
    debug!("{} peaks on a {}x{} grid: {:?}", peaks.len(), grid.0, grid.1, peaks);

    let heights = terrain_heights(grid, &peaks);
    let (min_x, min_z) = config.boundaries.min;
    let cube_size = config.cube_size as f64;

    let mut shapes = Vec::with_capacity(grid.0 * grid.1);
    for (x, column) in heights.iter().enumerate() {
        for (z, height) in column.iter().enumerate() {
            let material = pool.choose(rng)?;
            shapes.push(Shape::RectPrism {
                material: material.to_string(),
                origin: [
                    x as f64 * cube_size + min_x as f64,
                    0.0,
                    z as f64 * cube_size + min_z as f64,
                ],
                size: [cube_size, height * config.y_max_height as f64, cube_size],
            });
        }
    }
    Ok(shapes)
}

/// Reflective slab under the terrain, inset by one unit from the boundary on x and z.
pub fn border_wall(config: &GeneratorConfig) -> Shape {
    let (min_x, min_z) = config.boundaries.min;
    let (extent_x, extent_z) = config.boundaries.extent();
    Shape::RectPrism {
        material: REFLECTIVE_ID.to_string(),
        origin: [(min_x + 1) as f64, 0.0, (min_z + 1) as f64],
        size: [
            (extent_x - 2) as f64,
            config.reflective_height,
            (extent_z - 2) as f64,
        ],
    }
}
