use crate::parsing::GeneratorConfig;
use crate::scene::{Shape, REFLECTIVE_ID};

use rand::Rng;

/// Reflective spheres at random integer positions and radii. Overlaps are allowed.
pub fn scatter_spheres<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<Shape> {
    let (min, max) = (config.boundaries.min, config.boundaries.max);
    let (low, high) = config.sphere_height_range;
    let (smallest, largest) = config.sphere_radius_range;
    (0..config.num_spheres)
        .map(|_| {
            let x = rng.gen_range(min.0..=max.0);
            let y = rng.gen_range(low..=high);
            let z = rng.gen_range(min.1..=max.1);
            let radius = rng.gen_range(smallest..=largest);
            Shape::Sphere {
                material: REFLECTIVE_ID.to_string(),
                center: [x as f64, y as f64, z as f64],
                radius: radius as f64,
            }
        })
        .collect()
}
