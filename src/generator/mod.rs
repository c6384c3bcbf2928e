pub mod lights;
pub mod materials;
pub mod parameters;
pub mod spheres;
pub mod terrain;

pub use lights::scatter_lights;
pub use materials::{generate_materials, MaterialPool};
pub use parameters::{eye_position, scene_parameters};
pub use spheres::scatter_spheres;
pub use terrain::{border_wall, build_terrain, height_at, Peak};

use crate::parsing::GeneratorConfig;
use crate::scene::Scene;

use anyhow::Context;
use rand::Rng;
use tracing::info;

/// Builds a complete scene from `config`, drawing every random value from `rng`.
///
/// Draws happen in a fixed order (lights, material colors, peaks, per-cell
/// materials, spheres), so a seeded rng reproduces the same scene.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> anyhow::Result<Scene> {
    config.validate().context("invalid generator configuration")?;

    let parameters = scene_parameters(config);
    let lights = scatter_lights(config, rng);
    info!("placed {} lights", lights.len());

    let materials = generate_materials(config, rng);
    let pool = MaterialPool::from_materials(&materials);
    info!(
        "generated {} materials, {} available to terrain cells",
        materials.len(),
        pool.len()
    );

    let (cells_x, cells_z) = config.grid_dimensions();
    info!(
        "synthesizing {}x{} terrain cells from {} peaks",
        cells_x, cells_z, config.num_peaks
    );
    let mut shapes = build_terrain(config, &pool, rng)?;
    shapes.push(border_wall(config));
    shapes.extend(scatter_spheres(config, rng));

    let scene = Scene {
        parameters,
        lights,
        materials,
        shapes,
    };
    let counts = scene.shape_counts();
    info!(
        "scene has {} shapes ({} rect prisms, {} spheres)",
        scene.shapes.len(),
        counts.rect_prisms,
        counts.spheres
    );
    Ok(scene)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parsing::Boundaries;
    use crate::scene::{write_scene, Material, Shape};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn render(config: &GeneratorConfig, seed: u64) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        let scene = generate(config, &mut rng).unwrap();
        let mut buffer = Vec::new();
        write_scene(&scene, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn section<'a>(text: &'a str, header: &str) -> Vec<&'a str> {
        text.lines()
            .skip_while(|line| *line != header)
            .skip(1)
            .take_while(|line| !line.starts_with('#'))
            .collect()
    }

    #[test]
    fn test_count_headers() {
        let config = GeneratorConfig {
            cube_size: 100,
            num_lights: 6,
            num_materials: 3,
            num_spheres: 12,
            ..Default::default()
        };
        let text = render(&config, 9);

        let lights = section(&text, "#lights");
        assert_eq!(lights[0], "7");
        assert_eq!(lights.len() - 1, 7);

        let materials = section(&text, "#materials");
        assert_eq!(materials[0], "4");
        assert_eq!(materials.len() - 1, 4);
        assert_eq!(materials[1], Material::reflective().to_string());

        let shapes = section(&text, "#shapes");
        assert_eq!(shapes[0], (20 * 20 + 1 + 12).to_string());
        assert_eq!(shapes.len() - 1, 20 * 20 + 1 + 12);
        assert!(shapes[1..=400].iter().all(|line| line.starts_with("rectprism ")));
        assert!(shapes[401].starts_with("rectprism reflective "));
        assert!(shapes[402..].iter().all(|line| line.starts_with("sphere reflective ")));
    }

    #[test]
    fn test_single_flat_cell() {
        let config = GeneratorConfig {
            num_peaks: 0,
            num_spheres: 0,
            num_materials: 1,
            cube_size: 2000,
            boundaries: Boundaries {
                min: (-1000, -1000),
                max: (1000, 1000),
            },
            ..Default::default()
        };
        let text = render(&config, 0);
        let shapes = section(&text, "#shapes");
        assert_eq!(
            shapes,
            vec![
                "2",
                "rectprism 0 -1000.000000 0.000000 -1000.000000 2000.000000 0.000000 2000.000000",
                "rectprism reflective -999.000000 0.000000 -999.000000 1998.000000 60.000000 1998.000000",
            ]
        );
    }

    #[test]
    fn test_flat_grid_without_peaks() {
        let config = GeneratorConfig {
            num_peaks: 0,
            num_spheres: 0,
            cube_size: 1000,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let scene = generate(&config, &mut rng).unwrap();
        assert_eq!(scene.shapes.len(), 2 * 2 + 1);
        for shape in &scene.shapes[..4] {
            match shape {
                Shape::RectPrism { size, .. } => assert_eq!(size[1], 0.0),
                Shape::Sphere { .. } => panic!("unexpected sphere"),
            }
        }
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let config = GeneratorConfig {
            cube_size: 50,
            ..Default::default()
        };
        assert_eq!(render(&config, 1234), render(&config, 1234));
        assert_ne!(render(&config, 1234), render(&config, 4321));
    }

    #[test]
    fn test_no_materials_fails() {
        let config = GeneratorConfig {
            num_materials: 0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate(&config, &mut rng).is_err());
    }

    #[test]
    fn test_default_scene_composition() {
        let mut rng = StdRng::seed_from_u64(2024);
        let scene = generate(&GeneratorConfig::default(), &mut rng).unwrap();
        assert_eq!(scene.lights.len(), 5);
        assert_eq!(scene.materials.len(), 2);
        let counts = scene.shape_counts();
        assert_eq!(counts.rect_prisms, 200 * 200 + 1);
        assert_eq!(counts.spheres, 40);
        for shape in &scene.shapes[..40_000] {
            match shape {
                Shape::RectPrism { material, .. } => assert_eq!(material, "0"),
                Shape::Sphere { .. } => panic!("unexpected sphere among terrain cells"),
            }
        }
    }
}
