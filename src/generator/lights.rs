use super::parameters::eye_position;
use crate::parsing::GeneratorConfig;
use crate::scene::Light;

use rand::Rng;

/// `num_lights` randomly placed point lights over the terrain, followed by one light at the camera eye.
pub fn scatter_lights<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<Light> {
    let (min, max) = (config.boundaries.min, config.boundaries.max);
    let offset = config.light_offset;
    let mut lights = Vec::with_capacity(config.num_lights + 1);
    for _ in 0..config.num_lights {
        let x = rng.gen_range(min.0..=max.0) + offset[0];
        let y = rng.gen_range(0..=config.y_max_height) + offset[1];
        let z = rng.gen_range(min.1..=max.1) + offset[2];
        lights.push(Light::point([x as f64, y as f64, z as f64]));
    }
    lights.push(Light::point(eye_position(config)));
    lights
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_light_count_and_bounds() {
        let config = GeneratorConfig {
            num_lights: 2000,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let lights = scatter_lights(&config, &mut rng);
        assert_eq!(lights.len(), 2001);

        for light in &lights[..2000] {
            let [x, y, z] = light.position;
            assert!((-1000.0..=1000.0).contains(&x), "{}", x);
            assert!((750.0..=1250.0).contains(&y), "{}", y);
            assert!((-1000.0..=1000.0).contains(&z), "{}", z);
            assert_eq!(x.fract(), 0.0);
            assert_eq!(light.descriptor, Light::DESCRIPTOR);
        }
        assert_eq!(lights.last().unwrap().position, eye_position(&config));
        for light in &lights {
            let line = light.to_string();
            let tokens: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(tokens.len(), 9, "{}", line);
            assert_eq!(tokens[3..], ["1"; 6]);
        }
    }

    #[test]
    fn test_no_random_lights() {
        let config = GeneratorConfig {
            num_lights: 0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let lights = scatter_lights(&config, &mut rng);
        assert_eq!(lights, vec![Light::point([500.0, 375.0, 750.0])]);
    }
}
