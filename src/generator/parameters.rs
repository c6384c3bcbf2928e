use crate::parsing::{GeneratorConfig, Vec3Data};
use crate::scene::SceneParameters;

/// Camera eye, also used as the position of the light that sits on top of the camera.
/// It hovers beyond the far corner of the boundary, scaled up from the terrain maximum.
pub fn eye_position(config: &GeneratorConfig) -> Vec3Data {
    let (max_x, max_z) = config.boundaries.max;
    [
        max_x as f64 * 1.25 + config.eye_offset[0] as f64,
        config.y_max_height as f64 * 1.25 + config.eye_offset[1] as f64,
        max_z as f64 * 1.25 + config.eye_offset[2] as f64,
    ]
}

pub fn scene_parameters(config: &GeneratorConfig) -> SceneParameters {
    SceneParameters {
        resolution: config.resolution,
        scaling_factor: config.scaling_factor,
        antialias_samples: config.antialias_samples,
        eye: eye_position(config),
        focus: config.focus,
        focal_length: config.focal_length,
        rotation: config.rotation,
        photons: config.photons,
        ambient_light: config.ambient_light,
        background_color: config.background_color,
    }
}
