use anyhow::bail;
use serde::Deserialize;

pub type Vec3Data = [f64; 3];
pub type IntRange = (i64, i64);

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

/// Axis aligned rectangle on the XZ plane, given as (x, z) corners.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Boundaries {
    pub min: (i64, i64),
    pub max: (i64, i64),
}

impl Boundaries {
    pub fn extent(&self) -> (i64, i64) {
        (self.max.0 - self.min.0, self.max.1 - self.min.1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub resolution: Resolution,
    pub scaling_factor: f64,
    pub antialias_samples: u32,
    pub focus: Vec3Data,
    pub focal_length: f64,
    pub rotation: f64,
    pub photons: u32,
    pub ambient_light: Vec3Data,
    pub background_color: Vec3Data,

    pub boundaries: Boundaries,
    pub y_max_height: i64,
    pub light_offset: [i64; 3],
    pub eye_offset: [i64; 3],

    pub num_lights: usize,
    pub num_materials: usize,

    pub cube_size: i64,
    pub num_peaks: usize,
    pub decay_range: (f64, f64),
    pub reflective_height: f64,

    pub num_spheres: usize,
    pub sphere_height_range: IntRange,
    pub sphere_radius_range: IntRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            resolution: Resolution {
                width: 800,
                height: 800,
            },
            scaling_factor: 0.5,
            antialias_samples: 1,
            focus: [0.0, 0.0, 0.0],
            focal_length: 250.0,
            rotation: 0.0,
            photons: 0,
            ambient_light: [0.2, 0.2, 0.2],
            background_color: [0.4325, 0.725, 0.9],
            boundaries: Boundaries {
                min: (-1000, -1000),
                max: (1000, 1000),
            },
            y_max_height: 500,
            light_offset: [0, 750, 0],
            eye_offset: [-750, -250, -500],
            num_lights: 4,
            num_materials: 1,
            cube_size: 10,
            num_peaks: 20,
            decay_range: (0.87, 0.97),
            reflective_height: 60.0,
            num_spheres: 40,
            sphere_height_range: (60, 750),
            sphere_radius_range: (50, 100),
        }
    }
}

impl GeneratorConfig {
    /// Number of terrain cells along x and z. Any remainder of the boundary
    /// extent that doesn't fill a whole cell is dropped.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let (extent_x, extent_z) = self.boundaries.extent();
        (
            (extent_x / self.cube_size) as usize,
            (extent_z / self.cube_size) as usize,
        )
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let Boundaries { min, max } = self.boundaries;
        if min.0 >= max.0 || min.1 >= max.1 {
            bail!(
                "boundaries are empty or inverted: min = {:?}, max = {:?}",
                min,
                max
            );
        }
        if self.cube_size <= 0 {
            bail!("cube_size must be positive, got {}", self.cube_size);
        }
        let (cells_x, cells_z) = self.grid_dimensions();
        if cells_x == 0 || cells_z == 0 {
            bail!(
                "cube_size {} does not fit inside the boundary extent {:?}",
                self.cube_size,
                self.boundaries.extent()
            );
        }
        if self.y_max_height < 0 {
            bail!("y_max_height must not be negative, got {}", self.y_max_height);
        }
        let (lo, hi) = self.decay_range;
        if !(lo > 0.0 && lo < hi && hi <= 1.0) {
            bail!("decay_range must satisfy 0 < lo < hi <= 1, got {:?}", self.decay_range);
        }
        check_range("sphere_height_range", self.sphere_height_range)?;
        check_range("sphere_radius_range", self.sphere_radius_range)?;
        if self.sphere_radius_range.0 <= 0 {
            bail!(
                "sphere radii must be positive, got {:?}",
                self.sphere_radius_range
            );
        }
        if self.num_materials == 0 {
            // terrain cells pick their material from the generated pool, there is no fallback.
            bail!("num_materials must be at least 1, terrain cells have no material to choose from");
        }
        Ok(())
    }
}

fn check_range(name: &str, range: IntRange) -> anyhow::Result<()> {
    if range.0 > range.1 {
        bail!("{} is inverted: {:?}", name, range);
    }
    Ok(())
}

/// On-disk form of [`GeneratorConfig`]. Every key is optional, missing keys keep their defaults.
#[derive(Deserialize, Clone, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct TOMLGeneratorConfig {
    pub resolution: Option<Resolution>,
    pub scaling_factor: Option<f64>,
    pub antialias_samples: Option<u32>,
    pub focus: Option<Vec3Data>,
    pub focal_length: Option<f64>,
    pub rotation: Option<f64>, // degrees
    pub photons: Option<u32>,  // 0 disables the photon mapping pass
    pub ambient_light: Option<Vec3Data>,
    pub background_color: Option<Vec3Data>,
    pub boundaries: Option<Boundaries>,
    pub y_max_height: Option<i64>,
    pub light_offset: Option<[i64; 3]>,
    pub eye_offset: Option<[i64; 3]>,
    pub num_lights: Option<usize>,
    pub num_materials: Option<usize>,
    pub cube_size: Option<i64>,
    pub num_peaks: Option<usize>,
    pub decay_range: Option<(f64, f64)>,
    pub reflective_height: Option<f64>,
    pub num_spheres: Option<usize>,
    pub sphere_height_range: Option<IntRange>,
    pub sphere_radius_range: Option<IntRange>,
}

impl From<TOMLGeneratorConfig> for GeneratorConfig {
    fn from(data: TOMLGeneratorConfig) -> Self {
        let default = GeneratorConfig::default();
        GeneratorConfig {
            resolution: data.resolution.unwrap_or(default.resolution),
            scaling_factor: data.scaling_factor.unwrap_or(default.scaling_factor),
            antialias_samples: data.antialias_samples.unwrap_or(default.antialias_samples),
            focus: data.focus.unwrap_or(default.focus),
            focal_length: data.focal_length.unwrap_or(default.focal_length),
            rotation: data.rotation.unwrap_or(default.rotation),
            photons: data.photons.unwrap_or(default.photons),
            ambient_light: data.ambient_light.unwrap_or(default.ambient_light),
            background_color: data.background_color.unwrap_or(default.background_color),
            boundaries: data.boundaries.unwrap_or(default.boundaries),
            y_max_height: data.y_max_height.unwrap_or(default.y_max_height),
            light_offset: data.light_offset.unwrap_or(default.light_offset),
            eye_offset: data.eye_offset.unwrap_or(default.eye_offset),
            num_lights: data.num_lights.unwrap_or(default.num_lights),
            num_materials: data.num_materials.unwrap_or(default.num_materials),
            cube_size: data.cube_size.unwrap_or(default.cube_size),
            num_peaks: data.num_peaks.unwrap_or(default.num_peaks),
            decay_range: data.decay_range.unwrap_or(default.decay_range),
            reflective_height: data.reflective_height.unwrap_or(default.reflective_height),
            num_spheres: data.num_spheres.unwrap_or(default.num_spheres),
            sphere_height_range: data
                .sphere_height_range
                .unwrap_or(default.sphere_height_range),
            sphere_radius_range: data
                .sphere_radius_range
                .unwrap_or(default.sphere_radius_range),
        }
    }
}
