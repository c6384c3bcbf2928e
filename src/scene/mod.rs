mod writer;

pub use writer::write_scene;

use crate::parsing::{Resolution, Vec3Data};

use std::fmt;

pub const REFLECTIVE_ID: &str = "reflective";

#[derive(Clone, Debug, PartialEq)]
pub struct SceneParameters {
    pub resolution: Resolution,
    pub scaling_factor: f64,
    pub antialias_samples: u32,
    pub eye: Vec3Data,
    pub focus: Vec3Data,
    pub focal_length: f64,
    pub rotation: f64,
    pub photons: u32,
    pub ambient_light: Vec3Data,
    pub background_color: Vec3Data,
}

/// Light source position plus the six value color/intensity descriptor that follows it on the line.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3Data,
    pub descriptor: [f64; 6],
}

impl Light {
    /// Every generated light uses the all ones descriptor.
    pub const DESCRIPTOR: [f64; 6] = [1.0; 6];

    pub fn point(position: Vec3Data) -> Self {
        Light {
            position,
            descriptor: Light::DESCRIPTOR,
        }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.position;
        write!(f, "{} {} {}", x, y, z)?;
        for value in self.descriptor {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub id: String,
    pub color: Vec3Data,
    pub diffuse: f64,
    pub specular: f64,
    pub reflectivity: f64,
    pub refractivity: f64,
    pub shininess: f64,
    pub refraction_index: f64,
}

impl Material {
    /// The mirror-like material shared by the border wall and every sphere.
    pub fn reflective() -> Self {
        Material {
            id: REFLECTIVE_ID.to_string(),
            color: [0.75, 0.75, 0.75],
            diffuse: 0.5,
            specular: 0.5,
            reflectivity: 0.75,
            refractivity: 0.0,
            shininess: 75.0,
            refraction_index: 0.0,
        }
    }

    pub fn diffuse(id: impl Into<String>, color: Vec3Data) -> Self {
        Material {
            id: id.into(),
            color,
            diffuse: 0.8,
            specular: 0.0,
            reflectivity: 0.0,
            refractivity: 0.0,
            shininess: 0.0,
            refraction_index: 0.0,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.color;
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {}",
            self.id,
            r,
            g,
            b,
            self.diffuse,
            self.specular,
            self.reflectivity,
            self.refractivity,
            self.shininess,
            self.refraction_index
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    RectPrism {
        material: String,
        origin: Vec3Data,
        size: Vec3Data,
    },
    Sphere {
        material: String,
        center: Vec3Data,
        radius: f64,
    },
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::RectPrism {
                material,
                origin: [x, y, z],
                size: [dx, dy, dz],
            } => write!(
                f,
                "rectprism {} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6}",
                material, x, y, z, dx, dy, dz
            ),
            Shape::Sphere {
                material,
                center: [x, y, z],
                radius,
            } => write!(
                f,
                "sphere {} {:.6} {:.6} {:.6} {:.6}",
                material, x, y, z, radius
            ),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeCounts {
    pub rect_prisms: usize,
    pub spheres: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub parameters: SceneParameters,
    pub lights: Vec<Light>,
    pub materials: Vec<Material>,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn shape_counts(&self) -> ShapeCounts {
        self.shapes
            .iter()
            .fold(ShapeCounts::default(), |mut counts, shape| {
                match shape {
                    Shape::RectPrism { .. } => counts.rect_prisms += 1,
                    Shape::Sphere { .. } => counts.spheres += 1,
                }
                counts
            })
    }
}
