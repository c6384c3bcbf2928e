use crate::parsing::GeneratorConfig;
use crate::scene::Material;

use anyhow::anyhow;
use rand::seq::SliceRandom;
use rand::Rng;

/// The reflective material first, then `num_materials` diffuse materials
/// named after their zero based position among the diffuse ones.
pub fn generate_materials<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<Material> {
    let mut materials = Vec::with_capacity(config.num_materials + 1);
    materials.push(Material::reflective());
    for i in 0..config.num_materials {
        let color = [rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>()];
        materials.push(Material::diffuse(i.to_string(), color));
    }
    materials
}

/// Identifiers the terrain can pick from. The reflective material is never part of it.
#[derive(Clone, Debug, Default)]
pub struct MaterialPool {
    ids: Vec<String>,
}

impl MaterialPool {
    pub fn new(ids: Vec<String>) -> Self {
        MaterialPool { ids }
    }

    pub fn from_materials(materials: &[Material]) -> Self {
        MaterialPool::new(
            materials
                .iter()
                .skip(1)
                .map(|material| material.id.clone())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn choose<R: Rng>(&self, rng: &mut R) -> anyhow::Result<&str> {
        self.ids
            .choose(rng)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("no generated materials to choose from"))
    }
}
