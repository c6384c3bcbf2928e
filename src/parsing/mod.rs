pub mod config;

pub use config::{Boundaries, GeneratorConfig, IntRange, Resolution, TOMLGeneratorConfig, Vec3Data};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::{error, info};

pub fn load_arbitrary<T>(filepath: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.to_string_lossy());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.to_string_lossy()))?;
    info!("done: {} bytes", read_count);

    let data: T = toml::from_str(&input).map_err(|e| {
        error!("encountered error when parsing {}: {}", filepath.to_string_lossy(), e);
        e
    })?;
    Ok(data)
}

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<GeneratorConfig> {
    let data: TOMLGeneratorConfig = load_arbitrary(filepath.as_ref())?;
    Ok(data.into())
}
