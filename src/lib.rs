pub mod generator;
pub mod parsing;
pub mod scene;

pub use generator::generate;
pub use parsing::GeneratorConfig;
pub use scene::{write_scene, Scene};
