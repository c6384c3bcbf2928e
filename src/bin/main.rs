extern crate terrain_scene_gen as root;

use root::generate;
use root::parsing::{get_settings, GeneratorConfig};
use root::scene::write_scene;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    // built in defaults are used when no config file is given
    #[structopt(long)]
    pub config_file: Option<PathBuf>,
    // scene text goes to stdout when no output file is given
    #[structopt(short = "o", long)]
    pub output: Option<PathBuf>,
    #[structopt(long)]
    pub seed: Option<u64>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::OFF,
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        _ => default,
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();

    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, LevelFilter::INFO))
        .with_writer(io::stderr)
        .init();

    let config = match &opts.config_file {
        Some(path) => get_settings(path)
            .with_context(|| format!("couldn't read config file {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let mut rng = match opts.seed {
        Some(seed) => {
            info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let scene = generate(&config, &mut rng)?;

    if opts.dry_run {
        warn!("dry run, not writing scene");
        return Ok(());
    }

    match &opts.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("couldn't create output file {}", path.display()))?;
            write_scene(&scene, BufWriter::new(file))?;
            info!("wrote scene to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_scene(&scene, BufWriter::new(stdout.lock()))?;
        }
    }
    Ok(())
}
