//! Placeholder icon generator
//!
//! Writes `icon16.png`, `icon32.png`, `icon48.png` and `icon128.png` (accent
//! square, centered white "M", darker frame) for the browser extension.
//!
//! Usage:
//!   cargo run -- [--out-dir icons] [--size 16 --size 32 ...] [--font path.ttf] [--config file.ron]
//!
//! Without `--config`, `assets/config/icons.ron` and `assets/config/icons.local.ron`
//! are layered when present.

use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use placeholder_icons::{generate_all, logging, IconConfig};

const DEFAULT_CONFIG_LAYERS: [&str; 2] = ["assets/config/icons.ron", "assets/config/icons.local.ron"];

#[derive(Parser, Debug)]
#[command(about = "Generate placeholder PNG icons for the browser extension", version, author)]
struct Args {
    /// Output directory. Overrides `out_dir` from config; default `icons`.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Icon side length in pixels. Repeat for several sizes; replaces the configured list.
    #[arg(long = "size", value_parser = clap::value_parser!(u32).range(1..))]
    sizes: Vec<u32>,
    /// Scalable font to try before the configured candidates. Repeatable.
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,
    /// RON config layer, later layers override earlier ones. Repeatable.
    #[arg(long = "config")]
    configs: Vec<PathBuf>,
}

fn load_config(args: &Args) -> Result<IconConfig> {
    let explicit = !args.configs.is_empty();
    let layers: Vec<PathBuf> = if explicit {
        args.configs.clone()
    } else {
        DEFAULT_CONFIG_LAYERS.iter().map(PathBuf::from).collect()
    };
    let (mut cfg, used, errors) = IconConfig::load_layered(&layers, !explicit);
    if explicit && !errors.is_empty() {
        anyhow::bail!("config: {}", errors.join("; "));
    }
    for e in errors {
        warn!("config: {e}");
    }
    if !used.is_empty() {
        info!("config layers: {}", used.join(", "));
    }

    if let Some(dir) = &args.out_dir {
        cfg.out_dir = Some(dir.clone());
    }
    if !args.sizes.is_empty() {
        cfg.sizes = args.sizes.clone();
    }
    if !args.fonts.is_empty() {
        let mut fonts = args.fonts.clone();
        fonts.append(&mut cfg.font_paths);
        cfg.font_paths = fonts;
    }
    for w in cfg.validate() {
        warn!("config: {w}");
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    let cfg = load_config(&args)?;

    let out_dir = cfg.out_dir();
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;

    let report = generate_all(&cfg, &mut io::stdout().lock()).context("generate icons")?;
    info!("{} icon(s) drawn with {}", report.written.len(), report.font);
    Ok(())
}
