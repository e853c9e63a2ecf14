//! Inspect generated icons: size, frame corners, glyph ink box and centering.
//!
//! Usage:
//!   cargo run --bin icon_inspect -- icons/icon16.png icons/icon128.png [--json]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use placeholder_icons::{inspect_icon, logging, IconStyle};

#[derive(Parser, Debug)]
#[command(about = "Inspect placeholder icon PNGs for basic statistics", version)]
struct Args {
    #[arg(required = true)]
    icons: Vec<PathBuf>,
    /// Emit one JSON object per line instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init_with_default("warn");
    let args = Args::parse();
    let style = IconStyle::default();
    let mut bad = 0usize;
    for path in &args.icons {
        let r = inspect_icon(path, &style).with_context(|| format!("inspect {}", path.display()))?;
        if !r.is_square() || !r.border_ok {
            bad += 1;
        }
        if args.json {
            let mut v = serde_json::to_value(&r)?;
            v["path"] = serde_json::Value::String(path.display().to_string());
            println!("{v}");
            continue;
        }
        let ink = match (&r.ink, r.center_offset) {
            (Some(b), Some((dx, dy))) => format!(
                "ink=({},{})..({},{}) center_off=({dx:+.1},{dy:+.1})",
                b.min_x, b.min_y, b.max_x, b.max_y
            ),
            _ => "ink=none".to_string(),
        };
        println!(
            "{:<28} {}x{} border={} white_px={} {}",
            path.display().to_string(),
            r.width,
            r.height,
            if r.border_ok { "ok" } else { "MISSING" },
            r.solid_glyph_pixels,
            ink
        );
    }
    if bad > 0 {
        anyhow::bail!("{bad} icon(s) not square or missing the frame color");
    }
    Ok(())
}
