use std::path::Path;

use anyhow::{Result, bail};

use crate::cli::{Cli, RingArgs};
use crate::ring::{ColorTiers, RingConfig, Rgb, compute_geometry, write_ring_svg_file};
use crate::stats::normalize_str;

pub fn run(cli: &Cli, args: &RingArgs) -> Result<()> {
    // Assert output path is not stdout
    if args.output == Path::new("-") { bail!("stdout is not supported."); }
    if args.output.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", args.output.display());
    }
    if !(args.size > 0.0 && args.stroke >= 0.0 && args.stroke < args.size) {
        bail!("expected 0 <= stroke < size, got size={} stroke={}", args.size, args.stroke);
    }

    let config = RingConfig {
        reference_mark_percentage: args.mark.as_deref().map(normalize_str),
        color: args.color.as_deref().map(Rgb::from_hex).transpose()?,
        ..RingConfig::new(args.size, args.stroke, normalize_str(&args.percentage))
    };
    let tiers = ColorTiers::from(args.tiers);
    let geometry = compute_geometry(&config, &tiers);

    if cli.verbose > 0 {
        tracing::info!(
            percentage = geometry.percentage,
            dash_offset = geometry.dash_offset,
            color = %geometry.color,
            tiers = %tiers.name,
            "[ring] -> {}",
            args.output.display()
        );
    }

    write_ring_svg_file(&args.output, &geometry, &geometry.fill_transition(!args.no_animate))?;
    println!("Wrote ring -> {}", args.output.display());
    Ok(())
}
