//! Command-line sampler for the 1-D evolution noise.
//! Prints a single value or a whole curve as text or JSON.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use evonoise_core::sampling::{range_position, sample_range};
use evonoise_core::{NoiseParams, PerlinNoise1D};
use serde::Serialize;
use std::fs;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "evonoise", about = "Evaluate deterministic 1-D value noise")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the noise at a single position.
    Sample {
        /// Evolution coordinate.
        #[arg(short, long, allow_negative_numbers = true)]
        position: Option<f64>,

        #[command(flatten)]
        noise: NoiseArgs,
    },
    /// Evaluate the noise over an evenly spaced range.
    Curve {
        /// First position.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        start: f64,

        /// Spacing between positions.
        #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
        step: f64,

        /// Number of samples.
        #[arg(short, long, default_value_t = 100)]
        count: usize,

        /// Emit a JSON array instead of `position value` lines.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        noise: NoiseArgs,
    },
}

#[derive(Args, Debug, Default)]
struct NoiseArgs {
    /// Per-octave amplitude factor.
    #[arg(long, allow_negative_numbers = true)]
    persistence: Option<f64>,

    /// Number of summed octaves.
    #[arg(short, long, allow_negative_numbers = true)]
    octaves: Option<i32>,

    /// JSON file with a parameter set; flags override its fields.
    #[arg(long)]
    params: Option<String>,

    /// Reject non-finite inputs and oversized octave counts.
    #[arg(long)]
    strict: bool,
}

#[derive(Serialize)]
struct CurvePoint {
    position: f64,
    value: f64,
}

// ── Parameter resolution ──────────────────────────────────────────────────────

/// Layer flags over the optional params file over the defaults.
fn resolve_params(args: &NoiseArgs, position: Option<f64>) -> Result<NoiseParams> {
    let mut params = match &args.params {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading params file {path}"))?;
            NoiseParams::from_json(&text).with_context(|| format!("parsing {path}"))?
        }
        None => NoiseParams::default(),
    };
    if let Some(x) = position {
        params.position = x;
    }
    if let Some(p) = args.persistence {
        params.persistence = p;
    }
    if let Some(o) = args.octaves {
        params.octaves = o;
    }
    if args.strict {
        params.validate()?;
    }
    Ok(params)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let noise = PerlinNoise1D::default();

    match cli.command {
        Command::Sample { position, noise: args } => {
            let params = resolve_params(&args, position)?;
            println!("{}", noise.evaluate_params(&params));
        }
        Command::Curve { start, step, count, json, noise: args } => {
            let params = resolve_params(&args, None)?;
            if args.strict && !(start.is_finite() && step.is_finite()) {
                bail!("range start and step must be finite, got start={start} step={step}");
            }
            eprintln!(
                "Sampling {count} positions from {start} (step {step}), persistence={}, octaves={}",
                params.persistence, params.octaves
            );
            let values = sample_range(&noise, &params, start, step, count);
            let points = values
                .into_iter()
                .enumerate()
                .map(|(k, value)| CurvePoint { position: range_position(start, step, k), value });
            if json {
                let points: Vec<CurvePoint> = points.collect();
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                for pt in points {
                    println!("{} {}", pt.position, pt.value);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = NoiseArgs { persistence: Some(0.25), octaves: Some(6), ..NoiseArgs::default() };
        let p = resolve_params(&args, Some(-1.5)).unwrap();
        assert_eq!(p, NoiseParams { position: -1.5, persistence: 0.25, octaves: 6, additional_seed: 0 });
    }

    #[test]
    fn strict_mode_rejects_nan() {
        let args = NoiseArgs { strict: true, ..NoiseArgs::default() };
        assert!(resolve_params(&args, Some(f64::NAN)).is_err());
        let lax = NoiseArgs::default();
        assert!(resolve_params(&lax, Some(f64::NAN)).is_ok());
    }

    #[test]
    fn missing_params_file_reports_path() {
        let args = NoiseArgs { params: Some("/nonexistent/evonoise.json".into()), ..NoiseArgs::default() };
        let err = resolve_params(&args, None).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/evonoise.json"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
