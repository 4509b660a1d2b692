use anyhow::{Context, Result};
use beams::model::Model;
use beams::BeamOptions;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Beam projection of 2D drawings")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Project a drawing (JSON model) and write the beam drawing next to a provenance sidecar
    Run {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// JSON file with `distance`, `angle`, `scale`; flags override its values
        #[arg(long)]
        options: Option<String>,
        #[arg(long)]
        distance: Option<f64>,
        /// Degrees, counter-clockwise from +X
        #[arg(long)]
        angle: Option<f64>,
        #[arg(long)]
        scale: Option<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            options,
            distance,
            angle,
            scale,
        } => {
            let opts = resolve_options(options.as_deref(), distance, angle, scale)?;
            run(&input, &out, opts)
        }
        Action::Report => report(),
    }
}

/// Options file (if any) first, then individual flags on top.
fn resolve_options(
    file: Option<&str>,
    distance: Option<f64>,
    angle: Option<f64>,
    scale: Option<f64>,
) -> Result<BeamOptions> {
    let mut opts = match file {
        Some(path) => {
            let raw = std::fs::read(path).with_context(|| format!("reading options {path}"))?;
            serde_json::from_slice(&raw).with_context(|| format!("parsing options {path}"))?
        }
        None => BeamOptions::default(),
    };
    if let Some(d) = distance {
        opts.distance = d;
    }
    if let Some(a) = angle {
        opts.angle = a;
    }
    if let Some(s) = scale {
        opts.scale = s;
    }
    Ok(opts)
}

fn run(input: &str, out: &str, opts: BeamOptions) -> Result<()> {
    tracing::info!(input, out, distance = opts.distance, angle = opts.angle, scale = opts.scale, "run");
    let raw = std::fs::read(input).with_context(|| format!("reading {input}"))?;
    let model: Model = serde_json::from_slice(&raw).with_context(|| format!("parsing model {input}"))?;
    let projected = beams::beam(&model, &opts).context("projecting beams")?;
    tracing::info!(
        leaves = model.path_count(),
        units = projected.models.len(),
        "projected"
    );

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&projected)?)
        .with_context(|| format!("writing {out}"))?;

    let sidecar = provenance::Sidecar::new(input, opts, out_path).write()?;
    tracing::info!(sidecar = %sidecar.display(), "provenance");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": beams::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
