use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use equipart::prelude::*;
use polars::prelude::*;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "equipart")]
#[command(about = "Orthogonal equipartition experiment runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    /// Angle-scanning enumeration
    Original,
    /// Slope-event enumeration
    Efficient,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Original => Variant::Original,
            VariantArg::Efficient => Variant::Efficient,
        }
    }
}

fn variant_name(variant: Variant) -> &'static str {
    match variant {
        Variant::Original => "original",
        Variant::Efficient => "efficient",
    }
}

#[derive(Subcommand)]
enum Action {
    /// Partition one point set from a CSV file with x and y columns
    Run {
        #[arg(long)]
        input: String,
        #[arg(long, value_enum, default_value = "efficient")]
        variant: VariantArg,
        #[arg(long)]
        out: String,
    },
    /// Run both variants on the same input and fail if their optima differ
    Compare {
        #[arg(long)]
        input: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            variant,
            out,
        } => run(input, variant.into(), out),
        Action::Compare { input } => compare(input),
    }
}

/// Read a point set from a CSV file with `x` and `y` float columns.
fn read_points(input: &str) -> Result<Vec<Vec2<f64>>> {
    let lf = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {input}"))?;
    let df = lf.select([col("x"), col("y")]).collect()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Vec2::new(x, y)),
            _ => bail!("row {row} of {input} has a null coordinate"),
        }
    }
    Ok(points)
}

fn result_record(n: usize, variant: Variant, result: &Equipartition) -> serde_json::Value {
    serde_json::json!({
        "n": n,
        "variant": variant_name(variant),
        "center": [result.center.x, result.center.y],
        "theta": result.theta,
        "counts": result.counts.0,
        "imbalance": result.imbalance,
        "balanced": result.is_balanced(),
    })
}

fn run(input: String, variant: Variant, out: String) -> Result<()> {
    tracing::info!(input, out, variant = variant_name(variant), "run");
    let points = read_points(&input)?;
    let result = orthogonal_equipartition(&points, variant)
        .with_context(|| format!("partitioning {input}"))?;
    tracing::info!(
        n = points.len(),
        theta = result.theta,
        imbalance = result.imbalance,
        "partitioned"
    );

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let record = result_record(points.len(), variant, &result);
    std::fs::write(out_path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {out}"))?;

    provenance::write_sidecar(
        out_path,
        provenance::Payload::new(serde_json::json!({
            "input": input,
            "variant": variant_name(variant),
            "n": points.len(),
        })),
    )?;
    Ok(())
}

fn compare(input: String) -> Result<()> {
    tracing::info!(input, "compare");
    let points = read_points(&input)?;
    let original = orthogonal_equipartition(&points, Variant::Original)?;
    let efficient = orthogonal_equipartition(&points, Variant::Efficient)?;
    tracing::info!(
        original = original.imbalance,
        efficient = efficient.imbalance,
        "optima"
    );
    if original.imbalance != efficient.imbalance {
        bail!(
            "variants disagree on {input}: original {} vs efficient {}",
            original.imbalance,
            efficient.imbalance
        );
    }
    let report = serde_json::json!({
        "n": points.len(),
        "original": result_record(points.len(), Variant::Original, &original),
        "efficient": result_record(points.len(), Variant::Efficient, &efficient),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
