use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use airspace::arc::AzimuthRange;
use airspace::dms::parse_point;
use airspace::emit::WktEmitter;
use airspace::graticule::graticule;
use airspace::polygons::assemble_polygons;
use airspace::shapes::{
    build_circle_with, build_ring_sector_with, build_ring_with, build_sector_with,
    build_segment_with, Shape,
};
use airspace::GeoPoint;

mod config;
mod csv_input;
mod geojson;
mod provenance;

use config::Settings;

#[derive(Parser)]
#[command(name = "airspace")]
#[command(about = "Geodesic airspace outlines, polygons and graticules")]
struct Cmd {
    /// Optional JSON config (ellipsoid, default arc step, solver tolerances)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = Format::Wkt, global = true)]
    format: Format,

    /// Write here instead of stdout; a provenance sidecar is written next to it
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `name;WKT` line per geometry
    Wkt,
    /// A GeoJSON FeatureCollection
    Geojson,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Unit {
    M,
    Km,
    Nm,
}

impl Unit {
    fn to_metres(self, v: f64) -> f64 {
        match self {
            Unit::M => v,
            Unit::Km => v * 1_000.0,
            Unit::Nm => v * 1_852.0,
        }
    }
}

#[derive(Args, Debug)]
struct CenterArgs {
    /// Center latitude: DMS (`521000N`, `N521000`) or decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: String,
    /// Center longitude: DMS (`0205800E`, `E0205800`) or decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: String,
    /// Feature name in the output (defaults to the shape kind)
    #[arg(long)]
    name: Option<String>,
}

impl CenterArgs {
    fn point(&self) -> Result<GeoPoint> {
        parse_point(&self.lat, &self.lon).context("center coordinates")
    }
}

#[derive(Args, Debug)]
struct ArcArgs {
    /// Start azimuth, degrees clockwise from true North
    #[arg(long = "from")]
    from_deg: f64,
    /// End azimuth; less than `--from` wraps through North, equal means a full turn
    #[arg(long = "to")]
    to_deg: f64,
}

impl ArcArgs {
    fn range(&self) -> Result<AzimuthRange> {
        Ok(AzimuthRange::new(self.from_deg, self.to_deg)?)
    }
}

#[derive(Args, Debug)]
struct ShapeOpts {
    /// Arc step in degrees (overrides the config file)
    #[arg(long)]
    step: Option<f64>,
    /// Unit of the radius arguments
    #[arg(long, value_enum, default_value_t = Unit::M)]
    unit: Unit,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Circle around a center
    Circle {
        #[command(flatten)]
        center: CenterArgs,
        #[arg(long)]
        radius: f64,
        #[command(flatten)]
        opts: ShapeOpts,
    },
    /// Pie slice: center, arc, center
    Sector {
        #[command(flatten)]
        center: CenterArgs,
        #[arg(long)]
        radius: f64,
        #[command(flatten)]
        arc: ArcArgs,
        #[command(flatten)]
        opts: ShapeOpts,
    },
    /// Arc closed by its chord
    Segment {
        #[command(flatten)]
        center: CenterArgs,
        #[arg(long)]
        radius: f64,
        #[command(flatten)]
        arc: ArcArgs,
        #[command(flatten)]
        opts: ShapeOpts,
    },
    /// Annulus between two radii
    Ring {
        #[command(flatten)]
        center: CenterArgs,
        #[arg(long)]
        inner: f64,
        #[arg(long)]
        outer: f64,
        #[command(flatten)]
        opts: ShapeOpts,
    },
    /// Slice of an annulus between two azimuths
    RingSector {
        #[command(flatten)]
        center: CenterArgs,
        #[arg(long)]
        inner: f64,
        #[arg(long)]
        outer: f64,
        #[command(flatten)]
        arc: ArcArgs,
        #[command(flatten)]
        opts: ShapeOpts,
    },
    /// Polygons from a `name;lat;lon` CSV (blank names continue the previous polygon)
    Polygons {
        #[arg(long)]
        input: PathBuf,
    },
    /// Meridians and parallels from a JSON grid description
    Graticule {
        #[arg(long)]
        grid: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Named geometries produced by one command, plus what to record about it.
struct Product {
    command: &'static str,
    params: serde_json::Value,
    features: Vec<(String, Shape)>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let settings = config::load(cmd.config.as_deref())?;
    let product = match cmd.action {
        Action::Report => return report(&settings),
        action => run(action, &settings)?,
    };
    let text = render(cmd.format, &product.features)?;
    match cmd.out {
        Some(out) => write_output(&out, &text, product),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

fn step_of(opts: &ShapeOpts, settings: &Settings) -> f64 {
    opts.step.unwrap_or(settings.step_deg)
}

fn named(center: &CenterArgs, shape: Shape) -> Vec<(String, Shape)> {
    let name = center.name.clone().unwrap_or_else(|| shape.kind.to_string());
    vec![(name, shape)]
}

fn run(action: Action, settings: &Settings) -> Result<Product> {
    let cfg = &settings.geodesy;
    match action {
        Action::Circle {
            center,
            radius,
            opts,
        } => {
            let (r, step) = (opts.unit.to_metres(radius), step_of(&opts, settings));
            tracing::info!(lat = %center.lat, lon = %center.lon, radius_m = r, step, "circle");
            let shape = build_circle_with(cfg, center.point()?, r, step)?;
            Ok(Product {
                command: "circle",
                params: json!({
                    "lat": center.lat, "lon": center.lon, "radius_m": r, "step_deg": step
                }),
                features: named(&center, shape),
            })
        }
        Action::Sector {
            center,
            radius,
            arc,
            opts,
        } => {
            let (r, step) = (opts.unit.to_metres(radius), step_of(&opts, settings));
            tracing::info!(radius_m = r, from = arc.from_deg, to = arc.to_deg, step, "sector");
            let shape = build_sector_with(cfg, center.point()?, r, arc.range()?, step)?;
            Ok(Product {
                command: "sector",
                params: json!({
                    "lat": center.lat, "lon": center.lon, "radius_m": r,
                    "from": arc.from_deg, "to": arc.to_deg, "step_deg": step
                }),
                features: named(&center, shape),
            })
        }
        Action::Segment {
            center,
            radius,
            arc,
            opts,
        } => {
            let (r, step) = (opts.unit.to_metres(radius), step_of(&opts, settings));
            tracing::info!(radius_m = r, from = arc.from_deg, to = arc.to_deg, step, "segment");
            let shape = build_segment_with(cfg, center.point()?, r, arc.range()?, step)?;
            Ok(Product {
                command: "segment",
                params: json!({
                    "lat": center.lat, "lon": center.lon, "radius_m": r,
                    "from": arc.from_deg, "to": arc.to_deg, "step_deg": step
                }),
                features: named(&center, shape),
            })
        }
        Action::Ring {
            center,
            inner,
            outer,
            opts,
        } => {
            let (ri, ro) = (opts.unit.to_metres(inner), opts.unit.to_metres(outer));
            let step = step_of(&opts, settings);
            tracing::info!(inner_m = ri, outer_m = ro, step, "ring");
            let shape = build_ring_with(cfg, center.point()?, ri, ro, step)?;
            Ok(Product {
                command: "ring",
                params: json!({
                    "lat": center.lat, "lon": center.lon,
                    "inner_m": ri, "outer_m": ro, "step_deg": step
                }),
                features: named(&center, shape),
            })
        }
        Action::RingSector {
            center,
            inner,
            outer,
            arc,
            opts,
        } => {
            let (ri, ro) = (opts.unit.to_metres(inner), opts.unit.to_metres(outer));
            let step = step_of(&opts, settings);
            tracing::info!(
                inner_m = ri,
                outer_m = ro,
                from = arc.from_deg,
                to = arc.to_deg,
                step,
                "ring_sector"
            );
            let shape = build_ring_sector_with(cfg, center.point()?, ri, ro, arc.range()?, step)?;
            Ok(Product {
                command: "ring-sector",
                params: json!({
                    "lat": center.lat, "lon": center.lon, "inner_m": ri, "outer_m": ro,
                    "from": arc.from_deg, "to": arc.to_deg, "step_deg": step
                }),
                features: named(&center, shape),
            })
        }
        Action::Polygons { input } => {
            tracing::info!(input = %input.display(), "polygons");
            let rows = csv_input::read_vertex_rows(&input)?;
            let report = assemble_polygons(rows);
            Ok(Product {
                command: "polygons",
                params: json!({
                    "input": input.to_string_lossy(),
                    "skipped": report.skipped.iter().map(|s| s.name.clone()).collect::<Vec<_>>()
                }),
                features: report
                    .polygons
                    .into_iter()
                    .map(|p| (p.name, p.shape))
                    .collect(),
            })
        }
        Action::Graticule { grid } => {
            tracing::info!(grid = %grid.display(), "graticule");
            let window = config::load_graticule(&grid)?;
            let lines = graticule(&window)?;
            Ok(Product {
                command: "graticule",
                params: json!({ "grid": grid.to_string_lossy() }),
                features: lines.into_iter().map(|l| (l.label, l.shape)).collect(),
            })
        }
        Action::Report => bail!("report produces no geometry"),
    }
}

fn render(format: Format, features: &[(String, Shape)]) -> Result<String> {
    let degraded = features
        .iter()
        .filter(|(_, s)| s.precision.is_degraded())
        .count();
    if degraded > 0 {
        tracing::warn!(degraded, "some geometries use the spherical fallback");
    }
    match format {
        Format::Wkt => Ok(features
            .iter()
            .map(|(name, shape)| format!("{name};{}", shape.emit(&mut WktEmitter)))
            .collect::<Vec<_>>()
            .join("\n")),
        Format::Geojson => {
            let fc = geojson::feature_collection(
                features
                    .iter()
                    .map(|(name, shape)| geojson::feature(name, shape))
                    .collect(),
            );
            Ok(serde_json::to_string_pretty(&fc)?)
        }
    }
}

fn write_output(out: &Path, text: &str, product: Product) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    let features = product.features.len();
    let degraded = product
        .features
        .iter()
        .filter(|(_, s)| s.precision.is_degraded())
        .count();
    let sidecar = provenance::write_sidecar(
        out,
        provenance::Payload::new(product.command, product.params).with_counts(features, degraded),
    )?;
    tracing::info!(out = %out.display(), features, sidecar = %sidecar.display(), "written");
    Ok(())
}

fn report(settings: &Settings) -> Result<()> {
    let e = settings.geodesy.ellipsoid;
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "tool_version": airspace::VERSION,
        "params": {
            "ellipsoid": { "a": e.a, "f": e.f },
            "step_deg": settings.step_deg,
            "tolerance": settings.geodesy.tolerance,
            "max_iterations": settings.geodesy.max_iterations
        },
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
