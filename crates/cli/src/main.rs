use anyhow::{bail, Context, Result};
use boustro::prelude::*;
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Coverage-path planning driver")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Plan a coverage path and write the waypoints as JSON
    Plan {
        #[command(flatten)]
        region: RegionArgs,
        /// Effective tool width (pass spacing)
        #[arg(long)]
        width: f64,
        #[arg(long)]
        out: String,
    },
    /// Replay a waypoint file through the actuator and report each leg
    Drive {
        /// Waypoint JSON produced by `plan`
        #[arg(long)]
        path: String,
        #[arg(long, default_value_t = 0.0)]
        start_x: f64,
        #[arg(long, default_value_t = 0.0)]
        start_y: f64,
        /// Initial heading in degrees (0 = +x axis)
        #[arg(long, default_value_t = 0.0)]
        heading: f64,
    },
    /// Classify a point against a region
    Check {
        #[command(flatten)]
        region: RegionArgs,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
    },
}

/// Region input: either a JSON vertex file or rectangle corner flags.
#[derive(Args)]
struct RegionArgs {
    /// Region as a JSON file: {"vertices": [[x, y], ...]}
    #[arg(long, conflicts_with_all = ["min_x", "min_y", "max_x", "max_y"])]
    region: Option<String>,
    #[arg(long, default_value_t = 0.0)]
    min_x: f64,
    #[arg(long, default_value_t = 0.0)]
    min_y: f64,
    #[arg(long, default_value_t = 5.0)]
    max_x: f64,
    #[arg(long, default_value_t = 10.0)]
    max_y: f64,
}

#[derive(Deserialize)]
struct RegionFile {
    vertices: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct PathFile {
    waypoints: Vec<[f64; 2]>,
}

impl RegionArgs {
    fn polygon(&self) -> Result<Polygon> {
        if let Some(path) = &self.region {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading region file {path}"))?;
            let file: RegionFile =
                serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
            Ok(Polygon::new(
                file.vertices
                    .iter()
                    .map(|[x, y]| Vec2::new(*x, *y))
                    .collect(),
            ))
        } else {
            if self.max_x <= self.min_x || self.max_y <= self.min_y {
                bail!("rectangle flags describe an empty region");
            }
            Ok(Polygon::new(vec![
                Vec2::new(self.min_x, self.min_y),
                Vec2::new(self.min_x, self.max_y),
                Vec2::new(self.max_x, self.max_y),
                Vec2::new(self.max_x, self.min_y),
            ]))
        }
    }

    fn describe(&self) -> serde_json::Value {
        match &self.region {
            Some(path) => serde_json::json!({ "file": path }),
            None => serde_json::json!({
                "min": [self.min_x, self.min_y],
                "max": [self.max_x, self.max_y],
            }),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Plan { region, width, out } => plan(&region, width, &out),
        Action::Drive {
            path,
            start_x,
            start_y,
            heading,
        } => drive(&path, start_x, start_y, heading),
        Action::Check { region, x, y } => check(&region, x, y),
    }
}

fn plan(region: &RegionArgs, width: f64, out: &str) -> Result<()> {
    let area = region.polygon()?;
    let planner = SweepPlanner::new(area, width)?;
    let path = planner.generate();
    tracing::info!(
        waypoints = path.len(),
        sweeps = path.sweeps().count(),
        travel = path.travel_length(),
        "planned"
    );
    if path.is_empty() {
        tracing::warn!("region is degenerate, nothing to plan");
    }

    let doc = serde_json::json!({
        "width": width,
        "waypoints": path.waypoints().iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
    });
    let out_path = Path::new(out);
    write_json(out_path, &doc)?;

    // Params sidecar next to the artifact, for replaying a run later.
    let params = serde_json::json!({
        "tool": "plan",
        "width": width,
        "region": region.describe(),
        "outputs": [out],
    });
    write_json(&out_path.with_extension("params.json"), &params)?;
    Ok(())
}

fn drive(path: &str, start_x: f64, start_y: f64, heading: f64) -> Result<()> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading waypoint file {path}"))?;
    let doc: PathFile = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;

    let mut actuator = Actuator::new(Pose::new(Vec2::new(start_x, start_y), heading));
    for (leg, [x, y]) in doc.waypoints.iter().enumerate() {
        let motion = actuator.move_to(Vec2::new(*x, *y));
        tracing::info!(
            leg,
            from = ?(motion.from.x, motion.from.y),
            to = ?(motion.to.x, motion.to.y),
            heading_deg = motion.heading_deg,
            "leg"
        );
    }

    let pose = actuator.pose();
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "position": [pose.position.x, pose.position.y],
            "heading_deg": pose.heading_deg,
        }))?
    );
    Ok(())
}

fn check(region: &RegionArgs, x: f64, y: f64) -> Result<()> {
    let area = region.polygon()?;
    let inside = area.contains(Vec2::new(x, y));
    tracing::info!(x, y, inside, "checked");
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "point": [x, y],
            "inside": inside,
        }))?
    );
    Ok(())
}

fn write_json(path: &Path, doc: &serde_json::Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
