use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use meshcore::curve::VertexCurve;
use meshcore::geometry::Ray;
use meshcore::scene::Scene;
use meshcore::{shapes, Mesh};
use nalgebra::Vector3;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;

use provenance::{current_git_rev, write_sidecar, Payload};
use report::{BoundaryReport, CurveReport, PathReport, PickReport, Stats, ValidateReport};

#[derive(Parser)]
#[command(name = "meshcore")]
#[command(about = "Query mesh topology, paths, picks and boundaries on built-in shapes")]
struct Cmd {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Free-form label propagated to the provenance sidecar
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Write the JSON result here (plus `<stem>.provenance.json`) instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(flatten)]
    shape: ShapeArgs,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ShapeKind {
    Tetrahedron,
    Octahedron,
    Cube,
    Grid,
    TwoIslands,
}

#[derive(Args, Debug, Serialize)]
struct ShapeArgs {
    #[arg(long, value_enum, default_value_t = ShapeKind::Grid, global = true)]
    shape: ShapeKind,
    /// Grid cells per side
    #[arg(long, default_value_t = 8, global = true)]
    n: usize,
    /// Grid spacing, or cube half-width
    #[arg(long, default_value_t = 1.0, global = true)]
    size: f64,
    /// Grid jitter as a fraction of the spacing (clamped to [0, 0.2])
    #[arg(long, default_value_t = 0.0, global = true)]
    jitter: f64,
    #[arg(long, default_value_t = 0, global = true)]
    seed: u64,
}

impl ShapeArgs {
    fn build(&self) -> Result<Mesh> {
        let mesh = match self.shape {
            ShapeKind::Tetrahedron => shapes::tetrahedron(),
            ShapeKind::Octahedron => shapes::octahedron(),
            ShapeKind::Cube => shapes::cube(self.size),
            ShapeKind::Grid if self.jitter > 0.0 => {
                shapes::jittered_grid(self.n, self.n, self.size, self.jitter, self.seed)
            }
            ShapeKind::Grid => shapes::grid(self.n, self.n, self.size),
            ShapeKind::TwoIslands => shapes::two_islands(),
        };
        mesh.with_context(|| format!("building shape {:?}", self.shape))
    }
}

#[derive(Subcommand)]
enum Action {
    /// Counts of vertices, faces, edges, ring states and bounds
    Stats,
    /// Shortest path between two vertices (or two faces with --dual)
    Path {
        from: usize,
        to: usize,
        #[arg(long)]
        dual: bool,
    },
    /// Closest hit of a ray, e.g. `pick --origin 0.5,0.5,3 --direction 0,0,-1`
    Pick {
        #[arg(long, num_args = 3, value_delimiter = ',', allow_negative_numbers = true)]
        origin: Vec<f64>,
        #[arg(long, num_args = 3, value_delimiter = ',', allow_negative_numbers = true)]
        direction: Vec<f64>,
    },
    /// Boundary edge count and chained loops
    Boundary,
    /// Vertex curve through waypoints
    Curve {
        #[arg(required = true)]
        waypoints: Vec<usize>,
    },
    /// Run the structural checks on the topology snapshot
    Validate,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (name, params, result) = run(&cmd.action, &cmd.shape, cmd.tag.as_deref())?;
    emit(name, &cmd.shape, params, result, cmd.out, cmd.tag)
}

fn load(shape: &ShapeArgs) -> Result<Mesh> {
    let mesh = shape.build()?;
    tracing::info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "mesh ready"
    );
    Ok(mesh)
}

fn run(action: &Action, shape: &ShapeArgs, tag: Option<&str>) -> Result<(&'static str, Value, Value)> {
    Ok(match action {
        Action::Report => (
            "report",
            json!({}),
            json!({ "code_rev": current_git_rev(), "meshcore_version": meshcore::VERSION, "tag": tag }),
        ),
        Action::Stats => ("stats", json!({}), serde_json::to_value(Stats::of(&load(shape)?))?),
        Action::Path { from, to, dual } => {
            let mesh = load(shape)?;
            let path = if *dual {
                mesh.face_shortest_path(*from, *to)
            } else {
                mesh.shortest_path(*from, *to)
            }
            .context("path query")?;
            tracing::info!(reachable = path.is_reachable(), hops = path.len(), "path");
            (
                "path",
                json!({ "from": from, "to": to, "dual": dual }),
                serde_json::to_value(PathReport::new(*dual, *from, *to, path))?,
            )
        }
        Action::Pick { origin, direction } => {
            let ray = Ray::new(vec3(origin)?, vec3(direction)?);
            let mut scene = Scene::new();
            let id = scene.add(load(shape)?);
            let result = match scene.intersect(&ray) {
                Some(h) => serde_json::to_value(PickReport::new(scene.mesh(id)?, &h.hit))?,
                None => {
                    tracing::info!("ray missed");
                    Value::Null
                }
            };
            ("pick", json!({ "origin": origin, "direction": direction }), result)
        }
        Action::Boundary => (
            "boundary",
            json!({}),
            serde_json::to_value(BoundaryReport::of(&load(shape)?))?,
        ),
        Action::Curve { waypoints } => {
            let mesh = load(shape)?;
            let curve = VertexCurve::through(0, &mesh, waypoints).context("curve query")?;
            (
                "curve",
                json!({ "waypoints": waypoints }),
                serde_json::to_value(CurveReport::new(&mesh, curve))?,
            )
        }
        Action::Validate => (
            "validate",
            json!({}),
            serde_json::to_value(ValidateReport::of(&load(shape)?))?,
        ),
    })
}

fn vec3(xs: &[f64]) -> Result<Vector3<f64>> {
    match xs {
        &[x, y, z] => Ok(Vector3::new(x, y, z)),
        _ => anyhow::bail!("expected three comma-separated numbers, got {}", xs.len()),
    }
}

fn emit(
    name: &'static str,
    shape: &ShapeArgs,
    mut params: Value,
    result: Value,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(&out, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {}", out.display()))?;
    if let Value::Object(map) = &mut params {
        map.insert("shape".into(), serde_json::to_value(shape)?);
    }
    let sidecar = write_sidecar(&out, Payload::new(name, params).with_tag(tag))?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}
