use affine2d::prelude::*;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Inspect meshes, strokes and transforms of the affine2d kernel")]
struct Cmd {
    /// Write the JSON result here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a procedural mesh and print its vertices, indices and miters
    Mesh {
        #[arg(long, value_enum)]
        kind: MeshArg,
        /// Sides of a polygon, spikes of a star
        #[arg(long, default_value_t = 6)]
        sides: usize,
        /// Inner/outer radius ratio of a star
        #[arg(long, default_value_t = 0.5)]
        ratio: f64,
        #[arg(long)]
        flat_top: bool,
        /// Rectangle as L,T,W,H
        #[arg(long, default_value = "-1,1,2,2", allow_hyphen_values = true)]
        rect: String,
    },
    /// Tessellate a polyline given as X,Y points
    Stroke {
        #[arg(long, default_value_t = 1.0)]
        thickness: f64,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        points: Vec<String>,
    },
    /// Print the matrix mapping one rect onto another, both as L,T,W,H
    Fit {
        #[arg(long, allow_hyphen_values = true)]
        src: String,
        #[arg(long, allow_hyphen_values = true)]
        dst: String,
        #[arg(long, value_enum, default_value_t = FitArg::Fill)]
        mode: FitArg,
    },
    /// Bounds of the unit circle under a column-major A,B,C,D,E,F matrix
    Bounds {
        #[arg(long, allow_hyphen_values = true)]
        matrix: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MeshArg {
    Polygon,
    Star,
    Rectangle,
}

#[derive(Clone, Copy, ValueEnum)]
enum FitArg {
    Fill,
    Center,
    Start,
    End,
}

impl From<FitArg> for ScaleToFit {
    fn from(mode: FitArg) -> Self {
        match mode {
            FitArg::Fill => ScaleToFit::Fill,
            FitArg::Center => ScaleToFit::Center,
            FitArg::Start => ScaleToFit::Start,
            FitArg::End => ScaleToFit::End,
        }
    }
}

#[derive(Serialize)]
struct MeshReport {
    vertices: Vec<Vec2>,
    indices: Vec<u16>,
    miters: Vec<Vec2>,
    bounds: Rect,
}

#[derive(Serialize)]
struct StrokeReport {
    thickness: f64,
    pairs: Vec<[Point; 2]>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let value = match cmd.action {
        Action::Mesh {
            kind,
            sides,
            ratio,
            flat_top,
            rect,
        } => mesh(kind, sides, ratio, flat_top, &rect)?,
        Action::Stroke { thickness, points } => stroke(thickness, &points)?,
        Action::Fit { src, dst, mode } => fit(&src, &dst, mode)?,
        Action::Bounds { matrix } => bounds(&matrix)?,
    };
    emit(&value, cmd.out.as_deref())
}

fn mesh(
    kind: MeshArg,
    sides: usize,
    ratio: f64,
    flat_top: bool,
    rect: &str,
) -> Result<serde_json::Value> {
    let mesh = match kind {
        MeshArg::Polygon => PolygonMesh::regular_polygon(sides, flat_top)
            .with_context(|| format!("building a {sides}-sided polygon"))?,
        MeshArg::Star => PolygonMesh::star(sides, ratio)
            .with_context(|| format!("building a {sides}-spike star"))?,
        MeshArg::Rectangle => PolygonMesh::rectangle(&parse_rect(rect)?),
    };
    tracing::info!(
        vertices = mesh.vertices().len(),
        triangles = mesh.indices().len() / 3,
        "mesh"
    );
    let report = MeshReport {
        vertices: mesh.vertices().to_vec(),
        indices: mesh.indices().to_vec(),
        miters: mesh.vertex_miters().to_vec(),
        bounds: mesh.bounds(),
    };
    Ok(serde_json::to_value(report)?)
}

fn stroke(thickness: f64, points: &[String]) -> Result<serde_json::Value> {
    let mut points = points.iter().map(|s| parse_point(s));
    let first = points.next().context("stroke needs at least one point")??;
    let mut s = Stroke::new();
    s.move_to(first, thickness)?;
    for p in points {
        s.line_to(p?, thickness)?;
    }
    tracing::info!(thickness, pairs = s.len() / 2, "stroke");
    let report = StrokeReport {
        thickness,
        pairs: s.pairs().map(|(top, bottom)| [top, bottom]).collect(),
    };
    Ok(serde_json::to_value(report)?)
}

fn fit(src: &str, dst: &str, mode: FitArg) -> Result<serde_json::Value> {
    let src = parse_rect(src).context("parsing --src")?;
    let dst = parse_rect(dst).context("parsing --dst")?;
    if src.width() == 0.0 || src.height() == 0.0 {
        bail!("source rect {src:?} has no area");
    }
    let m = Mat2d::rect_to_rect(&src, &dst, mode.into());
    tracing::info!(matrix = ?m.to_array(), "fit");
    Ok(serde_json::json!({
        "matrix": m,
        "mapped": m.map_rect(&src),
    }))
}

fn bounds(matrix: &str) -> Result<serde_json::Value> {
    let [a, b, c, d, e, f] = parse_floats::<6>(matrix).context("parsing --matrix")?;
    let m = Mat2d::from_array([a, b, c, d, e, f]);
    let r = Ellipse::measure_boundaries(&m);
    tracing::info!(det = m.determinant(), "bounds");
    Ok(serde_json::to_value(r)?)
}

fn emit(value: &serde_json::Value, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            std::fs::write(path, text)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(out = %path.display(), "written");
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Parses exactly `N` comma-separated floats.
fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N]> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid number {part:?} in {s:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let n = values.len();
    values
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected {N} comma-separated numbers in {s:?}, got {n}"))
}

fn parse_point(s: &str) -> Result<Point> {
    let [x, y] = parse_floats::<2>(s)?;
    Ok(Point::new(x, y))
}

fn parse_rect(s: &str) -> Result<Rect> {
    let [l, t, w, h] = parse_floats::<4>(s)?;
    Ok(Rect::dimensions(l, t, w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_lists() {
        assert_eq!(parse_point("1.5, -2").unwrap(), Point::new(1.5, -2.0));
        assert_eq!(
            parse_rect("0,10,4,2").unwrap(),
            Rect::new(0.0, 10.0, 4.0, 8.0)
        );
        assert!(parse_point("1,2,3").is_err());
        assert!(parse_rect("0,x,1,1").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cmd::command().debug_assert();
    }

    #[test]
    fn mesh_report_lists_geometry() {
        let v = mesh(MeshArg::Star, 5, 0.5, false, "").unwrap();
        assert_eq!(v["vertices"].as_array().unwrap().len(), 10);
        assert_eq!(v["indices"].as_array().unwrap().len(), 24);
        assert_eq!(v["miters"].as_array().unwrap().len(), 10);
        assert!(mesh(MeshArg::Polygon, 2, 0.5, false, "").is_err());
    }

    #[test]
    fn stroke_report_has_one_pair_per_point() {
        let points = ["0,0", "10,0", "10,10"].map(String::from);
        let v = stroke(2.0, &points).unwrap();
        assert_eq!(v["pairs"].as_array().unwrap().len(), 3);
        assert!(stroke(2.0, &[]).is_err());
    }

    #[test]
    fn fit_and_bounds() {
        let v = fit("0,2,2,2", "10,20,4,4", FitArg::Fill).unwrap();
        assert_eq!(v["matrix"], serde_json::json!([2.0, 0.0, 0.0, 2.0, 10.0, 16.0]));
        assert!(fit("0,0,0,1", "0,0,1,1", FitArg::Center).is_err());

        let r = bounds("2,0,0,1,5,0").unwrap();
        assert_eq!(r["left"], 3.0);
        assert_eq!(r["right"], 7.0);
        assert_eq!(r["top"], 1.0);
    }

    #[test]
    fn writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");
        emit(&serde_json::json!({"ok": true}), Some(&path)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"ok\": true"));
    }
}
