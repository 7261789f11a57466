//! Console walkthrough of the worked examples.
//!
//! Usage:
//! ```text
//! cargo run --example walkthrough                 # every example
//! cargo run --example walkthrough -- rotation     # one family
//! RUST_LOG=homxform=debug cargo run --example walkthrough -- pipeline
//! ```
//!
//! Families: `translation`, `reflection`, `rotation`, `scaling`, `pipeline`,
//! `all`.

use homxform::builders::{
    axis_rotation, reflection, scaling3, translation, translation3, Axis, Mirror,
};
use homxform::observe::{Trace, TracingObserver};
use homxform::{Dim, HomogeneousPoint, Pipeline, PointKind, Result, TransformMatrix};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for homxform and this example.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("walkthrough=info".parse().unwrap_or_default())
        .add_directive("homxform=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let family = std::env::args().nth(1).unwrap_or_else(|| "all".into());
    tracing::info!(%family, "running walkthrough");

    let run_all = family == "all";
    let mut matched = false;
    if run_all || family == "translation" {
        matched = true;
        translations()?;
    }
    if run_all || family == "reflection" {
        matched = true;
        reflections()?;
    }
    if run_all || family == "rotation" {
        matched = true;
        rotations()?;
    }
    if run_all || family == "scaling" {
        matched = true;
        scalings()?;
    }
    if run_all || family == "pipeline" {
        matched = true;
        pipeline()?;
    }
    if !matched {
        tracing::warn!(%family, "unknown example family");
    }
    Ok(())
}

fn translations() -> Result<()> {
    for (coords, offset) in [
        (vec![2.0, 3.0], vec![1.0, -1.0]),
        (vec![0.0, 0.0], vec![5.0, 5.0]),
        (vec![-1.0, 4.0], vec![2.0, -3.0]),
        (vec![2.0, 3.0, 4.0], vec![3.0, 2.0, -1.0]),
        (vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 1.0]),
        (vec![1.0, -1.0, 2.0], vec![-3.0, 4.0, 5.0]),
    ] {
        let point = HomogeneousPoint::new(&coords, PointKind::Point)?;
        let m = translation(&offset)?;
        narrate(&format!("Translating {coords:?} by {offset:?}"), &m, &point)?;
    }
    Ok(())
}

fn reflections() -> Result<()> {
    for (coords, mirror) in [
        (vec![3.0, 2.0], "x"),
        (vec![-1.0, 4.0], "y"),
        (vec![2.0, 5.0], "y=x"),
        (vec![3.0, 4.0], "y=-x"),
        (vec![-1.0, 2.0], "y=x"),
        (vec![2.0, -3.0], "x"),
        (vec![2.0, 3.0, 4.0], "xy"),
        (vec![1.0, -2.0, 3.0], "yz"),
        (vec![4.0, 5.0, 6.0], "xz"),
    ] {
        let point = HomogeneousPoint::new(&coords, PointKind::Point)?;
        let m = reflection(mirror.parse::<Mirror>()?);
        narrate(&format!("Reflecting {coords:?} over {mirror}"), &m, &point)?;
    }
    Ok(())
}

fn rotations() -> Result<()> {
    for (coords, degrees, axis) in [
        ([1.0, 0.0, 0.0], 90.0, Axis::Z),
        ([0.0, 1.0, 0.0], 180.0, Axis::Z),
        ([2.0, 0.0, 3.0], 45.0, Axis::Z),
        ([0.0, 1.0, 0.0], 90.0, Axis::X),
        ([1.0, 0.0, 0.0], 90.0, Axis::Y),
    ] {
        let point = HomogeneousPoint::point3(coords[0], coords[1], coords[2]);
        let m = axis_rotation(axis, f64::to_radians(degrees));
        narrate(
            &format!("Rotating {coords:?} by {degrees}° about {axis:?}"),
            &m,
            &point,
        )?;
    }
    Ok(())
}

fn scalings() -> Result<()> {
    for (coords, factors) in [
        ([2.0, 3.0, 4.0], [2.0, 1.0, 0.5]),
        ([1.0, 1.0, 1.0], [0.5, 0.5, 0.5]),
        ([3.0, -2.0, 5.0], [-1.0, 2.0, 1.0]),
    ] {
        let point = HomogeneousPoint::point3(coords[0], coords[1], coords[2]);
        let m = scaling3(factors[0], factors[1], factors[2]);
        narrate(&format!("Scaling {coords:?} by {factors:?}"), &m, &point)?;
    }
    Ok(())
}

fn pipeline() -> Result<()> {
    let pipeline = Pipeline::new(Dim::Three)
        .then(translation3(1.0, 0.0, 0.0))?
        .then(axis_rotation(Axis::Z, 90_f64.to_radians()))?;
    let start = HomogeneousPoint::point3(1.0, 0.0, 0.0);

    let mut trace = Trace::default();
    let end = pipeline.apply_observed(&start, &mut trace)?;
    pipeline.apply_observed(&start, &mut TracingObserver)?;

    banner("Translate by (1,0,0), then rotate 90° about Z");
    for (i, step) in trace.steps.iter().enumerate() {
        println!("Step {}:", i + 1);
        print_matrix(&step.matrix);
        println!(
            "{} -> {}",
            format_point(&step.before),
            format_point(&step.after)
        );
    }
    println!("Combined matrix:");
    print_matrix(&pipeline.matrix()?);
    println!("Result: {}", format_point(&end));
    Ok(())
}

fn narrate(title: &str, m: &TransformMatrix, point: &HomogeneousPoint) -> Result<()> {
    let out = m.apply(point)?;
    banner(title);
    println!("Matrix:");
    print_matrix(m);
    println!("Original point: {}", format_point(point));
    println!("Result: {}", format_point(&out));
    Ok(())
}

fn banner(title: &str) {
    let rule = "=".repeat(50);
    println!("\n{rule}\n{title}\n{rule}");
}

fn print_matrix(m: &TransformMatrix) {
    for row in m.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:6.2}")).collect();
        println!("  [{}]", cells.join(" "));
    }
}

fn format_point(p: &HomogeneousPoint) -> String {
    let cells: Vec<String> = p.homogeneous().iter().map(|v| format!("{v:.2}")).collect();
    format!("[{}]", cells.join(", "))
}
