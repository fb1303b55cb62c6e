//!
//! # Curve sketch demo
//!
//! Headless stand-in for the interactive editor: builds up a curve the way
//! the pointer-driven UI would, then runs one render pass per rendering mode
//! and reports what would be drawn.
//!

#[macro_use]
extern crate log;

extern crate pretty_env_logger;
extern crate sketch_canvas;
extern crate sketch_curves;

use sketch_canvas::*;
use sketch_curves::*;

const PACKAGE_NAME: &str    = env!("CARGO_PKG_NAME");
const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hit radius used when deciding whether a press grabs an existing point
const GRAB_RADIUS: f64 = 0.03;

fn main() -> Result<(), CurveError> {
    pretty_env_logger::init();

    println!("{} v{}", PACKAGE_NAME, PACKAGE_VERSION);

    // The curve a user might have clicked out on the canvas
    let mut curve = Curve::new();

    curve.add_control_point(Coord2(-0.8, -0.4));
    curve.add_control_point(Coord2(-0.4, 0.6));
    curve.add_control_point(Coord2(0.1, -0.5));
    curve.add_control_point(Coord2(0.5, 0.7));
    curve.add_control_point(Coord2(0.8, -0.2));

    // Drag the middle point slightly, as a pointer-move would
    if let Some(grabbed) = curve.control_point_at(&Coord2(0.11, -0.49), GRAB_RADIUS) {
        info!("Dragging control point {}", grabbed);
        curve.set_control_point(grabbed, Coord2(0.15, -0.45))?;
    }

    for point in curve.control_points() {
        println!("  control point: {}", point);
    }

    let passes = vec![
        ("basic", CurveConfig::default()),
        ("subdivision", CurveConfig {
            mode:               CurveMode::Subdivision,
            subdivision_level:  3,
            ..CurveConfig::default()
        }),
        ("piecewise c0", CurveConfig {
            mode:               CurveMode::Piecewise,
            piecewise_degree:   2,
            ..CurveConfig::default()
        }),
        ("piecewise c1", CurveConfig {
            mode:               CurveMode::Piecewise,
            piecewise_degree:   2,
            continuity:         ContinuityMode::C1,
            ..CurveConfig::default()
        })
    ];

    for (name, config) in passes {
        let mut drawing: Vec<Draw> = vec![];

        drawing.control_points(curve.control_points());
        drawing.bezier_curve(&curve, &config)?;

        println!("{:14} {} drawing instructions", name, drawing.len());
    }

    Ok(())
}
