//! Print a few airspace outlines as WKT.
//!
//! Usage:
//!   cargo run -p airspace --example airspace_shapes -- [step_deg]
//!
//! Prints a control-zone circle, an approach sector through North, and a
//! ring sector, each with its vertex count.

use airspace::prelude::*;

fn main() {
    let step = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(10.0);
    let center = match airspace::dms::parse_point("521000N", "0205800E") {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let shapes = AzimuthRange::new(330.0, 30.0).and_then(|approach| {
        Ok(vec![
            build_circle(center, 9_260.0, step)?,
            build_sector(center, 18_520.0, approach, step)?,
            build_ring_sector(center, 9_260.0, 18_520.0, approach, step)?,
        ])
    });
    match shapes {
        Ok(shapes) => {
            for s in shapes {
                println!("{} ({} vertices): {}", s.kind, s.len(), s.emit(&mut WktEmitter));
            }
        }
        Err(e) => eprintln!("usage: airspace_shapes [step_deg in (0, 360]]: {e}"),
    }
}
