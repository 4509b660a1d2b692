//! Print the beam assembly of a ring (two concentric circles) as JSON.
//!
//! Usage:
//!   cargo run -p beams --example ring -- [distance] [angle] [scale]

use beams::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1).map(|a| a.parse::<f64>());
    let mut next = |default: f64| args.next().and_then(Result::ok).unwrap_or(default);
    let opts = BeamOptions::new(next(12.0), next(30.0), next(0.6));

    let ring = Model::new()
        .with_path("outer", Circle::new(Vec2::new(0.0, 0.0), 10.0))
        .with_path("inner", Circle::new(Vec2::new(0.0, 0.0), 6.0));
    match beam(&ring, &opts) {
        Ok(out) => match serde_json::to_string_pretty(&out) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("serialize: {e}"),
        },
        Err(e) => eprintln!("beam: {e}"),
    }
}
