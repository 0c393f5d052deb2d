//! crossing — a fleet of self-steering vessels crossing a random current.
//!
//! Generates a 160 × 90 m field, plans a direct and a current-adapted route
//! between two points on the same latitude, then sails six vessels across:
//! one per steering law plus a route follower for each planned route.
//! Everything lands in `output/crossing/` for external plotting.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use helm_core::{Point, SimRng};
use helm_field::{CurrentField, FieldModel, FieldSpec, blob};
use helm_output::{
    CsvSummaryWriter, JsonSummaryWriter, SummaryWriter, VesselSummary, write_track_csv,
};
use helm_route::{Route, RouteModel, route_cost};
use helm_steer::{SteeringLaw, Vessel, VesselConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64   = 42;
const WIDTH:      usize = 160;
const HEIGHT:     usize = 90;
const MAX_SPEED:  f64   = 2.0; // strongest current, m/s
const DISPERSION: f64   = 0.3;

const START: Point = Point { x: 5.0, y: 45.0 };
const END:   Point = Point { x: 155.0, y: 45.0 };

const OUT_DIR: &str = "output/crossing";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== crossing — current-field steering demo ===");
    println!("Field: {WIDTH}x{HEIGHT} m  |  Max current: {MAX_SPEED} m/s  |  Seed: {SEED}");
    println!();

    // 1. Generate the current field.
    let mut rng = SimRng::new(SEED);
    let spec = FieldSpec {
        width:     WIDTH,
        height:    HEIGHT,
        max_speed: MAX_SPEED,
        model:     FieldModel::Random { dispersion: DISPERSION },
    };
    let field = CurrentField::generate(&spec, &mut rng)?;
    println!(
        "Current field: {} cells, strongest current {:.3} m/s",
        field.cells().len(),
        field.max_magnitude()
    );

    std::fs::create_dir_all(OUT_DIR)?;
    blob::save_path(&field, &Path::new(OUT_DIR).join("field.bin"))?;

    // 2. Plan both routes.
    let mut direct = Route::new("direct", START, RouteModel::Direct).with_color("#1f77b4");
    direct.calculate(&field, END)?;

    let mut adapted = Route::new("adapted", START, RouteModel::Adapted).with_color("#d62728");
    adapted.calculate(&field, END)?;

    let initial_cost = route_cost(&adapted.history()[0], &field);
    let final_cost = route_cost(adapted.history().last().unwrap(), &field);
    println!(
        "Routes: direct {} waypoints, adapted {} waypoints (cost {:.2} -> {:.2} over {} passes)",
        direct.waypoints().len(),
        adapted.waypoints().len(),
        initial_cost,
        final_cost,
        adapted.history().len() - 1
    );
    println!();

    // 3. Build the fleet.  All six share the same hull parameters.
    let cfg = VesselConfig::default();
    let mut fleet = vec![
        Vessel::new("drifter", START, SteeringLaw::Inert, cfg)?.with_color("#7f7f7f"),
        Vessel::new("keeper", START, SteeringLaw::DirectionKeeping, cfg)?.with_color("#2ca02c"),
        Vessel::new("corrector", START, SteeringLaw::PositionCorrector, cfg)?
            .with_color("#ff7f0e"),
        Vessel::new("crab", START, SteeringLaw::DriftCorrection, cfg)?.with_color("#9467bd"),
        Vessel::new(
            "pilot-direct",
            START,
            SteeringLaw::RouteFollowing { waypoints: direct.waypoints().to_vec() },
            cfg,
        )?
        .with_color("#1f77b4"),
        Vessel::new(
            "pilot-adapted",
            START,
            SteeringLaw::RouteFollowing { waypoints: adapted.waypoints().to_vec() },
            cfg,
        )?
        .with_color("#d62728"),
    ];

    // 4. Sail and export.
    let mut csv_out = CsvSummaryWriter::new(Path::new(OUT_DIR))?;
    let mut json_out = JsonSummaryWriter::new(Path::new(OUT_DIR));

    let t0 = Instant::now();
    let mut outcomes = Vec::with_capacity(fleet.len());
    for vessel in &mut fleet {
        let reason = vessel.sail(&field, END);
        outcomes.push(reason);

        write_track_csv(vessel, &Path::new(OUT_DIR).join(format!("{}.csv", vessel.name)))?;
        let summary = VesselSummary::from_vessel(vessel);
        csv_out.write_summary(&summary)?;
        json_out.write_summary(&summary)?;
    }
    csv_out.finish()?;
    json_out.finish()?;
    let elapsed = t0.elapsed();

    println!("Fleet sailed in {:.3} s", elapsed.as_secs_f64());
    println!("  {OUT_DIR}/field.bin");
    println!("  {OUT_DIR}/vessel_summaries.csv + .json");
    println!("  {OUT_DIR}/<vessel>.csv per-tick tracks");
    println!();

    // 5. Outcome table.
    println!(
        "{:<15} {:<20} {:>8} {:>10} {:>9}  {}",
        "Vessel", "Steering", "Ticks", "Time (s)", "Arrived", "Stopped"
    );
    println!("{}", "-".repeat(78));
    for (vessel, reason) in fleet.iter().zip(&outcomes) {
        let t = vessel.trajectory();
        println!(
            "{:<15} {:<20} {:>8} {:>10.1} {:>9}  {}",
            vessel.name,
            vessel.law.tag(),
            t.len(),
            t.len() as f64 * vessel.config.tick,
            if vessel.arrived() { "yes" } else { "no" },
            reason,
        );
    }

    Ok(())
}
