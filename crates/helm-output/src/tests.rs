//! Unit tests for the summary statistics and the export backends.

use std::f64::consts::PI;

use helm_core::{Point, SimRng};
use helm_field::{CurrentField, FieldModel, FieldSpec};
use helm_steer::{SteeringLaw, Vessel, VesselConfig};

use crate::VesselSummary;

fn still_field(width: usize, height: usize) -> CurrentField {
    CurrentField::generate(
        &FieldSpec { width, height, max_speed: 1.0, model: FieldModel::Still },
        &mut SimRng::new(0),
    )
    .unwrap()
}

fn uniform_field(width: usize, height: usize, direction: f64, speed: f64) -> CurrentField {
    CurrentField::generate(
        &FieldSpec { width, height, max_speed: speed, model: FieldModel::Uniform { direction } },
        &mut SimRng::new(0),
    )
    .unwrap()
}

/// Direction-keeping vessel sailed to completion over `field`.
fn run_keeper(field: &CurrentField, start: Point, end: Point) -> Vessel {
    let mut v =
        Vessel::new("keeper", start, SteeringLaw::DirectionKeeping, VesselConfig::default())
            .unwrap();
    v.sail(field, end);
    v
}

#[cfg(test)]
mod summary {
    use super::*;

    #[test]
    fn stats_from_a_straight_run() {
        let field = still_field(12, 1);
        let v = run_keeper(&field, Point::new(1.0, 0.5), Point::new(11.0, 0.5));
        assert!(v.arrived());

        let s = VesselSummary::from_vessel(&v);
        assert_eq!(s.name, "keeper");
        assert_eq!(s.steering, "direction-keeping");
        assert!(s.arrived);
        assert_eq!(s.ticks, v.trajectory().len() as u64);
        assert!((s.sail_time_secs - s.ticks as f64 * v.config.tick).abs() < 1e-12);
        // no current: full base speed, fixed heading, no work against anything
        assert!((s.max_speed - 2.0).abs() < 1e-9);
        assert_eq!(s.heading_change_deg, 0.0);
        assert_eq!(s.total_negative_work, 0.0);
    }

    #[test]
    fn negative_work_counts_only_opposing_ticks() {
        // Head current 0.5 m/s against base speed 2.0: every tick fights it.
        let field = uniform_field(20, 10, PI, 0.5);
        let v = run_keeper(&field, Point::new(1.0, 5.0), Point::new(15.0, 5.0));
        assert!(v.arrived());

        let s = VesselSummary::from_vessel(&v);
        assert!(s.total_negative_work < 0.0);
        // per tick: current · delta = -0.5 * (1.5 * 0.1)
        let expected = -0.075 * s.ticks as f64;
        assert!(
            (s.total_negative_work - expected).abs() < 1e-9,
            "got {}, expected {expected}",
            s.total_negative_work
        );
    }

    #[test]
    fn favourable_current_contributes_no_negative_work() {
        let field = uniform_field(20, 10, 0.0, 0.5);
        let v = run_keeper(&field, Point::new(1.0, 5.0), Point::new(15.0, 5.0));

        let s = VesselSummary::from_vessel(&v);
        assert_eq!(s.total_negative_work, 0.0);
        assert!(s.max_speed > 2.0);
    }

    #[test]
    fn heading_change_matches_the_recorded_series() {
        let field = uniform_field(60, 30, std::f64::consts::FRAC_PI_2, 0.5);
        let mut v = Vessel::new(
            "corrector",
            Point::new(2.0, 15.0),
            SteeringLaw::PositionCorrector,
            VesselConfig::default(),
        )
        .unwrap();
        v.sail(&field, Point::new(50.0, 15.0));

        let s = VesselSummary::from_vessel(&v);
        let expected = v
            .trajectory()
            .headings()
            .windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .sum::<f64>()
            .to_degrees();
        assert!(s.heading_change_deg > 0.0);
        assert!((s.heading_change_deg - expected).abs() < 1e-12);
    }

    #[test]
    fn an_empty_run_yields_zeroed_stats() {
        let field = still_field(20, 10);
        let mut v = Vessel::new(
            "drifter",
            Point::new(5.0, 5.0),
            SteeringLaw::Inert,
            VesselConfig::default(),
        )
        .unwrap();
        v.sail(&field, Point::new(15.0, 5.0));

        let s = VesselSummary::from_vessel(&v);
        assert_eq!(s.steering, "inert");
        assert_eq!(s.ticks, 0);
        assert_eq!(s.max_speed, 0.0);
        assert_eq!(s.heading_change_deg, 0.0);
        assert_eq!(s.total_negative_work, 0.0);
        assert!(!s.arrived);
    }
}

#[cfg(test)]
mod csv_export {
    use super::*;
    use crate::{CsvSummaryWriter, SummaryWriter, write_track_csv};

    #[test]
    fn summary_file_has_a_header_and_one_row_per_vessel() {
        let dir = tempfile::tempdir().unwrap();
        let field = still_field(12, 1);
        let keeper = run_keeper(&field, Point::new(1.0, 0.5), Point::new(11.0, 0.5));
        let mut drifter = Vessel::new(
            "drifter",
            Point::new(5.0, 0.5),
            SteeringLaw::Inert,
            VesselConfig::default(),
        )
        .unwrap();
        drifter.sail(&field, Point::new(11.0, 0.5));

        let mut w = CsvSummaryWriter::new(dir.path()).unwrap();
        w.write_summary(&VesselSummary::from_vessel(&keeper)).unwrap();
        w.write_summary(&VesselSummary::from_vessel(&drifter)).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(dir.path().join("vessel_summaries.csv")).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("name,steering,max_speed"));
        assert!(lines[1].starts_with("keeper,direction-keeping,"));
        assert!(lines[2].starts_with("drifter,inert,"));
    }

    #[test]
    fn track_rows_match_the_trajectory_length() {
        let dir = tempfile::tempdir().unwrap();
        let field = still_field(12, 1);
        let v = run_keeper(&field, Point::new(1.0, 0.5), Point::new(11.0, 0.5));
        assert!(v.trajectory().len() > 0);

        let path = dir.path().join("keeper.csv");
        write_track_csv(&v, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), v.trajectory().len() + 1);
        assert_eq!(lines[0], "tick,x,y,speed,heading,work");
        assert!(lines[1].starts_with("1,"));
    }
}

#[cfg(test)]
mod json_export {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{JsonSummaryWriter, SummaryWriter};

    #[test]
    fn round_trips_through_the_name_keyed_map() {
        let dir = tempfile::tempdir().unwrap();
        let field = still_field(12, 1);
        let keeper = VesselSummary::from_vessel(&run_keeper(
            &field,
            Point::new(1.0, 0.5),
            Point::new(11.0, 0.5),
        ));
        let mut drifter = Vessel::new(
            "drifter",
            Point::new(5.0, 0.5),
            SteeringLaw::Inert,
            VesselConfig::default(),
        )
        .unwrap();
        drifter.sail(&field, Point::new(11.0, 0.5));
        let drifter = VesselSummary::from_vessel(&drifter);

        let mut w = JsonSummaryWriter::new(dir.path());
        w.write_summary(&keeper).unwrap();
        w.write_summary(&drifter).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(dir.path().join("vessel_summaries.json")).unwrap();
        let map: BTreeMap<String, VesselSummary> = serde_json::from_str(&text).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["keeper"], keeper);
        assert_eq!(map["drifter"], drifter);
    }

    #[test]
    fn nothing_is_written_before_finish() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonSummaryWriter::new(dir.path());
        let field = still_field(12, 1);
        let keeper = VesselSummary::from_vessel(&run_keeper(
            &field,
            Point::new(1.0, 0.5),
            Point::new(11.0, 0.5),
        ));
        w.write_summary(&keeper).unwrap();

        let path = dir.path().join("vessel_summaries.json");
        assert!(!path.exists());
        w.finish().unwrap();
        assert!(path.exists());
    }
}
