//! CSV statistics loading and plain-text reporting around the ot_core
//! engine. The engine itself never touches files or the terminal; this crate
//! is the surrounding collaborator that does.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use ot_core::{ExperimentReport, PlayerProfile, Surface, SurfaceStats, SweepPoint};

/// One row of the stats table. Legacy tables use `nume`/`suprafata` headers;
/// both spellings are accepted.
#[derive(Debug, Deserialize)]
struct StatsRow {
    #[serde(alias = "nume")]
    player: String,
    #[serde(alias = "suprafata")]
    surface: String,
    first_in: f64,
    win_1st: f64,
    win_2nd: f64,
    ret_1st: f64,
    ret_2nd: f64,
}

/// Loads every per-surface record for `player` from a CSV stats table.
///
/// Rows are range-validated here, at the boundary, so the engine can assume
/// clean inputs. A player with no rows at all is an error; a player missing
/// some surface is not.
pub fn load_player_profile(csv_path: &Path, player: &str) -> Result<PlayerProfile> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open stats table {}", csv_path.display()))?;

    let mut profile = PlayerProfile::new(player);
    for row in reader.deserialize::<StatsRow>() {
        let row = row.with_context(|| format!("malformed row in {}", csv_path.display()))?;
        if row.player != player {
            continue;
        }
        let surface: Surface = row.surface.parse().map_err(|e: String| anyhow!(e))?;
        let stats = SurfaceStats {
            first_in: row.first_in,
            win_1st: row.win_1st,
            win_2nd: row.win_2nd,
            ret_1st: row.ret_1st,
            ret_2nd: row.ret_2nd,
        };
        stats
            .validate()
            .map_err(|e| anyhow!("{} on {}: {}", player, surface, e))?;
        profile.surfaces.insert(surface, stats);
    }

    if profile.surfaces.is_empty() {
        bail!("player {} not found in {}", player, csv_path.display());
    }
    Ok(profile)
}

/// One report line, e.g.
/// `[Hard] P(win Isner) = 64.2% ± 1.0% (fair odds 1.56)`.
pub fn format_surface_report(player_a: &str, report: &ExperimentReport) -> String {
    let odds = match report.fair_odds {
        Some(odds) => format!("{:.2}", odds),
        None => "n/a".to_string(),
    };
    format!(
        "[{}] P(win {}) = {:.1}% \u{00b1} {:.1}% (fair odds {})",
        report.surface.code(),
        player_a,
        report.estimate * 100.0,
        report.margin_of_error * 100.0,
        odds
    )
}

/// Short textual stand-in for the convergence plot: where the running
/// average started, where it settled, and how far it moved.
pub fn format_convergence_summary(trace: &[f64]) -> String {
    let Some((&first, &last)) = trace.first().zip(trace.last()) else {
        return "convergence: no trials recorded".to_string();
    };
    format!(
        "convergence over {} trials: started at {:.3}, settled at {:.3} (drift {:+.3})",
        trace.len(),
        first,
        last,
        last - first
    )
}

/// Two-column sweep table: assumed point probability vs match win rate.
pub fn format_sweep_table(points: &[SweepPoint]) -> String {
    let mut out = String::from("point prob  match win prob\n");
    for point in points {
        out.push_str(&format!("{:>10.3}  {:>14.3}\n", point.point_prob, point.match_win_prob));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "player,surface,first_in,win_1st,win_2nd,ret_1st,ret_2nd";

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp csv");
        for line in lines {
            writeln!(file, "{}", line).expect("write csv row");
        }
        file
    }

    #[test]
    fn loads_all_surfaces_for_a_player() {
        let file = write_csv(&[
            HEADER,
            "Isner,Hard,0.68,0.79,0.55,0.26,0.47",
            "Isner,Clay,0.66,0.74,0.52,0.25,0.45",
            "Coria,Hard,0.60,0.70,0.50,0.32,0.52",
        ]);

        let profile = load_player_profile(file.path(), "Isner").unwrap();
        assert_eq!(profile.name, "Isner");
        assert_eq!(profile.surfaces.len(), 2);
        let hard = profile.stats(Surface::Hard).unwrap();
        assert!((hard.win_1st - 0.79).abs() < 1e-12);
        assert!(profile.stats(Surface::Grass).is_none());
    }

    #[test]
    fn accepts_legacy_headers() {
        let file = write_csv(&[
            "nume,suprafata,first_in,win_1st,win_2nd,ret_1st,ret_2nd",
            "Isner,Hard,0.68,0.79,0.55,0.26,0.47",
        ]);

        let profile = load_player_profile(file.path(), "Isner").unwrap();
        assert!(profile.stats(Surface::Hard).is_some());
    }

    #[test]
    fn unknown_player_is_an_error() {
        let file = write_csv(&[HEADER, "Isner,Hard,0.68,0.79,0.55,0.26,0.47"]);

        let err = load_player_profile(file.path(), "Nadal").unwrap_err();
        assert!(err.to_string().contains("Nadal"), "{}", err);
    }

    #[test]
    fn out_of_range_stats_are_rejected_at_load() {
        let file = write_csv(&[HEADER, "Isner,Hard,0.68,1.79,0.55,0.26,0.47"]);

        let err = load_player_profile(file.path(), "Isner").unwrap_err();
        assert!(err.to_string().contains("win_1st"), "{}", err);
    }

    #[test]
    fn unknown_surface_is_an_error() {
        let file = write_csv(&[HEADER, "Isner,Carpet,0.68,0.79,0.55,0.26,0.47"]);

        let err = load_player_profile(file.path(), "Isner").unwrap_err();
        assert!(err.to_string().contains("unknown surface"), "{}", err);
    }

    #[test]
    fn surface_report_line_is_stable() {
        let report = ExperimentReport {
            surface: Surface::Hard,
            trials: 10_000,
            estimate: 0.642,
            margin_of_error: 0.0094,
            fair_odds: Some(1.5576),
            convergence: None,
        };
        assert_eq!(
            format_surface_report("Isner", &report),
            "[Hard] P(win Isner) = 64.2% \u{00b1} 0.9% (fair odds 1.56)"
        );
    }

    #[test]
    fn surface_report_prints_sentinel_odds() {
        let report = ExperimentReport {
            surface: Surface::Clay,
            trials: 100,
            estimate: 0.0,
            margin_of_error: 0.0,
            fair_odds: None,
            convergence: None,
        };
        let line = format_surface_report("Isner", &report);
        assert!(line.ends_with("(fair odds n/a)"), "{}", line);
    }

    #[test]
    fn convergence_summary_reports_endpoints() {
        let summary = format_convergence_summary(&[1.0, 0.5, 0.625]);
        assert!(summary.contains("3 trials"), "{}", summary);
        assert!(summary.contains("settled at 0.625"), "{}", summary);
        assert_eq!(format_convergence_summary(&[]), "convergence: no trials recorded");
    }

    #[test]
    fn sweep_table_has_one_row_per_point() {
        let table = format_sweep_table(&[
            SweepPoint { point_prob: 0.55, match_win_prob: 0.08 },
            SweepPoint { point_prob: 0.75, match_win_prob: 0.97 },
        ]);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("0.550"), "{}", table);
        assert!(table.contains("0.970"), "{}", table);
    }
}
