use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Court surface a statistics record applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Hard,
    Clay,
    Grass,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Hard, Surface::Clay, Surface::Grass];

    /// Canonical surface name (e.g., "Hard").
    pub fn code(&self) -> &'static str {
        match self {
            Surface::Hard => "Hard",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hard" => Ok(Surface::Hard),
            "clay" => Ok(Surface::Clay),
            "grass" => Ok(Surface::Grass),
            other => Err(format!("unknown surface: {}", other)),
        }
    }
}

/// Per-surface serve and return rates, all in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStats {
    /// Share of first serves that land in.
    pub first_in: f64,
    /// Points won when the first serve lands.
    pub win_1st: f64,
    /// Points won on the second serve.
    pub win_2nd: f64,
    /// Return points won against a first serve.
    pub ret_1st: f64,
    /// Return points won against a second serve.
    pub ret_2nd: f64,
}

impl SurfaceStats {
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("first_in", self.first_in),
            ("win_1st", self.win_1st),
            ("win_2nd", self.win_2nd),
            ("ret_1st", self.ret_1st),
            ("ret_2nd", self.ret_2nd),
        ];
        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be within [0, 1], got {}", name, value));
            }
        }
        Ok(())
    }
}

/// A player and whatever per-surface statistics are on record for them.
///
/// A surface absent from the map is a valid state; the point model falls
/// back to an uninformative prior rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub surfaces: HashMap<Surface, SurfaceStats>,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), surfaces: HashMap::new() }
    }

    pub fn with_surface(mut self, surface: Surface, stats: SurfaceStats) -> Self {
        self.surfaces.insert(surface, stats);
        self
    }

    pub fn stats(&self, surface: Surface) -> Option<&SurfaceStats> {
        self.surfaces.get(&surface)
    }

    pub fn validate(&self) -> Result<(), String> {
        for (surface, stats) in &self.surfaces {
            stats
                .validate()
                .map_err(|e| format!("{} on {}: {}", self.name, surface.code(), e))?;
        }
        Ok(())
    }
}
