// Derived view state: the gauges the dashboard renders

use serde::{Deserialize, Serialize};

/// Color band for a percentage bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Green,
    Yellow,
    Orange,
    Red,
}

impl Severity {
    /// Band mapping: `>= 90` red, `>= 80` orange, strictly `> 70` yellow,
    /// everything else (70 included) green.
    pub fn for_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::Red
        } else if percent >= 80.0 {
            Self::Orange
        } else if percent > 70.0 {
            Self::Yellow
        } else {
            Self::Green
        }
    }
}

/// Usage of one disk device, rebuilt from scratch on every `disk` frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskGauge {
    pub name: String,
    pub percentage: f64,
    pub color: Severity,
}

/// The full renderable state. Each frame replaces only the subset its kind
/// implies; `load` has no feeding event kind and stays at its initial value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedGauges {
    pub load: f64,
    pub network_in: f64,
    pub network_out: f64,
    pub cpu_percentage: f64,
    pub cpu_color: Severity,
    pub memory_percentage: f64,
    pub memory_color: Severity,
    pub disks: Vec<DiskGauge>,
}
