// Wire models for the device metric stream

use serde::{Deserialize, Serialize};

/// One named measurement: grouped by `key` (device or metric group) and
/// `detail` (sub-field, e.g. `receive_bytes`, `total`, `free`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub key: String,
    pub detail: String,
    pub value: f64,
}

/// One stream frame: a kind tag plus the raw stats for that kind.
/// The tag stays a string so unrecognized kinds can be reported verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEvent {
    pub event: String,
    pub data: Vec<Stat>,
}

/// Recognized frame kinds. `disk_io` is emitted by the producer but unused
/// by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Cpu,
    Memory,
    NetworkIo,
    Disk,
    DiskIo,
}

impl EventKind {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "cpu" => Some(Self::Cpu),
            "memory" => Some(Self::Memory),
            "network_io" => Some(Self::NetworkIo),
            "disk" => Some(Self::Disk),
            "disk_io" => Some(Self::DiskIo),
            _ => None,
        }
    }
}
