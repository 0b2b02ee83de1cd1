// Frame reduction: raw stream stats folded into derived gauges

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{DerivedGauges, DiskGauge, EventKind, MetricEvent, Severity, Stat};

/// Per-frame failure. The frame is dropped by the caller and the prior
/// gauges stay live; later frames are unaffected.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed stream frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode one raw text frame and fold it into the prior gauges.
pub fn apply_frame(prior: &DerivedGauges, raw: &str) -> Result<DerivedGauges, FrameError> {
    let event: MetricEvent = serde_json::from_str(raw)?;
    Ok(apply_event(prior, &event))
}

/// Fold one decoded frame into the gauges, replacing only the subset its
/// kind implies. Unrecognized kinds are reported and leave the state as-is.
pub fn apply_event(prior: &DerivedGauges, event: &MetricEvent) -> DerivedGauges {
    let mut next = prior.clone();
    match EventKind::parse(&event.event) {
        Some(EventKind::Cpu) => {
            let percent = reduce_cpu(&event.data);
            next.cpu_percentage = percent;
            next.cpu_color = Severity::for_percent(percent);
        }
        Some(EventKind::Memory) => {
            let percent = reduce_memory(&event.data);
            next.memory_percentage = percent;
            next.memory_color = Severity::for_percent(percent);
        }
        Some(EventKind::NetworkIo) => {
            let (received, transmitted) = reduce_network(&event.data);
            next.network_in = received;
            next.network_out = transmitted;
        }
        Some(EventKind::Disk) => {
            next.disks = reduce_disks(&event.data);
        }
        // Emitted by the producer, not rendered by the status view
        Some(EventKind::DiskIo) => {}
        None => {
            tracing::warn!(
                kind = %event.event,
                payload = ?event.data,
                "Unknown device stat type"
            );
        }
    }
    next
}

/// Total CPU usage: sum of every stat in the `cpu` group (per-core groups
/// like `cpu0` are excluded).
fn reduce_cpu(stats: &[Stat]) -> f64 {
    stats
        .iter()
        .filter(|stat| stat.key == "cpu")
        .map(|stat| stat.value)
        .sum()
}

/// Used-memory percentage from the `memory` group; details absent from the
/// frame count as 0.
fn reduce_memory(stats: &[Stat]) -> f64 {
    let mut total = 0.0;
    let mut free = 0.0;
    let mut cached = 0.0;
    let mut buffers = 0.0;

    for stat in stats {
        if stat.key != "memory" {
            continue;
        }
        match stat.detail.as_str() {
            "total" => total = stat.value,
            "free" => free = stat.value,
            "cached" => cached = stat.value,
            "buffers" => buffers = stat.value,
            _ => {}
        }
    }

    let used = total - free - cached - buffers;
    percent_of(used, total)
}

/// Per-interval byte rates: (received, transmitted), summed across every
/// interface in the frame. The producer emits deltas, so the sums overwrite
/// the prior values rather than accumulating.
fn reduce_network(stats: &[Stat]) -> (f64, f64) {
    let mut received = 0.0;
    let mut transmitted = 0.0;

    for stat in stats {
        match stat.detail.as_str() {
            "receive_bytes" => received += stat.value,
            "transmit_bytes" => transmitted += stat.value,
            _ => {}
        }
    }

    (received, transmitted)
}

/// One gauge per disk device, rebuilt from the full stat set. Devices are
/// keyed by `key` and ordered by name.
fn reduce_disks(stats: &[Stat]) -> Vec<DiskGauge> {
    let mut devices: BTreeMap<&str, (f64, f64)> = BTreeMap::new();

    for stat in stats {
        let (available, used) = devices.entry(stat.key.as_str()).or_default();
        match stat.detail.as_str() {
            "available" => *available = stat.value,
            "used" => *used = stat.value,
            _ => {}
        }
    }

    devices
        .into_iter()
        .map(|(name, (available, used))| {
            let percentage = percent_of(used, available + used);
            DiskGauge {
                name: name.to_string(),
                percentage,
                color: Severity::for_percent(percentage),
            }
        })
        .collect()
}

/// `used / total * 100`, with zero-total groups pinned to 0 instead of NaN.
fn percent_of(used: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    used / total * 100.0
}
