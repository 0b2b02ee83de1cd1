// Terminal rendering of the derived gauges

use std::io::{Write, stdout};

use colored::{ColoredString, Colorize};
use crossterm::{QueueableCommand, cursor, terminal};
use humansize::{DECIMAL, format_size};

use crate::config::DisplayConfig;
use crate::models::{DerivedGauges, Severity};

/// Percentage display, one decimal.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}")
}

fn paint(text: &str, color: Severity) -> ColoredString {
    match color {
        Severity::Green => text.green(),
        Severity::Yellow => text.yellow(),
        Severity::Orange => text.truecolor(255, 165, 0),
        Severity::Red => text.red(),
    }
}

fn rate(bytes_per_sec: f64) -> String {
    format!("{}/s", format_size(bytes_per_sec.max(0.0) as u64, DECIMAL))
}

fn bar(title: &str, percent: f64, color: Severity, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64)
        .round()
        .clamp(0.0, width as f64) as usize;
    let fill = "█".repeat(filled);
    let rest = " ".repeat(width - filled);
    format!(
        "{title:<14} [{}{rest}] {}%",
        paint(&fill, color),
        format_percent(percent)
    )
}

/// The fixed dashboard layout: stat row, then CPU/memory bars, then one bar
/// per disk device.
pub fn layout(gauges: &DerivedGauges, display: &DisplayConfig) -> String {
    let mut lines = vec![
        format!(
            "Load {}    Network In {}    Network Out {}",
            gauges.load,
            rate(gauges.network_in),
            rate(gauges.network_out),
        ),
        String::new(),
        bar(
            "CPU",
            gauges.cpu_percentage,
            gauges.cpu_color,
            display.bar_width,
        ),
        bar(
            "Memory",
            gauges.memory_percentage,
            gauges.memory_color,
            display.bar_width,
        ),
    ];
    for disk in &gauges.disks {
        lines.push(bar(
            &format!("Disk: {}", disk.name),
            disk.percentage,
            disk.color,
            display.bar_width,
        ));
    }
    lines.join("\n")
}

/// Clear, home, print the current layout.
pub fn draw(gauges: &DerivedGauges, display: &DisplayConfig) -> std::io::Result<()> {
    let mut out = stdout();
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.write_all(layout(gauges, display).as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
