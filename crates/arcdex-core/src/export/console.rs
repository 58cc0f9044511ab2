//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::chart::Difficulty;
use crate::query::{ChartCard, CompareReport, SearchHit};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const SPARK_WIDTH: usize = 60;

/// Format a song card for console display with colored output
///
/// Unavailable charts show the header and the availability notice only.
pub fn format_chart_card_console(card: &ChartCard) -> String {
    let mut output = String::new();

    let title_content = format!(
        "  {} [{} {}]",
        card.title.bold(),
        format_colored_difficulty(&card.difficulty),
        card.level.as_deref().unwrap_or("?")
    );
    let border_width = (card.title.chars().count() + 16).max(50);
    let border: String = "━".repeat(border_width);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "{}", title_content);
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  ARTIST   : {}", card.artist);
    let _ = writeln!(output, "  VOCALS   : {}", card.vocals);
    let _ = writeln!(output, "  PACK     : {}", card.pack);
    if let Some(genre) = &card.genre {
        let _ = writeln!(output, "  GENRE    : {}", genre);
    }
    if let Some(side) = &card.side {
        let _ = writeln!(output, "  SIDE     : {}", side);
    }

    if let Some(message) = card.unavailable_message() {
        let _ = writeln!(output, "  {}", message.yellow());
        let _ = write!(output, "{}", border_dim);
        return output;
    }

    let _ = writeln!(output, "  PLATFORM : {}", card.platform);
    let _ = writeln!(output, "  NOTES    : {}", dash(card.notes.map(|n| n.to_string())));
    let _ = writeln!(output, "  CONSTANT : {}", dash(card.chart_constant.clone()));
    let _ = writeln!(output, "  BPM      : {}", dash(card.bpm.clone()));
    let _ = writeln!(output, "  LENGTH   : {}", dash(card.length.clone()));
    let _ = writeln!(
        output,
        "  ADDED    : {} ({})",
        dash(card.version.clone()),
        dash(card.added.clone())
    );
    let _ = writeln!(output, "  CHARTER  : {}", dash(card.chart_design.clone()));
    let _ = writeln!(output, "  ARTWORK  : {}", card.artwork);
    let _ = writeln!(output, "  JACKET   : {}", card.image.dimmed());
    if let Some(pack_image) = &card.pack_image {
        let _ = writeln!(output, "  PACK IMG : {}", pack_image.dimmed());
    }
    if let Some(background) = &card.background {
        let image = card.background_image.as_deref().unwrap_or("-");
        let _ = writeln!(output, "  BG       : {} {}", background, image.dimmed());
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// Format a compare report: a sparkline of the group with the chart marked
pub fn format_compare_console(report: &CompareReport) -> String {
    let mut output = String::new();

    let Some(selected) = report.entries.get(report.rank) else {
        return output;
    };

    let _ = writeln!(
        output,
        "{} [{}] by {} within {} ({} charts, {})",
        selected.title.bold(),
        format_colored_difficulty(&selected.difficulty),
        report.metric.label(),
        report.group.label(),
        report.count,
        report.platform
    );

    let (line, marker) = sparkline(report);
    let _ = writeln!(output, "  {}", line);
    let _ = writeln!(output, "  {}{}", " ".repeat(marker), "▲".red());

    let value = report
        .value
        .map(|v| report.metric.format(v))
        .unwrap_or_else(|| "-".to_string());
    match report.label() {
        Some(label) => {
            let _ = write!(output, "  {} : {}", label.bold(), value);
        }
        None => {
            let _ = write!(output, "  No {} for this chart", report.metric.label());
        }
    }

    output
}

/// Search results, one `Title (id)` per line
pub fn format_search_console(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| format!("{} {}", hit.title, format!("({})", hit.id).dimmed()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bars for the valued entries, bucketed down to `SPARK_WIDTH`; returns the
/// line and the column of the selected chart.
fn sparkline(report: &CompareReport) -> (String, usize) {
    let values: Vec<f64> = report.entries.iter().filter_map(|e| e.value).collect();
    if values.is_empty() {
        return (String::new(), 0);
    }

    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let width = values.len().min(SPARK_WIDTH);
    let marker = (report.rank.min(values.len() - 1) * width) / values.len();

    let mut line = String::new();
    for column in 0..width {
        let start = column * values.len() / width;
        let end = ((column + 1) * values.len() / width).max(start + 1);
        let bucket = values[start..end].iter().copied().fold(f64::MIN, f64::max);
        let level = if max > min {
            (((bucket - min) / (max - min)) * (SPARK_LEVELS.len() - 1) as f64).round() as usize
        } else {
            SPARK_LEVELS.len() - 1
        };
        let bar = SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)];
        if column == marker && report.value.is_some() {
            let _ = write!(line, "{}", bar.red());
        } else {
            let _ = write!(line, "{}", bar.dimmed());
        }
    }
    (line, marker)
}

/// Format difficulty with color
pub fn format_colored_difficulty(difficulty: &Difficulty) -> String {
    let name = difficulty.short_name();
    match difficulty {
        Difficulty::Past => name.truecolor(20, 165, 215).to_string(),
        Difficulty::Present => name.truecolor(100, 180, 50).to_string(),
        Difficulty::Future => name.truecolor(115, 35, 100).to_string(),
        Difficulty::Beyond => name.truecolor(165, 20, 50).to_string(),
        Difficulty::BeyondMoment => name.truecolor(220, 220, 220).bold().to_string(),
        Difficulty::BeyondEternity => name.truecolor(130, 110, 170).bold().to_string(),
    }
}

fn dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
