use studytime_core::{format_hours, ProgressView, RecordRow, WeeklyHours};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

const BAR_WIDTH: usize = 30;
const PROGRESS_WIDTH: usize = 40;

#[derive(Tabled)]
struct RecordTableRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Hours")]
    hours: String,
}

#[derive(Tabled)]
struct WeekTableRow {
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "")]
    bar: String,
}

pub fn show_records(rows: &[RecordRow]) {
    if rows.is_empty() {
        println!("No study sessions logged yet.");
        return;
    }

    let table_rows: Vec<RecordTableRow> = rows
        .iter()
        .map(|r| RecordTableRow {
            position: r.position,
            date: r.date.format("%Y-%m-%d (%a)").to_string(),
            subject: r.subject.clone(),
            hours: format_hours(r.hours),
        })
        .collect();

    println!("{}", styled(Table::new(table_rows)));
}

pub fn show_weekly(weekly: &WeeklyHours) {
    if weekly.is_empty() {
        println!("No study sessions logged yet.");
        return;
    }

    let max = weekly.max_hours();
    let table_rows: Vec<WeekTableRow> = weekly
        .weeks
        .iter()
        .map(|w| WeekTableRow {
            week: w.label.clone(),
            hours: format!("{:.1}", w.hours),
            bar: bar(w.hours, max, BAR_WIDTH),
        })
        .collect();

    println!("{}", styled(Table::new(table_rows)));
}

pub fn show_progress(view: &ProgressView) {
    println!("{}", view.text);
    if view.has_goal {
        println!("[{}]", progress_bar(view.percent, PROGRESS_WIDTH));
    }
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table
}

fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}

fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(5.0, 10.0, 10).chars().count(), 5);
        assert_eq!(bar(10.0, 10.0, 10).chars().count(), 10);
        assert_eq!(bar(0.0, 10.0, 10), "");
        assert_eq!(bar(1.0, 0.0, 10), "");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(40.0, 10), "####------");
        assert_eq!(progress_bar(100.0, 4), "####");
        assert_eq!(progress_bar(0.0, 4), "----");
    }
}
