use anyhow::Result;
use ratatui::widgets::TableState;
use studytime_core::{
    parse_entry, today, Dashboard, FileStudyService, Submission, WeeklyHours, GOAL_KEYS,
    RECORD_KEYS,
};

pub enum InputMode {
    Normal,
    AddingRecord,
    SettingGoal,
}

/// Bars for the weekly chart. Owned by the app and rebuilt after every change.
pub struct WeeklyChart {
    pub bars: Vec<(String, u64)>,
    pub max: u64,
}

impl WeeklyChart {
    pub fn from_weekly(weekly: &WeeklyHours) -> Self {
        // Tenths of an hour, so 1.5 h is drawn as 15.
        let bars: Vec<(String, u64)> = weekly
            .weeks
            .iter()
            .map(|w| (short_week_label(&w.label), (w.hours * 10.0).round() as u64))
            .collect();
        let max = bars.iter().map(|(_, v)| *v).max().unwrap_or(0).max(10);
        Self { bars, max }
    }
}

// "2024-03-03 ~ 2024-03-09" -> "03-03"
fn short_week_label(label: &str) -> String {
    label.get(5..10).unwrap_or(label).to_string()
}

pub struct App {
    pub service: FileStudyService,
    pub dashboard: Dashboard,
    pub chart: WeeklyChart,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub message: Option<String>,
}

impl App {
    pub fn new(service: FileStudyService) -> Result<App> {
        let dashboard = service.dashboard(today())?;
        let chart = WeeklyChart::from_weekly(&dashboard.weekly);
        let mut state = TableState::default();
        if !dashboard.records.is_empty() {
            state.select(Some(0));
        }
        Ok(App {
            service,
            dashboard,
            chart,
            state,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            message: None,
        })
    }

    pub fn refresh(&mut self) -> Result<()> {
        self.dashboard = self.service.dashboard(today())?;
        log::debug!(
            "Reloaded {} session(s), {} week(s)",
            self.dashboard.records.len(),
            self.dashboard.weekly.len()
        );
        // Drop the previous chart before building the new one.
        self.chart = WeeklyChart::from_weekly(&self.dashboard.weekly);

        let len = self.dashboard.records.len();
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn next(&mut self) {
        let len = self.dashboard.records.len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.dashboard.records.len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn delete_selected(&mut self) -> Result<()> {
        let Some(i) = self.state.selected() else {
            return Ok(());
        };
        let Some(position) = self.dashboard.records.get(i).map(|r| r.position) else {
            return Ok(());
        };
        self.message = self
            .service
            .delete_record(position)?
            .map(|r| format!("Deleted {} on {}", r.subject, r.date));
        self.refresh()
    }

    pub fn enter_add_mode(&mut self) {
        self.enter_input_mode(InputMode::AddingRecord);
    }

    pub fn enter_goal_mode(&mut self) {
        self.enter_input_mode(InputMode::SettingGoal);
    }

    fn enter_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.input.clear();
        self.cursor_position = 0;
        self.message = None;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor_position);
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index = self.byte_index(self.cursor_position - 1);
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.input.chars().take(chars).map(|c| c.len_utf8()).sum()
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Input typed before the cursor, for placing the terminal cursor.
    pub fn input_before_cursor(&self) -> &str {
        &self.input[..self.byte_index(self.cursor_position)]
    }

    /// On rejection the typed line stays so it can be corrected.
    pub fn submit(&mut self) -> Result<()> {
        let accepted = match self.input_mode {
            InputMode::AddingRecord => self.submit_record()?,
            InputMode::SettingGoal => self.submit_goal()?,
            InputMode::Normal => false,
        };

        if accepted {
            self.input.clear();
            self.cursor_position = 0;
            self.exit_input_mode();
            self.refresh()?;
        }
        Ok(())
    }

    fn words(&self) -> Vec<String> {
        self.input.split_whitespace().map(|s| s.to_string()).collect()
    }

    fn submit_record(&mut self) -> Result<bool> {
        let entry = match parse_entry(&self.words(), RECORD_KEYS) {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Entry line rejected: {}", e);
                self.message = Some(e.to_string());
                return Ok(false);
            }
        };
        match self.service.add_record(&entry.into_record_form(), today())? {
            Submission::Accepted(r) => {
                self.message = Some(format!("Logged {} h of {}", r.hours, r.subject));
                // Newly appended rows go to the end of the list.
                self.state.select(Some(self.dashboard.records.len()));
                Ok(true)
            }
            Submission::Rejected(e) => {
                self.message = Some(e.to_string());
                Ok(false)
            }
        }
    }

    fn submit_goal(&mut self) -> Result<bool> {
        let entry = match parse_entry(&self.words(), GOAL_KEYS) {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Goal line rejected: {}", e);
                self.message = Some(e.to_string());
                return Ok(false);
            }
        };
        match self.service.set_goal(&entry.into_goal_form())? {
            Submission::Accepted(goal) => {
                self.message = Some(format!("Goal set: {}", goal.goal));
                Ok(true)
            }
            Submission::Rejected(e) => {
                self.message = Some(e.to_string());
                Ok(false)
            }
        }
    }
}
