use crate::alert::AlertSender;
use crate::config::DashboardConfig;
use crate::stat::{recent_activity, ActivityRecord, DashboardState, Period};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Activity,
    Help,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Activity => "Recent Activity",
            Screen::Help => "Help",
        }
    }
}

/// Terminal session state: the dashboard core plus cursor and screen.
pub struct App {
    pub state: DashboardState,
    pub activity: Vec<ActivityRecord>,
    pub current_screen: Screen,
    pub category_cursor: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(state: DashboardState) -> Self {
        Self {
            state,
            activity: recent_activity(),
            current_screen: Screen::Dashboard,
            category_cursor: 0,
            should_quit: false,
        }
    }

    pub fn from_config(cfg: &DashboardConfig) -> Self {
        Self::new(DashboardState::new(cfg.initial_period, cfg.selection_policy))
    }

    pub fn alert_sender(&self) -> AlertSender {
        self.state.alert_sender()
    }

    pub fn next_screen(&mut self) {
        self.current_screen = match self.current_screen {
            Screen::Dashboard => Screen::Activity,
            Screen::Activity  => Screen::Help,
            Screen::Help      => Screen::Dashboard,
        };
    }

    pub fn prev_screen(&mut self) {
        self.current_screen = match self.current_screen {
            Screen::Dashboard => Screen::Help,
            Screen::Activity  => Screen::Dashboard,
            Screen::Help      => Screen::Activity,
        };
    }

    pub fn select_period(&mut self, period: Period) {
        self.state.set_period(period);
        self.clamp_cursor();
    }

    pub fn next_period(&mut self) {
        self.state.next_period();
        self.clamp_cursor();
    }

    pub fn prev_period(&mut self) {
        self.state.prev_period();
        self.clamp_cursor();
    }

    pub fn cursor_up(&mut self) {
        self.category_cursor = self.category_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let len = self.state.view().categories.len();
        if self.category_cursor + 1 < len {
            self.category_cursor += 1;
        }
    }

    /// Click the category under the cursor.
    pub fn click_focused_category(&mut self) {
        let categories = self.state.view().categories;
        if let Some(entry) = categories.get(self.category_cursor) {
            self.state.on_category_click(entry.name);
        }
    }

    pub fn tick(&mut self) {
        self.state.poll_alerts();
    }

    fn clamp_cursor(&mut self) {
        let len = self.state.view().categories.len();
        if len == 0 {
            self.category_cursor = 0;
        } else if self.category_cursor >= len {
            self.category_cursor = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::SelectionPolicy;

    #[test]
    fn screens_cycle_both_ways() {
        let mut app = App::new(DashboardState::default());
        app.next_screen();
        assert_eq!(app.current_screen, Screen::Activity);
        app.next_screen();
        app.next_screen();
        assert_eq!(app.current_screen, Screen::Dashboard);
        app.prev_screen();
        assert_eq!(app.current_screen, Screen::Help);
    }

    #[test]
    fn cursor_stays_inside_categories() {
        let mut app = App::new(DashboardState::default());
        app.cursor_up();
        assert_eq!(app.category_cursor, 0);
        for _ in 0..10 {
            app.cursor_down();
        }
        assert_eq!(app.category_cursor, 4);
    }

    #[test]
    fn clicking_focused_category_toggles() {
        let mut app = App::new(DashboardState::default());
        app.cursor_down();
        app.click_focused_category();
        assert_eq!(app.state.selection(), Some("Shopping"));
        app.click_focused_category();
        assert_eq!(app.state.selection(), None);
    }

    #[test]
    fn from_config_uses_period_and_policy() {
        let cfg = DashboardConfig {
            initial_period: Period::Yearly,
            selection_policy: SelectionPolicy::ClearOnPeriodChange,
            ..DashboardConfig::default()
        };
        let app = App::from_config(&cfg);
        assert_eq!(app.state.current_period(), Period::Yearly);
        assert_eq!(
            app.state.selection_policy(),
            SelectionPolicy::ClearOnPeriodChange
        );
    }

    #[test]
    fn tick_drains_alert_feed() {
        let mut app = App::new(DashboardState::default());
        app.alert_sender().raise_alert("check Travel").unwrap();
        app.tick();
        assert_eq!(app.state.alert().message(), Some("check Travel"));
    }
}
