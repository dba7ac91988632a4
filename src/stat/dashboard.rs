use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::datatype::{CategoryEntry, Period, PeriodDataset, SpendingPoint};
use crate::alert::{AlertBanner, AlertFeed, AlertSender};

/// What happens to a highlighted category when the period changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Keep the name even if the new dataset lacks it.
    #[default]
    Retain,
    ClearOnPeriodChange,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection policy `{0}` (expected retain or clear)")]
pub struct ParsePolicyError(pub String);

impl FromStr for SelectionPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(SelectionPolicy::Retain),
            "clear" | "clear-on-period-change" => Ok(SelectionPolicy::ClearOnPeriodChange),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Spending series and category set currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    pub spending: &'static [SpendingPoint],
    pub categories: &'static [CategoryEntry],
}

pub fn derive_view_state(dataset: &'static PeriodDataset) -> ViewState {
    ViewState {
        spending: dataset.spending,
        categories: dataset.categories,
    }
}

/// Clicking the current selection clears it, anything else replaces it.
pub fn toggle_category(clicked: &str, current: Option<&str>) -> Option<String> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Full,
    Dimmed,
}

impl Emphasis {
    pub fn opacity(self) -> f32 {
        match self {
            Emphasis::Full => 1.0,
            Emphasis::Dimmed => 0.3,
        }
    }
}

/// A selection naming no entry of `categories` dims nothing.
pub fn category_emphasis(
    selection: Option<&str>,
    categories: &[CategoryEntry],
    name: &str,
) -> Emphasis {
    match selection {
        Some(sel) if sel != name && categories.iter().any(|c| c.name == sel) => {
            Emphasis::Dimmed
        }
        _ => Emphasis::Full,
    }
}

/// Period, derived view, selection and alert for one dashboard session.
#[derive(Debug)]
pub struct DashboardState {
    active: (Period, ViewState),
    selection: Option<String>,
    selection_policy: SelectionPolicy,
    alert: AlertBanner,
    feed: AlertFeed,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Period::default(), SelectionPolicy::default())
    }
}

impl DashboardState {
    pub fn new(period: Period, selection_policy: SelectionPolicy) -> Self {
        Self {
            active: (period, derive_view_state(period.dataset())),
            selection: None,
            selection_policy,
            alert: AlertBanner::hidden(),
            feed: AlertFeed::new(),
        }
    }

    pub fn current_period(&self) -> Period {
        self.active.0
    }

    pub fn view(&self) -> &ViewState {
        &self.active.1
    }

    pub fn selection_policy(&self) -> SelectionPolicy {
        self.selection_policy
    }

    pub fn set_period(&mut self, period: Period) {
        let previous = self.active.0;
        self.active = (period, derive_view_state(period.dataset()));

        if self.selection_policy == SelectionPolicy::ClearOnPeriodChange {
            self.selection = None;
        }
        debug!(from = %previous, to = %period, selection = ?self.selection, "period changed");
    }

    pub fn next_period(&mut self) {
        self.set_period(self.current_period().next());
    }

    pub fn prev_period(&mut self) {
        self.set_period(self.current_period().prev());
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn on_category_click(&mut self, name: &str) {
        self.selection = toggle_category(name, self.selection());
        debug!(clicked = name, selection = ?self.selection, "category toggled");
    }

    /// The selected entry in the active dataset, `None` when nothing is
    /// selected or the selection is stale.
    pub fn selected_category(&self) -> Option<&'static CategoryEntry> {
        let sel = self.selection()?;
        self.view().categories.iter().find(|c| c.name == sel)
    }

    pub fn emphasis_of(&self, name: &str) -> Emphasis {
        category_emphasis(self.selection(), self.view().categories, name)
    }

    pub fn alert(&self) -> &AlertBanner {
        &self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert.dismiss();
    }

    pub fn alert_sender(&self) -> AlertSender {
        self.feed.sender()
    }

    pub fn poll_alerts(&mut self) -> usize {
        self.feed.drain_into(&mut self.alert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_monthly_with_nothing_selected() {
        let state = DashboardState::default();
        assert_eq!(state.current_period(), Period::Monthly);
        assert_eq!(state.view().spending.len(), 6);
        assert_eq!(state.selection(), None);
        assert!(!state.alert().is_visible());
    }

    #[test]
    fn derive_is_identity_and_idempotent() {
        for p in Period::ALL {
            let a = derive_view_state(p.dataset());
            let b = derive_view_state(p.dataset());
            assert_eq!(a, b);
            assert_eq!(a.spending, p.dataset().spending);
            assert_eq!(a.categories, p.dataset().categories);
        }
    }

    #[test]
    fn toggle_same_deselects() {
        for c in Period::Daily.dataset().categories {
            assert_eq!(toggle_category(c.name, Some(c.name)), None);
        }
    }

    #[test]
    fn toggle_other_selects_clicked() {
        assert_eq!(
            toggle_category("Dining", Some("Travel")),
            Some("Dining".to_string())
        );
        assert_eq!(toggle_category("Dining", None), Some("Dining".to_string()));
    }

    #[test]
    fn switching_to_daily_replaces_series_without_touching_monthly() {
        let before = Period::Monthly.dataset().spending.to_vec();
        let mut state = DashboardState::default();
        state.set_period(Period::Daily);

        assert_eq!(state.view().spending.len(), 7);
        assert_eq!(state.view().spending[0].label, "Mon");
        assert_eq!(state.view().spending, Period::Daily.dataset().spending);
        assert_eq!(state.view().categories, Period::Daily.dataset().categories);
        assert_eq!(Period::Monthly.dataset().spending, before.as_slice());
    }

    #[test]
    fn entertainment_click_sequence() {
        let mut state = DashboardState::default();
        state.on_category_click("Entertainment");
        assert_eq!(state.selection(), Some("Entertainment"));
        state.on_category_click("Entertainment");
        assert_eq!(state.selection(), None);

        state.on_category_click("Entertainment");
        state.on_category_click("Dining");
        assert_eq!(state.selection(), Some("Dining"));
    }

    #[test]
    fn emphasis_follows_selection() {
        let mut state = DashboardState::default();
        assert_eq!(state.emphasis_of("Dining"), Emphasis::Full);

        state.on_category_click("Travel");
        assert_eq!(state.emphasis_of("Travel"), Emphasis::Full);
        assert_eq!(state.emphasis_of("Dining"), Emphasis::Dimmed);
        assert_eq!(state.emphasis_of("Dining").opacity(), 0.3);
        assert_eq!(state.selected_category().map(|c| c.name), Some("Travel"));
    }

    #[test]
    fn stale_selection_is_retained_and_matches_nothing() {
        let mut state = DashboardState::new(Period::Monthly, SelectionPolicy::Retain);
        state.on_category_click("Groceries");
        state.set_period(Period::Yearly);

        assert_eq!(state.selection(), Some("Groceries"));
        assert!(state.selected_category().is_none());
        assert!(state
            .view()
            .categories
            .iter()
            .all(|c| state.emphasis_of(c.name) == Emphasis::Full));
    }

    #[test]
    fn retained_selection_survives_switch() {
        let mut state = DashboardState::new(Period::Monthly, SelectionPolicy::Retain);
        state.on_category_click("Travel");
        state.set_period(Period::Weekly);
        assert_eq!(state.selection(), Some("Travel"));
        assert_eq!(state.selected_category().map(|c| c.amount), Some(12398.0));
    }

    #[test]
    fn clear_policy_drops_selection_on_switch() {
        let mut state =
            DashboardState::new(Period::Monthly, SelectionPolicy::ClearOnPeriodChange);
        state.on_category_click("Travel");
        state.next_period();
        assert_eq!(state.current_period(), Period::Yearly);
        assert_eq!(state.selection(), None);
    }

    #[test]
    fn alert_raised_then_dismissed() {
        let mut state = DashboardState::default();
        state
            .alert_sender()
            .raise_alert("Unusual spending pattern detected in Entertainment category")
            .unwrap();
        assert!(!state.alert().is_visible());

        assert_eq!(state.poll_alerts(), 1);
        assert!(state.alert().is_visible());

        state.dismiss_alert();
        assert!(!state.alert().is_visible());
        assert_eq!(state.poll_alerts(), 0);
        assert!(!state.alert().is_visible());
    }

    #[test]
    fn selection_policy_parses() {
        assert_eq!("retain".parse::<SelectionPolicy>(), Ok(SelectionPolicy::Retain));
        assert_eq!(
            "Clear".parse::<SelectionPolicy>(),
            Ok(SelectionPolicy::ClearOnPeriodChange)
        );
        assert!("forget".parse::<SelectionPolicy>().is_err());
    }
}
