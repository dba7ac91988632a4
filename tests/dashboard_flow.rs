use spend_dashboard::alert::AlertError;
use spend_dashboard::stat::{
    category_emphasis, format_currency, toggle_category, DashboardState, Emphasis, Period,
    SelectionPolicy,
};

#[test]
fn every_period_exposes_its_fixture() {
    let expected = [
        (Period::Daily, 7, "Mon"),
        (Period::Weekly, 4, "Week 1"),
        (Period::Monthly, 6, "Jan"),
        (Period::Yearly, 5, "2020"),
    ];
    let mut state = DashboardState::default();
    for (period, len, first) in expected {
        state.set_period(period);
        assert_eq!(state.current_period(), period);
        assert_eq!(state.view().spending.len(), len);
        assert_eq!(state.view().spending[0].label, first);
        assert_eq!(state.view().categories.len(), 5);
    }
}

#[test]
fn toggle_rule_holds_for_all_names() {
    let names: Vec<&str> = Period::ALL
        .iter()
        .flat_map(|p| p.dataset().categories.iter().map(|c| c.name))
        .collect();
    for &x in &names {
        assert_eq!(toggle_category(x, Some(x)), None);
        for &y in &names {
            if x != y {
                assert_eq!(toggle_category(x, Some(y)).as_deref(), Some(x));
            }
        }
    }
}

#[test]
fn selection_moves_without_intermediate_deselect() {
    let mut state = DashboardState::new(Period::Daily, SelectionPolicy::Retain);
    state.on_category_click("Entertainment");
    state.on_category_click("Dining");
    assert_eq!(state.selection(), Some("Dining"));

    let cats = state.view().categories;
    assert_eq!(
        category_emphasis(state.selection(), cats, "Entertainment"),
        Emphasis::Dimmed
    );
    assert_eq!(
        category_emphasis(state.selection(), cats, "Dining"),
        Emphasis::Full
    );
}

#[test]
fn currency_examples() {
    assert_eq!(format_currency(2400.0), "$2,400");
    assert_eq!(format_currency(45000.0), "$45,000");
}

#[test]
fn alert_feed_lifecycle() {
    let mut state = DashboardState::default();
    let sender = state.alert_sender();
    assert!(!state.alert().is_visible());

    sender.raise_alert("Unusual spending pattern").unwrap();
    state.poll_alerts();
    assert!(state.alert().is_visible());

    state.dismiss_alert();
    assert!(!state.alert().is_visible());

    drop(state);
    assert_eq!(
        sender.raise_alert("too late"),
        Err(AlertError::Disconnected("too late".to_string()))
    );
}
