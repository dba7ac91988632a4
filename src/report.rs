//! Plain-text and JSON rendering of one period, used by `summary`.

use std::fmt::Write;

use serde::Serialize;

use crate::stat::{
    category_shares, derive_view_state, format_currency, share_label, trend_indicator,
    CategoryEntry, Period, SpendingPoint, StatCard, STAT_CARDS,
};

#[derive(Debug, Serialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub stats: &'static [StatCard],
    pub spending: &'static [SpendingPoint],
    pub categories: &'static [CategoryEntry],
}

impl PeriodSummary {
    pub fn new(period: Period) -> Self {
        let view = derive_view_state(period.dataset());
        Self {
            period,
            stats: &STAT_CARDS,
            spending: view.spending,
            categories: view.categories,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "== Overview ==\n");
        for card in self.stats {
            let _ = writeln!(out, "{:<20} | {:>8} | {}", card.title, card.value, card.change);
        }

        let _ = writeln!(out, "\n== Spending ({}) ==\n", self.period.label());
        for p in self.spending {
            let _ = writeln!(
                out,
                "{:<8} | {:>10} | {}",
                p.label,
                format_currency(p.amount),
                trend_indicator(p.trend_percent).display(),
            );
        }

        let _ = writeln!(out, "\n== Categories ({}) ==\n", self.period.label());
        for (c, share) in self.categories.iter().zip(category_shares(self.categories)) {
            let _ = writeln!(
                out,
                "{:<20} | {:>10} | {}",
                share_label(c.name, share),
                format_currency(c.amount),
                c.risk.label(),
            );
        }
        out
    }
}
