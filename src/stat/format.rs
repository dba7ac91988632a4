//! Display helpers shared by the terminal widgets and the `summary` command.

use super::datatype::CategoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendIndicator {
    pub glyph: char,
    pub tone: Tone,
    pub magnitude: f64,
}

impl TrendIndicator {
    pub fn display(&self) -> String {
        format!("{} {}%", self.glyph, self.magnitude)
    }
}

/// en-US dollars with no decimals, e.g. `$45,000` or `-$1,250`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Strictly positive trends point up; zero and below point down.
pub fn trend_indicator(trend_percent: f64) -> TrendIndicator {
    if trend_percent > 0.0 {
        TrendIndicator {
            glyph: '↑',
            tone: Tone::Positive,
            magnitude: trend_percent.abs(),
        }
    } else {
        TrendIndicator {
            glyph: '↓',
            tone: Tone::Negative,
            magnitude: trend_percent.abs(),
        }
    }
}

/// Tone of a stat card change literal such as `+12.5%`.
pub fn change_tone(change: &str) -> Tone {
    let value = change
        .trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .unwrap_or(0.0);
    if value > 0.0 {
        Tone::Positive
    } else {
        Tone::Negative
    }
}

/// Y-axis tick label: `$45k` for 45000.
pub fn format_axis_thousands(value: f64) -> String {
    let k = value / 1000.0;
    if k.fract() == 0.0 {
        format!("${k:.0}k")
    } else {
        format!("${k:.1}k")
    }
}

/// Share of the category total for every entry, in percent, in input order.
pub fn category_shares(categories: &[CategoryEntry]) -> Vec<f64> {
    let total: f64 = categories.iter().map(|c| c.amount).sum();
    if total <= 0.0 {
        return vec![0.0; categories.len()];
    }
    categories
        .iter()
        .map(|c| c.amount / total * 100.0)
        .collect()
}

pub fn share_label(name: &str, share_percent: f64) -> String {
    format!("{name} {share_percent:.0}%")
}
