use chrono::NaiveDate;

use super::datatype::{
    ActivityRecord, ActivityStatus, CategoryEntry, Period, PeriodDataset, RiskLevel,
    SpendingPoint, StatCard,
};

const fn point(
    sequence_index: u32,
    amount: f64,
    label: &'static str,
    trend_percent: f64,
) -> SpendingPoint {
    SpendingPoint {
        sequence_index,
        amount,
        label,
        trend_percent,
    }
}

const fn category(name: &'static str, amount: f64, risk: RiskLevel) -> CategoryEntry {
    CategoryEntry { name, amount, risk }
}

static DAILY: PeriodDataset = PeriodDataset {
    spending: &[
        point(1, 2400.0, "Mon", 5.2),
        point(2, 1398.0, "Tue", -2.1),
        point(3, 9800.0, "Wed", 15.3),
        point(4, 3908.0, "Thu", -1.2),
        point(5, 4800.0, "Fri", 3.5),
        point(6, 3800.0, "Sat", 2.8),
        point(7, 4300.0, "Sun", 4.1),
    ],
    categories: &[
        category("Dining", 2400.0, RiskLevel::Low),
        category("Shopping", 4567.0, RiskLevel::Medium),
        category("Travel", 1398.0, RiskLevel::Low),
        category("Entertainment", 9800.0, RiskLevel::High),
        category("Others", 3908.0, RiskLevel::Low),
    ],
};

static WEEKLY: PeriodDataset = PeriodDataset {
    spending: &[
        point(1, 15000.0, "Week 1", 8.2),
        point(2, 12000.0, "Week 2", -5.1),
        point(3, 18000.0, "Week 3", 12.3),
        point(4, 14000.0, "Week 4", -2.4),
    ],
    categories: &[
        category("Dining", 8400.0, RiskLevel::Medium),
        category("Shopping", 15567.0, RiskLevel::Low),
        category("Travel", 12398.0, RiskLevel::High),
        category("Entertainment", 19800.0, RiskLevel::Medium),
        category("Others", 8908.0, RiskLevel::Low),
    ],
};

static MONTHLY: PeriodDataset = PeriodDataset {
    spending: &[
        point(1, 45000.0, "Jan", 12.5),
        point(2, 52000.0, "Feb", 15.6),
        point(3, 48000.0, "Mar", -7.7),
        point(4, 51000.0, "Apr", 6.3),
        point(5, 53000.0, "May", 3.9),
        point(6, 49000.0, "Jun", -7.5),
    ],
    categories: &[
        category("Dining", 24000.0, RiskLevel::Low),
        category("Shopping", 45670.0, RiskLevel::Medium),
        category("Travel", 33980.0, RiskLevel::High),
        category("Entertainment", 28000.0, RiskLevel::Low),
        category("Others", 19080.0, RiskLevel::Low),
    ],
};

static YEARLY: PeriodDataset = PeriodDataset {
    spending: &[
        point(1, 540000.0, "2020", 15.2),
        point(2, 620000.0, "2021", 14.8),
        point(3, 580000.0, "2022", -6.5),
        point(4, 610000.0, "2023", 5.2),
        point(5, 590000.0, "2024", -3.3),
    ],
    categories: &[
        category("Dining", 240000.0, RiskLevel::Medium),
        category("Shopping", 456700.0, RiskLevel::High),
        category("Travel", 339800.0, RiskLevel::Low),
        category("Entertainment", 280000.0, RiskLevel::Medium),
        category("Others", 190800.0, RiskLevel::Low),
    ],
};

pub static STAT_CARDS: [StatCard; 4] = [
    StatCard {
        title: "Total Transactions",
        value: "$2.4M",
        change: "+12.5%",
    },
    StatCard {
        title: "Average Spend",
        value: "$1,250",
        change: "+5.2%",
    },
    StatCard {
        title: "Active Users",
        value: "85.2K",
        change: "+18.3%",
    },
    StatCard {
        title: "Fraud Prevention",
        value: "99.9%",
        change: "+0.2%",
    },
];

impl Period {
    /// Static dataset for this period. The table is compiled in and has no
    /// mutation path.
    pub fn dataset(self) -> &'static PeriodDataset {
        match self {
            Period::Daily => &DAILY,
            Period::Weekly => &WEEKLY,
            Period::Monthly => &MONTHLY,
            Period::Yearly => &YEARLY,
        }
    }
}

pub fn recent_activity() -> Vec<ActivityRecord> {
    let day = |d: u32| NaiveDate::from_ymd_opt(2024, 3, d).expect("fixture date is valid");
    vec![
        ActivityRecord::new(day(15), "Online Purchase", "$299.99", ActivityStatus::Completed),
        ActivityRecord::new(day(14), "Restaurant", "$85.50", ActivityStatus::Completed),
        ActivityRecord::new(day(14), "Travel Booking", "$450.00", ActivityStatus::Pending),
        ActivityRecord::new(day(13), "Retail Store", "$199.99", ActivityStatus::Completed),
    ]
}
