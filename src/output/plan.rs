use chrono::Datelike;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Panel, object::Columns},
};

use crate::generate::{DayPlan, planned_total};

use super::{TabStyle, style::apply_style};

/// Render the per-day schedule. Days without commits are left out.
pub(crate) fn render(plan: &[DayPlan], style: TabStyle, title: &str) -> String {
    let active: Vec<&DayPlan> = plan.iter().filter(|day| day.commits > 0).collect();
    if active.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["(no commits planned)"]);
        let mut table = builder.build();
        apply_style(&mut table, style);
        table.with(Panel::header(format!(" {title} ")));
        return table.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Date", "Day", "Commits"]);
    for day in active {
        builder.push_record([
            day.date.to_string(),
            day.date.weekday().to_string(),
            day.commits.to_string(),
        ]);
    }

    let mut table = builder.build();
    apply_style(&mut table, style);
    table.with(Modify::new(Columns::new(2..3)).with(Alignment::right()));
    table.with(Panel::footer(format!(
        "{} commits over {} days",
        planned_total(plan),
        plan.len()
    )));
    table.with(Panel::header(format!(" {title} ")));
    table.to_string()
}
