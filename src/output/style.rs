use tabled::{Table, settings::Style};

use super::TabStyle;

pub(crate) fn apply_style(table: &mut Table, style: TabStyle) {
    match style {
        TabStyle::Rounded => table.with(Style::rounded()),
        TabStyle::Modern => table.with(Style::modern()),
        TabStyle::Ascii => table.with(Style::ascii()),
        TabStyle::Psql => table.with(Style::psql()),
        TabStyle::Markdown => table.with(Style::markdown()),
        TabStyle::Blank => table.with(Style::blank()),
    };
}
