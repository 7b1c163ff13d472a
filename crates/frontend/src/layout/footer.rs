use crate::shared::dom;
use chrono::{Datelike, Local, NaiveDate};

pub const YEAR_ELEMENT_ID: &str = "year";

/// Text for the footer copyright year.
pub fn year_text(today: NaiveDate) -> String {
    today.year().to_string()
}

/// Fill `#year` with the current calendar year, if the footer has one.
pub fn render_year() {
    if let Some(el) = dom::by_id(YEAR_ELEMENT_ID) {
        el.set_text_content(Some(&year_text(Local::now().date_naive())));
    }
}
