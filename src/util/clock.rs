//! Wall-clock helpers for the browser build.

/// Today's display date, `YYYY-MM-DD`, for stamping new library entries.
#[cfg(feature = "csr")]
pub fn today_label() -> String {
    let now = js_sys::Date::new_0();
    format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
}
