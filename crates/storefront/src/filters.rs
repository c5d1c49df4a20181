//! Askama filters used by the page templates.
//!
//! Both ignore their input; templates call them as `{{ ""|name }}`.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::Datelike;

/// Year printed in the contacts copyright line, in UTC.
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(chrono::Utc::now().year())
}

/// Cache-busting `?v=` token for the stylesheet link in `base.html`.
///
/// The first eight hex digits of the SHA-256 of `static/css/main.css`,
/// computed by `build.rs`. Empty if the stylesheet was missing at build time.
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(STYLESHEET_HASH)
}

const STYLESHEET_HASH: &str = env!("CSS_HASH");
