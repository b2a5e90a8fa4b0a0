//! Calendar helpers that work in both SSR and WASM builds.
//!
//! `std::time::SystemTime` panics on `wasm32-unknown-unknown`, so the
//! browser build asks `Date` instead.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current Gregorian year in UTC.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_utc_full_year()).unwrap_or(i32::MAX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
