//! Utility functions for page generation

use chrono::NaiveDate;

/// Formats a date the way posts display it, e.g. "August 16, 2023".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats a date for the `datetime` attribute of `<time>` elements.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns the relative prefix leading from a page back to the site root.
///
/// # Arguments
///
/// * `depth`: Directory depth of the page (0 for `index.html`, 1 for
///   `posts/<slug>.html`)
///
/// # Returns
///
/// Empty string at the root, otherwise one `../` per level
pub fn root_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Joins a site relative path onto the root prefix of a page.
pub fn relative_href(depth: usize, path: &str) -> String {
    format!("{}{}", root_prefix(depth), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2023, 8, 16)), "August 16, 2023");
        assert_eq!(format_date(date(2023, 12, 7)), "December 7, 2023");
        assert_eq!(format_date(date(2021, 1, 1)), "January 1, 2021");
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(iso_date(date(2023, 6, 1)), "2023-06-01");
    }

    #[test]
    fn test_root_prefix() {
        assert_eq!(root_prefix(0), "");
        assert_eq!(root_prefix(1), "../");
        assert_eq!(root_prefix(2), "../../");
    }

    #[test]
    fn test_relative_href() {
        assert_eq!(relative_href(0, "posts/a.html"), "posts/a.html");
        assert_eq!(relative_href(1, "/index.html"), "../index.html");
        assert_eq!(relative_href(1, "assets/post.css"), "../assets/post.css");
    }
}
