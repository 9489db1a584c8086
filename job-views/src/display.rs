//! Pure derivations from entity fields to display attributes.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarStyle {
    pub bg: &'static str,
    pub color: &'static str,
}

pub const AVATAR_PALETTES: [AvatarStyle; 10] = [
    AvatarStyle { bg: "#dbeafe", color: "#1d4ed8" },
    AvatarStyle { bg: "#fce7f3", color: "#be185d" },
    AvatarStyle { bg: "#d1fae5", color: "#047857" },
    AvatarStyle { bg: "#fef3c7", color: "#b45309" },
    AvatarStyle { bg: "#ede9fe", color: "#6d28d9" },
    AvatarStyle { bg: "#fee2e2", color: "#b91c1c" },
    AvatarStyle { bg: "#e0f2fe", color: "#0369a1" },
    AvatarStyle { bg: "#f0fdf4", color: "#166534" },
    AvatarStyle { bg: "#fdf4ff", color: "#7e22ce" },
    AvatarStyle { bg: "#fff7ed", color: "#c2410c" },
];

/// Palette entry picked by the first UTF-16 code unit of `name`
pub fn avatar_style(name: &str) -> AvatarStyle {
    let code = name.encode_utf16().next().unwrap_or(0) as usize;
    AVATAR_PALETTES[code % AVATAR_PALETTES.len()]
}

pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Hostname without a leading `www.`; anything that does not parse as a url
/// with a host comes back unchanged.
pub fn shorten_url(url: &str) -> String {
    lazy_static! {
        static ref WWW: Regex = Regex::new(r"^www\.").unwrap();
    }
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => WWW.replace(host, "").into_owned(),
            _ => url.to_owned(),
        },
        Err(_) => url.to_owned(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Contract,
    PartTime,
    Default,
}

impl BadgeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeKind::Contract => "badge--type-contract",
            BadgeKind::PartTime => "badge--type-parttime",
            BadgeKind::Default => "badge--type",
        }
    }
}

pub fn badge_kind(employment_type: &str) -> BadgeKind {
    let t = employment_type.to_lowercase();
    if t.contains("contract") || t.contains("freelance") {
        BadgeKind::Contract
    } else if t.contains("part") {
        BadgeKind::PartTime
    } else {
        BadgeKind::Default
    }
}

fn parse_date(iso: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()
}

/// `2024-03-05T10:30:00` -> `Mar 5, 2024`, unparsable input is returned as is
pub fn format_date(iso: &str) -> String {
    match parse_date(iso) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => {
            log::debug!("Unparsable timestamp: {}", iso);
            iso.to_owned()
        }
    }
}

/// `1234567` -> `1,234,567`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_avatar_style_is_stable() {
        for name in ["Acme", "acme", "Zeta", "Ärzte", "東京", ""] {
            assert_eq!(avatar_style(name), avatar_style(name));
        }
        // same first character, same palette entry
        assert_eq!(avatar_style("Acme"), avatar_style("Apple"));
        // 'A' is 65
        assert_eq!(avatar_style("Acme"), AVATAR_PALETTES[5]);
        assert_eq!(avatar_style(""), AVATAR_PALETTES[0]);
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("acme"), "A");
        assert_eq!(avatar_initial("ßtudio"), "SS");
        assert_eq!(avatar_initial(""), "");
    }

    #[test]
    fn test_shorten_url() {
        assert_eq!(shorten_url("https://www.example.com/careers"), "example.com");
        assert_eq!(shorten_url("https://jobs.example.com/"), "jobs.example.com");
        assert_eq!(shorten_url("http://wwwexample.com"), "wwwexample.com");
        assert_eq!(shorten_url("not a url"), "not a url");
        assert_eq!(shorten_url(""), "");
    }

    #[test]
    fn test_badge_kind() {
        assert_eq!(badge_kind("Contract"), BadgeKind::Contract);
        assert_eq!(badge_kind("FREELANCE"), BadgeKind::Contract);
        assert_eq!(badge_kind("Part-time"), BadgeKind::PartTime);
        assert_eq!(badge_kind("Full-time"), BadgeKind::Default);
        assert_eq!(badge_kind("Part-time contract"), BadgeKind::Contract);
        assert_eq!(BadgeKind::PartTime.css_class(), "badge--type-parttime");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05T10:30:00"), "Mar 5, 2024");
        assert_eq!(format_date("2024-03-05T10:30:00.123456"), "Mar 5, 2024");
        assert_eq!(format_date("2023-12-25T08:00:00+00:00"), "Dec 25, 2023");
        assert_eq!(format_date("2024-11-30"), "Nov 30, 2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
