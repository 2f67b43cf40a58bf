//! Field rendering shared by every report

use chrono::{DateTime, SecondsFormat, Utc};

/// Render an ordered list as `[a b c]`, `[]` when empty
pub fn render_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from("[");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(item.as_ref());
    }
    out.push(']');
    out
}

/// Join logins with `", "`
pub fn join_logins<'a, I>(logins: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    logins.into_iter().collect::<Vec<_>>().join(", ")
}

/// RFC 3339, UTC, second precision
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn format_bool(value: bool) -> String {
    value.to_string()
}
