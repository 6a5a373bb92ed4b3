use crate::domain::Opportunity;

pub const CSV_HEADER: &str = "Name,Email,Phone";
pub const EMPTY_ROSTER: &str = "No volunteers signed up yet.";

/// Roster as CSV text: header line, then one `name,email,phone` row per signup
/// in signup order. Fields are joined as typed, without quoting.
/// An empty roster yields a readable placeholder instead.
pub fn roster_csv(op: &Opportunity) -> String {
    if op.volunteers_signed_up.is_empty() {
        return EMPTY_ROSTER.to_string();
    }

    let rows = op
        .volunteers_signed_up
        .iter()
        .map(|v| format!("{},{},{}", v.name, v.email, v.phone))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{CSV_HEADER}\n{rows}")
}

/// File name used for roster downloads, e.g. `roster_spring-regatta-setup.csv`.
pub fn roster_filename(op: &Opportunity, ext: &str) -> String {
    let slug: String = op
        .title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        format!("roster_{}.{ext}", op.id)
    } else {
        format!("roster_{slug}.{ext}")
    }
}
