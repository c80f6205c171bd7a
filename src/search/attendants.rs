//! Attendee directory filter.
//!
//! Unlike the catalog search there is no minimum length here: an empty term
//! keeps everyone, and the term is matched against the name, the company and
//! each interest.

use crate::domain::Attendant;

/// Returns true if `term` occurs, ignoring case, in the attendant's name,
/// company or any of their interests.
#[must_use]
pub fn attendant_matches(attendant: &Attendant, term: &str) -> bool {
    let term = term.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&term);

    contains(&attendant.name) || contains(&attendant.company) || attendant.interests.iter().any(|i| contains(i.as_str()))
}

/// Filters the directory by search term and role.
///
/// The role must match exactly; `None` or an empty role keeps every role.
#[must_use]
pub fn filter_attendants<'a>(attendants: &'a [Attendant], term: &str, role: Option<&str>) -> Vec<&'a Attendant> {
    let role = role.filter(|r| !r.is_empty());
    let results: Vec<&Attendant> = attendants
        .iter()
        .filter(|a| attendant_matches(a, term))
        .filter(|a| role.map_or(true, |r| a.role == r))
        .collect();

    tracing::debug!(term = %term, role = ?role, matched = results.len(), "attendants filtered");
    results
}

/// Distinct roles in first-seen order, for the role picker.
#[must_use]
pub fn unique_roles(attendants: &[Attendant]) -> Vec<&str> {
    let mut roles: Vec<&str> = Vec::new();
    for attendant in attendants {
        if !roles.contains(&attendant.role.as_str()) {
            roles.push(&attendant.role);
        }
    }
    roles
}
