//! Display-name suggestions for new contacts.
//!
//! Names are presentation only. Identity and uniqueness come from the
//! store-assigned `ContactId`, so a suggestion colliding with a manually
//! typed name is harmless.

use once_cell::sync::Lazy;
use regex::Regex;

const NAME_PREFIX: &str = "Contact";

static SEQUENCE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Contact (\d+)$").expect("valid contact name regex"));

/// Suggests `Contact N` where N is one above the highest suffix in use.
///
/// Names not of the exact form `Contact <digits>` are ignored. Suffixes too
/// large for `u64` are ignored as well.
pub fn suggest_contact_name<'a, I>(existing_names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let highest = existing_names
        .into_iter()
        .filter_map(sequence_number)
        .max()
        .unwrap_or(0);
    format!("{NAME_PREFIX} {}", highest.saturating_add(1))
}

fn sequence_number(name: &str) -> Option<u64> {
    SEQUENCE_NAME_RE
        .captures(name.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
}
