//! Parser for the `Link` response header used for page-to-page continuation.
//!
//! Produces `(url, relations)` pairs. Entries that do not carry a target URL
//! are dropped instead of failing the whole header.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRelation {
    pub url: String,
    pub relations: Vec<String>,
}

impl LinkRelation {
    pub fn has_relation(&self, rel: &str) -> bool {
        self.relations.iter().any(|r| r.eq_ignore_ascii_case(rel))
    }
}

pub fn parse_link_header(value: &str) -> Vec<LinkRelation> {
    split_entries(value)
        .into_iter()
        .filter_map(parse_entry)
        .collect()
}

/// URL of the `rel="next"` entry, if any.
pub fn next_link(value: &str) -> Option<String> {
    parse_link_header(value)
        .into_iter()
        .find(|link| link.has_relation("next"))
        .map(|link| link.url)
}

// Commas inside `<...>` or a quoted string belong to the entry.
fn split_entries(value: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_target = false;
    let mut in_quotes = false;
    let mut start = 0;

    for (index, ch) in value.char_indices() {
        match ch {
            '<' if !in_quotes => in_target = true,
            '>' if !in_quotes => in_target = false,
            '"' if !in_target => in_quotes = !in_quotes,
            ',' if !in_target && !in_quotes => {
                entries.push(&value[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    entries.push(&value[start..]);

    entries
}

fn parse_entry(entry: &str) -> Option<LinkRelation> {
    let entry = entry.trim();

    let (target, params) = match entry.strip_prefix('<') {
        Some(rest) => {
            let end = rest.find('>')?;
            (&rest[..end], &rest[end + 1..])
        }
        None => match entry.split_once(';') {
            Some((target, params)) => (target, params),
            None => (entry, ""),
        },
    };

    let url = target.trim();
    if url.is_empty() {
        return None;
    }

    let relations = params
        .split(';')
        .filter_map(|param| param.split_once('='))
        .filter(|(key, _)| key.trim().eq_ignore_ascii_case("rel"))
        .flat_map(|(_, value)| {
            value
                .trim()
                .trim_matches('"')
                .split_whitespace()
                .map(str::to_ascii_lowercase)
                .collect::<Vec<_>>()
        })
        .collect();

    Some(LinkRelation {
        url: url.to_string(),
        relations,
    })
}
