use crate::models::{Block, Element};

lazy_static::lazy_static! {
    static ref ELEMENTS: Vec<Element> = serde_json::from_str(include_str!("data/elements.json"))
        .expect("embedded element table is valid JSON");
}

/// The full element table in atomic-number order. Loaded on first access,
/// immutable for the life of the process.
pub fn all() -> &'static [Element] {
    &ELEMENTS
}

pub fn by_z(z: u32) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.z == z)
}

/// Ordered subset of `elements` matching `query`: case-insensitive substring
/// of the name or symbol, or an exact decimal atomic number. A blank query
/// returns everything in original order.
pub fn filter_elements<'a>(elements: &'a [Element], query: &str) -> Vec<&'a Element> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return elements.iter().collect();
    }
    elements
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&q)
                || e.symbol.to_lowercase().contains(&q)
                || e.z.to_string() == q
        })
        .collect()
}
