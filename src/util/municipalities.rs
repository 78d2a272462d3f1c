//! Municipality catalog for address and expedition-place fields.
//!
//! DESIGN
//! ======
//! The catalog is a bundled DANE-coded dataset parsed once on first use.
//! Address forms reference municipalities by id; select components read
//! bounded, filtered option lists so a search box never renders the whole
//! catalog at once.

#[cfg(test)]
#[path = "municipalities_test.rs"]
mod municipalities_test;

use std::sync::LazyLock;

use serde::Deserialize;

/// Default cap on the number of select options produced per search.
pub const DEFAULT_OPTION_LIMIT: usize = 80;

static MUNICIPALITIES: LazyLock<Vec<Municipality>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../data/municipalities.json"))
        .expect("bundled municipality dataset is valid JSON")
});

/// A department referenced by its municipalities (many-to-one).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    /// Two-digit DANE department code.
    pub code: String,
}

/// A municipality row from the bundled dataset.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Municipality {
    pub id: i64,
    pub department_id: i64,
    pub name: String,
    /// Five-digit DANE municipality code.
    pub code: String,
    pub department: Department,
}

/// A select option: municipality id plus its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MunicipalityOption {
    pub id: i64,
    pub label: String,
}

/// The full catalog, in dataset order.
#[must_use]
pub fn all() -> &'static [Municipality] {
    &MUNICIPALITIES
}

/// Find a municipality by id.
#[must_use]
pub fn get_by_id(id: Option<i64>) -> Option<&'static Municipality> {
    let id = id?;
    all().iter().find(|m| m.id == id)
}

/// Display label: municipality plus department, `"Honda (Tolima)"`.
#[must_use]
pub fn label(municipality: &Municipality) -> String {
    format!("{} ({})", municipality.name, municipality.department.name)
}

/// Options filtered by search text, capped at `limit` to bound render cost.
///
/// Matches case-insensitively against the municipality label or the
/// department name and stops scanning once `limit` options are collected.
/// An empty search returns the first `limit` entries unfiltered.
#[must_use]
pub fn filtered_options(search: &str, limit: usize) -> Vec<MunicipalityOption> {
    let query = search.trim().to_lowercase();
    if query.is_empty() {
        return all()
            .iter()
            .take(limit)
            .map(|m| MunicipalityOption { id: m.id, label: label(m) })
            .collect();
    }

    let mut options = Vec::new();
    for m in all() {
        if options.len() >= limit {
            break;
        }
        let display = label(m);
        if display.to_lowercase().contains(&query)
            || m.department.name.to_lowercase().contains(&query)
        {
            options.push(MunicipalityOption { id: m.id, label: display });
        }
    }
    options
}
