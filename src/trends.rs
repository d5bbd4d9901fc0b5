use crate::models::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendProperty {
    Density,
    MeltingPoint,
    BoilingPoint,
    AtomicMass,
}

pub const ALL_PROPERTIES: [TrendProperty; 4] = [
    TrendProperty::Density,
    TrendProperty::MeltingPoint,
    TrendProperty::BoilingPoint,
    TrendProperty::AtomicMass,
];

impl TrendProperty {
    pub fn label(&self) -> &'static str {
        match self {
            TrendProperty::Density => "Density",
            TrendProperty::MeltingPoint => "Melting Point",
            TrendProperty::BoilingPoint => "Boiling Point",
            TrendProperty::AtomicMass => "Atomic Mass",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            TrendProperty::Density => "g/cm³",
            TrendProperty::MeltingPoint | TrendProperty::BoilingPoint => "K",
            TrendProperty::AtomicMass => "u",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TrendProperty::Density => {
                "Density typically increases as you move down a group and peaks in the \
                 center of the transition metals (Period 6). Elements like Osmium and \
                 Iridium are the densest known matter."
            }
            TrendProperty::MeltingPoint => {
                "Melting points reflect the strength of bonding. Carbon (diamond) and \
                 Tungsten possess extremely high melting points due to strong covalent \
                 and metallic bonds, while Noble Gases are very low."
            }
            TrendProperty::BoilingPoint => {
                "Boiling points follow similar patterns to melting points but are \
                 generally higher. They indicate the energy required to overcome \
                 intermolecular forces to transition from liquid to gas."
            }
            TrendProperty::AtomicMass => {
                "Atomic mass increases almost linearly with atomic number (Z), as \
                 protons and neutrons are added to the nucleus. This is the most \
                 fundamental trend in the periodic table."
            }
        }
    }

    pub fn value_of(&self, element: &Element) -> Option<f64> {
        match self {
            TrendProperty::Density => element.density,
            TrendProperty::MeltingPoint => element.melting_point,
            TrendProperty::BoilingPoint => element.boiling_point,
            TrendProperty::AtomicMass => Some(element.atomic_mass),
        }
    }

    pub fn next(&self) -> TrendProperty {
        match self {
            TrendProperty::Density => TrendProperty::MeltingPoint,
            TrendProperty::MeltingPoint => TrendProperty::BoilingPoint,
            TrendProperty::BoilingPoint => TrendProperty::AtomicMass,
            TrendProperty::AtomicMass => TrendProperty::Density,
        }
    }

    pub fn prev(&self) -> TrendProperty {
        match self {
            TrendProperty::Density => TrendProperty::AtomicMass,
            TrendProperty::MeltingPoint => TrendProperty::Density,
            TrendProperty::BoilingPoint => TrendProperty::MeltingPoint,
            TrendProperty::AtomicMass => TrendProperty::BoilingPoint,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TrendPoint<'a> {
    pub z: u32,
    pub value: f64,
    pub element: &'a Element,
}

/// Project the dataset onto one property, skipping records where it is
/// absent. Point order follows dataset order.
pub fn project<'a>(elements: &'a [Element], property: TrendProperty) -> Vec<TrendPoint<'a>> {
    elements
        .iter()
        .filter_map(|e| {
            property.value_of(e).map(|value| TrendPoint {
                z: e.z,
                value,
                element: e,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct TrendStats<'a> {
    pub min: TrendPoint<'a>,
    pub max: TrendPoint<'a>,
    pub mean: f64,
}

/// Min and max by value (ties broken by first occurrence) and the
/// arithmetic mean. `None` for an empty projection.
pub fn stats<'a>(points: &[TrendPoint<'a>]) -> Option<TrendStats<'a>> {
    let first = *points.first()?;
    let mut min = first;
    let mut max = first;
    let mut sum = 0.0;
    for p in points {
        if p.value < min.value {
            min = *p;
        }
        if p.value > max.value {
            max = *p;
        }
        sum += p.value;
    }
    Some(TrendStats {
        min,
        max,
        mean: sum / points.len() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn test_projection_skips_absent_values() {
        let elements = dataset::all();
        let points = project(elements, TrendProperty::Density);
        assert!(points.len() < elements.len());
        assert!(points.len() > 80);
        for p in &points {
            assert_eq!(p.element.density, Some(p.value));
        }
    }

    #[test]
    fn test_atomic_mass_projection_is_total() {
        let elements = dataset::all();
        let points = project(elements, TrendProperty::AtomicMass);
        assert_eq!(points.len(), elements.len());
    }

    #[test]
    fn test_stats_ordering_invariant() {
        let elements = dataset::all();
        for property in ALL_PROPERTIES {
            let points = project(elements, property);
            let s = stats(&points).unwrap();
            assert!(
                s.min.value <= s.mean && s.mean <= s.max.value,
                "{} stats out of order",
                property.label()
            );
        }
    }

    #[test]
    fn test_mean_matches_arithmetic_mean() {
        let elements = dataset::all();
        let points = project(elements, TrendProperty::AtomicMass);
        let expected: f64 =
            points.iter().map(|p| p.value).sum::<f64>() / points.len() as f64;
        let s = stats(&points).unwrap();
        assert!((s.mean - expected).abs() < 1e-9);
    }

    #[test]
    fn test_known_extremes() {
        let elements = dataset::all();
        let density = stats(&project(elements, TrendProperty::Density)).unwrap();
        assert_eq!(density.max.element.symbol, "Os");
        assert_eq!(density.min.element.symbol, "H");

        let melting = stats(&project(elements, TrendProperty::MeltingPoint)).unwrap();
        assert_eq!(melting.max.element.symbol, "C");
        assert_eq!(melting.min.element.symbol, "He");
    }

    #[test]
    fn test_ties_break_to_first_occurrence() {
        // Cm and Bk share the 247.0 placeholder mass; Bh and Db share 270.0.
        let elements = dataset::all();
        let points: Vec<TrendPoint> = project(elements, TrendProperty::AtomicMass)
            .into_iter()
            .filter(|p| p.value == 247.0)
            .collect();
        assert!(points.len() >= 2);
        let s = stats(&points).unwrap();
        assert_eq!(s.min.z, points[0].z);
        assert_eq!(s.max.z, points[0].z);
    }

    #[test]
    fn test_stats_empty_projection() {
        assert!(stats(&[]).is_none());
    }
}
