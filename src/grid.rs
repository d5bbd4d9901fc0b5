use crate::models::Element;

/// Below this many matches a filtered result is rendered as a dense flow
/// grid instead of the sparse periodic layout. Hand-tuned constant kept
/// for behavioral compatibility with the original presentation.
pub const FLOW_THRESHOLD: usize = 110;

/// Column the detached lanthanide/actinide rows start at, and where their
/// collapsed placeholders sit inside the main grid.
const F_BLOCK_START_COLUMN: u16 = 3;

#[derive(Debug, Clone, Copy)]
pub struct PlacedElement<'a> {
    pub element: &'a Element,
    /// 1-based column (1..=18).
    pub column: u16,
    /// 1-based row (1..=7 in the main body, 1..=2 in the f-block rows).
    pub row: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub column: u16,
    pub row: u16,
    pub label: &'static str,
}

#[derive(Debug)]
pub enum GridLayout<'a> {
    /// The standard 18×7 body plus two detached f-block rows.
    Periodic {
        main: Vec<PlacedElement<'a>>,
        lanthanides: Vec<PlacedElement<'a>>,
        actinides: Vec<PlacedElement<'a>>,
        placeholders: [Placeholder; 2],
    },
    /// Dense list of matches in match order, used for small filtered sets.
    Flow(Vec<&'a Element>),
}

/// Lay out a (possibly filtered) element list. `dataset_len` is the size of
/// the unfiltered dataset, used to decide whether filtering is active.
pub fn layout<'a>(filtered: &[&'a Element], dataset_len: usize) -> GridLayout<'a> {
    if filtered.len() < dataset_len && filtered.len() < FLOW_THRESHOLD {
        return GridLayout::Flow(filtered.to_vec());
    }

    let mut main = Vec::new();
    let mut f_block: Vec<&Element> = Vec::new();
    for &e in filtered {
        match e.group {
            Some(group) => main.push(PlacedElement {
                element: e,
                column: group as u16,
                row: e.period as u16,
            }),
            None => f_block.push(e),
        }
    }

    f_block.sort_by_key(|e| e.z);
    let place_row = |row: &[&'a Element], grid_row: u16| -> Vec<PlacedElement<'a>> {
        row.iter()
            .enumerate()
            .map(|(i, &element)| PlacedElement {
                element,
                column: F_BLOCK_START_COLUMN + i as u16,
                row: grid_row,
            })
            .collect()
    };
    let lanthanides: Vec<&Element> = f_block.iter().copied().filter(|e| e.period == 6).collect();
    let actinides: Vec<&Element> = f_block.iter().copied().filter(|e| e.period == 7).collect();

    GridLayout::Periodic {
        main,
        lanthanides: place_row(&lanthanides, 1),
        actinides: place_row(&actinides, 2),
        placeholders: [
            Placeholder {
                column: F_BLOCK_START_COLUMN,
                row: 6,
                label: "57-71",
            },
            Placeholder {
                column: F_BLOCK_START_COLUMN,
                row: 7,
                label: "89-103",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn test_full_dataset_uses_periodic_layout() {
        let elements = dataset::all();
        let filtered = dataset::filter_elements(elements, "");
        match layout(&filtered, elements.len()) {
            GridLayout::Periodic {
                main,
                lanthanides,
                actinides,
                placeholders,
            } => {
                // 118 elements minus the 30 f-block members.
                assert_eq!(main.len(), 88);
                assert_eq!(lanthanides.len(), 15);
                assert_eq!(actinides.len(), 15);
                assert_eq!(placeholders[0].label, "57-71");
                assert_eq!(placeholders[1].label, "89-103");
            }
            GridLayout::Flow(_) => panic!("full dataset must keep the periodic layout"),
        }
    }

    #[test]
    fn test_main_body_cells_match_group_and_period() {
        let elements = dataset::all();
        let filtered = dataset::filter_elements(elements, "");
        if let GridLayout::Periodic { main, .. } = layout(&filtered, elements.len()) {
            for cell in &main {
                assert_eq!(cell.column, cell.element.group.unwrap() as u16);
                assert_eq!(cell.row, cell.element.period as u16);
                assert!((1..=18).contains(&cell.column));
                assert!((1..=7).contains(&cell.row));
            }
        } else {
            panic!("expected periodic layout");
        }
    }

    #[test]
    fn test_f_block_never_lands_in_main_body() {
        let elements = dataset::all();
        let filtered = dataset::filter_elements(elements, "");
        if let GridLayout::Periodic { main, .. } = layout(&filtered, elements.len()) {
            for cell in &main {
                assert!(cell.element.group.is_some());
            }
        } else {
            panic!("expected periodic layout");
        }
    }

    #[test]
    fn test_f_block_rows_sorted_and_consecutive() {
        let elements = dataset::all();
        let filtered = dataset::filter_elements(elements, "");
        if let GridLayout::Periodic {
            lanthanides,
            actinides,
            ..
        } = layout(&filtered, elements.len())
        {
            assert_eq!(lanthanides[0].element.z, 57);
            assert_eq!(lanthanides[14].element.z, 71);
            assert_eq!(actinides[0].element.z, 89);
            assert_eq!(actinides[14].element.z, 103);
            for (i, cell) in lanthanides.iter().enumerate() {
                assert_eq!(cell.column, 3 + i as u16);
                assert_eq!(cell.row, 1);
            }
            for (i, cell) in actinides.iter().enumerate() {
                assert_eq!(cell.column, 3 + i as u16);
                assert_eq!(cell.row, 2);
            }
        } else {
            panic!("expected periodic layout");
        }
    }

    #[test]
    fn test_small_filtered_set_switches_to_flow() {
        let elements = dataset::all();
        let filtered = dataset::filter_elements(elements, "gold");
        assert!(filtered.len() < FLOW_THRESHOLD);
        match layout(&filtered, elements.len()) {
            GridLayout::Flow(matches) => {
                assert!(matches.iter().any(|e| e.symbol == "Au"));
            }
            GridLayout::Periodic { .. } => panic!("small filtered set must flow"),
        }
    }

    #[test]
    fn test_flow_keeps_match_order() {
        let elements = dataset::all();
        let filtered = dataset::filter_elements(elements, "ne");
        if let GridLayout::Flow(matches) = layout(&filtered, elements.len()) {
            let zs: Vec<u32> = matches.iter().map(|e| e.z).collect();
            let mut sorted = zs.clone();
            sorted.sort_unstable();
            assert_eq!(zs, sorted);
        } else {
            panic!("expected flow layout");
        }
    }

    #[test]
    fn test_unfiltered_small_dataset_keeps_periodic_layout() {
        // The flow switch requires an active filter, not just a small table.
        let elements = dataset::all();
        let subset: Vec<&_> = elements.iter().take(20).collect();
        match layout(&subset, subset.len()) {
            GridLayout::Periodic { .. } => {}
            GridLayout::Flow(_) => panic!("unfiltered list must not flow"),
        }
    }

    #[test]
    fn test_empty_filter_result_flows_empty() {
        let elements = dataset::all();
        let filtered = dataset::filter_elements(elements, "zzzz");
        match layout(&filtered, elements.len()) {
            GridLayout::Flow(matches) => assert!(matches.is_empty()),
            GridLayout::Periodic { .. } => panic!("empty result must flow"),
        }
    }
}
