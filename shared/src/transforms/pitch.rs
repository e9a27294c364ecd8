use crate::transforms::time::parse_time_string;
use serde::{Deserialize, Serialize};

pub const GRID_ROWS: usize = 3;
pub const GRID_COLS: usize = 6;

/// A cell of the pitch grid. Rows run left, centre, right as seen from the
/// attacking team; columns run from the own goal line to the opponent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

/// Zone letter to grid cell lookup used by the analysts' tagging sheet.
///
/// This is fixed data: `S`, `T`, `X` and `Z` deliberately share cells with
/// other letters.
const ZONE_TABLE: &[(char, GridCell)] = &[
    ('A', GridCell { row: 0, col: 0 }),
    ('B', GridCell { row: 0, col: 1 }),
    ('C', GridCell { row: 0, col: 2 }),
    ('D', GridCell { row: 0, col: 3 }),
    ('E', GridCell { row: 0, col: 4 }),
    ('F', GridCell { row: 0, col: 5 }),
    ('G', GridCell { row: 1, col: 0 }),
    ('H', GridCell { row: 1, col: 1 }),
    ('I', GridCell { row: 1, col: 2 }),
    ('J', GridCell { row: 1, col: 3 }),
    ('K', GridCell { row: 1, col: 4 }),
    ('L', GridCell { row: 1, col: 5 }),
    ('M', GridCell { row: 2, col: 0 }),
    ('N', GridCell { row: 2, col: 1 }),
    ('O', GridCell { row: 2, col: 2 }),
    ('P', GridCell { row: 2, col: 3 }),
    ('Q', GridCell { row: 2, col: 4 }),
    ('R', GridCell { row: 2, col: 5 }),
    ('S', GridCell { row: 1, col: 4 }),
    ('T', GridCell { row: 1, col: 5 }),
    ('X', GridCell { row: 1, col: 2 }),
    ('Z', GridCell { row: 1, col: 3 }),
];

pub fn zone_to_grid(zone: &str) -> Option<GridCell> {
    let mut chars = zone.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    ZONE_TABLE
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, cell)| *cell)
}

/// One tagged pass from the video annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassEvent {
    pub from_zone: String,
    pub to_zone: String,
    pub successful: bool,
    /// Video timestamp, `mm:ss` or `h:mm:ss`
    pub time: String,
    #[serde(default)]
    pub player: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PassCounts {
    pub successful: u32,
    pub failed: u32,
}

impl PassCounts {
    pub fn total(&self) -> u32 {
        self.successful + self.failed
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PassHeatmap {
    pub cells: [[PassCounts; GRID_COLS]; GRID_ROWS],
    /// Passes whose origin zone is not in the table
    pub unmapped: u32,
}

impl PassHeatmap {
    pub fn at(&self, cell: GridCell) -> PassCounts {
        self.cells[cell.row][cell.col]
    }

    pub fn totals(&self) -> PassCounts {
        self.cells
            .iter()
            .flatten()
            .fold(PassCounts::default(), |acc, c| PassCounts {
                successful: acc.successful + c.successful,
                failed: acc.failed + c.failed,
            })
    }

    /// Share of mapped passes that were successful, 0 to 100.
    pub fn accuracy(&self) -> Option<f64> {
        let totals = self.totals();
        if totals.total() == 0 {
            return None;
        }
        Some(f64::from(totals.successful) * 100.0 / f64::from(totals.total()))
    }
}

/// Counts passes per origin cell.
pub fn pass_heatmap(events: &[PassEvent]) -> PassHeatmap {
    let mut heatmap = PassHeatmap::default();
    for event in events {
        match zone_to_grid(&event.from_zone) {
            Some(cell) => {
                let counts = &mut heatmap.cells[cell.row][cell.col];
                if event.successful {
                    counts.successful += 1;
                } else {
                    counts.failed += 1;
                }
            }
            None => heatmap.unmapped += 1,
        }
    }
    heatmap
}

/// Passes tagged between `from` and `to` seconds, inclusive. Events with an
/// unreadable timestamp are skipped.
pub fn passes_in_window(events: &[PassEvent], from: u32, to: u32) -> Vec<&PassEvent> {
    events
        .iter()
        .filter(|event| {
            parse_time_string(&event.time).is_some_and(|t| t >= from && t <= to)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pass(from: &str, successful: bool, time: &str) -> PassEvent {
        PassEvent {
            from_zone: from.to_string(),
            to_zone: "J".to_string(),
            successful,
            time: time.to_string(),
            player: None,
        }
    }

    #[test]
    fn test_zone_lookup_is_case_insensitive() {
        assert_eq!(zone_to_grid("a"), Some(GridCell { row: 0, col: 0 }));
        assert_eq!(zone_to_grid(" R "), Some(GridCell { row: 2, col: 5 }));
        assert_eq!(zone_to_grid("AB"), None);
        assert_eq!(zone_to_grid("W"), None);
        assert_eq!(zone_to_grid(""), None);
    }

    #[test]
    fn test_shared_letters_land_in_same_cell() {
        assert_eq!(zone_to_grid("S"), zone_to_grid("K"));
        assert_eq!(zone_to_grid("X"), zone_to_grid("I"));
    }

    #[test]
    fn test_heatmap_counts_success_and_failure() {
        let events = vec![
            pass("K", true, "1:00"),
            pass("S", false, "1:10"),
            pass("A", true, "2:00"),
            pass("?", true, "3:00"),
        ];
        let heatmap = pass_heatmap(&events);
        assert_eq!(
            heatmap.at(GridCell { row: 1, col: 4 }),
            PassCounts { successful: 1, failed: 1 }
        );
        assert_eq!(heatmap.unmapped, 1);
        assert_eq!(heatmap.totals().total(), 3);
        let accuracy = heatmap.accuracy().unwrap();
        assert!((accuracy - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_empty_heatmap_has_no_accuracy() {
        assert_eq!(pass_heatmap(&[]).accuracy(), None);
    }

    #[test]
    fn test_window_skips_bad_timestamps() {
        let events = vec![
            pass("A", true, "0:59"),
            pass("A", true, "1:00"),
            pass("A", true, "bad"),
            pass("A", true, "2:00"),
            pass("A", true, "2:01"),
        ];
        assert_eq!(passes_in_window(&events, 60, 120).len(), 2);
    }
}
