//! # Reference Data
//!
//! Quick-reference text for the field: a searchable index of standards terms
//! and the verification testing sequence.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::reference::{search_standards, TESTING_PROCEDURES};
//!
//! let hits = search_standards("rcd");
//! assert_eq!(hits[0].term, "RCD Trip Time");
//! assert_eq!(TESTING_PROCEDURES.len(), 12);
//! ```

use serde::Serialize;

/// One entry of the standards quick index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StandardEntry {
    /// Short term (e.g., "MEN")
    pub term: &'static str,
    /// Explanation, often with the governing formula or limit
    pub detail: &'static str,
}

impl StandardEntry {
    const fn new(term: &'static str, detail: &'static str) -> Self {
        Self { term, detail }
    }

    /// Case-insensitive match against term or detail
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.term.to_lowercase().contains(&needle) || self.detail.to_lowercase().contains(&needle)
    }
}

/// The standards quick index, in display order.
pub static STANDARDS_INDEX: &[StandardEntry] = &[
    StandardEntry::new(
        "MEN",
        "Multiple Earthed Neutral system. The MEN link must be located at the main switchboard.",
    ),
    StandardEntry::new(
        "Voltage Drop",
        "VD = (mV/A·m) × I × L / 1000. Max limit: 5% of nominal voltage per AS/NZS 3000.",
    ),
    StandardEntry::new(
        "Zs Limits",
        "Zs ≤ Uo / Ia. Ensure disconnection within required time under earth fault condition.",
    ),
    StandardEntry::new(
        "Insulation Resistance",
        "Min 1 MΩ between all live conductors and earth, tested with 500 V DC.",
    ),
    StandardEntry::new(
        "Earth Electrode Resistance",
        "Recommended <25Ω for standard electrodes unless otherwise specified.",
    ),
    StandardEntry::new(
        "RCD Trip Time",
        "30 mA RCD must trip within 300 ms under test button or external tester.",
    ),
    StandardEntry::new(
        "Visual Inspection",
        "Ensure correct connections, MEN link, cable sizes, and earth continuity.",
    ),
    StandardEntry::new(
        "Loop Impedance",
        "Zs should be verified to ensure fast disconnection. Use earth-loop tester.",
    ),
    StandardEntry::new(
        "Cable Grouping",
        "Use derating factors if cables are bunched together (AS/NZS 3008).",
    ),
    StandardEntry::new(
        "Ambient Derating",
        "Adjust CCC when ambient temp exceeds 30°C. Use correction factors from tables.",
    ),
    StandardEntry::new(
        "Short-Circuit Withstand",
        "t = (k² × S²) / I². Ensure cable withstand time exceeds fault clearance time.",
    ),
];

/// Entries whose term or detail contains `query`, ignoring case.
///
/// A blank query returns the whole index.
pub fn search_standards(query: &str) -> Vec<&'static StandardEntry> {
    let query = query.trim();
    STANDARDS_INDEX
        .iter()
        .filter(|entry| query.is_empty() || entry.matches(query))
        .collect()
}

/// One step of the verification testing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Procedure {
    /// Position in the sequence, starting at 1
    pub step: u8,
    /// Step title
    pub title: &'static str,
    /// What to do and the acceptance limit, if any
    pub instruction: &'static str,
}

impl Procedure {
    const fn new(step: u8, title: &'static str, instruction: &'static str) -> Self {
        Self { step, title, instruction }
    }
}

impl std::fmt::Display for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}: {}", self.step, self.title, self.instruction)
    }
}

/// Testing sequence for a new or altered installation, in order.
pub static TESTING_PROCEDURES: &[Procedure] = &[
    Procedure::new(1, "Confirm De-energized", "Use a two-contact voltage tester. Always prove-test-prove."),
    Procedure::new(2, "Visual Inspection", "Check wiring, MEN link, labeling, earth continuity, damage."),
    Procedure::new(3, "Earth Continuity Test", "Use low-ohm meter from exposed metal to main earth."),
    Procedure::new(4, "Insulation Resistance", "Apply 500V DC. Must exceed 1 MΩ across all combinations."),
    Procedure::new(5, "Polarity Test", "Confirm active to switches, socket pin locations, test each outlet."),
    Procedure::new(6, "Phase Rotation (3ph)", "Use phase rotation meter to verify A-B-C sequence."),
    Procedure::new(7, "Earth Fault Loop Impedance (Zs)", "Measure between active and earth under load."),
    Procedure::new(8, "RCD Test", "Use tester to simulate fault current. Must trip within 300 ms (30 mA)."),
    Procedure::new(9, "Earth Electrode Resistance", "Use earth resistance tester, must be < 25 Ω typically."),
    Procedure::new(10, "Touch Voltage", "Confirm touch voltages do not exceed 50V during fault."),
    Procedure::new(11, "Incoming Neutral Integrity", "Check continuity between neutral bar and supply."),
    Procedure::new(12, "Record Results", "Complete test sheets with date, signature, all values."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_size() {
        assert_eq!(STANDARDS_INDEX.len(), 11);
    }

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(search_standards("").len(), STANDARDS_INDEX.len());
        assert_eq!(search_standards("   ").len(), STANDARDS_INDEX.len());
    }

    #[test]
    fn test_search_term_and_detail() {
        let terms: Vec<_> = search_standards("men").iter().map(|e| e.term).collect();
        // "MEN" by term, "Visual Inspection" by detail
        assert!(terms.contains(&"MEN"));
        assert!(terms.contains(&"Visual Inspection"));

        // "AS/NZS" in a detail also matches
        let terms: Vec<_> = search_standards("ZS").iter().map(|e| e.term).collect();
        assert_eq!(terms, vec!["Voltage Drop", "Zs Limits", "Loop Impedance", "Cable Grouping"]);

        assert!(search_standards("transformer").is_empty());
    }

    #[test]
    fn test_procedures_in_order() {
        assert_eq!(TESTING_PROCEDURES.len(), 12);
        for (i, procedure) in TESTING_PROCEDURES.iter().enumerate() {
            assert_eq!(procedure.step as usize, i + 1);
        }
        assert_eq!(
            TESTING_PROCEDURES[7].to_string(),
            "8. RCD Test: Use tester to simulate fault current. Must trip within 300 ms (30 mA)."
        );
    }
}
