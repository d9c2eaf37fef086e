use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// One registry's identifier grammar.
#[derive(Debug)]
pub struct RegistryPattern {
    /// Human-readable registry name.
    pub registry: &'static str,
    /// Word-boundary-anchored identifier pattern.
    pub regex: Regex,
}

/// Identifier grammars for the WHO-network trial registries, applied in this
/// order. Patterns are independent; an identifier that satisfies more than
/// one grammar (e.g. the KCT digits inside a CRiS-KCT code) is reported
/// under each matching spelling.
static REGISTRY_PATTERNS: Lazy<Vec<RegistryPattern>> = Lazy::new(|| {
    let table: &[(&str, &str)] = &[
        ("ClinicalTrials.gov", r"\bNCT\d{6,8}\b"),
        (
            "EU Clinical Trials Register",
            r"\bEUCTR\d{4}-\d{6}-\d{2}(?:-[A-Za-z]{2,3})?\b",
        ),
        ("EudraCT", r"\bEudraCT ?\d{4}-\d{6}-\d{2}\b"),
        ("ISRCTN", r"\bISRCTN\d{6,8}\b"),
        ("UMIN-CTR", r"\bUMIN\d{6,8}\b"),
        ("ChiCTR", r"\bChiCTR(?:-[A-Za-z]{2,3})?-\d{6,8}\b"),
        ("ANZCTR", r"\bACTRN\d{14}\b"),
        ("JPRN", r"\bJPRN-[A-Za-z]+\d{6,8}\b"),
        ("JapicCTI", r"\bJapicCTI-\d{6}\b"),
        ("CTRI", r"\bCTRI/\d{4}/\d{2}/\d{6}\b"),
        ("IRCT", r"\bIRCT\d{8,15}(?:[A-Za-z]\d+)?\b"),
        ("IRCT (dated form)", r"\bIRCT/\d{4}/\d{2}/\d{2}/\d+\b"),
        ("DRKS", r"\bDRKS\d{6,8}\b"),
        ("NTR", r"\bNTR\d{4,8}\b"),
        ("REPEC", r"\bPER-\d{3,4}-\d{2}\b"),
        ("CRIS (KCT)", r"\bKCT\d{6,8}\b"),
        ("SLCTR", r"\bSLCTR/\d{4}/\d{3}\b"),
        ("ReBec", r"\bRBR-[0-9A-Za-z]{6,10}\b"),
        ("PACTR", r"\bPACTR\d{14,20}\b"),
        ("TCTR", r"\bTCTR\d{13}\b"),
        ("CRiS-KCT", r"\bCRiS-KCT\d{7}\b"),
        ("LBCTR", r"\bLBCTR\d{8,12}\b"),
        ("Health Canada CTD", r"\bHC-CTD-\d{4}-\d{4}\b"),
        ("WHO UTN", r"\bU1111-\d{4}-\d{4}\b"),
        ("UCTR", r"\bUCTR\d{11,15}\b"),
        ("UCTR (hyphenated form)", r"\bUCTR-\d{5,7}\b"),
    ];
    table
        .iter()
        .map(|&(registry, pattern)| RegistryPattern {
            registry,
            regex: Regex::new(pattern).expect("registry pattern must compile"),
        })
        .collect()
});

/// The full registry pattern table, in scan order.
pub fn registry_patterns() -> &'static [RegistryPattern] {
    &REGISTRY_PATTERNS
}

/// Name the registry whose grammar an already-extracted identifier
/// satisfies in full. Returns the first matching registry in table order.
pub fn registry_of(id: &str) -> Option<&'static str> {
    REGISTRY_PATTERNS
        .iter()
        .find(|pattern| {
            pattern
                .regex
                .find(id)
                .is_some_and(|m| m.start() == 0 && m.end() == id.len())
        })
        .map(|pattern| pattern.registry)
}

/// Scan text for clinical-trial registry identifiers.
///
/// Every pattern is applied independently to the whole text; the result is
/// the union of all matches, deduplicated by exact string value. No fuzzy
/// matching: an identifier broken across a layout boundary will not match.
/// An empty set is a valid outcome, not an error.
pub fn extract_trial_ids(text: &str) -> HashSet<String> {
    let mut ids = HashSet::new();
    for pattern in REGISTRY_PATTERNS.iter() {
        for m in pattern.regex.find_iter(text) {
            ids.insert(m.as_str().to_string());
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(text: &str) -> HashSet<String> {
        extract_trial_ids(text)
    }

    #[test]
    fn test_nct_soundness() {
        let result = ids("The trial was registered as NCT00361335 in 2006.");
        assert!(result.contains("NCT00361335"));
    }

    #[test]
    fn test_deduplication() {
        let result = ids("NCT00361335 appears twice: NCT00361335.");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_no_matches_is_empty_set() {
        assert!(ids("No identifiers in this abstract.").is_empty());
    }

    #[test]
    fn test_one_canonical_id_per_registry() {
        // Each row: (example identifier, context sentence). The sentence
        // exercises the word-boundary anchoring.
        let examples = [
            "NCT00361335",
            "EUCTR2010-019180-10-GB",
            "EudraCT 2020-001234-12",
            "ISRCTN47823431",
            "UMIN00001234",
            "ChiCTR-TRC-12345678",
            "ACTRN12611000222943",
            "JPRN-UMIN00001234",
            "JapicCTI-123456",
            "CTRI/2012/05/002651",
            "IRCT201104012345N1",
            "IRCT/2011/04/01/1234",
            "DRKS00003170",
            "NTR3843",
            "PER-042-19",
            "KCT0001234",
            "SLCTR/2010/008",
            "RBR-4t3pqk",
            "PACTR201104000282148",
            "TCTR2013010200041",
            "CRiS-KCT0000123",
            "LBCTR2020061234",
            "HC-CTD-2019-0042",
            "U1111-1152-3476",
            "UCTR12345678901",
            "UCTR-123456",
        ];
        for example in examples {
            let text = format!("Registered under {example} per protocol.");
            assert!(
                ids(&text).contains(example),
                "pattern table missed {example}"
            );
        }
    }

    #[test]
    fn test_word_boundary_rejects_embedded_ids() {
        let result = ids("codeNCT00361335suffix");
        assert!(!result.contains("NCT00361335"));
    }

    #[test]
    fn test_eudract_spellings_are_distinct() {
        let spaced = ids("EudraCT 2020-001234-12");
        let fused = ids("EudraCT2020-001234-12");
        assert!(spaced.contains("EudraCT 2020-001234-12"));
        assert!(fused.contains("EudraCT2020-001234-12"));
    }

    #[test]
    fn test_cris_kct_also_matches_kct_grammar() {
        // Independent patterns: the digits of a CRiS-KCT code also satisfy
        // the bare KCT grammar, so both spellings are reported.
        let result = ids("Registered as CRiS-KCT0000123.");
        assert!(result.contains("CRiS-KCT0000123"));
        assert!(result.contains("KCT0000123"));
    }

    #[test]
    fn test_chictr_without_letter_infix() {
        let result = ids("ChiCTR-12345678 enrolled patients from 2012.");
        assert!(result.contains("ChiCTR-12345678"));
    }

    #[test]
    fn test_id_split_by_paragraph_break_does_not_match() {
        let result = ids("NCT0036\n\n1335");
        assert!(result.is_empty());
    }

    #[test]
    fn test_pattern_table_covers_all_registries() {
        assert_eq!(registry_patterns().len(), 26);
    }

    #[test]
    fn test_registry_of() {
        assert_eq!(registry_of("NCT00361335"), Some("ClinicalTrials.gov"));
        assert_eq!(registry_of("SLCTR/2010/008"), Some("SLCTR"));
        assert_eq!(registry_of("EudraCT 2020-001234-12"), Some("EudraCT"));
        assert_eq!(registry_of("not an identifier"), None);
    }
}
