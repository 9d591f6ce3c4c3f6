//! @ai:module:intent Fixed display order for weight labels and scenarios
//! @ai:module:layer domain
//! @ai:module:public_api rank, sort_key
//! @ai:module:stateless true

const RANKS: [(&str, u32); 12] = [
    ("0.00", 0),
    ("0.50", 1),
    ("0.75", 2),
    ("0.95", 3),
    ("0.98", 4),
    ("0.99", 5),
    ("1.00", 6),
    ("base", 7),
    ("Low demand", 8),
    ("High demand", 9),
    ("High rej. costs", 10),
    ("Low rej. costs", 11),
];

/// @ai:intent Rank of a label in the display order, None when unranked
/// @ai:effects pure
pub fn rank(label: &str) -> Option<u32> {
    RANKS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, rank)| *rank)
}

/// @ai:intent Sort key placing ranked labels first, in rank order
/// @ai:effects pure
pub fn sort_key(label: &str) -> (bool, u32) {
    match rank(label) {
        Some(r) => (false, r),
        None => (true, u32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Scenario;

    #[test]
    fn test_weight_ranks() {
        assert_eq!(rank("0.00"), Some(0));
        assert_eq!(rank("0.99"), Some(5));
        assert_eq!(rank("1.00"), Some(6));
    }

    #[test]
    fn test_every_scenario_is_ranked_after_weights() {
        for scenario in Scenario::ALL {
            let r = rank(scenario.label()).unwrap();
            assert!(r >= 7);
        }
    }

    #[test]
    fn test_unknown_labels_sort_last() {
        assert_eq!(rank("0.10"), None);
        assert!(sort_key("1.00") < sort_key("0.10"));
    }
}
