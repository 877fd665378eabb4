//! Pairwise conflict rules.
//!
//! Matching is plain string equality: an exclusion entry hits a product when
//! it equals the product's name or one of its tags. No case folding and no
//! substring matching.

use tracing::debug;

use skinmatch_catalog::Product;

use crate::analysis::{AnalysisResult, CompatibilityPair};
use crate::status::CompatibilityStatus;

/// Reason attached to pairs without a conflict.
pub const COMPATIBLE_REASON: &str = "No known conflicts reported by The Ordinary.";

/// Reason attached to pairs where each product excludes the other.
pub const MUTUAL_REASON: &str = "Both products recommend avoiding the other.";

/// Term used when an exclusion fired but no single entry can be named.
pub const FALLBACK_TERM: &str = "conflicting ingredients";

/// Whether `source`'s exclusion list names `target` or one of its tags.
pub fn excludes(source: &Product, target: &Product) -> bool {
    conflict_term(source, target).is_some()
}

/// Symmetric conflict predicate shared by the analysis and the routine gate.
pub fn conflicts(a: &Product, b: &Product) -> bool {
    excludes(a, b) || excludes(b, a)
}

/// First entry of `source.excludes` that matches `target`.
fn conflict_term<'a>(source: &'a Product, target: &Product) -> Option<&'a str> {
    source
        .excludes()
        .iter()
        .find(|entry| entry.as_str() == target.name() || target.has_tag(entry))
        .map(String::as_str)
}

fn one_sided_reason(source: &Product, target: &Product) -> String {
    let term = conflict_term(source, target).unwrap_or(FALLBACK_TERM);
    format!(
        "{} recommends avoiding products containing {}.",
        source.name(),
        term
    )
}

/// Evaluate one pair; `a` is reported first.
pub fn evaluate_pair(a: &Product, b: &Product) -> CompatibilityPair {
    let a_excludes_b = excludes(a, b);
    let b_excludes_a = excludes(b, a);

    let (status, reason) = match (a_excludes_b, b_excludes_a) {
        (true, true) => (CompatibilityStatus::Conflict, MUTUAL_REASON.to_string()),
        (true, false) => (CompatibilityStatus::Conflict, one_sided_reason(a, b)),
        (false, true) => (CompatibilityStatus::Conflict, one_sided_reason(b, a)),
        (false, false) => (CompatibilityStatus::Compatible, COMPATIBLE_REASON.to_string()),
    };

    CompatibilityPair {
        product_a: a.name().to_string(),
        product_b: b.name().to_string(),
        status,
        reason,
    }
}

/// Evaluate every unordered pair in `selection`.
///
/// Pairs are produced by an `i < j` double loop, so their order follows the
/// input order. Fewer than two products yields no pairs and the no-conflict
/// summary. Duplicate names are not detected here.
pub fn analyze(selection: &[Product]) -> AnalysisResult {
    let mut pairs = Vec::with_capacity(selection.len() * selection.len().saturating_sub(1) / 2);

    for (i, a) in selection.iter().enumerate() {
        for b in &selection[i + 1..] {
            pairs.push(evaluate_pair(a, b));
        }
    }

    let result = AnalysisResult::from_pairs(pairs);
    debug!(
        products = selection.len(),
        pairs = result.pairs.len(),
        conflicts = result.conflict_count(),
        "selection analyzed"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::NO_CONFLICTS_SUMMARY;
    use skinmatch_core::ProductId;

    fn product(name: &str) -> Product {
        let slug = name.to_lowercase().replace(' ', "-");
        Product::new(ProductId::new(slug).unwrap(), name).unwrap()
    }

    #[test]
    fn exclusion_by_name() {
        let a = product("A").with_excludes(["Vitamin C"]);
        let b = product("Vitamin C");

        assert!(excludes(&a, &b));
        assert!(!excludes(&b, &a));
        assert!(conflicts(&a, &b));
        assert!(conflicts(&b, &a));

        let pair = evaluate_pair(&a, &b);
        assert_eq!(pair.status, CompatibilityStatus::Conflict);
        assert_eq!(pair.reason, "A recommends avoiding products containing Vitamin C.");
    }

    #[test]
    fn exclusion_by_tag() {
        let a = product("A").with_excludes(["Direct Acids"]);
        let b = product("Glycolic Acid 7% Toning Solution").with_tags(["Direct Acids"]);

        assert!(excludes(&a, &b));
        assert!(conflicts(&a, &b));

        let pair = evaluate_pair(&b, &a);
        assert_eq!(pair.product_a, "Glycolic Acid 7% Toning Solution");
        assert_eq!(pair.reason, "A recommends avoiding products containing Direct Acids.");
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let a = product("A").with_excludes(["vitamin c", "Acid"]);
        let b = product("Vitamin C").with_tags(["Direct Acids"]);
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn reason_names_first_matching_entry() {
        let a = product("A").with_excludes(["Retinoids", "Direct Acids", "B"]);
        let b = product("B").with_tags(["Direct Acids"]);
        assert_eq!(
            evaluate_pair(&a, &b).reason,
            "A recommends avoiding products containing Direct Acids."
        );
    }

    #[test]
    fn compatible_pair_with_disjoint_tags() {
        let a = product("A").with_tags(["Hydrators"]);
        let b = product("B").with_tags(["Oils"]);

        let result = analyze(&[a, b]);
        assert_eq!(result.pairs.len(), 1);
        assert_eq!(result.pairs[0].status, CompatibilityStatus::Compatible);
        assert_eq!(result.pairs[0].reason, COMPATIBLE_REASON);
        assert_eq!(result.summary, NO_CONFLICTS_SUMMARY);
    }

    #[test]
    fn chain_of_exclusions_flags_only_direct_pairs() {
        let a = product("A").with_excludes(["B"]);
        let b = product("B").with_excludes(["C"]);
        let c = product("C");

        let result = analyze(&[a, b, c]);
        let statuses: Vec<(&str, &str, CompatibilityStatus)> = result
            .pairs
            .iter()
            .map(|p| (p.product_a.as_str(), p.product_b.as_str(), p.status))
            .collect();

        // B excludes C, so (B, C) conflicts as well.
        assert_eq!(
            statuses,
            vec![
                ("A", "B", CompatibilityStatus::Conflict),
                ("A", "C", CompatibilityStatus::Compatible),
                ("B", "C", CompatibilityStatus::Conflict),
            ]
        );
        assert_eq!(result.conflict_count(), 2);
        assert!(result.summary.starts_with("Found 2 potential conflicts."));
    }

    #[test]
    fn a_excludes_b_only_gives_single_conflict() {
        let a = product("A").with_excludes(["B"]);
        let b = product("B");
        let c = product("C");

        let result = analyze(&[a, b, c]);
        assert_eq!(result.conflict_count(), 1);
        assert_eq!(result.pairs[0].status, CompatibilityStatus::Conflict);
        assert_eq!(result.pairs[1].status, CompatibilityStatus::Compatible);
        assert_eq!(result.pairs[2].status, CompatibilityStatus::Compatible);
        assert!(result.summary.starts_with("Found 1 potential conflict."));
    }

    #[test]
    fn mutual_exclusion_reason_is_order_independent() {
        let a = product("A").with_excludes(["B"]);
        let b = product("B").with_excludes(["A"]);

        assert_eq!(evaluate_pair(&a, &b).reason, MUTUAL_REASON);
        assert_eq!(evaluate_pair(&b, &a).reason, MUTUAL_REASON);
    }

    #[test]
    fn reverse_direction_reason_names_second_product() {
        let a = product("A");
        let b = product("B").with_excludes(["A"]);
        assert_eq!(
            evaluate_pair(&a, &b).reason,
            "B recommends avoiding products containing A."
        );
    }

    #[test]
    fn small_selections_have_no_pairs() {
        let empty = analyze(&[]);
        assert!(empty.pairs.is_empty());
        assert_eq!(empty.summary, NO_CONFLICTS_SUMMARY);

        let single = analyze(&[product("A").with_excludes(["A"])]);
        assert!(single.pairs.is_empty());
        assert_eq!(single.summary, NO_CONFLICTS_SUMMARY);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const VOCAB: &[&str] = &["P0", "P1", "P2", "P3", "P4", "Direct Acids", "Retinoids", "Vitamin C"];

        fn arb_terms() -> impl Strategy<Value = Vec<String>> {
            proptest::collection::vec(proptest::sample::select(VOCAB), 0..4)
                .prop_map(|v| v.into_iter().map(str::to_string).collect())
        }

        fn arb_selection() -> impl Strategy<Value = Vec<Product>> {
            proptest::collection::vec((arb_terms(), arb_terms()), 0..6).prop_map(|specs| {
                specs
                    .into_iter()
                    .enumerate()
                    .map(|(i, (excl, tags))| {
                        product(&format!("P{i}")).with_excludes(excl).with_tags(tags)
                    })
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: the conflict predicate ignores argument order.
            #[test]
            fn conflicts_is_symmetric(selection in arb_selection()) {
                for a in &selection {
                    for b in &selection {
                        prop_assert_eq!(conflicts(a, b), conflicts(b, a));
                    }
                }
            }

            /// Property: n products yield n*(n-1)/2 pairs, never a self-pair.
            #[test]
            fn pair_count_is_n_choose_2(selection in arb_selection()) {
                let n = selection.len();
                let result = analyze(&selection);
                prop_assert_eq!(result.pairs.len(), n * n.saturating_sub(1) / 2);
                prop_assert!(result.pairs.iter().all(|p| p.product_a != p.product_b));
            }

            /// Property: analysis is deterministic and agrees with `conflicts`.
            #[test]
            fn analyze_is_deterministic(selection in arb_selection()) {
                let first = analyze(&selection);
                let second = analyze(&selection);
                prop_assert_eq!(&first, &second);

                let mut k = 0;
                for (i, a) in selection.iter().enumerate() {
                    for b in &selection[i + 1..] {
                        let pair = &first.pairs[k];
                        prop_assert_eq!(&pair.product_a, a.name());
                        prop_assert_eq!(&pair.product_b, b.name());
                        prop_assert_eq!(pair.status.is_conflict(), conflicts(a, b));
                        k += 1;
                    }
                }
            }
        }
    }
}
