//! Chart groupings over the lead snapshot
//!
//! Counts are keyed in first-occurrence order, which fixes the chart
//! legend order without affecting correctness.

use indexmap::IndexMap;
use leadboard_core::Lead;

/// Count leads per acquisition source
#[must_use]
pub fn by_source(leads: &[Lead]) -> IndexMap<String, usize> {
    count_by(leads, |lead| &lead.source)
}

/// Count leads per industry
#[must_use]
pub fn by_industry(leads: &[Lead]) -> IndexMap<String, usize> {
    count_by(leads, |lead| &lead.industry)
}

/// Single-pass count of leads sharing a key
fn count_by<'a, F>(leads: &'a [Lead], key: F) -> IndexMap<String, usize>
where
    F: Fn(&'a Lead) -> &'a str,
{
    let mut groups = IndexMap::new();
    for lead in leads {
        *groups.entry(key(lead).to_string()).or_insert(0) += 1;
    }
    groups
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
#[allow(clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn lead(source: &str, industry: &str) -> Lead {
        Lead {
            id: 0,
            name: "Test Lead".to_string(),
            company: "Test Co".to_string(),
            industry: industry.to_string(),
            size: 10,
            source: source.to_string(),
            created_at: Utc::now(),
            quality: None,
            summary: None,
        }
    }

    #[test]
    fn test_empty_snapshot_has_no_groups() {
        assert!(by_source(&[]).is_empty());
        assert!(by_industry(&[]).is_empty());
    }

    #[test]
    fn test_two_lead_scenario() {
        let leads = vec![lead("Organic", "Tech"), lead("PPC", "Tech")];

        let sources = by_source(&leads);
        assert_eq!(sources.get("Organic"), Some(&1));
        assert_eq!(sources.get("PPC"), Some(&1));
        assert_eq!(sources.len(), 2);

        let industries = by_industry(&leads);
        assert_eq!(industries.get("Tech"), Some(&2));
        assert_eq!(industries.len(), 1);
    }

    #[test]
    fn test_insertion_order_is_first_occurrence() {
        let leads = vec![
            lead("Referral", "Finance"),
            lead("Organic", "Retail"),
            lead("Referral", "Finance"),
            lead("Email", "Retail"),
        ];

        let sources = by_source(&leads);
        let keys: Vec<&String> = sources.keys().collect();
        assert_eq!(keys, ["Referral", "Organic", "Email"]);

        let industries = by_industry(&leads);
        let keys: Vec<&String> = industries.keys().collect();
        assert_eq!(keys, ["Finance", "Retail"]);
    }

    #[test]
    fn test_repeated_calls_produce_identical_output() {
        let leads = vec![lead("Organic", "Tech"), lead("Social", "Healthcare")];
        assert_eq!(by_source(&leads), by_source(&leads));
        assert_eq!(by_industry(&leads), by_industry(&leads));
    }

    proptest! {
        #[test]
        fn test_group_counts_sum_to_total(
            picks in prop::collection::vec((0usize..5, 0usize..6), 0..60)
        ) {
            let sources = ["Organic", "PPC", "Referral", "Email", "Social"];
            let industries = [
                "Technology",
                "Manufacturing",
                "Healthcare",
                "Finance",
                "Retail",
                "Social",
            ];

            let leads: Vec<Lead> = picks
                .iter()
                .map(|&(s, i)| lead(sources[s], industries[i]))
                .collect();

            let source_groups = by_source(&leads);
            let industry_groups = by_industry(&leads);

            prop_assert_eq!(source_groups.values().sum::<usize>(), leads.len());
            prop_assert_eq!(industry_groups.values().sum::<usize>(), leads.len());

            // Every lead's key appears in exactly one group
            for l in &leads {
                prop_assert!(source_groups.contains_key(&l.source));
                prop_assert!(industry_groups.contains_key(&l.industry));
            }
        }
    }
}
