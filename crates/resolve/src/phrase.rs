use log::debug;
use sumlens_protocol::SummaryCodeMapping;

use crate::region::{Claims, OverlapPolicy, Region};
use crate::text::CodeText;

/// Locate each mapping's summary phrase inside a summary text.
///
/// Unlike code segments, phrases are expected verbatim; the only leniency is
/// `disambig_index`, which selects the nth occurrence when the phrase repeats.
/// A phrase that is absent, or whose occurrence collides with an earlier
/// claim under the strict policy, is dropped for that mapping; there is no
/// occurrence retry, matching how annotations disambiguate explicitly.
#[must_use]
pub fn resolve_phrase_regions(
    text: &str,
    mappings: &[SummaryCodeMapping],
    policy: OverlapPolicy,
) -> Vec<Region> {
    let indexed = CodeText::new(text);
    let mut claims = Claims::new(policy);
    let mut regions: Vec<Region> = Vec::new();

    for (mapping_index, mapping) in mappings.iter().enumerate() {
        let phrase = mapping.summary_component.as_str();
        if phrase.is_empty() {
            continue;
        }
        let nth = mapping.occurrence() as usize;
        let Some((start, end)) = indexed.occurrences(phrase).nth(nth - 1) else {
            debug!("mapping {mapping_index}: phrase occurrence {nth} not found: {phrase:?}");
            continue;
        };
        if claims.conflicts(start, end) {
            debug!("mapping {mapping_index}: phrase overlaps an earlier mapping, dropped");
            continue;
        }
        claims.claim(start, end);
        regions.push(Region {
            start,
            end,
            mapping_index,
        });
    }

    regions.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(a.mapping_index.cmp(&b.mapping_index))
    });
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn phrase_mapping(phrase: &str, disambig: Option<u32>) -> SummaryCodeMapping {
        SummaryCodeMapping {
            summary_component: phrase.to_string(),
            code_segments: Vec::new(),
            disambig_index: disambig,
        }
    }

    #[test]
    fn phrases_resolve_to_their_first_occurrence_by_default() {
        let text = "renames the helper and inlines the helper call";
        let mappings = vec![phrase_mapping("the helper", None)];
        let regions = resolve_phrase_regions(text, &mappings, OverlapPolicy::Strict);
        assert_eq!(regions.len(), 1);
        assert_eq!((regions[0].start, regions[0].end), (8, 18));
    }

    #[test]
    fn disambig_index_selects_a_later_occurrence() {
        let text = "renames the helper and inlines the helper call";
        let mappings = vec![phrase_mapping("the helper", Some(2))];
        let regions = resolve_phrase_regions(text, &mappings, OverlapPolicy::Strict);
        assert_eq!(regions.len(), 1);
        assert_eq!((regions[0].start, regions[0].end), (31, 41));
    }

    #[test]
    fn disambig_index_counts_overlapping_occurrences() {
        // "coco" repeats with overlap in "cococo"; the second hit starts at
        // the shared "co", not past the first match's end.
        let text = "cococo";
        let mappings = vec![phrase_mapping("coco", Some(2))];
        let regions = resolve_phrase_regions(text, &mappings, OverlapPolicy::Permissive);
        assert_eq!(regions.len(), 1);
        assert_eq!((regions[0].start, regions[0].end), (2, 6));
    }

    #[test]
    fn missing_occurrence_drops_the_phrase_silently() {
        let text = "a single mention";
        let mappings = vec![
            phrase_mapping("mention", Some(3)),
            phrase_mapping("single", None),
        ];
        let regions = resolve_phrase_regions(text, &mappings, OverlapPolicy::Strict);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].mapping_index, 1);
    }

    #[test]
    fn strict_overlapping_phrases_keep_the_earlier_mapping() {
        let text = "fixes the off-by-one loop bound";
        let mappings = vec![
            phrase_mapping("the off-by-one loop", None),
            phrase_mapping("loop bound", None),
        ];
        let strict = resolve_phrase_regions(text, &mappings, OverlapPolicy::Strict);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].mapping_index, 0);

        let permissive = resolve_phrase_regions(text, &mappings, OverlapPolicy::Permissive);
        assert_eq!(permissive.len(), 2);
    }
}
