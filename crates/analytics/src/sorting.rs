use crate::error::AnalyticsError;
use core_types::SectorRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    #[default]
    Allocation,
    Performance,
    Risk,
    Grade,
    Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// One page of a sorted listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

fn compare(a: &SectorRecord, b: &SectorRecord, field: SortField) -> Ordering {
    match field {
        SortField::Name => a
            .metadata
            .name
            .to_lowercase()
            .cmp(&b.metadata.name.to_lowercase()),
        SortField::Allocation => a.metrics.allocation.total_cmp(&b.metrics.allocation),
        SortField::Performance => a.metrics.performance.total_cmp(&b.metrics.performance),
        SortField::Risk => a.metrics.risk_score.total_cmp(&b.metrics.risk_score),
        SortField::Grade => a.grade.rank().cmp(&b.grade.rank()),
        SortField::Trend => a.metrics.trend.rank().cmp(&b.metrics.trend.rank()),
    }
}

/// Stable sort; ties keep catalogue order in both directions.
pub fn sort_sectors(records: &mut [SectorRecord], field: SortField, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Slices out page `page` (1-based) of `limit` items.
///
/// A page past the end is empty rather than an error.
pub fn paginate<T: Clone>(
    items: &[T],
    page: usize,
    limit: usize,
) -> Result<Page<T>, AnalyticsError> {
    if page == 0 {
        return Err(AnalyticsError::InvalidInput("page must be at least 1".to_string()));
    }
    if limit == 0 {
        return Err(AnalyticsError::InvalidInput("limit must be at least 1".to_string()));
    }

    let total_items = items.len();
    let total_pages = total_items.div_ceil(limit);
    let start = (page - 1).saturating_mul(limit);
    let slice = items
        .get(start..)
        .map(|rest| rest.iter().take(limit).cloned().collect())
        .unwrap_or_default();

    Ok(Page {
        items: slice,
        page,
        limit,
        total_items,
        total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::SectorAggregator;
    use crate::random::FixedRandom;
    use chrono::Utc;
    use core_types::Grade;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn records() -> Vec<SectorRecord> {
        SectorAggregator::new(Arc::new(FixedRandom(0.5))).aggregate(
            "USA",
            &HashMap::new(),
            Utc::now(),
        )
    }

    #[test]
    fn default_order_is_allocation_descending() {
        let mut records = records();
        sort_sectors(&mut records, SortField::default(), SortDirection::default());
        for pair in records.windows(2) {
            assert!(pair[0].metrics.allocation >= pair[1].metrics.allocation);
        }
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut records = records();
        sort_sectors(&mut records, SortField::Name, SortDirection::Asc);
        let names: Vec<String> = records.iter().map(|r| r.metadata.name.to_lowercase()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn grade_sort_puts_best_first_when_descending() {
        let mut records = records();
        sort_sectors(&mut records, SortField::Grade, SortDirection::Desc);
        assert!(records.first().unwrap().grade.rank() >= records.last().unwrap().grade.rank());
        sort_sectors(&mut records, SortField::Grade, SortDirection::Asc);
        assert!(records.first().unwrap().grade.rank() <= records.last().unwrap().grade.rank());
        assert!(records.iter().any(|r| r.grade != Grade::F));
    }

    #[test]
    fn risk_sort_ascending() {
        let mut records = records();
        sort_sectors(&mut records, SortField::Risk, SortDirection::Asc);
        for pair in records.windows(2) {
            assert!(pair[0].metrics.risk_score <= pair[1].metrics.risk_score);
        }
    }

    #[test]
    fn sort_fields_parse_from_lowercase() {
        let field: SortField = serde_json::from_str("\"performance\"").unwrap();
        assert_eq!(field, SortField::Performance);
        let direction: SortDirection = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(direction, SortDirection::Asc);
    }

    #[test]
    fn pages_cover_all_items() {
        let items: Vec<u32> = (1..=11).collect();

        let first = paginate(&items, 1, 5).unwrap();
        assert_eq!(first.items, vec![1, 2, 3, 4, 5]);
        assert_eq!(first.total_items, 11);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 3, 5).unwrap();
        assert_eq!(last.items, vec![11]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (1..=11).collect();
        let page = paginate(&items, 4, 5).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn zero_page_or_limit_is_rejected() {
        let items = vec![1, 2, 3];
        assert!(matches!(paginate(&items, 0, 10), Err(AnalyticsError::InvalidInput(_))));
        assert!(matches!(paginate(&items, 1, 0), Err(AnalyticsError::InvalidInput(_))));
    }

    #[test]
    fn empty_listing_has_zero_pages() {
        let page = paginate::<u32>(&[], 1, 10).unwrap();
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }
}
