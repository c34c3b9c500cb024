use std::cmp::Ordering;
use std::collections::HashMap;

use proptest::prelude::*;
use todoview_engine::*;

fn arb_records() -> impl Strategy<Value = Vec<Todo>> {
    prop::collection::vec(("[a-cA-C é]{0,6}", any::<bool>()), 0..40).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (text, completed))| Todo {
                id: TodoId::new(i as u64 + 1),
                text,
                completed,
            })
            .collect()
    })
}

fn arb_status() -> impl Strategy<Value = StatusFilter> {
    prop_oneof![
        Just(StatusFilter::All),
        Just(StatusFilter::Active),
        Just(StatusFilter::Completed),
    ]
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::NewestFirst),
        Just(SortKey::OldestFirst),
        Just(SortKey::TextAscending),
        Just(SortKey::TextDescending),
    ]
}

fn arb_params() -> impl Strategy<Value = ViewParams> {
    ("[a-cA-C]{0,2}", arb_status(), arb_sort(), 1usize..8, 1usize..8).prop_map(
        |(search, status, sort, page, page_size)| {
            ViewParams::new()
                .with_search(search)
                .with_status(status)
                .with_sort(sort)
                .with_page(PageNumber::new(page).unwrap())
                .with_page_size(PageSize::new(page_size).unwrap())
        },
    )
}

/// Every matching record on one page
fn single_page(records: &[Todo], params: &ViewParams) -> Vec<Todo> {
    let all = params
        .clone()
        .with_page(PageNumber::FIRST)
        .with_page_size(PageSize::new(records.len().max(1)).unwrap());
    compute_view(records, &all).items
}

proptest! {
    #[test]
    fn page_never_exceeds_page_size(records in arb_records(), params in arb_params()) {
        let view = compute_view(&records, &params);
        prop_assert!(view.items.len() <= params.page_size.get());
    }

    #[test]
    fn total_pages_is_ceiling_of_matches(records in arb_records(), params in arb_params()) {
        let view = compute_view(&records, &params);
        let matching = records.iter().filter(|t| matches(t, &params)).count();
        prop_assert_eq!(view.total_items, matching);
        prop_assert_eq!(view.total_pages, matching.div_ceil(params.page_size.get()));
    }

    #[test]
    fn view_is_idempotent(records in arb_records(), params in arb_params()) {
        prop_assert_eq!(compute_view(&records, &params), compute_view(&records, &params));
    }

    #[test]
    fn items_satisfy_filters(records in arb_records(), params in arb_params()) {
        let view = compute_view(&records, &params);
        let needle = params.search.to_lowercase();
        for item in &view.items {
            prop_assert!(params.status.accepts(item.completed));
            prop_assert!(item.text.to_lowercase().contains(&needle));
        }
    }

    #[test]
    fn text_ascending_pages_are_ordered(records in arb_records(), params in arb_params()) {
        let params = params.with_sort(SortKey::TextAscending);
        let view = compute_view(&records, &params);
        for pair in view.items.windows(2) {
            prop_assert_ne!(collate(&pair[0].text, &pair[1].text), Ordering::Greater);
        }
    }

    #[test]
    fn reversing_text_sort_reverses_distinct_keys(
        records in arb_records(),
        params in arb_params(),
    ) {
        let asc = single_page(&records, &params.clone().with_sort(SortKey::TextAscending));
        let desc = single_page(&records, &params.with_sort(SortKey::TextDescending));

        let position: HashMap<TodoId, usize> =
            desc.iter().enumerate().map(|(i, t)| (t.id, i)).collect();

        for (i, a) in asc.iter().enumerate() {
            for b in &asc[i + 1..] {
                if collate(&a.text, &b.text) == Ordering::Less {
                    prop_assert!(position[&b.id] < position[&a.id]);
                }
            }
        }
    }

    #[test]
    fn reversing_id_sort_reverses_exactly(records in arb_records(), params in arb_params()) {
        let newest = single_page(&records, &params.clone().with_sort(SortKey::NewestFirst));
        let mut oldest = single_page(&records, &params.with_sort(SortKey::OldestFirst));
        oldest.reverse();
        prop_assert_eq!(newest, oldest);
    }

    #[test]
    fn pages_partition_the_matches(records in arb_records(), params in arb_params()) {
        let expected = single_page(&records, &params);
        let first = compute_view(&records, &params.clone().with_page(PageNumber::FIRST));

        let mut collected = Vec::new();
        for page in 1..=first.total_pages.max(1) + 1 {
            let paged = params.clone().with_page(PageNumber::new(page).unwrap());
            let view = compute_view(&records, &paged);
            collected.extend(view.items);
        }
        prop_assert_eq!(collected, expected);
    }
}
