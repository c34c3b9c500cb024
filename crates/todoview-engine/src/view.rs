use std::borrow::Borrow;

use todoview_types::{SortKey, Todo, ViewParams, ViewResult};
use tracing::trace;

use crate::collate::collate;

/// Compute the page of records to display.
///
/// Pipeline: search filter, status filter, stable sort, paginate. The
/// function is pure: `records` is only read and the result is freshly
/// allocated. A page past the end yields no items but the correct
/// `total_pages`.
pub fn compute_view<T>(records: &[T], params: &ViewParams) -> ViewResult
where
    T: Borrow<Todo>,
{
    let needle = params.search.to_lowercase();

    let mut matching: Vec<&Todo> = records
        .iter()
        .map(|record| Borrow::<Todo>::borrow(record))
        .filter(|todo| params.status.accepts(todo.completed))
        .filter(|todo| contains_lowercase(&todo.text, &needle))
        .collect();

    sort_records(&mut matching, params.sort);

    let page_size = params.page_size.get();
    let total_items = matching.len();
    let total_pages = params.total_pages(total_items);
    let start = (params.page.get() - 1).saturating_mul(page_size);

    let items: Vec<Todo> = matching
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    trace!(
        total_items,
        total_pages,
        page = params.page.get(),
        returned = items.len(),
        "computed view"
    );

    ViewResult {
        items,
        total_pages,
        total_items,
        page: params.page.get(),
    }
}

/// Whether a single record passes the search and status filters.
pub fn matches(todo: &Todo, params: &ViewParams) -> bool {
    params.status.accepts(todo.completed)
        && contains_lowercase(&todo.text, &params.search.to_lowercase())
}

fn contains_lowercase(text: &str, needle: &str) -> bool {
    needle.is_empty() || text.to_lowercase().contains(needle)
}

fn sort_records(records: &mut [&Todo], sort: SortKey) {
    match sort {
        SortKey::NewestFirst => records.sort_by(|a, b| b.id.cmp(&a.id)),
        SortKey::OldestFirst => records.sort_by(|a, b| a.id.cmp(&b.id)),
        SortKey::TextAscending => records.sort_by(|a, b| collate(&a.text, &b.text)),
        SortKey::TextDescending => records.sort_by(|a, b| collate(&b.text, &a.text)),
    }
}
