use anyhow::Result;
use std::path::Path;
use todoview_engine::{Action, PageNumber, PageSize, compute_view};
use tracing::debug;

use crate::args::ViewArgs;
use crate::config::Config;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Guidance, TodoPageViewModel};
use crate::script::{ActionScript, replay_actions};
use crate::types::OutputFormat;

pub fn handle(
    config: &Config,
    script_path: &Path,
    view: ViewArgs,
    format: OutputFormat,
) -> Result<()> {
    let script = ActionScript::load(script_path)?;
    let state = script.replay(config.view_params())?;

    // Flag overrides go through the reducer like any other action
    let state = replay_actions(state, override_actions(&view)?)?;

    // An explicit page is shown as requested, even past the end
    let mut params = state.params.clone();
    if let Some(page) = view.page {
        params.page = PageNumber::new(page)?;
    }

    let page = compute_view(state.todos.records(), &params);
    debug!(
        page = page.page,
        total_pages = page.total_pages,
        "rendering todo page"
    );

    let has_next = page.page < page.total_pages;
    let next_page = page.page + 1;
    let mut result = CommandResultViewModel::new(TodoPageViewModel::new(&state, &params, page));
    if has_next {
        result = result.with_suggestion(Guidance::new("Next page").with_command(format!(
            "todoview todo run {} --page {}",
            script_path.display(),
            next_page
        )));
    }

    ConsoleRenderer::new(format).render(result)
}

fn override_actions(view: &ViewArgs) -> Result<Vec<Action>> {
    let mut actions = Vec::new();

    if let Some(search) = &view.search {
        actions.push(Action::SetSearch {
            search: search.clone(),
        });
    }
    if let Some(status) = view.status {
        actions.push(Action::SetStatus {
            status: status.into(),
        });
    }
    if let Some(sort) = view.sort {
        actions.push(Action::SetSort { sort: sort.into() });
    }
    if let Some(page_size) = view.page_size {
        actions.push(Action::SetPageSize {
            page_size: PageSize::new(page_size)?,
        });
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SortArg, StatusArg};
    use todoview_engine::{SortKey, StatusFilter};

    #[test]
    fn test_override_actions_in_order() -> Result<()> {
        let view = ViewArgs {
            search: Some("milk".to_string()),
            status: Some(StatusArg::Active),
            sort: Some(SortArg::TextAscending),
            page: Some(2),
            page_size: Some(3),
        };

        let actions = override_actions(&view)?;
        assert_eq!(actions.len(), 4);
        assert_eq!(
            actions[1],
            Action::SetStatus {
                status: StatusFilter::Active
            }
        );
        assert_eq!(
            actions[2],
            Action::SetSort {
                sort: SortKey::TextAscending
            }
        );
        Ok(())
    }

    #[test]
    fn test_zero_page_size_fails_fast() {
        let view = ViewArgs {
            page_size: Some(0),
            ..ViewArgs::default()
        };
        let err = override_actions(&view).unwrap_err();
        assert!(err.to_string().contains("Invalid page size"));
    }
}
