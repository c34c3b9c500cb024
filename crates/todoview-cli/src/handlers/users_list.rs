use anyhow::Result;
use todoview_engine::UserList;
use tracing::debug;

use crate::args::UserSourceArgs;
use crate::config::Config;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, UserListViewModel};
use crate::types::OutputFormat;

pub fn handle(
    config: &Config,
    source: &UserSourceArgs,
    select: Option<u32>,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let mut list = load_users(config, source);
    if let Some(id) = select {
        list = select_user(&list, id)?;
    }

    let rows = list.rows();
    let total = rows.len();
    let users = rows.into_iter().take(limit).collect();

    let model = UserListViewModel {
        users,
        total,
        selected: list.selected(),
    };
    ConsoleRenderer::new(format).render(CommandResultViewModel::new(model))
}

pub(crate) fn load_users(config: &Config, source: &UserSourceArgs) -> UserList {
    let count = source.count.unwrap_or(config.users.count);
    let seed = source.seed.unwrap_or(config.users.seed);
    debug!(count, seed, "generating users");
    UserList::generated(count, seed)
}

pub(crate) fn select_user(list: &UserList, id: u32) -> Result<UserList> {
    list.select(id).ok_or_else(|| {
        anyhow::anyhow!("User not found: {} (ids range 1..={})", id, list.users().len())
    })
}
