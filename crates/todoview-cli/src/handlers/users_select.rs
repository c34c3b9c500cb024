use anyhow::Result;
use todoview_engine::changed_rows;

use super::users_list::{load_users, select_user};
use crate::args::UserSourceArgs;
use crate::config::Config;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, RowChangesViewModel};
use crate::types::OutputFormat;

pub fn handle(
    config: &Config,
    source: &UserSourceArgs,
    from: Option<u32>,
    to: u32,
    format: OutputFormat,
) -> Result<()> {
    let list = load_users(config, source);

    let before = match from {
        Some(id) => select_user(&list, id)?,
        None => list,
    };
    let after = select_user(&before, to)?;

    let model = RowChangesViewModel {
        from,
        to,
        changed: changed_rows(&before.rows(), &after.rows()),
    };
    ConsoleRenderer::new(format).render(CommandResultViewModel::new(model))
}
