use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, ScriptCheckViewModel};
use crate::script::ActionScript;
use crate::types::OutputFormat;

pub fn handle(config: &Config, script_path: &Path, format: OutputFormat) -> Result<()> {
    let script = ActionScript::load(script_path)?;
    let actions = script.actions.len();
    let state = script.replay(config.view_params())?;

    let model = ScriptCheckViewModel {
        actions,
        todos: state.todos.len(),
        completed: state.todos.iter().filter(|todo| todo.completed).count(),
    };

    ConsoleRenderer::new(format).render(CommandResultViewModel::new(model))
}
