pub type CmdResult<T> = nestch::Result<(T, i32)>;

pub mod rename;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (nestch::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Rename(args) | crate::Commands::Change(args) => dispatch!(args, rename),
    }
}

pub(crate) fn run_text(command: crate::Commands) -> nestch::Result<(String, i32)> {
    match command {
        crate::Commands::Rename(args) | crate::Commands::Change(args) => {
            let (output, exit_code) = rename::run(args)?;
            Ok((output.render_text(), exit_code))
        }
    }
}
