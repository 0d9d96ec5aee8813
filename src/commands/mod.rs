pub type CmdResult<T> = ruplace::Result<(T, i32)>;

pub mod replace;

pub(crate) fn run_diff(args: &replace::ReplaceArgs) -> ruplace::Result<(String, i32)> {
    replace::run_diff(args)
}

pub(crate) fn run_json(args: &replace::ReplaceArgs) -> (ruplace::Result<serde_json::Value>, i32) {
    crate::tty::status("ruplace is scanning...");
    crate::output::map_cmd_result_to_json(replace::run(args))
}
