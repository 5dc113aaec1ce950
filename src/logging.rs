//! Debug logging bootstrap

/// Set to any value to turn on debug logs (written to stderr)
pub const DEBUG_ENV_VAR: &str = "TODO_CLI_DEBUG";

/// Install the tracing subscriber when `TODO_CLI_DEBUG` is set.
///
/// Logs go to stderr so the prompt and command output on stdout stay clean.
pub fn init() {
    if std::env::var(DEBUG_ENV_VAR).is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo_cli=debug")
            .with_writer(std::io::stderr)
            .init();
    }
}
