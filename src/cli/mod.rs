pub mod output;
pub mod prompts;
pub mod shell;

pub use shell::{run_shell, ShellError};
