//! Binary entry point for `template-rename`.

use std::process;
use template_rename::ReplaceError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match template_rename::run() {
        Ok(()) | Err(ReplaceError::Cancelled) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
