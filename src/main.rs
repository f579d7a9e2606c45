// SPDX-License-Identifier: MPL-2.0
use glimpse::app::{self, Flags};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "usage: glimpse [--lang LANG] FILE";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let lang = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(err) => {
            eprintln!("glimpse: {err}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let Some(file_path) = args.finish().into_iter().next().map(PathBuf::from) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match app::run(Flags {
        lang,
        file_path: Some(file_path),
    }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
