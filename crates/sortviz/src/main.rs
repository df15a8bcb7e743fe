#![forbid(unsafe_code)]

//! sortviz binary entry point.

use sortviz::app::AppModel;
use sortviz::{cli, logging};
use sortviz_runtime::{Program, ProgramConfig};

fn main() {
    let opts = cli::Opts::parse();
    logging::init();

    let model = AppModel::new(&opts);
    let config = ProgramConfig {
        frame_rate: opts.fps,
        ..ProgramConfig::default()
    };

    match Program::with_config(model, config) {
        Ok(mut program) => {
            if let Err(e) = program.run() {
                eprintln!("Runtime error: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to initialize terminal: {e}");
            std::process::exit(1);
        }
    }
}
