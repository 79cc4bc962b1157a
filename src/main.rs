//=========================================================================
// walkcam Demo
//
// Opens the showcase scene in a window. `RUST_LOG` controls verbosity
// (default: info).
//
//=========================================================================

use log::error;
use walkcam::{launch, ControllerBuilder};

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    if let Err(e) = launch(ControllerBuilder::new(), "canvas-container") {
        error!("{}", e);
        std::process::exit(1);
    }
}
