//! Game Sandbox entry point
//!
//! Loads configuration, installs the dual-sink logger, runs the shell,
//! and maps the outcome onto the process exit code: 0 for a clean
//! init+run, non-zero for any init failure.

use sandbox_engine::config::GameConfig;
use sandbox_engine::foundation::logging;
use sandbox_engine::{Game, GameError};
use std::process::ExitCode;

const CONFIG_PATH: &str = "gamesandbox.toml";

fn main() -> ExitCode {
    let config = match GameConfig::load_or_default(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            // No logger yet; stderr is all we have.
            eprintln!("ERROR: failed to load {}: {}", CONFIG_PATH, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.log) {
        eprintln!("ERROR: failed to install logger: {}", e);
        return ExitCode::FAILURE;
    }

    let code = ExitCode::from(exit_status(run(&config)));

    log::info!("logging off");
    log::logger().flush();
    code
}

fn run(config: &GameConfig) -> Result<(), GameError> {
    let mut game = Game::new(config)?;
    game.run();
    Ok(())
}

/// Process exit status for a shell outcome: 0 for a clean init+run,
/// 1 when anything failed along the way.
fn exit_status(result: Result<(), GameError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbox_engine::window::WindowError;

    #[test]
    fn clean_run_exits_zero() {
        assert_eq!(exit_status(Ok(())), 0);
    }

    #[test]
    fn failed_init_exits_nonzero() {
        let result = Err(GameError::Window(WindowError::CreationFailed));
        assert_ne!(exit_status(result), 0);
    }
}
