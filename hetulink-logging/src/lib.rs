use std::sync::Once;

use hetulink_core::err::Result;
pub use env_logger::{init, init_from_env};
pub use log::*;

mod limiting;
pub use limiting::*;

/// Configures the logger for the host process
pub fn init_logging() -> Result<()> {
    env_logger::try_init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    )?;
    Ok(())
}

static TEST_LOGGING: Once = Once::new();

/// Logging init function for tests, safe to call from every test
pub fn init_for_tests() {
    TEST_LOGGING.call_once(|| {
        let res = env_logger::builder()
            .filter_module("hetulink", LevelFilter::Trace)
            .is_test(true)
            .try_init();
        if let Err(err) = res {
            eprintln!("Failed to init logging: {}", err);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging() {
        let res = init_logging();

        assert!(res.is_ok());
        assert!(init_logging().is_err());
    }
}
