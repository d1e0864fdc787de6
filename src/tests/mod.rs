pub mod matcher_tests;
pub mod synthesizer_tests;

#[cfg(test)]
pub(crate) mod support {
    use dotenv::dotenv;
    use log::{debug, info, warn};

    /// Initialize logging and environment for a test
    pub fn setup() {
        match env_logger::try_init() {
            Ok(_) => {
                info!("Logger initialized");
            }
            Err(_) => {
                // Logger already initialized, which is fine
            }
        }

        match dotenv() {
            Ok(_) => {
                debug!("Loaded environment variables from .env file");
            }
            Err(e) => {
                warn!("Could not load .env file: {}", e);
            }
        }
    }
}
