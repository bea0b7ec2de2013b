use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "woof")]
#[command(about = "Fetch a random dog and render it into an HTML page")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = "./woof.html")]
    pub output_path: String,

    #[arg(long, default_value = "1", help = "Triggers fired at once, without waiting")]
    pub clicks: usize,

    #[arg(long, help = "Fire one trigger per line read from stdin")]
    pub interactive: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn clicks(&self) -> usize {
        self.clicks
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_path("output_path", &self.output_path)?;
        if !self.interactive {
            validate_positive_number("clicks", self.clicks, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["woof"]);
        assert_eq!(config.endpoint(), "https://random.dog/woof.json");
        assert_eq!(config.output_path(), "./woof.html");
        assert_eq!(config.clicks(), 1);
        assert!(!config.interactive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = CliConfig::parse_from(["woof", "--endpoint", "ftp://random.dog"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["woof", "--clicks", "0"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["woof", "--clicks", "0", "--interactive"]);
        assert!(config.validate().is_ok());
    }
}
