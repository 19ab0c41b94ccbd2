pub mod cli;

use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "digit-mirror")]
#[command(about = "Reads a four-digit number from stdin and tells whether it is a palindrome")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        assert!(!CliConfig::parse_from(["digit-mirror"]).verbose);
        assert!(CliConfig::parse_from(["digit-mirror", "--verbose"]).verbose);
        assert!(CliConfig::parse_from(["digit-mirror", "-v"]).verbose);
        assert!(CliConfig::try_parse_from(["digit-mirror", "1221"]).is_err());
    }
}
