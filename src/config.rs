use clap::Parser;

/// Serve a single JSON greeting, under AWS Lambda or locally
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Serve over plain HTTP on this address instead of running under the
    /// Lambda runtime.
    #[clap(long, env)]
    pub address: Option<String>,
}

impl Config {
    /// Are we running outside of Lambda?
    pub fn is_local(&self) -> bool {
        self.address.is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_address_flag() {
        let config =
            Config::try_parse_from(["hello-serverless", "--address", "127.0.0.1:3000"]).unwrap();

        assert_eq!(config.address.as_deref(), Some("127.0.0.1:3000"));
        assert!(config.is_local());
    }
}
