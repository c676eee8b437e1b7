//! Example showing how a missing required variable is reported

use yaepl::{Error, Populate};

#[derive(Debug, Default, Populate)]
struct Config {
    #[yaepl = "key:SERVICE_NAME"]
    pub service_name: String,

    #[yaepl = "key:API_TOKEN;required"]
    pub api_token: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("SERVICE_NAME", "billing");
    std::env::remove_var("API_TOKEN");

    let mut config = Config::default();
    match yaepl::populate(&mut config) {
        Err(err @ Error::MissingRequired { .. }) => {
            println!("Failed as expected: {err}");
            // Fields before the failing one were already assigned
            println!("  Service name: {}", config.service_name);
        }
        other => anyhow::bail!("expected a missing variable error, got {other:?}"),
    }

    std::env::set_var("API_TOKEN", "token-123");
    let config = Config::from_env()?;
    println!("Loaded after setting API_TOKEN: {config:?}");

    Ok(())
}
