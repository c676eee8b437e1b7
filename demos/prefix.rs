//! Example demonstrating the prefix attribute

use yaepl::Populate;

#[derive(Debug, Default, Populate)]
#[yaepl(prefix = "MYAPP_")]
struct Config {
    // Environment variables will be prefixed: MYAPP_DATABASE_URL, MYAPP_PORT
    #[yaepl = "key:DATABASE_URL;required"]
    pub database_url: String,

    #[yaepl = "key:PORT"]
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_PORT", "3000");

    let config = Config::from_env()?;

    println!("Configuration with prefix 'MYAPP_':");
    println!("  Database URL: {}", config.database_url);
    println!("  Port: {}", config.port);

    Ok(())
}
