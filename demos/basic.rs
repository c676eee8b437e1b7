//! Basic usage example

use yaepl::Populate;

#[derive(Debug, Default, Populate)]
struct Config {
    // Loaded from DATABASE_URL, must be set
    #[yaepl = "key:DATABASE_URL;required"]
    pub database_url: String,

    // Loaded from SERVER_ADDR, empty if unset
    #[yaepl = "key:SERVER_ADDR"]
    pub server_addr: String,

    // Not annotated: keeps its default
    pub label: String,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    let mut config = Config {
        label: "demo".to_string(),
        ..Config::default()
    };
    yaepl::populate(&mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Label: {}", config.label);

    Ok(())
}
