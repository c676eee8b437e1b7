//! Example populating from a map instead of the process environment

use std::collections::HashMap;
use yaepl::{Populate, Populator, UnsupportedPolicy};

#[derive(Debug, Default, Populate)]
struct Config {
    #[yaepl = "key:REGION;required"]
    pub region: String,

    // No conversion exists for Vec<String>
    #[yaepl = "key:ZONES"]
    pub zones: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Show which fields are populated: RUST_LOG=yaepl=debug
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let env = HashMap::from([
        ("REGION".to_string(), "eu-west-1".to_string()),
        ("ZONES".to_string(), "a,b,c".to_string()),
    ]);

    let mut config = Config::default();
    if let Err(err) = Populator::with_env(&env).populate(&mut config) {
        println!("Default policy: {err}");
    }

    let mut config = Config {
        zones: vec!["eu-west-1a".to_string()],
        ..Config::default()
    };
    Populator::with_env(&env)
        .unsupported(UnsupportedPolicy::Skip)
        .populate(&mut config)?;
    println!("Skip policy: {config:?}");

    Ok(())
}
