//! Example demonstrating type-directed conversion

use yaepl::Populate;

#[derive(Debug, Default, Populate)]
struct Tuning {
    #[yaepl = "key:TUNING_ENABLED"]
    pub enabled: bool,

    #[yaepl = "key:TUNING_WORKERS"]
    pub workers: u32,

    #[yaepl = "key:TUNING_OFFSET"]
    pub offset: i64,

    #[yaepl = "key:TUNING_RATIO"]
    pub ratio: f32,

    #[yaepl = "key:TUNING_SCALE"]
    pub scale: f64,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("TUNING_ENABLED", "t");
    std::env::set_var("TUNING_WORKERS", "8");
    std::env::set_var("TUNING_OFFSET", "-10");
    std::env::set_var("TUNING_RATIO", "-10.33");
    std::env::set_var("TUNING_SCALE", "3.14e+50");

    let tuning = Tuning::from_env()?;
    println!("Tuning: {tuning:#?}");

    // Out of range for u32
    std::env::set_var("TUNING_WORKERS", "5000000000");
    if let Err(err) = Tuning::from_env() {
        println!("Rejected: {err}");
    }

    Ok(())
}
