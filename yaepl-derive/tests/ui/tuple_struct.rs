use yaepl::Populate;

#[derive(Populate)]
struct Config(pub String);

fn main() {}
