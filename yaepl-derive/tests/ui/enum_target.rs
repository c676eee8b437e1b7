use yaepl::Populate;

#[derive(Populate)]
enum Mode {
    Fast,
    Slow,
}

fn main() {}
