use clap::Parser;
use rotation::{Method, print_sequence, rotate_left};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Rotate a sequence of integers left and print the result.
#[derive(Debug, Parser)]
#[clap(version, allow_negative_numbers = true)]
struct Args {
    /// Number of positions to rotate left by.
    #[clap(short, long, env = "ROTATE_OFFSET", default_value_t = 2)]
    offset: usize,

    /// Rotation method, or `all` to run every method.
    #[clap(short, long, env = "ROTATE_METHOD", default_value = "all")]
    method: MethodChoice,

    /// Values to rotate.
    #[clap(default_values_t = [1, 2, 3, 4, 5, 6, 7])]
    values: Vec<i64>,
}

#[derive(Clone, Copy, Debug)]
enum MethodChoice {
    All,
    One(Method),
}

impl std::str::FromStr for MethodChoice {
    type Err = rotation::ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(MethodChoice::All);
        }
        return s.parse().map(MethodChoice::One);
    }
}

impl MethodChoice {
    fn methods(self) -> Vec<Method> {
        return match self {
            MethodChoice::All => Method::ALL.to_vec(),
            MethodChoice::One(method) => vec![method],
        };
    }
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");

    for method in args.method.methods() {
        let mut seq = args.values.clone();
        rotate_left(&mut seq, args.offset, method)?;

        println!("method: {method}");
        print_sequence(&seq)?;
    }

    return Ok(());
}
