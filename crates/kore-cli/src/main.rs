use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use half::f16;
use kore_hypercomplex::{Axis, Complex, Magnitude, Quaternion, Re, Sign, Vector, CAYLEY};

const BANNER: &str = r#"
 _  _____  ____  _____
| |/ / _ \|  _ \| ____|
| ' / | | | |_) |  _|
| . \ |_| |  _ <| |___
|_|\_\___/|_| \_\_____|"#;

#[derive(Parser)]
#[command(
    name = "kore",
    about = "Kore hypercomplex calculator",
    long_about = "Quaternion arithmetic on the command line.\n\nOperands are written the way values print: `{w, i, j, k}`, `{x, y, z}`\nfor a vector, `{re, im}` for a complex number, or a bare number.",
    version,
)]
struct Cli {
    /// Magnitude type used for every operand
    #[arg(long, global = true, value_enum, default_value_t = Precision::F64)]
    precision: Precision,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Precision {
    F16,
    F32,
    F64,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the axis product table
    Table,
    /// Multiply two operands (order matters)
    Mul {
        lhs: String,
        rhs: String,
    },
    /// Add two operands
    Add {
        lhs: String,
        rhs: String,
    },
    /// Conjugate an operand
    Conj {
        value: String,
    },
    /// Norm of an operand
    Norm {
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let out = match cli.precision {
        Precision::F16 => run::<f16>(&cli.command)?,
        Precision::F32 => run::<f32>(&cli.command)?,
        Precision::F64 => run::<f64>(&cli.command)?,
    };
    println!("{}", out);
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run<T: Magnitude>(command: &Commands) -> anyhow::Result<String> {
    tracing::info!("evaluating at {} precision", T::NAME);
    let out = match command {
        Commands::Table => cmd_table(),
        Commands::Mul { lhs, rhs } => (operand::<T>(lhs)? * operand::<T>(rhs)?).to_string(),
        Commands::Add { lhs, rhs } => (operand::<T>(lhs)? + operand::<T>(rhs)?).to_string(),
        Commands::Conj { value } => operand::<T>(value)?.conjugate().to_string(),
        Commands::Norm { value } => operand::<T>(value)?.norm().to_string(),
    };
    Ok(out)
}

/// Read any shape and lift it into a quaternion.
fn operand<T: Magnitude>(text: &str) -> anyhow::Result<Quaternion<T>> {
    let parsed = text
        .parse::<Quaternion<T>>()
        .or_else(|_| text.parse::<Vector<T>>().map(Quaternion::from))
        .or_else(|_| text.parse::<Complex<T>>().map(Quaternion::from))
        .or_else(|_| text.parse::<Re<T>>().map(|re| Quaternion::<T>::zero() + re));
    let q = parsed.with_context(|| format!("invalid operand '{}'", text))?;
    tracing::debug!("operand '{}' -> {}", text, q);
    Ok(q)
}

fn cmd_table() -> String {
    let mut out = format!("{}\n  v{}  axis products (row * column)\n\n", BANNER, env!("CARGO_PKG_VERSION"));
    out.push_str("     ");
    for b in Axis::ALL {
        out.push_str(&format!("{:>4}", b));
    }
    out.push('\n');
    for a in Axis::ALL {
        out.push_str(&format!("{:>4} ", a));
        for b in Axis::ALL {
            let entry = CAYLEY[a.index()][b.index()];
            let sign = match entry.sign {
                Sign::Pos => "",
                Sign::Neg => "-",
            };
            out.push_str(&format!("{:>4}", format!("{}{}", sign, entry.axis)));
        }
        out.push('\n');
    }
    out
}
