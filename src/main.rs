//! rand_assort - streams raw generator output for statistical testing.
//!
//! Output is a sequence of 64-bit Little-Endian words on stdout,
//! suitable for piping into tools such as PractRand's RNG_test stdin64.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use rand_assort::dump::write_stream;
use rand_assort::Algorithm;

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|_| {
        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        format!("unknown algorithm '{}', expected one of: {}", s, names.join(", "))
    })
}

#[derive(Parser)]
#[command(name = "rand_assort")]
#[command(about = "Streams raw output of non-cryptographic RNGs to stdout")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Write Little-Endian 64-bit outputs to stdout
    Dump {
        /// Generator to run (see `list`)
        #[arg(value_parser = parse_algorithm)]
        algorithm: Algorithm,

        /// Seed, any 64-bit signed integer
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        seed: i64,

        /// Start from the raw all-zero state instead of seeding
        /// (lcg128, splitmix64, pcg32 and pcg64 only)
        #[arg(long, conflicts_with = "seed")]
        zero_state: bool,

        /// Jump ahead by 2^128 steps this many times (xoshiro256ss only)
        #[arg(long, default_value_t = 0)]
        jumps: u32,

        /// Jump ahead by 2^192 steps this many times (xoshiro256ss only)
        #[arg(long, default_value_t = 0)]
        long_jumps: u32,

        /// Discard this many outputs before writing
        #[arg(long, default_value_t = 0)]
        skip: u64,

        /// Number of 64-bit words to write (default: until stdout closes)
        #[arg(short = 'n', long)]
        count: Option<u64>,
    },

    /// List available generators
    List,
}

fn init_logging(verbose: bool) {
    // Logs go to stderr, stdout carries the raw stream.
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Dump { algorithm, seed, zero_state, jumps, long_jumps, skip, count } => {
            let start = if zero_state { None } else { Some(seed) };
            dump(algorithm, start, jumps, long_jumps, skip, count)
        }
        Command::List => {
            for algorithm in Algorithm::ALL {
                println!("{:<14} {}", algorithm.name(), algorithm.description());
            }
            Ok(())
        }
    }
}

/// Streams `algorithm` to stdout, seeded with `seed`, or from its raw zero state if `seed` is `None`.
fn dump(algorithm: Algorithm, seed: Option<i64>, jumps: u32, long_jumps: u32, skip: u64, count: Option<u64>) -> Result<()> {
    let mut source = match seed {
        Some(seed) => {
            info!(algorithm = %algorithm, seed, "Seeded generator");
            algorithm.seeded(seed)
        }
        None => {
            let Some(source) = algorithm.zero_state() else {
                bail!("{} has no usable all-zero state", algorithm);
            };
            if algorithm == Algorithm::Lcg128 {
                warn!("The all-zero lcg128 state is a fixed point, output is all zeros");
            }
            info!(algorithm = %algorithm, "Starting from zero state");
            source
        }
    };

    if jumps > 0 || long_jumps > 0 {
        let Some(xoshiro) = source.as_xoshiro256ss_mut() else {
            bail!("{} does not support jump-ahead, only {} does", algorithm, Algorithm::Xoshiro256ss);
        };
        for _ in 0 .. long_jumps {
            xoshiro.long_jump();
        }
        for _ in 0 .. jumps {
            xoshiro.jump();
        }
        debug!(jumps, long_jumps, "Jumped ahead");
    }

    if skip > 0 {
        for _ in 0 .. skip {
            source.next_u64();
        }
        debug!(skip, "Skipped outputs");
    }

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();
    let words = write_stream(&mut source, &mut sink, count)
        .with_context(|| format!("Failed to write {} output to stdout", algorithm))?;

    match count {
        Some(n) if words < n => debug!(words, requested = n, "Reader closed the stream early"),
        None => debug!(words, "Reader closed the stream"),
        _ => {}
    }
    info!(words, bytes = words * 8, "Finished");
    Ok(())
}
