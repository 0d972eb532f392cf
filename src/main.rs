// Command line generator
//
// Usage:
//   jingen                                          (defaults: 250 nodes, 30000 iterations)
//   jingen n iters r0 r1 gamma zStar barrierIters
//
// Writes a DOT graph to stdout; logging goes to stderr (RUST_LOG to raise it).

use std::env;
use std::io::{self, BufWriter, Write};
use std::process;
use std::str::FromStr;

use jin_gen::jg_render::write_dot;
use jin_gen::{JinConfig, JinGen, SeededSource};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

const USAGE: &str = "Usage: jingen n iters r0 r1 gamma zStar barrierIters";

const DEFAULT_NODES: usize = 250;
const DEFAULT_ITERATIONS: usize = 30_000;

struct Invocation {
    n: usize,
    iterations: usize,
    config: JinConfig,
}

fn parse_arg<T: FromStr>(args: &[String], idx: usize, name: &str) -> Result<T, String> {
    args[idx]
        .parse()
        .map_err(|_| format!("invalid {}: '{}'", name, args[idx]))
}

fn parse_args(args: &[String]) -> Result<Invocation, String> {
    match args.len() {
        0 => Ok(Invocation {
            n: DEFAULT_NODES,
            iterations: DEFAULT_ITERATIONS,
            config: JinConfig::default(),
        }),
        7 => Ok(Invocation {
            n: parse_arg(args, 0, "n")?,
            iterations: parse_arg(args, 1, "iters")?,
            config: JinConfig {
                r0: parse_arg(args, 2, "r0")?,
                r1: parse_arg(args, 3, "r1")?,
                gamma: parse_arg(args, 4, "gamma")?,
                z_star: parse_arg(args, 5, "zStar")?,
                barrier_iters: parse_arg(args, 6, "barrierIters")?,
            },
        }),
        count => Err(format!("expected 0 or 7 arguments, got {}", count)),
    }
}

fn main() {
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("logger: {}", e);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let rng = SeededSource::from_entropy();
    info!("seed: {:?}", rng.seed());

    let mut generator = JinGen::new(invocation.config, rng);
    let edges = generator
        .generate(invocation.n, invocation.iterations)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            process::exit(1);
        });

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = write_dot(&mut out, &edges).and_then(|_| out.flush()) {
        eprintln!("failed to write graph: {}", e);
        process::exit(1);
    }
}
