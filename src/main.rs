use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sample_combine::{load_sources, Combiner, Config};
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "combine".to_string())
}

fn init_logger(config: &Config) -> Result<()> {
    let mut logger_builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    // --log-level wins over RUST_LOG only when given
    if let Some(level) = &config.log_level {
        logger_builder.filter_level(level.parse().unwrap_or(log::LevelFilter::Info));
    }

    // stdout carries combinations, so records go to stderr (and the log file, if any)
    if let Some(log_file_path) = &config.log_file {
        use std::fs::OpenOptions;

        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(log_file_path)
            .map_err(|e| anyhow::anyhow!("Failed to open log file {:?}: {}", log_file_path, e))?;

        struct DualWriter {
            file: std::fs::File,
        }

        impl Write for DualWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                io::stderr().write_all(buf)?;
                self.file.write_all(buf)?;
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                io::stderr().flush()?;
                self.file.flush()
            }
        }

        logger_builder.target(env_logger::Target::Pipe(Box::new(DualWriter { file })));
    } else {
        logger_builder.target(env_logger::Target::Stderr);
    }

    logger_builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();

    if config.files.is_empty() {
        eprintln!("Usage: {} FILES...", program_name());
        std::process::exit(1);
    }

    init_logger(&config)?;

    info!("Starting combine");
    info!("Configuration: {:?}", config);

    let policy = config.sampling_policy()?;
    let sources = load_sources(&config.files).context("Failed to load input files")?;
    let combiner = Combiner::new(sources, policy)?.with_separator(config.separator.clone());

    if policy.bounds.is_none() {
        match combiner.full_product_len() {
            Some(total) => info!("Emitting full product of {} combinations", total),
            None => info!("Emitting full product (size overflows u128)"),
        }
    }

    let mut rng = match config.seed {
        Some(seed) => {
            debug!("Seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match combiner.write_to(&mut rng, &mut out) {
        Ok(_) => Ok(()),
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed early, stopping");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
