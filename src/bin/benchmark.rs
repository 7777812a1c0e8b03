use std::time::Instant;

use clap::{Parser, ValueEnum};
use hdrhistogram::Histogram;
use rand::Rng;
use tracing::info;

use tinyhash::{Dict, DictConfig, HashFunction, Result};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HashArg {
    Additive,
    City,
}

#[derive(Parser, Clone, Debug)]
struct BenchmarkConfig {
    #[arg(short = 'n', long, default_value_t = 100000)]
    pub count: u32,
    #[arg(short, long, default_value_t = 8)]
    pub capacity: usize,
    #[arg(short, long, default_value_t = 0.75)]
    pub load_factor: f64,
    #[arg(long, value_enum, default_value_t = HashArg::City)]
    pub hash: HashArg,
    /// dict config file (toml or json), overrides the flags above
    #[arg(long)]
    pub config: Option<String>,
    #[arg(short, long, default_value_t = 16)]
    pub data_size: u32,
}

fn gen_benchmark_data(count: u32) -> String {
    let mut state: u32 = 1234;
    let mut data = String::with_capacity(count as usize);

    for _ in 0..count {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        let ch = b'0' + ((state >> 16) & 63) as u8;
        data.push(ch as char);
    }
    data
}

fn dict_config(config: &BenchmarkConfig) -> DictConfig {
    if let Some(path) = &config.config {
        return DictConfig::new(Some(path));
    }
    DictConfig {
        initial_capacity: config.capacity,
        load_factor: config.load_factor,
        hash_function: match config.hash {
            HashArg::Additive => HashFunction::Additive,
            HashArg::City => HashFunction::City,
        },
    }
}

fn report(name: &str, count: u32, elapsed_ms: f64, hist: &Histogram<u64>) {
    println!("======{}======", name.to_uppercase());
    println!(" {} operations completed in {:.3} seconds", count, elapsed_ms / 1000f64);
    println!(" Throughput summary: {:.2} operations per second", count as f64 / elapsed_ms * 1000f64);
    println!(" Latency summary (ns):");
    println!("     {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}", "avg", "min", "p50", "p95", "p99", "max");
    println!(
        "     {:>8.1} {:>8} {:>8} {:>8} {:>8} {:>8}",
        hist.mean(),
        hist.min(),
        hist.value_at_quantile(0.5),
        hist.value_at_quantile(0.95),
        hist.value_at_quantile(0.99),
        hist.max()
    );
}

fn bench<F>(name: &str, keys: &[String], mut op: F) -> Result<()>
where
    F: FnMut(&str) -> std::result::Result<(), tinyhash::HashError>,
{
    let mut hist = Histogram::<u64>::new_with_bounds(1, 3_600_000_000, 3)?;
    let st = Instant::now();
    for key in keys {
        let t = Instant::now();
        op(key)?;
        hist.saturating_record(t.elapsed().as_nanos() as u64);
    }
    let elapsed = st.elapsed().as_secs_f64() * 1000f64;
    report(name, keys.len() as u32, elapsed, &hist);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::try_init()?;
    let config = BenchmarkConfig::parse();
    let dict_config = dict_config(&config);
    info!(?dict_config, count = config.count, "dict benchmark start");

    let mut rng = rand::rng();
    let keys: Vec<String> = (0..config.count)
        .map(|_| format!("key:{}", rng.random::<u32>()))
        .collect();
    let data = gen_benchmark_data(config.data_size);

    let mut dict = Dict::from_config(&dict_config)?;
    bench("set", &keys, |key| dict.set(key, data.clone()))?;
    info!(used = dict.len(), capacity = dict.capacity(), "set done");
    bench("get", &keys, |key| dict.get(key).map(|_| ()))?;
    println!("{}", dict.stats());
    bench("remove", &keys, |key| dict.remove(key).map(|_| ()))?;
    info!(used = dict.len(), capacity = dict.capacity(), "dict benchmark done");

    Ok(())
}
