use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use bucket_table::Table;
use clap::Parser;
use crossbeam_channel::{bounded, Receiver, Sender};
use rand::prelude::*;
use tracing_subscriber::EnvFilter;

/// Sweeps shard and thread counts over a random get/put workload.
#[derive(Parser, Debug)]
#[command(name = "table_perf")]
#[command(about = "Throughput sweep for the bucket table")]
struct Cli {
    /// Shard counts to test
    #[arg(
        short = 'b',
        long,
        value_delimiter = ',',
        default_value = "1,2,4,8,16,32,64,128,256,512,1024"
    )]
    buckets: Vec<usize>,

    /// Worker thread counts to test
    #[arg(short = 't', long, value_delimiter = ',', default_value = "1,2,4,8,16")]
    threads: Vec<usize>,

    /// Entries inserted before the timed phase. Lookups scan linearly, so
    /// large values with few buckets get slow quickly.
    #[arg(long, default_value = "100000")]
    initial_size: usize,

    /// Operations each worker performs
    #[arg(long, default_value = "10000")]
    ops: usize,
}

struct Job {
    ops: usize,
    done: Sender<()>,
}

fn worker(table: Arc<Table<i32, i32>>, jobs: Receiver<Job>) {
    let mut rng = thread_rng();
    for job in jobs.iter() {
        for _ in 0..job.ops {
            let key: i32 = rng.gen();
            if rng.gen_bool(0.5) {
                let _ = table.get(&key);
            } else {
                table.put(key, rng.gen());
            }
        }
        if job.done.send(()).is_err() {
            break;
        }
    }
}

fn run(buckets: usize, threads: usize, cli: &Cli) -> Result<Duration> {
    let table: Arc<Table<i32, i32>> = Arc::new(Table::try_with_capacity(buckets)?);

    let mut rng = thread_rng();
    for _ in 0..cli.initial_size {
        table.put(rng.gen(), rng.gen());
    }
    tracing::debug!(buckets, threads, len = table.len(), "table populated");

    let (job_tx, job_rx) = bounded::<Job>(threads);
    let (done_tx, done_rx) = bounded::<()>(threads);

    let handles: Vec<_> = (0..threads)
        .map(|id| {
            let table = Arc::clone(&table);
            let jobs = job_rx.clone();
            thread::Builder::new()
                .name(format!("perf-worker-{}", id))
                .spawn(move || worker(table, jobs))
                .context("failed to spawn worker")
        })
        .collect::<Result<_>>()?;
    drop(job_rx);

    let start = Instant::now();
    for _ in 0..threads {
        job_tx.send(Job {
            ops: cli.ops,
            done: done_tx.clone(),
        })?;
    }
    for _ in 0..threads {
        done_rx.recv()?;
    }
    let elapsed = start.elapsed();

    drop(job_tx);
    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow!("worker thread panicked"))?;
    }
    Ok(elapsed)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!(
        initial_size = cli.initial_size,
        ops = cli.ops,
        "starting sweep"
    );

    println!("{:<12} {:<12} {:<15}", "Buckets", "Threads", "Time (ms)");
    println!("-----------------------------------------");

    for &buckets in &cli.buckets {
        for &threads in &cli.threads {
            match run(buckets, threads, &cli) {
                Ok(elapsed) => {
                    tracing::info!(buckets, threads, ?elapsed, "run finished");
                    println!("{:<12} {:<12} {:<15}", buckets, threads, elapsed.as_millis());
                }
                Err(e) => tracing::error!(buckets, threads, "run failed: {:#}", e),
            }
        }
    }
    Ok(())
}
