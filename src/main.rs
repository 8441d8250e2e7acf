use bench_report::loader::load;
use bench_report::report::{row, short_row, BLANK_ROW, LARGE_HEADER, LARGE_RULE, SMALL_HEADER, SMALL_RULE};
use bench_report::{Result, BENCH_FILE, BENCH_PURE_FILE};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Diagnostics go to stderr so the report on stdout stays clean;
    // silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bench = load(BENCH_FILE)?;
    let bench_pure = load(BENCH_PURE_FILE)?;
    info!(
        bench = bench.len(),
        bench_pure = bench_pure.len(),
        "benchmark tables loaded"
    );

    println!("### Small");
    println!();
    println!("{}", SMALL_HEADER);
    println!("{}", SMALL_RULE);
    println!("{}", short_row(&bench, "64 b", "0001_block")?);
    println!("{}", short_row(&bench, "256 b", "0004_block")?);
    println!("{}", short_row(&bench, "512 b", "0008_block")?);
    println!("{}", short_row(&bench, "768 b", "0012_block")?);
    println!();
    println!("### Large");
    println!();
    println!("{}", LARGE_HEADER);
    println!("{}", LARGE_RULE);
    println!("{}", row(&bench, "1 kib", "0001_kib")?);
    println!("{}", row(&bench, "2 kib", "0002_kib")?);
    println!("{}", row(&bench, "4 kib", "0004_kib")?);
    println!("{}", row(&bench, "8 kib", "0008_kib")?);
    println!("{}", row(&bench, "16 kib", "0016_kib")?);
    println!("{}", row(&bench, "32 kib", "0032_kib")?);
    println!("{}", row(&bench, "64 kib", "0064_kib")?);
    println!("{}", row(&bench, "128 kib", "0128_kib")?);
    println!("{}", row(&bench, "256 kib", "0256_kib")?);
    println!("{}", row(&bench, "512 kib", "0512_kib")?);
    println!("{}", row(&bench, "1024 kib", "1024_kib")?);
    println!();
    println!("### No ASM");
    println!();
    println!("{}", LARGE_HEADER);
    println!("{}", LARGE_RULE);
    println!("{}", row(&bench_pure, "64 b", "0001_block")?);
    println!("{}", row(&bench_pure, "256 b", "0004_block")?);
    println!("{}", row(&bench_pure, "512 b", "0008_block")?);
    println!("{}", row(&bench_pure, "768 b", "0012_block")?);
    println!("{}", row(&bench_pure, "1 kib", "0016_block")?);
    println!("{}", BLANK_ROW);
    println!("{}", row(&bench_pure, "1 mib", "1024_kib")?);

    Ok(())
}
