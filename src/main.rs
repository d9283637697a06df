use anyhow::Result;
use clap::Parser;
use spirator::SpiralTraversal;
use tracing_subscriber::EnvFilter;

/// Prints a sample matrix in spiral order, comma separated.
#[derive(Parser, Debug)]
#[command(about = "Traverse a sample matrix in spiral order")]
struct Args {
    /// Number of rows in the sample matrix
    #[arg(long, default_value_t = 4)]
    rows: usize,

    /// Number of columns in the sample matrix
    #[arg(long, default_value_t = 4)]
    cols: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Fill the sample matrix row by row with 1..=rows*cols
    let matrix: Vec<Vec<i64>> = (0..args.rows)
        .map(|row| {
            (1..=args.cols)
                .map(|col| (row * args.cols + col) as i64)
                .collect()
        })
        .collect();

    let mut traversal = SpiralTraversal::try_new(matrix.as_slice())?;
    let elements = traversal.collect_remaining();

    let rendered: Vec<String> = elements.iter().map(|element| element.to_string()).collect();
    println!("{}", rendered.join(","));

    Ok(())
}
