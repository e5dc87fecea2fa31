//! Example: read CSV matrix rows from stdin and write a gonum blob.
//!
//! Usage:
//!
//! ```bash
//! printf '1, 2\n3, 4\n' | cargo run -p matrix-protocol --example csv_to_blob -- out.bin
//! ```

use std::env;
use std::error::Error;
use std::io::{self, Read};

use matrix_protocol::csv_codec::parse_matrix_csv;
use matrix_protocol::{load_matrix, save_matrix};

fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args().nth(1).unwrap_or_else(|| "matrix.bin".to_string());

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    let m = parse_matrix_csv(&text)?;
    save_matrix(&path, m.as_slice(), m.rows(), m.cols())?;
    println!("Wrote {} matrix to {}", m.shape(), path);

    // Read it back to show the header survives.
    let back = load_matrix(&path)?;
    println!("Read back {} matrix, {} values", back.shape(), back.len());

    Ok(())
}
