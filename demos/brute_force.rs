//! Replays the cookie a server would have set for every candidate key.
//!
//! Reads candidate signing keys from `keys.txt` (one per line) and writes
//! one `Set-Cookie` line per key to `output.txt`, ready to be compared
//! against a captured cookie.

use std::fs::File;
use std::io::{BufReader, BufWriter};

use cookie_seal::{BatchEncoder, CookieConfig, SessionValues};
use time::Duration;

fn main() -> std::io::Result<()> {
    let mut values = SessionValues::new();
    values.insert("name", "admin");

    let config = CookieConfig::default()
        .with_secure(false)
        .with_max_age(Duration::days(30));
    let batch = BatchEncoder::new("session-name", values).with_config(config);

    let keys = BufReader::new(File::open("keys.txt")?);
    let out = BufWriter::new(File::create("output.txt")?);

    let processed = batch.run(keys, out)?;
    println!("wrote {processed} cookies to output.txt");
    Ok(())
}
