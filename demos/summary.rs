//! Print the intercepts, critical points and inflection points of each
//! polynomial given on the command line.
//!
//! ```sh
//! cargo run --example summary -- "x^3 + 6x^2 + 11x + 6" "-x^2 + 2x + 1"
//! ```
//!
//! Pass `-v` for debug logging or `-vv` for trace logging.

use anyhow::Context;
use rational_poly::Polynomial;

fn main() -> anyhow::Result<()> {
    let mut level = log::Level::Warn;
    let mut inputs = vec![];
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" => level = log::Level::Debug,
            "-vv" => level = log::Level::Trace,
            _ => inputs.push(arg),
        }
    }
    simple_logger::init_with_level(level)?;

    if inputs.is_empty() {
        inputs.push("x^3 + 6x^2 + 11x + 6".to_owned());
    }

    for input in inputs {
        let poly: Polynomial = input
            .parse()
            .with_context(|| format!("could not read polynomial `{input}`"))?;
        println!("p(x) = {poly}");
        println!("p'(x) = {}", poly.derivative());
        println!("{}", poly.summary());
        println!();
    }
    Ok(())
}
