//! Command-line front end: generates one golden vector and writes the
//! target-language statements to stdout or a file. Any failure aborts before
//! a single byte is emitted.

use std::io::Write;
use std::process::ExitCode;

use golden_nn::{GoldenSpec, GoldenVector};

const USAGE: &str = "\
golden-nn: deterministic golden test-vector generator for matrix/network implementations.

Usage: golden-nn [options]

Options:
  --seed N            generator seed (default 7)
  --shape IN,HID,OUT  neuron-layer widths (default 30,100,10)
  --epsilon F         assertion tolerance (default 1e-9)
  --spec FILE.json    load a GoldenSpec from JSON (later flags still override)
  --out FILE          write to FILE instead of stdout
  --help              show this help
";

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{flag} expects a value"))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(GoldenSpec, Option<String>), String> {
    let mut spec = GoldenSpec::default();
    let mut out = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                spec.seed = next_value(&mut args, "--seed")?
                    .parse()
                    .map_err(|e| format!("--seed: {e}"))?;
            }
            "--shape" => {
                let value = next_value(&mut args, "--shape")?;
                let widths: Vec<&str> = value.split(',').collect();
                if widths.len() != 3 {
                    return Err("--shape expects three widths: IN,HID,OUT".to_string());
                }
                spec.input = widths[0].trim().parse().map_err(|e| format!("--shape: {e}"))?;
                spec.hidden = widths[1].trim().parse().map_err(|e| format!("--shape: {e}"))?;
                spec.output = widths[2].trim().parse().map_err(|e| format!("--shape: {e}"))?;
            }
            "--epsilon" => {
                spec.epsilon = next_value(&mut args, "--epsilon")?
                    .parse()
                    .map_err(|e| format!("--epsilon: {e}"))?;
            }
            "--spec" => {
                let path = next_value(&mut args, "--spec")?;
                spec = GoldenSpec::load_json(&path).map_err(|e| format!("--spec {path}: {e}"))?;
            }
            "--out" => out = Some(next_value(&mut args, "--out")?),
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok((spec, out))
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let (spec, out_path) = match parse_args(args.into_iter()) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            eprint!("\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let vector = match GoldenVector::generate(spec) {
        Ok(vector) => vector,
        Err(e) => {
            eprintln!("generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let text = vector.render();
    let written = match out_path {
        Some(path) => std::fs::write(&path, text).map_err(|e| format!("writing {path}: {e}")),
        None => std::io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|e| format!("writing stdout: {e}")),
    };
    if let Err(message) = written {
        eprintln!("{message}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
