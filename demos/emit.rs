use golden_nn::{GoldenSpec, GoldenVector};

fn main() {
    let spec = GoldenSpec {
        seed: 7,
        input: 4,
        hidden: 6,
        output: 2,
        epsilon: 1e-9,
    };

    match GoldenVector::generate(spec) {
        Ok(vector) => print!("{}", vector.render()),
        Err(e) => eprintln!("generation failed: {e}"),
    }
}
