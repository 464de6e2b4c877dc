use golden_nn::{GoldenSpec, GoldenVector, Matrix, NnError};

/// Recomputes the forward pass from the emitted parameters with plain nested
/// loops, the way an independent implementation would, and checks it lands
/// within the emitted tolerance.
fn naive_forward(vector: &GoldenVector) -> Vec<f64> {
    let mut current: Vec<f64> = vector.input.data[0].clone();
    for layer in vector.network.layers() {
        let weights = &layer.weights;
        let biases = &layer.biases;
        let mut next = vec![0.0; weights.cols];
        for (e, out) in next.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (i, x) in current.iter().enumerate() {
                sum += x * weights.data[i][e];
            }
            sum += biases.data[0][e];
            *out = sum.max(0.0);
        }
        current = next;
    }
    current
}

#[test]
fn canonical_run_reproduces_itself() {
    // seed 7, shape 30/100/10: two independent generations must agree to the
    // last bit in parameters, input, output, and rendered text.
    let a = GoldenVector::generate(GoldenSpec::default()).unwrap();
    let b = GoldenVector::generate(GoldenSpec::default()).unwrap();

    assert_eq!(a.network, b.network);
    assert_eq!(a.input, b.input);
    for (x, y) in a.output.data[0].iter().zip(&b.output.data[0]) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
    assert_eq!(a.render(), b.render());
}

#[test]
fn canonical_run_has_the_declared_shape() {
    let vector = GoldenVector::generate(GoldenSpec::default()).unwrap();
    assert_eq!(vector.network.sizes(), &[30, 100, 10]);
    assert_eq!(vector.input.rows, 1);
    assert_eq!(vector.input.cols, 30);
    assert_eq!(vector.output.rows, 1);
    assert_eq!(vector.output.cols, 10);
    // ReLU output is never negative
    assert!(vector.output.data[0].iter().all(|&x| x >= 0.0));
}

#[test]
fn different_seeds_produce_different_vectors() {
    let a = GoldenVector::generate(GoldenSpec::default()).unwrap();
    let b = GoldenVector::generate(GoldenSpec {
        seed: 8,
        ..GoldenSpec::default()
    })
    .unwrap();
    assert_ne!(a.input, b.input);
    assert_ne!(a.render(), b.render());
}

#[test]
fn emitted_statement_counts_match_the_shape() {
    let vector = GoldenVector::generate(GoldenSpec::default()).unwrap();
    let text = vector.render();

    let count = |prefix: &str| text.lines().filter(|l| l.starts_with(prefix)).count();
    assert_eq!(count("// "), 2);
    assert_eq!(count("network.resize"), 3);
    assert_eq!(count("network.set_weight"), 30 * 100 + 100 * 10);
    assert_eq!(count("network.set_bias"), 100 + 10);
    assert_eq!(count("input[0]["), 30);
    assert_eq!(count("let output = network.forward"), 1);
    assert_eq!(count("assert!"), 10);
}

#[test]
fn an_independent_reimplementation_passes_the_assertions() {
    let spec = GoldenSpec::default();
    let epsilon = spec.epsilon;
    let vector = GoldenVector::generate(spec).unwrap();
    let recomputed = naive_forward(&vector);
    assert_eq!(recomputed.len(), 10);
    for (expected, actual) in vector.output.data[0].iter().zip(&recomputed) {
        assert!((expected - actual).abs() < epsilon);
    }
}

#[test]
fn no_partial_output_on_a_broken_configuration() {
    let spec = GoldenSpec {
        input: 0,
        ..GoldenSpec::default()
    };
    match GoldenVector::generate(spec) {
        Err(NnError::InvalidConfig(_)) => {}
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn spec_round_trips_through_json() {
    let path = std::env::temp_dir().join("golden_nn_spec_roundtrip.json");
    let path = path.to_str().unwrap();
    let spec = GoldenSpec {
        seed: 123,
        input: 5,
        hidden: 9,
        output: 4,
        epsilon: 1e-7,
    };
    spec.save_json(path).unwrap();
    let loaded = GoldenSpec::load_json(path).unwrap();
    std::fs::remove_file(path).unwrap();
    assert_eq!(spec, loaded);
}

#[test]
fn dimension_mismatch_is_rejected_not_truncated() {
    let a = Matrix::zeros(1, 3).unwrap();
    let b = Matrix::zeros(2, 4).unwrap();
    assert!(matches!(
        a.multiply(&b),
        Err(NnError::DimensionMismatch { .. })
    ));
}
