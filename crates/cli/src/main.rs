use rifflebench_core::{Registry, RngState};

const DECK_SIZE: usize = 52;
const NUM_SAMPLES: usize = 100_000;

fn main() {
    let mut rng = RngState::from_entropy();
    // Stdout carries only the result list; the seed goes to stderr so a
    // run can still be reproduced.
    eprintln!("seed: {}", rng.seed());

    let registry = Registry::presets();
    let records = match registry.evaluate(DECK_SIZE, NUM_SAMPLES, &mut rng) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("evaluation failed: {err}");
            std::process::exit(1);
        }
    };
    match serde_json::to_string_pretty(&records) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("serialize error: {err}");
            std::process::exit(1);
        }
    }
}
