use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let plays_src = Path::new("../fixtures/plays.csv");

    // Aggregate plays.csv at build time into the two JSON arrays the app
    // embeds: plays per year, and plays per year and language.
    let (by_year, by_lang) = if plays_src.exists() {
        let csv_data = fs::read_to_string(plays_src).expect("Failed to read plays.csv");
        let by_year = dt_data::aggregate::plays_per_year(&csv_data).expect("Failed to aggregate plays.csv");
        let by_lang =
            dt_data::aggregate::plays_per_year_by_lang(&csv_data).expect("Failed to aggregate plays.csv by lang");
        (
            serde_json::to_string(&by_year).unwrap(),
            serde_json::to_string(&by_lang).unwrap(),
        )
    } else {
        // Keep the app buildable without fixtures; it reports the empty series.
        ("[]".to_string(), "[]".to_string())
    };

    fs::write(Path::new(&out_dir).join("plays_by_year.json"), by_year).unwrap();
    fs::write(Path::new(&out_dir).join("plays_by_lang.json"), by_lang).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/plays.csv");
}
