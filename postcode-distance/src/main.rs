use std::process::ExitCode;

use postcode_distance::GeoDistanceEngine;
use tracing_subscriber::EnvFilter;

/// Set to `1` or `true` to ignore files already on disk.
const FORCE_DOWNLOAD_ENV: &str = "PGEOCODE_FORCE_DOWNLOAD";

const USAGE: &str = "usage: postcode-distance CODE_X COUNTRY_X CODE_Y COUNTRY_Y";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [code_x, country_x, code_y, country_y] = args.as_slice() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let force_download = std::env::var(FORCE_DOWNLOAD_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let engine = match GeoDistanceEngine::new(force_download) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to create engine: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = engine
        .query_postal_code(code_x, country_x, code_y, country_y)
        .map(|distance_km| {
            serde_json::json!({
                "from": { "postal_code": code_x, "country": country_x },
                "to": { "postal_code": code_y, "country": country_y },
                "distance_km": distance_km,
            })
        });

    match result {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
