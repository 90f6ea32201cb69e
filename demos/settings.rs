use sovran_dynmap::{DynMap, DynMapError, DynValue};
use std::collections::HashMap;

// Loading loosely-typed settings from JSON and reading them back with
// coercing accessors. Values arrive as whatever the decoder produced;
// callers ask for the representation they actually want.

const RAW_SETTINGS: &str = r#"
{
    "service_name": "collector",
    "port": "8080",
    "verbose": 1,
    "sample_rate": 0.25,
    "max_retries": 6
}
"#;

fn main() -> Result<(), DynMapError> {
    let decoded: HashMap<String, serde_json::Value> =
        serde_json::from_str(RAW_SETTINGS).expect("settings JSON is well-formed");

    let settings = DynMap::new();
    for (key, value) in decoded {
        match DynValue::from_json(value) {
            Some(value) => settings.set(key, value),
            None => println!("Skipping '{}': no flat representation", key),
        }
    }

    // Strings stay strings
    println!("service: {}", settings.get_as_string("service_name")?);

    // "8080" was stored as a string but reads as an int
    println!("port: {}", settings.get_as_int("port")?);

    // 1 was stored as a number but reads as a bool
    println!("verbose: {}", settings.get_as_bool("verbose")?);

    // JSON numbers keep their decimal text until a caller picks a type
    println!("sample rate: {}", settings.get_as_float("sample_rate")?);
    println!("max retries: {}", settings.get_as_int("max_retries")?);

    // Settings nobody wrote read as zero values, not errors
    println!("timeout (unset): {}", settings.get_as_int("timeout_secs")?);

    // A setting that doesn't parse as the requested type is an error
    match settings.get_as_int("service_name") {
        Ok(n) => println!("service_name as int: {}", n),
        Err(e) => println!("service_name as int: {}", e),
    }

    Ok(())
}
