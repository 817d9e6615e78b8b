// Pasa la configuración del cliente (entorno real o `.env`) a `option_env!`
// y avisa en compilación de valores que romperían la app en runtime.

use std::collections::HashMap;
use std::env;
use std::fs;

const CONFIG_KEYS: [&str; 6] = [
    "BACKEND_URL",
    "APP_ORIGIN",
    "ENABLE_LOGGING",
    "GEMINI_API_KEY",
    "GEMINI_MODEL",
    "GEMINI_ENDPOINT",
];

const URL_KEYS: [&str; 3] = ["BACKEND_URL", "APP_ORIGIN", "GEMINI_ENDPOINT"];

fn parse_dotenv(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            (key.trim().to_string(), value.to_string())
        })
        .filter(|(key, _)| CONFIG_KEYS.contains(&key.as_str()))
        .collect()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let dotenv = fs::read_to_string(".env")
        .map(|contents| parse_dotenv(&contents))
        .unwrap_or_default();

    // El entorno real tiene prioridad sobre .env
    let mut resolved = HashMap::new();
    for key in CONFIG_KEYS {
        match env::var(key) {
            Ok(value) => {
                resolved.insert(key, value);
            }
            Err(_) => {
                if let Some(value) = dotenv.get(key) {
                    println!("cargo:rustc-env={}={}", key, value);
                    resolved.insert(key, value.clone());
                }
            }
        }
    }

    for key in URL_KEYS {
        if let Some(url) = resolved.get(key) {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                println!("cargo:warning={} must be an http(s) URL, got {:?}", key, url);
            }
        }
    }

    if resolved.get("GEMINI_API_KEY").map_or(true, |key| key.trim().is_empty()) {
        println!("cargo:warning=GEMINI_API_KEY is not set; photo recognition will fail with a configuration error");
    }
}
