use std::env;
use std::fs;
use std::path::Path;

// Inyecta las variables de .env como rustc-env para que config.rs las lea
// con option_env! en tiempo de compilación. Claves relevantes:
// AUTH_BASE_URL, QUOTATION_API_URL, ENVIRONMENT, ENABLE_LOGGING.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!(
            "cargo:warning=No .env file found. Using default collaborator URLs. \
             Copy .env.example to .env and configure your settings."
        );
        return;
    }

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => return,
    };

    for line in contents.lines() {
        let line = line.trim();
        // Ignorar comentarios y líneas vacías
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let (key, value) = (key.trim(), value.trim());
            // El entorno real tiene prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
