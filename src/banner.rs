// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
  ___   ____            ____
 / _ \ / ___|__ _  __ _/ ___|
| | | | |   / _` |/ _` \___ \
| |_| | |__| (_| | (_| |___) |
 \__\_\\____\__,_|\__,_|____/

    Quantum-Enhanced Classification as a Service
"#;
    println!("{}", banner);
}
