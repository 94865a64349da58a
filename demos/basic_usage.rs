// ============================================================================
// Basic Usage Example
// ============================================================================

use number_to_chars::prelude::*;
use number_to_chars::stack::{f64_to_array_string, int_to_array_string};

fn show(label: &str, text: &[u8]) {
    println!("{}:\t{}", label, String::from_utf8_lossy(text));
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Number To Chars Example ===\n");

    // Free functions into 32-cell stack buffers
    let mut buffer = [0u8; 32];

    match encode_int(1729, &mut buffer) {
        Ok(text) => show("int", text),
        Err(e) => println!("int failed: {}", e),
    }

    match encode_f32(3.141592, &mut buffer) {
        Ok(text) => show("float", text),
        Err(e) => println!("float failed: {}", e),
    }

    match encode_f64(1.61803398874989, &mut buffer) {
        Ok(text) => show("double", text),
        Err(e) => println!("double failed: {}", e),
    }

    // Extension trait with an explicit budget
    println!("\nExtension methods...");
    let mut chars = ['\0'; 32];
    if let Ok(text) = 6283.185307179582f64.to_chars_with_precision(&mut chars, 6) {
        println!("tau (6 digits):\t{}", text.iter().collect::<String>());
    }

    // Configured encoder
    println!("\nConfigured encoder...");
    let config = EncoderConfig::new().with_double_precision(4);
    match NumberEncoder::from_config(config) {
        Ok(encoder) => {
            if let Ok(text) = encoder.encode_f64(-0.000_123_456, &mut buffer) {
                show("4 digits", text);
            }
        }
        Err(reason) => println!("config rejected: {}", reason),
    }

    // A buffer too small for the integer digits
    println!("\nUndersized buffer...");
    let mut small = [0u8; 3];
    if let Err(e) = encode_f32(1234.5678, &mut small) {
        println!("error:\t{}", e);
    }

    // Owned, still allocation-free
    println!("\nArrayString helpers...");
    if let Ok(text) = int_to_array_string::<12>(i32::MIN) {
        println!("i32::MIN:\t{}", text);
    }
    if let Ok(text) = f64_to_array_string::<24>(-314.1592653589793) {
        println!("-100 pi:\t{}", text);
    }

    println!("\n=== Example Complete ===");
}
