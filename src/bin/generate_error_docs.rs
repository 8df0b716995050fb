//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, and help text directly
//! from the `InputError` implementation via its `code()`, `description()`,
//! and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use wsmaker::errors::InputError;

fn main() {
    println!("# Error Codes\n");
    println!("Generated from the `InputError` enum. Do not edit by hand.\n");

    // One exemplar per variant, in code order.
    let errors: Vec<InputError> = vec![
        InputError::TooLong { max: 30 },
        InputError::Empty,
        InputError::NotAlphabetic,
        InputError::NotNumeric,
        InputError::DirectionOutOfRange { value: 6, min: 0, max: 5 },
        InputError::DimensionNotPositive,
        InputError::DuplicateWord { word: "cat".to_string() },
        InputError::Eof,
        InputError::Io(io::Error::new(io::ErrorKind::Other, "example I/O failure")),
    ];

    for error in &errors {
        println!("### {}: {}\n", error.code(), error.description());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{help_text}");
            println!("```\n");
        }

        println!("**Example error message:**");
        println!("```");
        println!("{error}");
        println!("```\n");

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");
    }
}
