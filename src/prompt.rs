//! Interactive prompts for values not supplied on the command line.
//!
//! Generic over the I/O pair so tests drive them with in-memory buffers.

use seed_payload::PayloadKind;
use std::io::{BufRead, Write};

/// Ask for the number of records until a whole number is entered.
pub fn prompt_record_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<u64> {
    loop {
        write!(output, "Enter the number of fake records: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed while waiting for the record count",
            ));
        }
        match line.trim().parse::<u64>() {
            Ok(count) => return Ok(count),
            Err(_) => writeln!(output, "Invalid input. Please enter a whole number.")?,
        }
    }
}

/// Ask which payload kind to attach until a valid menu entry is chosen.
pub fn prompt_payload_kind<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> std::io::Result<PayloadKind> {
    loop {
        writeln!(output)?;
        writeln!(output, "Choose the type of images to generate:")?;
        writeln!(output, "1) Cat pictures")?;
        writeln!(output, "2) Locally drawn images")?;
        writeln!(output, "3) No images")?;
        write!(output, "Enter your choice (1/2/3): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed while waiting for the image choice",
            ));
        }
        match line.trim() {
            "1" => return Ok(PayloadKind::Cat),
            "2" => return Ok(PayloadKind::Drawn),
            "3" => return Ok(PayloadKind::None),
            _ => writeln!(output, "Invalid choice. Please enter 1, 2, or 3.")?,
        }
    }
}
