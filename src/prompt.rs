//! Interactive prompting with retry-until-valid semantics.
//!
//! Prompts loop without a retry cap; the only way out besides a valid value
//! is end-of-input, which surfaces as io::ErrorKind::UnexpectedEof so the
//! caller can report it distinctly from a validation failure.

use std::io::{self, BufRead, Write};

use clap::ValueEnum;

/// Prompt for a member of a closed enumeration, re-prompting on invalid input.
pub fn prompt_value_enum<T: ValueEnum>(label: &str) -> io::Result<T> {
    let stdin = io::stdin();
    let mut locked = stdin.lock();
    prompt_value_enum_from(&mut locked, &mut io::stderr(), label)
}

/// Prompt for a non-empty free-form string (the release version).
pub fn prompt_nonempty(label: &str, hint: &str) -> io::Result<String> {
    let stdin = io::stdin();
    let mut locked = stdin.lock();
    prompt_nonempty_from(&mut locked, &mut io::stderr(), label, hint)
}

fn prompt_value_enum_from<T: ValueEnum, R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<T> {
    let names: Vec<String> = T::value_variants()
        .iter()
        .filter_map(|v| v.to_possible_value())
        .map(|p| p.get_name().to_string())
        .collect();
    loop {
        write!(out, "{} ({}): ", label, names.join("|"))?;
        out.flush()?;
        let value = read_trimmed_line(reader, label)?;
        // Case-sensitive exact match against the enumeration
        if let Some(found) = T::value_variants()
            .iter()
            .find(|v| v.to_possible_value().is_some_and(|p| p.get_name() == value))
        {
            return Ok(found.clone());
        }
        writeln!(
            out,
            "Invalid choice. Please select from: {}",
            names.join(", ")
        )?;
    }
}

fn prompt_nonempty_from<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    label: &str,
    hint: &str,
) -> io::Result<String> {
    loop {
        write!(out, "{} ({}): ", label, hint)?;
        out.flush()?;
        let value = read_trimmed_line(reader, label)?;
        if !value.is_empty() {
            return Ok(value);
        }
        writeln!(out, "A value is required.")?;
    }
}

fn read_trimmed_line(reader: &mut impl BufRead, label: &str) -> io::Result<String> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("input stream closed while prompting for {label}"),
        ));
    }
    Ok(line.trim().to_string())
}
