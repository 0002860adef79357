/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Extended XYZ configurations
//!
//! ```text
//! 2
//! Lattice="5.43 0 0 0 5.43 0 0 0 5.43" PBC="T T T" Properties=species:S:1:pos:R:3
//! Si 0.0 0.0 0.0
//! Si 1.3575 1.3575 1.3575
//! ```
//!
//! The comment line is a list of `key=value` pairs, values optionally quoted.
//! Only `Lattice` and `PBC` are interpreted. A lattice without `PBC` is
//! periodic along all three axes; no lattice means an open cluster. Columns
//! after the coordinates are ignored.

use log::debug;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use super::errors::{IoError, Result};
use crate::config::{AtomicConfiguration, Configuration};
use crate::geometry::{Cell, Vector3D};

fn parse_error(line: usize, message: impl Into<String>) -> IoError {
    IoError::Parse {
        line,
        message: message.into(),
    }
}

/// Split a comment line into `key=value` pairs
fn comment_fields(comment: &str) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    let mut chars = comment.trim().chars().peekable();

    while chars.peek().is_some() {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut key = String::new();
        while let Some(c) = chars.next_if(|&c| c != '=' && !c.is_whitespace()) {
            key.push(c);
        }
        if chars.next_if_eq(&'=').is_none() {
            // bare word without a value
            if !key.is_empty() {
                fields.push((key, String::new()));
            }
            continue;
        }

        let mut value = String::new();
        if chars.next_if_eq(&'"').is_some() {
            for c in chars.by_ref() {
                if c == '"' {
                    break;
                }
                value.push(c);
            }
        } else {
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                value.push(c);
            }
        }
        fields.push((key, value));
    }
    fields
}

fn parse_lattice(value: &str, line: usize) -> Result<Cell> {
    let numbers: Vec<f64> = value
        .split_whitespace()
        .map(|t| {
            t.parse::<f64>()
                .map_err(|_| parse_error(line, format!("invalid lattice entry '{}'", t)))
        })
        .collect::<Result<_>>()?;
    if numbers.len() != 9 {
        return Err(parse_error(
            line,
            format!("Lattice needs 9 numbers, found {}", numbers.len()),
        ));
    }
    Ok(Cell::new([
        [numbers[0], numbers[1], numbers[2]],
        [numbers[3], numbers[4], numbers[5]],
        [numbers[6], numbers[7], numbers[8]],
    ]))
}

fn parse_flag(token: &str, line: usize) -> Result<bool> {
    match token.to_ascii_lowercase().as_str() {
        "t" | "true" | "1" => Ok(true),
        "f" | "false" | "0" => Ok(false),
        _ => Err(parse_error(line, format!("invalid PBC flag '{}'", token))),
    }
}

fn parse_pbc(value: &str, line: usize) -> Result<[bool; 3]> {
    let flags: Vec<bool> = value
        .split_whitespace()
        .map(|t| parse_flag(t, line))
        .collect::<Result<_>>()?;
    match flags.as_slice() {
        &[a, b, c] => Ok([a, b, c]),
        _ => Err(parse_error(
            line,
            format!("PBC needs 3 flags, found {}", flags.len()),
        )),
    }
}

fn parse_atom_line(text: &str, line: usize) -> Result<(String, Vector3D)> {
    let mut tokens = text.split_whitespace();
    let symbol = tokens
        .next()
        .ok_or_else(|| parse_error(line, "empty atom line"))?
        .to_string();
    let mut xyz = [0.0; 3];
    for (axis, value) in xyz.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or_else(|| parse_error(line, format!("missing coordinate {}", axis + 1)))?;
        *value = token
            .parse()
            .map_err(|_| parse_error(line, format!("invalid coordinate '{}'", token)))?;
    }
    Ok((symbol, Vector3D::from_array(xyz)))
}

/// Parse one extended XYZ frame from a reader
pub fn parse_extxyz_reader<R: BufRead>(reader: R) -> Result<Configuration> {
    let mut lines = reader.lines();

    let count_line = lines
        .next()
        .ok_or_else(|| parse_error(1, "missing atom count"))??;
    let natoms: usize = count_line
        .trim()
        .parse()
        .map_err(|_| parse_error(1, format!("invalid atom count '{}'", count_line.trim())))?;

    let comment = lines.next().transpose()?.unwrap_or_default();
    let mut cell = None;
    let mut pbc = None;
    for (key, value) in comment_fields(&comment) {
        match key.to_ascii_lowercase().as_str() {
            "lattice" => cell = Some(parse_lattice(&value, 2)?),
            "pbc" => pbc = Some(parse_pbc(&value, 2)?),
            _ => {}
        }
    }
    let (cell, pbc) = match (cell, pbc) {
        (Some(cell), Some(pbc)) => (cell, pbc),
        (Some(cell), None) => (cell, [true; 3]),
        (None, Some(pbc)) if pbc.iter().any(|&p| p) => {
            return Err(parse_error(2, "PBC is set but no Lattice is given"));
        }
        (None, _) => (Cell::zero(), [false; 3]),
    };

    let mut species = Vec::with_capacity(natoms);
    let mut coords = Vec::with_capacity(natoms);
    for (offset, text) in lines.enumerate() {
        let text = text?;
        if species.len() == natoms {
            if text.trim().is_empty() {
                continue;
            }
            // a following frame or trailing garbage; only the first frame is read
            break;
        }
        let (symbol, position) = parse_atom_line(&text, offset + 3)?;
        species.push(symbol);
        coords.push(position);
    }
    if species.len() != natoms {
        return Err(IoError::CountMismatch {
            expected: natoms,
            found: species.len(),
        });
    }

    debug!("Read extended XYZ frame with {} atoms, PBC {:?}", natoms, pbc);
    Ok(Configuration::new(species, coords, cell, pbc)?)
}

/// Parse one extended XYZ frame from a string
pub fn parse_extxyz(text: &str) -> Result<Configuration> {
    parse_extxyz_reader(Cursor::new(text))
}

/// Read an extended XYZ file
pub fn read_extxyz<P: AsRef<Path>>(path: P) -> Result<Configuration> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    Ok(parse_extxyz_reader(reader)?.with_identifier(path.display().to_string()))
}

/// Format a configuration as an extended XYZ frame
pub fn write_extxyz<C: AtomicConfiguration + ?Sized>(conf: &C) -> String {
    let flag = |p: bool| if p { "T" } else { "F" };
    let lattice: Vec<String> = conf
        .cell()
        .to_rows()
        .iter()
        .flatten()
        .map(|v| v.to_string())
        .collect();
    let pbc = conf.pbc();

    let mut out = String::new();
    let _ = writeln!(out, "{}", conf.coords().len());
    let _ = writeln!(
        out,
        "Lattice=\"{}\" PBC=\"{} {} {}\" Properties=species:S:1:pos:R:3",
        lattice.join(" "),
        flag(pbc[0]),
        flag(pbc[1]),
        flag(pbc[2])
    );
    for (symbol, p) in conf.species().iter().zip(conf.coords()) {
        let _ = writeln!(out, "{} {} {} {}", symbol, p.x, p.y, p.z);
    }
    out
}
