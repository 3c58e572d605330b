use std::{fmt, io::{self, BufRead, Write}};
use regex::Regex;

mod heap;

use heap::{Heap, INT_SIZE};

pub const DEFAULT_HEAP_LIMIT: usize = 1 << 30;

#[derive(Debug)]
pub enum BuildError {
    InputParse(String),
    InvalidSize(i32),
    Allocation { requested: usize },
    Io(io::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InputParse(msg) => write!(f, "invalid size: {msg}"),
            BuildError::InvalidSize(n) => write!(f, "size must not be negative, got {n}"),
            BuildError::Allocation { requested } => {
                write!(f, "could not allocate {requested} bytes")
            }
            BuildError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for BuildError {
    fn from(err: io::Error) -> Self {
        BuildError::Io(err)
    }
}

pub struct Config {
    /// Upper bound, in bytes, on everything one run may allocate.
    pub heap_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { heap_limit: DEFAULT_HEAP_LIMIT }
    }
}

/// Prompts for a size, builds `0..n` on the heap and prints it one element per line.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, config: &Config) -> Result<(), BuildError> {
    writeln!(output, "Pick a size")?;
    output.flush()?;

    let size = read_size(input)?;
    if size < 0 {
        return Err(BuildError::InvalidSize(size));
    }
    log::debug!("building array of {size} elements");

    let mut heap = Heap::new(config.heap_limit);
    let size_handle = heap.alloc(INT_SIZE)?;
    heap.poke_i32(size_handle, size);
    let array = heap.calloc(size as usize, INT_SIZE)?;

    let len = heap.peek_i32(size_handle) as usize;
    for i in 0..len {
        heap.poke_i32(array + i * INT_SIZE, i as i32);
    }
    for i in 0..len {
        writeln!(output, "Array: {}", heap.peek_i32(array + i * INT_SIZE))?;
    }
    output.flush()?;

    Ok(())
}

/// Reads the first whitespace-delimited token and parses it as an `int`.
fn read_size<R: BufRead>(input: &mut R) -> Result<i32, BuildError> {
    let int_regex = Regex::new("^[+-]?[0-9]+$").unwrap();

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(BuildError::InputParse("no input".into()));
        }
        if let Some(token) = line.split_whitespace().next() {
            if !int_regex.is_match(token) {
                return Err(BuildError::InputParse(format!("`{token}` is not an integer")));
            }
            return token
                .parse::<i32>()
                .map_err(|_| BuildError::InputParse(format!("`{token}` is out of range")));
        }
    }
}
