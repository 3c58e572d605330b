use std::io::{self, Write};

pub const INT_ARRAY: [i32; 7] = [1, 4, 6, 8, 10, 101, 3033];

/// Writes `values` on one line as `a, b, c `. An empty slice writes nothing.
pub fn print_int_array<W: Write>(out: &mut W, values: &[i32]) -> io::Result<()> {
    let Some((last, rest)) = values.split_last() else {
        return Ok(());
    };
    for n in rest {
        write!(out, "{n}, ")?;
    }
    write!(out, "{last} ")
}

pub fn run_arrays<W: Write>(out: &mut W) -> io::Result<()> {
    print_int_array(out, &INT_ARRAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(values: &[i32]) -> String {
        let mut out = Vec::new();
        print_int_array(&mut out, values).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fixed_array() {
        let mut out = Vec::new();
        run_arrays(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1, 4, 6, 8, 10, 101, 3033 ");
    }

    #[test]
    fn empty() {
        assert_eq!(printed(&[]), "");
    }

    #[test]
    fn single_element() {
        assert_eq!(printed(&[42]), "42 ");
    }

    #[test]
    fn negatives() {
        assert_eq!(printed(&[-1, 0, i32::MIN]), "-1, 0, -2147483648 ");
    }

    #[test]
    fn one_token_per_element() {
        let values: Vec<i32> = (0..100).rev().collect();
        let out = printed(&values);
        assert!(!out.contains(",,"));
        assert!(!out.trim_end().ends_with(','));
        let tokens: Vec<i32> = out
            .trim_end()
            .split(", ")
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(tokens, values);
    }
}
