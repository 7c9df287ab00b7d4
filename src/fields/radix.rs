use snafu::Snafu;

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum ParseRadixStringError {
    /// Empty input string
    #[snafu(display("Empty input string"))]
    EmptyString,

    /// Invalid radix table
    #[snafu(display("Invalid radix table"))]
    InvalidRadixTable,

    /// Length of input string and radix table length must match
    #[snafu(display("Length of input string and radix table length must match"))]
    LengthMismatch,

    /// Input string contains an invalid character
    #[snafu(display("Input string contains an invalid character"))]
    InvalidChar,
}

pub trait FromStrCustomRadix {
    type Item;

    fn from_str_custom_radix(input: &str, radix_table: &str)
        -> Result<Self::Item, ParseRadixStringError>;
}

macro_rules! from_str_custom_radix_impl {
    ($($t:ty)*) => {$(
        impl FromStrCustomRadix for $t {
            type Item = $t;

            fn from_str_custom_radix(input: &str, radix_table: &str)
                -> Result<Self::Item, ParseRadixStringError>
            {
                if input.is_empty() {
                    return Err(ParseRadixStringError::EmptyString);
                }
                let radix_length = radix_table.len() as Self::Item;
                if radix_length == 0 {
                    return Err(ParseRadixStringError::InvalidRadixTable);
                }
                let mut value: Self::Item = 0;
                for c in input.chars() {
                    if let Some(pos) = radix_table.chars().position(|ch| c == ch) {
                        value = value * radix_length + pos as Self::Item;
                    } else {
                        return Err(ParseRadixStringError::InvalidChar);
                    }
                }

                Ok(value)
            }
        }
    )*}
}
from_str_custom_radix_impl!(u32 u64 u128);

pub trait FromMixedRadixStr {
    type Item;

    fn from_mixed_radix_str(input: &str, radix_tables: &[&str])
        -> Result<Self::Item, ParseRadixStringError>;
}

macro_rules! from_mixed_radix_str_impl {
    ($($t:ty)*) => {$(
        impl FromMixedRadixStr for $t {
            type Item = $t;

            fn from_mixed_radix_str(input: &str, radix_tables: &[&str])
                -> Result<Self::Item, ParseRadixStringError>
            {
                if input.is_empty() {
                    return Err(ParseRadixStringError::EmptyString);
                }

                if input.len() != radix_tables.len() {
                    return Err(ParseRadixStringError::LengthMismatch);
                }

                let table_sizes: Vec<Self::Item> =
                    radix_tables.iter().map(|t| t.len() as Self::Item).collect();

                let mut value: Self::Item = 0;

                for (i, c) in input.chars().enumerate() {
                    let position = match radix_tables[i].chars().position(|ch| ch == c) {
                        Some(value) => value,
                        None => return Err(ParseRadixStringError::InvalidChar),
                    };

                    // the digit value is the position scaled by every radix to its right
                    let mut position_value = position as Self::Item;
                    for size in &table_sizes[i + 1..] {
                        position_value *= size;
                    }

                    value += position_value;
                }

                Ok(value)
            }
        }
    )*}
}
from_mixed_radix_str_impl!(u32 u64 u128);
