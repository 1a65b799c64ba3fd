//! Misc stuff.

use std::ops::Range;

use num_traits::Num;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given range of values.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

// Define RangeExt on *anything* that can be compared, though it’s only
// really ever used for numeric ranges...

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        *self >= range.start && *self < range.end
    }
}


/// Splits the next token off the front of `input`, up to the separator.
/// The separator gets consumed along with the token. When there’s no
/// separator left, the whole of the rest of the input is the token.
pub(crate) fn next_token<'a>(input: &mut &'a str, separator: char) -> &'a str {
    let rest = *input;
    match rest.find(separator) {
        Some(pos) => {
            *input = &rest[pos + separator.len_utf8() ..];
            &rest[.. pos]
        },
        None => {
            *input = "";
            rest
        },
    }
}

/// Reads the run of digits at the start of the input (after any leading
/// whitespace) in the given radix. Input with no leading digits reads as
/// zero, as do numbers too large for the target type.
pub(crate) fn leading_number<N: Num>(input: &str, radix: u32) -> N {
    let trimmed = input.trim_start();
    let end = trimmed.find(|c: char| !c.is_digit(radix)).unwrap_or(trimmed.len());
    N::from_str_radix(&trimmed[.. end], radix).unwrap_or_else(|_| N::zero())
}

/// Reads an unsigned decimal field, as found in date and time strings.
pub(crate) fn leading_u32(input: &str) -> u32 {
    leading_number(input, 10)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tokens() {
        let mut input = "12/10/1921";
        assert_eq!(next_token(&mut input, '/'), "12");
        assert_eq!(next_token(&mut input, '/'), "10");
        assert_eq!(next_token(&mut input, '/'), "1921");
        assert_eq!(input, "");
    }

    #[test]
    fn empty_tokens() {
        let mut input = "01//96";
        assert_eq!(next_token(&mut input, '/'), "01");
        assert_eq!(next_token(&mut input, '/'), "");
        assert_eq!(next_token(&mut input, '/'), "96");
    }

    #[test]
    fn numbers() {
        assert_eq!(leading_u32("30 pm"), 30);
        assert_eq!(leading_u32("  07"), 7);
        assert_eq!(leading_u32("bad1"), 0);
        assert_eq!(leading_u32(""), 0);
        assert_eq!(leading_number::<u64>("ff;", 16), 255);
    }
}
