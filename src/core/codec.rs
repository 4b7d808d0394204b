//! # Record Codec
//!
//! encode/decode for the flat store's line format:
//!
//! ```text
//! id,price,size,rooms,bathrooms,parking,date,description
//! ```
//!
//! The format predates this crate and must stay byte-compatible with
//! existing store files, so it is hand-scanned rather than derived. The
//! known fragilities live here and only here:
//!
//! - No escaping. A newline in the description splits the record across
//!   lines; a comma survives only because the description is the final
//!   field. A stricter format can be swapped in without touching the
//!   collector, store, or session loop.
//! - Decode is total and performs no validation. It fills fields left to
//!   right and stops at the first mismatch; everything after the mismatch
//!   keeps its `Listing::default()` value. Malformed lines therefore
//!   render as partially-defaulted rows instead of errors.
//!
//! Field capture widths match the legacy readers: the date takes up to
//! [`MAX_DATE_LEN`] bytes of non-comma text, the description up to
//! [`MAX_DESC_LEN`] bytes of the remaining line. Caps round down to a
//! character boundary so a capped capture is always valid UTF-8.

use crate::core::listing::{Listing, MAX_DATE_LEN, MAX_DESC_LEN};

/// Encodes a listing as one store line, without the trailing newline.
/// `parking` is written as `0`/`1`; the description goes out verbatim.
pub fn encode(listing: &Listing) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        listing.id,
        listing.price,
        listing.size,
        listing.rooms,
        listing.bathrooms,
        listing.parking as i64,
        listing.date,
        listing.description
    )
}

/// Decodes one store line into a listing. Total: never fails, never
/// panics. A mismatch mid-line keeps the fields parsed so far and
/// defaults the rest.
pub fn decode(line: &str) -> Listing {
    let mut listing = Listing::default();

    // Fields fill strictly left to right, like the sscanf call this
    // format was born with: a mismatch keeps what was parsed so far.
    let Some((id, rest)) = scan_delimited_int(line) else {
        return listing;
    };
    listing.id = id;
    let Some((price, rest)) = scan_delimited_int(rest) else {
        return listing;
    };
    listing.price = price;
    let Some((size, rest)) = scan_delimited_int(rest) else {
        return listing;
    };
    listing.size = size;
    let Some((rooms, rest)) = scan_delimited_int(rest) else {
        return listing;
    };
    listing.rooms = rooms;
    let Some((bathrooms, rest)) = scan_delimited_int(rest) else {
        return listing;
    };
    listing.bathrooms = bathrooms;

    // Legacy rows may carry any integer here; nonzero has always
    // displayed as "Yes".
    let Some((parking, rest)) = scan_delimited_int(rest) else {
        return listing;
    };
    listing.parking = parking != 0;

    let Some((date, after)) = scan_span(rest, MAX_DATE_LEN, |c| c != ',') else {
        return listing;
    };
    listing.date = date.to_string();
    let Some(after) = after.strip_prefix(',') else {
        return listing;
    };

    if let Some((description, _)) = scan_span(after, MAX_DESC_LEN, |c| c != '\n') {
        listing.description = description.to_string();
    }
    listing
}

/// `%d`-style integer scan: skips leading ASCII whitespace, accepts an
/// optional sign, then one or more ASCII digits. Trailing bytes are left
/// in the returned remainder (`"12abc"` scans as 12, rest `"abc"`).
/// A value that does not fit in `i64` is a failed scan, not a wrap.
pub(crate) fn scan_int(input: &str) -> Option<(i64, &str)> {
    let rest = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };

    let digit_count = rest
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_count == 0 {
        return None;
    }
    let (digits, rest) = rest.split_at(digit_count);

    let mut value: i64 = 0;
    for b in digits.bytes() {
        value = value
            .checked_mul(10)?
            .checked_add(i64::from(b - b'0'))?;
    }
    if negative {
        value = -value;
    }
    Some((value, rest))
}

/// An integer field followed by its literal comma delimiter.
fn scan_delimited_int(input: &str) -> Option<(i64, &str)> {
    let (value, rest) = scan_int(input)?;
    Some((value, rest.strip_prefix(',')?))
}

/// `%N[^x]`-style capture: takes characters accepted by `keep`, up to
/// `cap` bytes rounded down to a character boundary. At least one byte
/// must match or the scan fails, like its scanf counterpart.
fn scan_span(input: &str, cap: usize, keep: impl Fn(char) -> bool) -> Option<(&str, &str)> {
    let mut end = 0;
    for c in input.chars() {
        if !keep(c) || end + c.len_utf8() > cap {
            break;
        }
        end += c.len_utf8();
    }
    if end == 0 {
        None
    } else {
        Some((&input[..end], &input[end..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Listing {
        Listing {
            id: 1,
            price: 500000,
            size: 120,
            rooms: 3,
            bathrooms: 2,
            parking: true,
            date: "01/01/2025".to_string(),
            description: "Nice flat".to_string(),
        }
    }

    #[test]
    fn test_encode_exact_line() {
        assert_eq!(
            encode(&sample()),
            "1,500000,120,3,2,1,01/01/2025,Nice flat"
        );
    }

    #[test]
    fn test_encode_parking_false_writes_zero() {
        let l = Listing {
            parking: false,
            ..sample()
        };
        assert_eq!(encode(&l), "1,500000,120,3,2,0,01/01/2025,Nice flat");
    }

    #[test]
    fn test_round_trip() {
        let l = sample();
        assert_eq!(decode(&encode(&l)), l);
    }

    #[test]
    fn test_round_trip_negative_integers() {
        let l = Listing {
            id: -7,
            price: -1,
            ..sample()
        };
        assert_eq!(decode(&encode(&l)), l);
    }

    #[test]
    fn test_comma_in_description_survives_as_final_field() {
        // No escaping exists; the description only round-trips commas
        // because nothing is scanned after it.
        let l = Listing {
            description: "bright, airy, third floor".to_string(),
            ..sample()
        };
        assert_eq!(decode(&encode(&l)), l);
    }

    #[test]
    fn test_decode_nonzero_parking_is_yes() {
        let l = decode("1,2,3,4,5,7,01/01/2025,x");
        assert!(l.parking);
    }

    #[test]
    fn test_decode_malformed_keeps_parsed_prefix() {
        let l = decode("1,500000,bogus,3,2,1,01/01/2025,Nice flat");
        assert_eq!(l.id, 1);
        assert_eq!(l.price, 500000);
        // Everything from the mismatch on stays default
        assert_eq!(l.size, 0);
        assert_eq!(l.rooms, 0);
        assert!(!l.parking);
        assert!(l.date.is_empty());
        assert!(l.description.is_empty());
    }

    #[test]
    fn test_decode_empty_line_is_all_defaults() {
        assert_eq!(decode(""), Listing::default());
    }

    #[test]
    fn test_decode_garbage_never_panics() {
        for line in [",,,,,,,", "a,b,c", "1,2,3,4,5,6", "1,2,3,4,5,6,", "🏠", "\u{0}"] {
            let _ = decode(line);
        }
    }

    #[test]
    fn test_decode_date_capped_at_nineteen_bytes() {
        // 25 non-comma bytes where the date belongs: capture stops at 19,
        // so the expected comma is missing and the description defaults.
        let l = decode("1,2,3,4,5,1,aaaaaaaaaaaaaaaaaaaaaaaaa,desc");
        assert_eq!(l.date, "aaaaaaaaaaaaaaaaaaa");
        assert!(l.description.is_empty());
    }

    #[test]
    fn test_decode_description_capped_at_255_bytes() {
        let long = "d".repeat(300);
        let l = decode(&format!("1,2,3,4,5,1,01/01/2025,{long}"));
        assert_eq!(l.description.len(), 255);
    }

    #[test]
    fn test_decode_cap_respects_char_boundary() {
        // 127 two-byte chars = 254 bytes; one more would cross the cap,
        // so the capture rounds down instead of splitting the char.
        let desc = "é".repeat(128);
        let l = decode(&format!("1,2,3,4,5,1,01/01/2025,{desc}"));
        assert_eq!(l.description, "é".repeat(127));
    }

    #[test]
    fn test_decode_skips_leading_whitespace_before_integers() {
        let l = decode("  1, 2,3,4,5,1,01/01/2025,x");
        assert_eq!(l.id, 1);
        assert_eq!(l.price, 2);
    }

    #[test]
    fn test_scan_int_trailing_garbage_ignored() {
        assert_eq!(scan_int("12abc"), Some((12, "abc")));
        assert_eq!(scan_int("  -5,"), Some((-5, ",")));
        assert_eq!(scan_int("+42"), Some((42, "")));
    }

    #[test]
    fn test_scan_int_rejects_non_numeric() {
        assert_eq!(scan_int("abc12"), None);
        assert_eq!(scan_int(""), None);
        assert_eq!(scan_int("-"), None);
        assert_eq!(scan_int("+"), None);
    }

    #[test]
    fn test_scan_int_overflow_is_invalid() {
        assert_eq!(scan_int("9223372036854775808"), None);
        assert_eq!(
            scan_int("9223372036854775807"),
            Some((i64::MAX, ""))
        );
    }
}
