//! # Listing
//!
//! The sole entity: one property record. Listings are constructed
//! transiently during an add, encoded to one store line, and reconstructed
//! transiently during a view. Nothing is ever updated or deleted.
//!
//! The date field is a validated opaque string, not a calendar date:
//! the format check is purely structural (`dd/mm/yyyy` positions), so
//! `99/99/9999` passes. Legacy store files depend on that.

/// Maximum bytes captured for the date field, on input and on decode.
pub const MAX_DATE_LEN: usize = 19;

/// Maximum bytes captured for the description, on input and on decode.
pub const MAX_DESC_LEN: usize = 255;

/// One property record.
///
/// No uniqueness is enforced on `id`; it is user-supplied like every
/// other field. `description` must not contain a newline for round-trip
/// fidelity, which the store format does not enforce.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub id: i64,
    pub price: i64,
    pub size: i64,
    pub rooms: i64,
    pub bathrooms: i64,
    pub parking: bool,
    pub date: String,
    pub description: String,
}

/// Structural `dd/mm/yyyy` check: 10 bytes, slashes at positions 2 and 5,
/// ASCII digits everywhere else. No calendar validation.
pub fn valid_date_format(date: &str) -> bool {
    let bytes = date.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| {
        if i == 2 || i == 5 {
            b == b'/'
        } else {
            b.is_ascii_digit()
        }
    })
}
