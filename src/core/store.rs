//! # Store
//!
//! Append/read access to the flat text store: newline-delimited, one
//! encoded listing per line, no header, no version marker.
//!
//! File handles are scoped acquisitions - opened immediately before use
//! and released immediately after, on every exit path. The store assumes
//! exclusive single-process access: no locking, no atomicity beyond what
//! the platform's append mode provides.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::core::codec;
use crate::core::listing::Listing;

/// Handle to the store file. Holds the path only; never an open file.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one listing as a single line, creating the file if needed.
    pub fn append(&self, listing: &Listing) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", codec::encode(listing))?;
        debug!("Appended listing {} to {}", listing.id, self.path.display());
        Ok(())
    }

    /// Reads and decodes every line of the store, in file order.
    ///
    /// A store that does not exist yet is an empty store, not an error.
    /// Decoding is total, so every line yields a listing (malformed lines
    /// yield partially-defaulted ones - see `core::codec`).
    pub fn load(&self) -> io::Result<Vec<Listing>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "Store {} does not exist yet, treating as empty",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };
        let listings: Vec<Listing> = contents.lines().map(codec::decode).collect();
        info!(
            "Loaded {} listings from {}",
            listings.len(),
            self.path.display()
        );
        Ok(listings)
    }
}
