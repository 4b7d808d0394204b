//! # Console Adapter
//!
//! The crossterm-specific layer. Owns the interactive streams, renders
//! the menu and listing rows, and drives the core session state machine.
//!
//! This is the only module that knows about crossterm. `Console` is
//! generic over `R: BufRead` and `W: Write`, so every flow in here runs
//! unchanged against in-memory streams in tests; `run` is the one
//! function that binds real stdin/stdout.
//!
//! Color scheme, kept from the classic tool: menu and section headers
//! cyan, prompts and success green, rejections red. Style commands are
//! queued onto the generic writer, so disabling color (config, or the
//! `PROPLOG_COLOR` env var) simply skips the queueing and output stays
//! plain bytes.

pub mod prompt;

pub use prompt::PromptError;

use std::io::{self, BufRead, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use log::{debug, info, warn};

use crate::core::config::ResolvedConfig;
use crate::core::listing::{Listing, MAX_DATE_LEN, MAX_DESC_LEN, valid_date_format};
use crate::core::session::SessionState;
use crate::core::store::Store;

/// The interactive session surface: input stream, output stream, and the
/// resolved presentation settings.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    color: bool,
    max_retries: u32,
}

/// Runs a full interactive session on the real terminal.
pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        stdin.lock(),
        stdout.lock(),
        config.color,
        config.max_input_retries,
    );
    let store = Store::new(&config.store_path);
    console.session_loop(&store)
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `max_retries` of 0 means re-prompt forever on invalid integers.
    pub fn new(input: R, output: W, color: bool, max_retries: u32) -> Self {
        Self {
            input,
            output,
            color,
            max_retries,
        }
    }

    /// Consumes the console and returns the output stream (tests inspect
    /// the captured bytes this way).
    pub fn into_output(self) -> W {
        self.output
    }

    // ========================================================================
    // Session loop
    // ========================================================================

    /// Menu → dispatch → menu, until the user selects exit. Only a failure
    /// of the interactive streams themselves ends the session early; store
    /// trouble and exhausted retry budgets return control to the menu.
    pub fn session_loop(&mut self, store: &Store) -> io::Result<()> {
        info!("Session started, store: {}", store.path().display());
        loop {
            self.show_menu()?;
            let selection = match self.read_integer("Select an option: ") {
                Ok(n) => n,
                Err(PromptError::AttemptsExhausted) => {
                    self.red("Too many invalid attempts.\n")?;
                    continue;
                }
                Err(PromptError::Io(e)) => return Err(e),
            };

            let state = SessionState::from_selection(selection);
            debug!("Menu selection {selection} -> {state:?}");
            match state {
                SessionState::View => self.view_listings(store)?,
                SessionState::Add => match self.add_listing(store) {
                    Ok(()) => {}
                    Err(PromptError::AttemptsExhausted) => {
                        self.red("Too many invalid attempts.\n")?;
                    }
                    Err(PromptError::Io(e)) => return Err(e),
                },
                SessionState::Exit => {
                    self.plain("Exiting...\n")?;
                    info!("Session ended by user");
                    return Ok(());
                }
                SessionState::Menu => self.red("Invalid option.\n")?,
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        self.cyan("\n1. View Listings\n2. Add Listing\n0. Exit\n")
    }

    // ========================================================================
    // Add
    // ========================================================================

    /// Collects one listing and appends it to the store. The date comes
    /// first and is validated up front: an invalid date abandons the add
    /// before any other field is collected, so nothing is written.
    fn add_listing(&mut self, store: &Store) -> Result<(), PromptError> {
        self.cyan("\n-- Add New Listing --\n")?;

        let date = self.read_text("Date of acquisition (dd/mm/yyyy): ", MAX_DATE_LEN)?;
        if !valid_date_format(&date) {
            warn!("Add abandoned, invalid date: {date:?}");
            self.red("Invalid date format! Expected dd/mm/yyyy.\n")?;
            return Ok(());
        }

        let id = self.read_integer("ID: ")?;
        let price = self.read_integer("Price: ")?;
        let size = self.read_integer("Size: ")?;
        let rooms = self.read_integer("Rooms: ")?;
        let bathrooms = self.read_integer("Bathrooms: ")?;
        let parking = self.read_integer("Parking (0 = No, 1 = Yes): ")? != 0;
        let description = self.read_text("Description: ", MAX_DESC_LEN)?;

        let listing = Listing {
            id,
            price,
            size,
            rooms,
            bathrooms,
            parking,
            date,
            description,
        };
        match store.append(&listing) {
            Ok(()) => self.green("Listing saved successfully!\n")?,
            Err(e) => {
                warn!("Store append failed: {e}");
                self.red(&format!("Error opening file: {e}\n"))?;
            }
        }
        Ok(())
    }

    // ========================================================================
    // View
    // ========================================================================

    /// Prints every stored listing. A store that doesn't exist yet shows
    /// the header with no rows; any other read failure is reported and
    /// control returns to the menu.
    fn view_listings(&mut self, store: &Store) -> io::Result<()> {
        let listings = match store.load() {
            Ok(listings) => listings,
            Err(e) => {
                warn!("Store load failed: {e}");
                return self.red(&format!("Error reading file: {e}\n"));
            }
        };

        self.cyan("\n-- Current Listings --\n")?;
        for listing in &listings {
            self.print_listing(listing)?;
        }
        Ok(())
    }

    fn print_listing(&mut self, listing: &Listing) -> io::Result<()> {
        self.plain("ID: ")?;
        self.cyan(&listing.id.to_string())?;
        self.plain(" | Price: ")?;
        self.green(&listing.price.to_string())?;
        self.plain(&format!(
            " | Size: {} sqm | Rooms: {} | Baths: {} | Parking: {} | Date: {} | {}\n",
            listing.size,
            listing.rooms,
            listing.bathrooms,
            if listing.parking { "Yes" } else { "No" },
            listing.date,
            listing.description
        ))
    }

    // ========================================================================
    // Styled output
    // ========================================================================

    pub(crate) fn cyan(&mut self, text: &str) -> io::Result<()> {
        self.paint(Color::Cyan, text)
    }

    pub(crate) fn green(&mut self, text: &str) -> io::Result<()> {
        self.paint(Color::Green, text)
    }

    pub(crate) fn red(&mut self, text: &str) -> io::Result<()> {
        self.paint(Color::Red, text)
    }

    pub(crate) fn plain(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn paint(&mut self, color: Color, text: &str) -> io::Result<()> {
        if self.color {
            queue!(
                self.output,
                SetForegroundColor(color),
                Print(text),
                ResetColor
            )?;
        } else {
            self.output.write_all(text.as_bytes())?;
        }
        // Prompts carry no newline, so flush after every write
        self.output.flush()
    }
}
