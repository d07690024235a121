//! The display collaborator the controller renders into.
//!
//! # Design
//! Mirrors the handful of page elements the controller touches: the list
//! container, the count display, the add-input, and the delete confirmation
//! dialog. Keeping it a trait lets tests substitute a recording surface and
//! keeps the controller free of terminal concerns.

use std::io::{self, BufRead, Write};

use list_core::Item;

/// Where the controller reflects server state and asks for confirmation.
pub trait Surface {
    /// Replace the rendered list wholesale, preserving the given order.
    fn render_items(&mut self, items: &[Item]);

    /// Overwrite the displayed item count.
    fn render_count(&mut self, count: u64);

    /// Clear the add-input after a successful create.
    fn clear_input(&mut self);

    /// Ask the user to confirm deleting `content`. Returning false aborts
    /// the deletion before any request is sent.
    fn confirm_delete(&mut self, content: &str) -> bool;
}

/// Terminal-backed surface for the interactive binary.
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl ConsoleSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for ConsoleSurface {
    fn render_items(&mut self, items: &[Item]) {
        if items.is_empty() {
            println!("(no items)");
            return;
        }
        for (i, item) in items.iter().enumerate() {
            println!("{:>3}. {}", i + 1, item.content);
        }
    }

    fn render_count(&mut self, count: u64) {
        println!("{count} item(s)");
    }

    fn clear_input(&mut self) {
        // The terminal has no persistent input field to clear.
    }

    fn confirm_delete(&mut self, content: &str) -> bool {
        print!("delete \"{content}\"? [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }
}
