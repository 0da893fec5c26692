use std::fmt;

use terminal_size::{Width, terminal_size};

/// A trait for printing parse trees clipped to the terminal width.
pub trait PrintableTree
where
    Self: fmt::Display,
{
    fn print(&self) {
        if let Some((Width(w), _)) = terminal_size() {
            for line in self.to_string().lines() {
                if line.len() > w as usize {
                    println!("{}...", &line[..w as usize - 3]);
                } else {
                    println!("{}", line);
                }
            }
        } else {
            println!("{}", self);
        }
    }
}
