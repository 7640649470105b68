//! Console front-end for the catalog core.
//!
//! This module is presentation glue only: it parses user commands, drives
//! [`LibraryService`], and turns results and error kinds into the
//! user-facing message wording of the original application. No catalog
//! logic lives here.

use crate::{models::NewBook, services::LibraryService};

pub const HELP: &str = "\
Commands:
  list                      show all books
  search <text>             search by title or author
  reset                     clear the search and show all books
  add <title> -- <author>   add a new book
  borrow <title>            borrow a book
  return <title>            return a book
  undo                      undo the last borrow or return
  help                      show this help
  quit                      exit";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Reset,
    Search(String),
    Add { title: String, author: String },
    Borrow(String),
    Return(String),
    Undo,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. The verb is case-insensitive; the remainder is
    /// passed through untouched so titles keep their spelling.
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "list" => Ok(Command::List),
            "reset" => Ok(Command::Reset),
            "search" => Ok(Command::Search(rest.to_string())),
            "add" => {
                let (title, author) = match rest.split_once("--") {
                    Some((title, author)) => (title.trim(), author.trim()),
                    None => (rest, ""),
                };
                Ok(Command::Add {
                    title: title.to_string(),
                    author: author.to_string(),
                })
            }
            "borrow" => Ok(Command::Borrow(rest.to_string())),
            "return" => Ok(Command::Return(rest.to_string())),
            "undo" => Ok(Command::Undo),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err("Type a command, or 'help' to list them.".to_string()),
            other => Err(format!(
                "Unknown command '{}'. Type 'help' to list commands.",
                other
            )),
        }
    }
}

/// Execute one command against the service and render the outcome.
/// `Quit` is handled by the caller.
pub fn execute(command: Command, library: &mut LibraryService) -> String {
    match command {
        Command::List => render_books(&library.list_all()),
        Command::Reset => format!("Showing all books.\n{}", render_books(&library.list_all())),
        Command::Search(query) => match library.search(&query) {
            Ok(results) => format!(
                "Found {} book(s) matching your search.\n{}",
                results.len(),
                render_books(&results)
            ),
            Err(_) => "Please enter a search term.".to_string(),
        },
        Command::Add { title, author } => {
            match library.add_book(NewBook::new(title, author)) {
                Ok(book) => format!(
                    "\"{}\" by {} has been added to the library!",
                    book.title, book.author
                ),
                Err(_) => {
                    "Please enter both a title and an author for the new book.".to_string()
                }
            }
        }
        Command::Borrow(title) => match library.borrow(&title) {
            Ok(book) => format!("\"{}\" has been successfully borrowed.", book.title),
            Err(err) => {
                tracing::debug!(code = err.code() as u32, %err, "borrow rejected");
                format!("\"{}\" is not available for borrowing.", title)
            }
        },
        Command::Return(title) => match library.return_book(&title) {
            Ok(book) => format!("\"{}\" has been successfully returned.", book.title),
            Err(err) => {
                tracing::debug!(code = err.code() as u32, %err, "return rejected");
                format!("\"{}\" cannot be returned.", title)
            }
        },
        Command::Undo => match library.undo() {
            Ok(Some(book)) if book.is_available => {
                format!("Undo successful: \"{}\" is now available.", book.title)
            }
            Ok(Some(book)) => {
                format!("Undo successful: \"{}\" is now borrowed.", book.title)
            }
            Ok(None) => "Undo successful.".to_string(),
            Err(_) => "No actions to undo.".to_string(),
        },
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}

/// Render an inventory listing, one line per book.
pub fn render_books(books: &[crate::models::Book]) -> String {
    if books.is_empty() {
        return "No books found. Try adding some books or resetting the search.".to_string();
    }
    books
        .iter()
        .map(|book| {
            format!(
                "  {:<30} by {:<22} [{}]",
                book.title,
                book.author,
                if book.is_available {
                    "Available"
                } else {
                    "Borrowed"
                }
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verbs_are_case_insensitive() {
        assert_eq!(Command::parse("LIST").unwrap(), Command::List);
        assert_eq!(
            Command::parse("Borrow Moby Dick").unwrap(),
            Command::Borrow("Moby Dick".to_string())
        );
    }

    #[test]
    fn test_parse_add_splits_on_separator() {
        assert_eq!(
            Command::parse("add The Hobbit -- J.R.R. Tolkien").unwrap(),
            Command::Add {
                title: "The Hobbit".to_string(),
                author: "J.R.R. Tolkien".to_string()
            }
        );
    }

    #[test]
    fn test_parse_add_without_separator_leaves_author_blank() {
        assert_eq!(
            Command::parse("add The Hobbit").unwrap(),
            Command::Add {
                title: "The Hobbit".to_string(),
                author: String::new()
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_verbs() {
        assert!(Command::parse("destroy everything").is_err());
        assert!(Command::parse("").is_err());
    }

    #[test]
    fn test_execute_maps_errors_to_original_wording() {
        let mut library = LibraryService::new();
        assert_eq!(
            execute(Command::Undo, &mut library),
            "No actions to undo."
        );
        assert_eq!(
            execute(Command::Borrow("1984".to_string()), &mut library),
            "\"1984\" is not available for borrowing."
        );
        assert_eq!(
            execute(Command::Search("   ".to_string()), &mut library),
            "Please enter a search term."
        );
    }
}
