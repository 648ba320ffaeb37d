//! Interactive menu for the catalog. Everything here talks to the
//! terminal; the store never does.

use colored::*;
use libris::error::Result;
use libris::store::Library;
use std::path::Path;

mod prompt;
mod render;

/// Run the menu loop until the user exits (choice 6) or stdin closes.
/// Only the exit choice persists the catalog; EOF does not save.
pub fn run(library: &mut Library, data_path: &Path) -> Result<()> {
    loop {
        print_menu();
        let Some(choice) = prompt::read_line("Select an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => handle_add(library)?,
            "2" => handle_remove(library)?,
            "3" => handle_search(library)?,
            "4" => handle_list(library),
            "5" => handle_update_status(library)?,
            "6" => {
                library.save(data_path)?;
                println!("{}", "Library saved. Goodbye!".green());
                break;
            }
            _ => println!("{}", "Invalid choice, try again.".red()),
        }
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!("Menu:");
    println!("  1. Add book");
    println!("  2. Remove book");
    println!("  3. Search books");
    println!("  4. List all books");
    println!("  5. Update status");
    println!("  6. Exit");
}

fn handle_add(library: &mut Library) -> Result<()> {
    let Some(title) = prompt::read_line("Title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt::read_line("Author: ")? else {
        return Ok(());
    };
    let Some(year_str) = prompt::read_line("Year: ")? else {
        return Ok(());
    };

    let year: i32 = match year_str.parse() {
        Ok(year) => year,
        Err(_) => {
            println!("{}", "Year must be a number.".red());
            return Ok(());
        }
    };

    let book = library.add(title, author, year);
    println!("{}", "Added:".green());
    render::print_book(&book);
    Ok(())
}

fn handle_remove(library: &mut Library) -> Result<()> {
    let Some(id_str) = prompt::read_line("Id: ")? else {
        return Ok(());
    };
    let id: u32 = match id_str.parse() {
        Ok(id) => id,
        Err(_) => {
            println!("{}", "Id must be a number.".red());
            return Ok(());
        }
    };

    if library.remove(id) {
        println!("{}", "Book removed.".green());
    } else {
        println!("{}", format!("No book with id {}.", id).red());
    }
    Ok(())
}

fn handle_search(library: &Library) -> Result<()> {
    let Some(field) = prompt::read_line("Search by (title/author/year): ")? else {
        return Ok(());
    };
    let Some(query) = prompt::read_line("Search for: ")? else {
        return Ok(());
    };

    let matches = library.search(&query, &field);
    if matches.is_empty() {
        println!("{}", "No books found.".yellow());
    } else {
        render::print_books(matches);
    }
    Ok(())
}

fn handle_list(library: &Library) {
    let books = library.list_all();
    if books.is_empty() {
        println!("{}", "The library is empty.".dimmed());
    } else {
        render::print_books(books);
    }
}

fn handle_update_status(library: &mut Library) -> Result<()> {
    let Some(id_str) = prompt::read_line("Id: ")? else {
        return Ok(());
    };
    let id: u32 = match id_str.parse() {
        Ok(id) => id,
        Err(_) => {
            println!("{}", "Id must be a number.".red());
            return Ok(());
        }
    };
    let Some(status) = prompt::read_line("New status (available/checked out): ")? else {
        return Ok(());
    };

    if library.update_status(id, &status) {
        println!("{}", "Status updated.".green());
    } else {
        println!("{}", "Update failed: unknown id or invalid status.".red());
    }
    Ok(())
}
