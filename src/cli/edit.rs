use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::shelf;
use crate::{
    api, error, info,
    management::{EditSession, LibraryManager, form_fields},
    success,
    types::LookupResponse,
    utils, warning,
};

/// Runs one interactive edit session over the book with the given id.
///
/// The session opens on a snapshot of the editable fields and stays open
/// until a successful save or a (possibly confirmed) quit. Any failure
/// inside the loop keeps the session open with the current edits intact.
pub async fn edit(id: String) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Loading books...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let library = match LibraryManager::refresh(None).await {
        Ok(library) => {
            pb.finish_and_clear();
            library
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to load books. Err: {}", e);
        }
    };

    let book = match library.find(&id) {
        Some(book) => book,
        None => error!("No book with id '{}' in the library.", id),
    };

    let mut session = EditSession::open(book);
    info!(
        "Editing \"{}\" ({})",
        session.current().name,
        session.book_id()
    );
    print_form(&session);
    print_cover_preview(&session);
    info!("Commands: set <field> <value>, show, diff, reset, lookup [isbn], save, quit");

    loop {
        let line = match utils::prompt_line("edit>") {
            Some(line) => line,
            None => {
                // stdin closed; nothing left to confirm interactively
                if session.is_dirty() {
                    warning!("Unsaved changes discarded.");
                }
                break;
            }
        };

        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => continue,

            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    warning!("Usage: set <field> <value>");
                    continue;
                }
                match session.set(field, value) {
                    Ok(()) => {
                        if field == "cover" {
                            print_cover_preview(&session);
                        }
                    }
                    Err(e) => warning!("{}", e),
                }
            }

            "show" => {
                print_form(&session);
                print_cover_preview(&session);
            }

            "diff" => {
                if !session.is_dirty() {
                    info!("No unsaved changes.");
                    continue;
                }
                let originals = form_fields(session.original());
                let currents = form_fields(session.current());
                for ((name, before), (_, after)) in originals.into_iter().zip(currents) {
                    if before != after {
                        println!("  {}: '{}' -> '{}'", name, before, after);
                    }
                }
            }

            "reset" => {
                session.reset();
                info!("Changes reset to original values");
                print_cover_preview(&session);
            }

            "lookup" => {
                let isbn = if rest.is_empty() {
                    session.current().isbn.clone()
                } else {
                    rest.to_string()
                };
                if isbn.trim().is_empty() {
                    warning!("Please enter an ISBN");
                    continue;
                }
                match api::lookup::lookup(&isbn).await {
                    Ok(LookupResponse {
                        success: true,
                        book: Some(found),
                        ..
                    }) => {
                        session.apply_lookup(&found);
                        success!("Book details populated successfully!");
                        print_cover_preview(&session);
                    }
                    Ok(resp) => {
                        info!(
                            "{}",
                            resp.message.unwrap_or_else(|| "Book not found".to_string())
                        );
                    }
                    Err(_) => warning!("Failed to lookup book details"),
                }
            }

            "save" => {
                if let Err(e) = session.validate() {
                    warning!("{}", e);
                    continue;
                }
                match api::books::update(&session.to_book()).await {
                    Ok(_) => {
                        success!("Book updated successfully!");
                        match LibraryManager::refresh(None).await {
                            Ok(library) => shelf::render_shelf(&library),
                            Err(_) => warning!("Failed to load books"),
                        }
                        break;
                    }
                    Err(e) => warning!("Failed to update book. Err: {}", e),
                }
            }

            "quit" | "q" | "close" => {
                if session.is_dirty()
                    && !utils::confirm("You have unsaved changes. Are you sure you want to close?")
                {
                    info!("Close cancelled.");
                    continue;
                }
                break;
            }

            "help" | "?" => {
                info!("set <field> <value>  change one field (see 'show' for names)");
                info!("show                 print all fields");
                info!("diff                 show unsaved changes");
                info!("reset                restore all fields to their original values");
                info!("lookup [isbn]        prefill details from the ISBN lookup service");
                info!("save                 validate and save, then close");
                info!("quit                 close, asking first if there are unsaved changes");
            }

            _ => warning!("Unknown command '{}'. Type 'help' for a list of commands.", cmd),
        }
    }
}

fn print_form(session: &EditSession) {
    for (name, value) in form_fields(session.current()) {
        println!("  {:<12} {}", name, value);
    }
}

fn print_cover_preview(session: &EditSession) {
    match session.cover_preview() {
        Some(url) => info!("Cover preview: {}", url),
        None => info!("Cover preview hidden"),
    }
}
