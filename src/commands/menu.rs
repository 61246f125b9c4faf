//! Interactive menu loop.
//!
//! Input problems (unknown category, bad index, unwritable data file) are
//! reported and the menu comes back; only prompt failures end the session.

use anyhow::Result;
use dialoguer::{Input, Select};
use evreg_core::{EventCategory, EvregError, NewEvent, Store, User};
use owo_colors::OwoColorize;

use super::list;
use crate::render::Render;

const MENU_ITEMS: [&str; 5] = [
    "1. Register event",
    "2. List events",
    "3. Confirm participation",
    "4. View my confirmed events",
    "5. Exit",
];

/// Everything a session works on, created at startup and passed in.
pub struct Session {
    pub store: Store,
    pub user: User,
}

pub fn run(mut session: Session) -> Result<()> {
    println!("{}", "Welcome to the event registry!".bold());

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => register(&mut session.store)?,
            1 => list::print(&session.store),
            2 => confirm(&mut session)?,
            3 => show_confirmed(&session.user),
            _ => {
                println!("{}", "Goodbye!".dimmed());
                return Ok(());
            }
        }
    }
}

fn register(store: &mut Store) -> Result<()> {
    let tags: Vec<_> = EventCategory::ALL.iter().map(|c| c.tag()).collect();

    let new_event = NewEvent {
        name: Input::new().with_prompt("  Name").interact_text()?,
        address: Input::new().with_prompt("  Address").interact_text()?,
        category: Input::new()
            .with_prompt(format!("  Category ({})", tags.join(", ")))
            .interact_text()?,
        timestamp: Input::new()
            .with_prompt("  Date and time (YYYY-MM-DD HH:MM)")
            .interact_text()?,
        description: Input::new()
            .with_prompt("  Description")
            .allow_empty(true)
            .interact_text()?,
    };

    match new_event.build().and_then(|event| store.register(event)) {
        Ok(_) => println!("{}", "  Event registered.".green()),
        Err(e) => report(&e),
    }

    Ok(())
}

fn confirm(session: &mut Session) -> Result<()> {
    if session.store.is_empty() {
        println!("{}", "  No events registered yet.".dimmed());
        return Ok(());
    }

    list::print(&session.store);

    let input: String = Input::new()
        .with_prompt("  Index of the event to attend")
        .interact_text()?;

    let store = &session.store;
    let result = store
        .parse_index(&input)
        .and_then(|index| store.confirm_at(index, &mut session.user));

    match result {
        Ok(event) => println!(
            "{}",
            format!("  You are attending: {}", event.name()).green()
        ),
        Err(e) => report(&e),
    }

    Ok(())
}

fn show_confirmed(user: &User) {
    let confirmed = user.confirmed_events();

    if confirmed.is_empty() {
        println!("{}", "  No confirmed events.".dimmed());
        return;
    }

    println!("{}", format!("  Confirmed events for {}:", user.name).bold());
    for event in confirmed {
        println!("  {}", event.render());
    }
}

fn report(err: &EvregError) {
    match err {
        // register and confirm keep their in-memory change when the write fails
        EvregError::Io(e) => eprintln!(
            "  {}",
            format!("Kept for this session, but the data file could not be written: {e}").yellow()
        ),
        _ => eprintln!("  {}", err.to_string().red()),
    }
}
