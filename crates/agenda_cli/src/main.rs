//! CLI smoke probe.
//!
//! # Responsibility
//! - Drive `agenda_core` against a live backend: load both resource lists
//!   and print them in the active sort order.
//! - Keep output deterministic for quick local sanity checks.

use agenda_core::{
    core_version, default_log_level, init_logging, Contact, Note, Resource, ResourcePage,
    RestConfig, RestStore, DEFAULT_BASE_URL,
};

fn main() {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let log_dir = std::env::temp_dir().join("agenda-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("agenda_core version={}", core_version());
    println!("backend={base_url}");

    let config = RestConfig { base_url };
    let contacts = print_page::<Contact>("contatos", RestStore::new(config.clone()));
    let notes = print_page::<Note>("notas", RestStore::new(config));

    std::process::exit(contacts.max(notes));
}

fn print_page<R: Resource>(label: &str, store: RestStore) -> i32 {
    let mut page = ResourcePage::<R, RestStore>::new(store);
    match page.load() {
        Ok(()) => {
            println!("{label}: {} registros", page.items().len());
            for record in page.visible() {
                println!("  - {}", record.sort_key());
            }
            0
        }
        Err(err) => {
            eprintln!("{label}: {} ({err})", R::MESSAGES.load_failed);
            1
        }
    }
}
