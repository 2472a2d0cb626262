use caldeck_core::Session;
use caldeck_core::session::Clock;
use caldeck_core::storage::KeyValueStore;
use owo_colors::OwoColorize;

pub fn run<S: KeyValueStore, C: Clock>(session: &mut Session<S, C>, text: Option<&str>) {
    let matches = session.search(text).len();

    match session.search_query() {
        Some(query) => println!(
            "{}",
            format!("  {} matching \"{}\"", pluralize(matches), query).dimmed()
        ),
        None => println!("{}", "  Search cleared".dimmed()),
    }
}

fn pluralize(count: usize) -> String {
    if count == 1 {
        "1 event".to_string()
    } else {
        format!("{} events", count)
    }
}
