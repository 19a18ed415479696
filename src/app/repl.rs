// Stocklist - app/repl.rs
//
// Interactive catalog session: reads commands from stdin, dispatches to
// AppState, prints results to stdout. Thin presentation adapter — every
// command maps to one synchronous core call; no decision logic lives
// here beyond parsing and message formatting.

use crate::app::state::AppState;
use crate::core::export;
use crate::core::model::{Product, SortOrder};
use crate::platform::config::AppConfig;
use crate::util::error::{Result, StocklistError};
use std::io::{BufRead, Write};
use std::path::Path;

/// Run the interactive session until `quit` or EOF.
pub fn run(config: &AppConfig) -> Result<()> {
    let mut state = AppState::new(config.min_name_len);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!(
        "{} {} — in-memory product catalog. Type 'help' for commands.",
        crate::util::constants::APP_NAME,
        crate::util::constants::APP_VERSION
    );

    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush().map_err(|e| StocklistError::Io {
            path: "stdout".into(),
            operation: "flush",
            source: e,
        })?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| StocklistError::Io {
                path: "stdin".into(),
                operation: "read",
                source: e,
            })?;
        if read == 0 {
            break; // EOF
        }

        match dispatch(&mut state, config, line.trim()) {
            Command::Continue => {}
            Command::Quit => break,
        }
    }

    Ok(())
}

enum Command {
    Continue,
    Quit,
}

/// Parse and execute one command line.
fn dispatch(state: &mut AppState, config: &AppConfig, line: &str) -> Command {
    let mut parts = line.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match verb {
        "" => {}
        "help" => print_help(&config.categories),
        "add" => cmd_add(state, rest),
        "rm" => cmd_remove(state, rest),
        "list" => print_view(state),
        "category" => cmd_category(state, rest),
        "search" => {
            state.set_search(rest);
            print_view(state);
        }
        "sort" => cmd_sort(state, rest),
        "clear" => {
            state.clear_filters();
            print_view(state);
        }
        "stats" => cmd_stats(state),
        "export" => cmd_export(state, config, rest),
        "quit" | "exit" => return Command::Quit,
        other => println!("Unknown command '{other}'. Type 'help' for commands."),
    }
    Command::Continue
}

fn print_help(categories: &[String]) {
    println!("Commands:");
    println!("  add <price> <category> <name...>   add a product");
    println!("  rm <id>                            remove a product by id");
    println!("  list                               show the current view");
    println!("  category <name|all>                filter by category");
    println!("  search <text>                      filter names by substring");
    println!("  sort <asc|desc|none>               order the view by price");
    println!("  clear                              reset all filters");
    println!("  stats                              catalog statistics");
    println!("  export <csv|json> <path>           export the current view");
    println!("  quit                               end the session");
    println!("Known categories: {}", categories.join(", "));
}

/// `add <price> <category> <name...>` — name last so it may contain spaces.
fn cmd_add(state: &mut AppState, args: &str) {
    let mut parts = args.split_whitespace();
    let (price_raw, category) = match (parts.next(), parts.next()) {
        (Some(p), Some(c)) => (p, c),
        _ => {
            println!("Usage: add <price> <category> <name...>");
            return;
        }
    };
    let name = parts.collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        println!("Usage: add <price> <category> <name...>");
        return;
    }

    // A non-numeric price is a validation problem, reported alongside any
    // other violations rather than as a separate parse failure.
    let price = price_raw.parse::<f64>().unwrap_or(f64::NAN);

    match state.add_product(&name, price, category) {
        Ok(_) => println!("{}", state.status_message),
        Err(err) => {
            println!("Product not added:");
            for violation in &err.violations {
                println!("  - {violation}");
            }
        }
    }
}

fn cmd_remove(state: &mut AppState, args: &str) {
    match args.parse::<u64>() {
        Ok(id) => {
            state.remove_product(id);
            println!("{}", state.status_message);
        }
        Err(_) => println!("Usage: rm <id>"),
    }
}

fn cmd_category(state: &mut AppState, args: &str) {
    if args.is_empty() {
        println!("Usage: category <name|all>");
        return;
    }
    let category = if args.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(args.to_string())
    };
    state.set_category(category);
    print_view(state);
}

fn cmd_sort(state: &mut AppState, args: &str) {
    let order = match args.to_lowercase().as_str() {
        "asc" | "ascending" => SortOrder::Ascending,
        "desc" | "descending" => SortOrder::Descending,
        "none" => SortOrder::None,
        _ => {
            println!("Usage: sort <asc|desc|none>");
            return;
        }
    };
    state.set_sort(order);
    print_view(state);
}

fn cmd_stats(state: &AppState) {
    match state.statistics() {
        Some(stats) => {
            println!("Products:       {}", stats.count);
            println!("Average price:  {:.2}", stats.average_price);
            println!(
                "Cheapest:       {} ({:.2})",
                stats.cheapest.name, stats.cheapest.price
            );
            println!(
                "Most expensive: {} ({:.2})",
                stats.most_expensive.name, stats.most_expensive.price
            );
        }
        None => println!("No products registered yet — no statistics to show."),
    }
}

fn cmd_export(state: &AppState, config: &AppConfig, args: &str) {
    let mut parts = args.splitn(2, char::is_whitespace);
    let (format, path_raw) = match (parts.next(), parts.next()) {
        (Some(f), Some(p)) if !p.trim().is_empty() => (f, p.trim()),
        _ => {
            println!("Usage: export <csv|json> <path>");
            return;
        }
    };
    let path = Path::new(path_raw);

    if state.view_indices().len() > config.max_export_entries {
        println!(
            "View has {} products, above the configured export limit of {}.",
            state.view_indices().len(),
            config.max_export_entries
        );
        return;
    }

    let file = match std::fs::File::create(path) {
        Ok(f) => f,
        Err(e) => {
            println!("Cannot create '{}': {e}", path.display());
            return;
        }
    };

    let result = match format.to_lowercase().as_str() {
        "csv" => export::export_csv(state.catalog(), state.view_indices(), file, path),
        "json" => export::export_json(state.catalog(), state.view_indices(), file, path),
        other => {
            println!("Unknown export format '{other}'. Use csv or json.");
            return;
        }
    };

    match result {
        Ok(count) => println!("Exported {count} products to '{}'.", path.display()),
        Err(e) => println!("Export failed: {e}"),
    }
}

fn print_view(state: &AppState) {
    let view = state.view_products();
    if view.is_empty() {
        println!("(no products match the current view)");
        return;
    }
    println!("{:>5}  {:<24} {:>10}  {:<14} {}", "id", "name", "price", "category", "registered");
    for product in view {
        print_row(product);
    }
    println!("{} of {} products shown.", state.view_indices().len(), state.catalog().len());
}

fn print_row(product: &Product) {
    println!(
        "{:>5}  {:<24} {:>10.2}  {:<14} {}",
        product.id,
        product.name,
        product.price,
        product.category,
        product.registered_at.format("%Y-%m-%d %H:%M:%S"),
    );
}
