use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use list_cli::{ConsoleSurface, ListController, UreqTransport};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_help() {
    println!("commands:");
    println!("  list                 refetch and render the list");
    println!("  add <content>        create an item");
    println!("  edit <old> -> <new>  change an item's content");
    println!("  rm <content>         delete an item (asks for confirmation)");
    println!("  quit                 exit");
}

fn main() {
    init_tracing();

    let base_url =
        std::env::var("LIST_BASE_URL").unwrap_or_else(|_| "http://localhost:3030".to_string());

    let mut controller =
        ListController::new(&base_url, UreqTransport::new(), ConsoleSurface::new());

    // initial load
    controller.refresh();

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();

        match line.split_once(' ').map_or((line, ""), |(cmd, rest)| (cmd, rest)) {
            ("quit", _) | ("exit", _) => break,
            ("help", _) | ("", _) => print_help(),
            ("list", _) => controller.refresh(),
            ("add", rest) => controller.submit(rest),
            ("rm", rest) => controller.remove(rest.trim()),
            ("edit", rest) => match rest.split_once(" -> ") {
                Some((old, new)) => controller.edit(old.trim(), new),
                None => println!("usage: edit <old> -> <new>"),
            },
            (cmd, _) => println!("unknown command: {cmd} (try \"help\")"),
        }
    }
}
