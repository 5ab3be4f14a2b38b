//! Interactive search prompt
//!
//! Each line behaves like typing into the search surface and pressing Enter.
//! A bare number opens that result; `:` commands adjust filters and history.

use crate::args::FilterArgs;
use crate::commands::open_controller;
use crate::console::CliConsole;
use alumnet_core::{AlumnetConfig, SearchController, SearchState, SurfacePhase, TypeFilter};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const HELP: &str = "\
  <text>          search for <text>
  <n>             open result n
  :type <t>       all, post, alumni, event, job or message
  :location <l>   location filter (empty clears)
  :batch <b>      batch filter (empty clears)
  :history        show recent searches
  :h <n>          search recent entry n again
  :forget <n>     remove recent entry n
  :clear          forget all recent searches
  :help           show this help
  :q              quit";

/// A parsed prompt line
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Query(&'a str),
    Open(usize),
    Type(&'a str),
    Location(&'a str),
    Batch(&'a str),
    History,
    RecallHistory(usize),
    Forget(usize),
    ClearHistory,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return match line.parse::<usize>() {
            Ok(n) if n > 0 => Input::Open(n),
            _ => Input::Query(line),
        };
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim()))
        .unwrap_or((command, ""));
    let index = || arg.parse::<usize>().ok().filter(|n| *n > 0);

    match name {
        "q" | "quit" => Input::Quit,
        "help" | "?" => Input::Help,
        "type" => Input::Type(arg),
        "location" => Input::Location(arg),
        "batch" => Input::Batch(arg),
        "history" => Input::History,
        "h" => index().map_or(Input::Unknown(line), Input::RecallHistory),
        "forget" => index().map_or(Input::Unknown(line), Input::Forget),
        "clear" => Input::ClearHistory,
        _ => Input::Unknown(line),
    }
}

/// Run the prompt loop until `:q` or end of input
pub async fn execute(
    config: &AlumnetConfig,
    filter: &FilterArgs,
    verbose: bool,
) -> anyhow::Result<()> {
    let console = CliConsole::new(verbose);
    let controller = open_controller(config).await?;
    controller.set_filter(filter.to_filter());

    console.print_header("Alumnet search");
    println!("Type a query, a result number, or :help");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", prompt(&controller.snapshot()));
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Help => println!("{}", HELP),
            Input::Query(query) => {
                controller.on_query_change(query);
                if query.is_empty() {
                    continue;
                }
                match controller.search_now() {
                    Some(search) => {
                        search.await?;
                        show_results(&console, &controller.snapshot());
                    }
                    None => console.warn(&format!(
                        "Type at least {} characters to search",
                        config.search.min_query_len
                    )),
                }
            }
            Input::Open(n) => match controller.select(n - 1) {
                Some(route) => {
                    console.success(&format!("Open {}", route));
                    controller.open();
                }
                None => console.warn(&format!("No result {}", n)),
            },
            Input::Type(value) => match value.parse::<TypeFilter>() {
                Ok(kind) => {
                    controller.set_type(kind);
                    settle(&console, &controller).await;
                }
                Err(e) => console.error(&e.to_string()),
            },
            Input::Location(value) => {
                controller.set_location(value);
                settle(&console, &controller).await;
            }
            Input::Batch(value) => {
                controller.set_batch(value);
                settle(&console, &controller).await;
            }
            Input::History => console.print_history(&controller.history()),
            Input::RecallHistory(n) => {
                if controller.select_history(n - 1) {
                    settle(&console, &controller).await;
                } else {
                    console.warn(&format!("No recent search {}", n));
                }
            }
            Input::Forget(n) => match controller.history().get(n - 1) {
                Some(entry) => {
                    controller.remove_history(entry).await;
                    console.success(&format!("Forgot \"{}\"", entry));
                }
                None => console.warn(&format!("No recent search {}", n)),
            },
            Input::ClearHistory => {
                controller.clear_history().await;
                console.success("Recent searches cleared");
            }
            Input::Unknown(text) => console.warn(&format!("Unknown command: {}", text)),
        }
    }

    controller.close();
    debug!("Interactive search finished");
    Ok(())
}

fn prompt(state: &SearchState) -> String {
    let mut parts = vec![format!("type={}", state.filter.kind)];
    if let Some(location) = &state.filter.location {
        parts.push(format!("location={}", location));
    }
    if let Some(batch) = &state.filter.batch {
        parts.push(format!("batch={}", batch));
    }
    format!("[{}] search>", parts.join(" "))
}

/// Wait for any search started by a filter change, then show where things stand
async fn settle(console: &CliConsole, controller: &SearchController) {
    let mut updates = controller.subscribe();
    let settled = updates
        .wait_for(|state| state.phase != SurfacePhase::Searching)
        .await
        .map(|state| SearchState::clone(&state));

    if let Ok(state) = settled {
        show_results(console, &state);
    }
}

fn show_results(console: &CliConsole, state: &SearchState) {
    match state.phase {
        SurfacePhase::Results => console.print_results(&state.results),
        SurfacePhase::Empty => console.warn("No results"),
        _ => {}
    }
}
