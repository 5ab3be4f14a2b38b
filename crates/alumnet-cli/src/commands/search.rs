//! One-shot search

use crate::args::FilterArgs;
use crate::commands::open_controller;
use crate::console::CliConsole;
use alumnet_core::AlumnetConfig;
use anyhow::bail;

/// Search once, print the ranked results and remember the query
pub async fn execute(
    config: &AlumnetConfig,
    query: &str,
    filter: &FilterArgs,
    json: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    let console = CliConsole::new(verbose);
    let controller = open_controller(config).await?;
    controller.set_filter(filter.to_filter());
    controller.on_query_change(query);

    let Some(search) = controller.search_now() else {
        bail!(
            "Query must be at least {} characters",
            config.search.min_query_len
        );
    };
    search.await?;

    let state = controller.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&state.results)?);
        return Ok(());
    }

    console.print_header(&format!("Results for \"{}\"", query.trim()));
    console.info(&format!("Filter: type={}", state.filter.kind));
    if state.results.is_empty() {
        console.warn("No results");
    } else {
        console.print_results(&state.results);
    }
    Ok(())
}
