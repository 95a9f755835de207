//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire `flowtask_core` from environment configuration.
//! - Print a board summary to confirm seed loading and service wiring.

use flowtask_core::{
    core_version, init_logging, list_color, AppConfig, FlowTask, ListSelection, TaskFilter,
};
use log::info;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir)?;
    }

    let app = FlowTask::from_config(&config)?;
    let board = app.load_board().await;
    let sidebar = board.sidebar();

    println!("flowtask_core version={}", core_version());
    for list in &board.lists {
        let filter = TaskFilter {
            list: ListSelection::One(list.id.clone()),
            ..TaskFilter::default()
        };
        let stats = board.completion(&filter);
        println!(
            "list={} color={} open={} done={}/{}",
            list.name,
            list_color(&board.lists, &list.id),
            sidebar.for_list(&list.id),
            stats.completed,
            stats.total
        );
    }

    let overall = board.completion(&TaskFilter::default());
    println!(
        "all={} archived={} completion={}%",
        sidebar.all_active, sidebar.archived, overall.rate_percent
    );
    info!("event=cli_summary module=cli status=ok");
    Ok(())
}
