//! `waypoint sort`: heap sort integers

use waypoint_core::collections::heap_sort;
use waypoint_core::error::Result;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, values: Vec<i64>) -> Result<()> {
    let sorted = heap_sort(values);
    tracing::debug!(count = sorted.len(), "sorted values");

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&sorted)?),
        OutputFormat::Human => {
            let text: Vec<String> = sorted.iter().map(i64::to_string).collect();
            println!("{}", text.join(" "));
        }
    }

    Ok(())
}
