mod export;
mod network;
mod plot;
mod prompt;
mod records;
mod routes;
mod table;

use anyhow::Result;
use clap::Parser;
use std::env;
use std::path::PathBuf;

use network::Network;
use records::Record;
use table::{Column, Granularity, Selection};

#[derive(Parser)]
struct Args {
    /// Directory holding Suburban.csv and Intercity.csv
    #[clap(long, default_value = ".")]
    data_dir: PathBuf,
    /// Pick the network up front instead of being prompted
    #[clap(long)]
    network: Option<Network>,
    /// Write the filtered records to this JSON file after display
    #[clap(long)]
    export: Option<PathBuf>,
    /// Directory the chart SVG is written to
    #[clap(long, default_value = ".")]
    chart_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Sydney Trains Punctuality Data Viewer");
    println!("{}", "=".repeat(40));

    let network = match choose_network(&args)? {
        Some(network) => network,
        None => {
            println!("Invalid choice. Please run again and choose 1 or 2.");
            return Ok(());
        }
    };

    let data_path = args.data_dir.join(network.file_name());
    if !data_path.exists() {
        println!("Error: {} not found.", data_path.display());
        if let Ok(cwd) = env::current_dir() {
            println!("Current directory: {}", cwd.display());
        }
        return Ok(());
    }

    println!("\nLoading {network} data...");
    let all_records = records::load(&data_path);
    if all_records.is_empty() {
        println!("No data found or error reading file.");
        return Ok(());
    }

    let lines = table::distinct_values(&all_records, Column::Line);
    println!("\nAvailable lines in {network} network:");
    for (i, line) in lines.iter().enumerate() {
        println!("{}. {line}", i + 1);
    }

    let answer = prompt::ask(&format!("\nSelect a line (1-{}): ", lines.len()))?;
    let selected_line = match prompt::parse_menu_choice(&answer, lines.len()) {
        Some(index) => &lines[index],
        None => {
            println!("Invalid selection.");
            return Ok(());
        }
    };

    println!("\nSelected: {selected_line}");
    let route_directory = routes::route_directory();
    if let Some(route) = route_directory.get(selected_line.as_str()) {
        println!("Route: {route}");
    }
    println!("{}", "-".repeat(50));

    let granularity = choose_granularity()?;
    let selection =
        granularity.narrow(Selection::all().equals(Column::Line, selected_line.as_str()));
    let filtered = selection.apply(&all_records);

    if filtered.is_empty() {
        println!(
            "\nNo data found for {selected_line} ({})",
            granularity.label()
        );
        return Ok(());
    }

    println!(
        "\n{network} Network: {selected_line} Line ({})",
        granularity.label()
    );
    println!("{}", "-".repeat(50));
    print_table(&filtered);

    if let Some(export_path) = &args.export {
        export::write_records(&filtered, export_path)?;
        println!(
            "\nExported {} records to {}",
            filtered.len(),
            export_path.display()
        );
    }

    let answer = prompt::ask("\nWould you like to see a graph? (y/n): ")?;
    if prompt::is_yes(&answer) {
        let chart_path = args.chart_dir.join(chart_file_name(selected_line));
        let title = format!("{selected_line} Line Punctuality ({})", granularity.label());
        plot::render_chart(&filtered, &title, &chart_path)?;
        println!("Chart written to {}", chart_path.display());
    }

    Ok(())
}

fn choose_network(args: &Args) -> Result<Option<Network>> {
    if let Some(network) = args.network {
        return Ok(Some(network));
    }
    println!("\nWhich network would you like to explore?");
    println!("1. Suburban");
    println!("2. Intercity");
    let answer = prompt::ask("Enter your choice (1 or 2): ")?;
    Ok(Network::from_menu_choice(&answer))
}

fn choose_granularity() -> Result<Granularity> {
    println!("\nWhat type of data would you like to see?");
    println!("1. Monthly data");
    println!("2. Yearly data");
    println!("3. Both");
    let answer = prompt::ask("Enter your choice (1-3): ")?;
    // Anything other than 1 or 2 shows everything, same as choosing 3.
    Ok(match answer.as_str() {
        "1" => Granularity::Monthly,
        "2" => Granularity::Yearly,
        _ => Granularity::Both,
    })
}

fn print_table(records: &[Record]) {
    for record in records {
        println!(
            "{:<6} {:<15} {:>6}",
            record.period, record.date, record.punctuality
        );
    }
}

fn chart_file_name(line: &str) -> String {
    let slug: String = line
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("{slug}_punctuality.svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_file_name() {
        assert_eq!(chart_file_name("T1"), "T1_punctuality.svg");
        assert_eq!(
            chart_file_name("Central Coast & Newcastle"),
            "Central_Coast___Newcastle_punctuality.svg"
        );
    }
}
