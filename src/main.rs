use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use imagestore_fixtures::{
    batch::{FixtureBatch, GenerationReport},
    config::Config,
    models::{parse_shape_list, NamingStrategy},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the summary
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("warn")
                .add_directive("imagestore_fixtures=info".parse().unwrap())
        });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let report = match run(&matches).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn build_cli() -> Command {
    Command::new("generate_test_images")
        .about("Generate outline shape PNG fixtures in light and dark variants")
        .arg(
            Arg::new("output-dir")
                .help("Directory to write fixtures to [default: ~/Documents/ImageStore/unsorted]")
                .long("output-dir")
                .short('o')
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("size")
                .help("Canvas width and height in pixels")
                .long("size")
                .value_name("PX")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("stroke")
                .help("Outline stroke width in pixels")
                .long("stroke")
                .value_name("PX")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("naming")
                .help("File naming layout")
                .long("naming")
                .value_name("STRATEGY")
                .value_parser(["flat-suffix", "flat-inverse", "split"]),
        )
        .arg(
            Arg::new("shapes")
                .help("Comma separated shapes to generate (circle,square,triangle,diamond)")
                .long("shapes")
                .value_name("LIST"),
        )
        .arg(
            Arg::new("jobs")
                .help("Number of fixtures rendered concurrently")
                .long("jobs")
                .short('j')
                .value_name("N")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .help("Print the generation report as JSON")
                .long("json")
                .action(ArgAction::SetTrue),
        )
}

async fn run(matches: &ArgMatches) -> Result<GenerationReport> {
    let mut config = Config::from_env_except(&overridden_env_keys(matches))?;
    apply_cli_overrides(&mut config, matches)?;

    let batch = FixtureBatch::new(&config)?;
    Ok(batch.run().await?)
}

/// Environment keys whose flag was given on the command line. Their values
/// are skipped so an invalid one cannot fail a run that overrides it.
fn overridden_env_keys(matches: &ArgMatches) -> Vec<&'static str> {
    [("naming", "FIXTURE_NAMING"), ("shapes", "FIXTURE_SHAPES")]
        .into_iter()
        .filter(|(arg, _)| matches.get_one::<String>(arg).is_some())
        .map(|(_, key)| key)
        .collect()
}

fn apply_cli_overrides(config: &mut Config, matches: &ArgMatches) -> Result<()> {
    if let Some(dir) = matches.get_one::<PathBuf>("output-dir") {
        config.output_dir = dir.clone();
    }
    if let Some(size) = matches.get_one::<u32>("size") {
        config.canvas_size = *size;
    }
    if let Some(stroke) = matches.get_one::<u32>("stroke") {
        config.stroke_width = *stroke;
    }
    if let Some(naming) = matches.get_one::<String>("naming") {
        config.naming = naming.parse::<NamingStrategy>()?;
    }
    if let Some(shapes) = matches.get_one::<String>("shapes") {
        config.shapes = parse_shape_list(shapes)?;
    }
    if let Some(jobs) = matches.get_one::<usize>("jobs") {
        config.concurrency = (*jobs).max(1);
    }
    Ok(())
}

fn print_summary(report: &GenerationReport) {
    println!("Created {} images in {}", report.count(), report.output_dir.display());
    for name in report.file_names() {
        println!("  {}", name);
    }
}
