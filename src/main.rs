use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use trent::config::{self, Encoding, LineEnding, Settings};
use trent::report::{ReportRenderer, ReportSinks, SummaryView};
use trent::{entropy_order0, entropy_order1, entropy_order2, scan_reader, Error};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Human,
    Json,
}

#[derive(clap::Parser, Debug)]
#[command(name = "trent", version, about = "Order-0/1/2 letter entropy of Turkish text")]
struct Cli {
    /// Input file (ISO-8859-9 bytes), or `-` for stdin
    input: String,

    /// Directory for the mono/dual/triple report files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// How letters are written into the reports
    #[arg(long, value_enum)]
    encoding: Option<Encoding>,

    /// Line terminator used in the reports
    #[arg(long, value_enum)]
    line_ending: Option<LineEnding>,

    /// Summary printed to stdout: human or json
    #[arg(short, long, value_enum, default_value_t = Format::Human)]
    format: Format,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn settings_for(cli: &Cli) -> Result<Settings> {
    let cfg = match &cli.config {
        Some(p) => config::load_config_from(p)?,
        None => config::load_default_config(),
    };
    let mut settings = Settings::from_config(cfg);
    // CLI overrides
    if let Some(d) = &cli.output_dir { settings.output_dir = d.clone() }
    if let Some(e) = cli.encoding { settings.encoding = e }
    if let Some(l) = cli.line_ending { settings.line_ending = l }
    Ok(settings)
}

fn open_input(input: &str) -> Result<Box<dyn Read>, Error> {
    if input == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    File::open(input)
        .map(|f| Box::new(f) as Box<dyn Read>)
        .map_err(|source| Error::InputUnavailable { path: input.to_string(), source })
}

fn fmt_entropy(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |e| format!("{:.6}", e))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = settings_for(&cli)?;
    log::debug!("settings: {:?}", settings);

    // input first, then every sink, before a single byte is counted
    let input = open_input(&cli.input)?;
    let sinks = ReportSinks::create(settings.output_paths())?;

    let summary = scan_reader(input, &cli.input)?;
    let renderer = ReportRenderer::new(&summary, settings.encoding, settings.line_ending);
    let written = sinks.write(&renderer)?;

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&SummaryView::from(&summary))?),
        Format::Human => {
            let t = &summary.table;
            println!("Read {} bytes, {} letters", summary.bytes_read, t.total_letters());
            println!("Entropy        = {}", fmt_entropy(entropy_order0(t)));
            println!("Joint Entropy  = {}", fmt_entropy(entropy_order1(t)));
            println!("Triple Entropy = {}", fmt_entropy(entropy_order2(t)));
            println!("Generated output files:");
            for p in &written { println!("{}", p.display()) }
        }
    }

    Ok(())
}
