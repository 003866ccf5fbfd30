use anyhow::Context;
use clap::{Arg, ArgGroup, Command};
use log::LevelFilter;
use phish_scan::config::{self, ScannerConfig};
use phish_scan::url_features::{UrlFeatures, FEATURE_NAMES};
use phish_scan::{InputKind, PhishingDetector, ScoreResult};
use std::io::Read;
use std::process;

const EXIT_LEGITIMATE: i32 = 0;
const EXIT_PHISHING: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    let matches = Command::new("phish-scan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rule-based phishing risk scoring for URLs and message text")
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("URL to scan")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("text")
                .short('t')
                .long("text")
                .value_name("TEXT")
                .help("Message text to analyze")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("text-file")
                .long("text-file")
                .value_name("FILE")
                .help("Read message text from a file ('-' for stdin)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the default configuration to FILE and exit")
                .action(clap::ArgAction::Set),
        )
        .group(
            ArgGroup::new("input")
                .args(["url", "text", "text-file", "generate-config"])
                .required(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("YAML file overriding thresholds and confidence baselines")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["human", "json"])
                .default_value("human"),
        )
        .arg(
            Arg::new("features")
                .long("features")
                .help("Also print the lexical feature vector of the URL")
                .requires("url")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging of every triggered check")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let scanner_config = match matches.get_one::<String>("config") {
        Some(path) => match config::load_config(path) {
            Ok(config) => {
                log::info!("Loaded configuration from: {}", path);
                config
            }
            Err(e) => {
                eprintln!("Error loading configuration: {e:#}");
                process::exit(EXIT_USAGE);
            }
        },
        None => ScannerConfig::default(),
    };

    let (kind, raw) = match read_input(&matches) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error reading input: {e:#}");
            process::exit(EXIT_USAGE);
        }
    };

    let input = raw.trim();
    if input.is_empty() {
        match kind {
            InputKind::Url => eprintln!("Please enter a URL to scan"),
            InputKind::Text => eprintln!("Please enter text to analyze"),
        }
        process::exit(EXIT_USAGE);
    }

    let detector = PhishingDetector::new(&scanner_config);
    let result = detector.analyze(kind, input);
    let features = if matches.get_flag("features") {
        Some(UrlFeatures::extract(input))
    } else {
        None
    };

    let json = matches
        .get_one::<String>("format")
        .is_some_and(|format| format == "json");
    if json {
        if let Err(e) = print_json(&result, features.as_ref()) {
            eprintln!("Error encoding result: {e:#}");
            process::exit(EXIT_USAGE);
        }
    } else {
        print_human(&result);
        if let Some(features) = &features {
            print_features(features);
        }
    }

    process::exit(if result.is_phishing {
        EXIT_PHISHING
    } else {
        EXIT_LEGITIMATE
    });
}

fn read_input(matches: &clap::ArgMatches) -> anyhow::Result<(InputKind, String)> {
    if let Some(url) = matches.get_one::<String>("url") {
        return Ok((InputKind::Url, url.clone()));
    }
    if let Some(text) = matches.get_one::<String>("text") {
        return Ok((InputKind::Text, text.clone()));
    }
    let path = matches
        .get_one::<String>("text-file")
        .context("No input given")?;
    let text = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };
    Ok((InputKind::Text, text))
}

fn generate_default_config(path: &str) {
    let written = ScannerConfig::default()
        .to_yaml()
        .and_then(|yaml| std::fs::write(path, yaml).map_err(Into::into));
    match written {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Please edit the configuration file to suit your needs.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e}");
            process::exit(EXIT_USAGE);
        }
    }
}

fn print_human(result: &ScoreResult) {
    let icon = if result.is_phishing { "⚠️" } else { "✅" };
    println!(
        "{} {}  ({}% confidence)",
        icon,
        result.classification(),
        result.confidence
    );
    println!("{}", result.explanation());
    println!();
    println!("Algorithm:  {}", result.algorithm);
    println!("Risk Score: {}/100", result.score);
    println!("Analysis:");
    for reason in &result.reasons {
        println!("  • {}", reason);
    }
}

fn print_features(features: &UrlFeatures) {
    println!();
    println!("URL features:");
    for (name, value) in FEATURE_NAMES.iter().zip(features.to_vector()) {
        println!("  {:<16} {}", name, value);
    }
}

fn print_json(result: &ScoreResult, features: Option<&UrlFeatures>) -> anyhow::Result<()> {
    let mut output = serde_json::to_value(result)?;
    if let Some(features) = features {
        output = serde_json::json!({
            "result": output,
            "features": serde_json::to_value(features)?,
        });
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
