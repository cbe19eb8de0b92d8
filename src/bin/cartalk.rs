use std::env;
use std::path::PathBuf;

use cartalk_dl::cli::{self, CliOptions};

fn print_usage() {
    eprintln!("Usage: cartalk [OPTIONS]");
    eprintln!();
    eprintln!("Download publicly available Car Talk episodes via a CLI.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --show-browser                 Display the browser window while the downloader runs");
    eprintln!("  -f, --output-folder <PATH>     Destination folder for downloads (default: platform data dir)");
    eprintln!("  -d, --dry-run                  Show what would be downloaded without writing files");
    eprintln!("  -e, --download-new-episodes    Stop at the first episode already present on disk");
    eprintln!("  -h, --help                     Show this help");
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--show-browser" => options.show_browser = true,
            "-f" | "--output-folder" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| format!("{} requires a value", args[i - 1]))?;
                options.output_folder = Some(PathBuf::from(value));
            }
            "-d" | "--dry-run" => options.dry_run = true,
            "-e" | "--download-new-episodes" => options.download_new_episodes = true,
            other => return Err(format!("unknown option: {other}")),
        }
        i += 1;
    }
    Ok(options)
}

#[tokio::main]
async fn main() -> cartalk_dl::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    // No arguments means help, not a run
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    let dry_run = options.dry_run;
    match cli::run(options).await {
        Ok(stats) => {
            cli::print_summary(&stats, dry_run);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
