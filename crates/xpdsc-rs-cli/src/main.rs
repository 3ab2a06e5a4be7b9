use clap::Parser;
use log::error;
use std::fs;
use std::path::{Path, PathBuf};

use xpdsc_rs::{XpdscError, convert_str, source_name, to_json_string};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CMSIS .pdsc file
    #[arg(short = 'i', long = "ifile", num_args = 0..=1)]
    ifile: Option<PathBuf>,

    /// Output xpdsc .json file
    #[arg(short = 'o', long = "ofile", num_args = 0..=1)]
    ofile: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let (Some(input), Some(output)) = (args.ifile, args.ofile) else {
        usage();
        return;
    };

    if let Err(e) = run(&input, &output) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn usage() {
    println!("Usage:");
    println!("  xpdsc -i pdsc -o json");
}

fn run(input: &Path, output: &Path) -> Result<(), XpdscError> {
    println!("Generate xpdsc.json from CMSIS .pdsc.");

    let xml_content = fs::read_to_string(input)?;
    println!("'{}' read.", input.display());

    let package = convert_str(&xml_content, &source_name(input))?;
    let json = to_json_string(&package)?;
    fs::write(output, json)?;
    println!("'{}' written.", output.display());
    Ok(())
}
