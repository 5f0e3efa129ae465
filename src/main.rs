use log::{error, info};
use std::env;
use std::io::{self, BufRead, Write};
use tag_cloud_generator::{generate_tag_cloud_file, Error, DEFAULT_TAG_CLOUD_CONFIG};

/// Returns the positional argument at `index`, or asks for it on stdin.
fn arg_or_prompt(args: &[String], index: usize, prompt: &str) -> Result<String, Error> {
    if let Some(arg) = args.get(index) {
        return Ok(arg.clone());
    }

    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(answer.trim().to_string())
}

fn parse_cloud_size(value: &str) -> Result<usize, Error> {
    let n: usize = value.trim().parse().map_err(|_| {
        Error::InvalidArgument(format!("{:?} is not a positive whole number", value))
    })?;

    if n == 0 {
        return Err(Error::InvalidArgument(
            "the tag cloud must contain at least 1 word".to_string(),
        ));
    }

    Ok(n)
}

fn run(args: &[String]) -> Result<(), Error> {
    let input_path = arg_or_prompt(args, 0, "Enter the name of an input file: ")?;
    let output_path = arg_or_prompt(args, 1, "Enter the name of an output file: ")?;
    let cloud_size = arg_or_prompt(args, 2, "Enter the number of words to be in the tag cloud: ")?;

    let n = parse_cloud_size(&cloud_size)?;

    let tag_cloud =
        generate_tag_cloud_file(&DEFAULT_TAG_CLOUD_CONFIG, &input_path, &output_path, n)?;

    info!(
        "Wrote {} words (max count {}) to {}",
        tag_cloud.len(),
        tag_cloud.max_count,
        output_path
    );

    Ok(())
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        println!("Usage: tag-cloud-cli [INPUT_FILE] [OUTPUT_FILE] [NUMBER_OF_WORDS]");
        println!("Missing arguments are prompted for. Output ending in .csv is written as CSV.");
        return;
    }

    if let Err(e) = run(&args) {
        error!("Error generating tag cloud: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
