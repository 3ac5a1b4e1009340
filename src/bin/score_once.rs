//! Local one-shot scoring: request body on stdin, response body on stdout.
//!
//! usage: score_once <model dir or artifact> [content-type] [accept]

use heartscore::config::DEFAULT_ARTIFACT_FILE;
use heartscore::logging::StructuredLogger;
use heartscore::media::APPLICATION_JSON;
use heartscore::{invoke, Scorer};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(model_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: score_once <model dir or artifact> [content-type] [accept]");
        return ExitCode::from(2);
    };
    let content_type = args.next().unwrap_or_else(|| APPLICATION_JSON.to_string());
    let accept = args.next().unwrap_or_else(|| APPLICATION_JSON.to_string());

    StructuredLogger::init_with_writer(false, "warn", std::io::stderr);

    match run(model_path, &content_type, &accept) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    model_path: PathBuf,
    content_type: &str,
    accept: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let scorer = Scorer::load(&model_path, DEFAULT_ARTIFACT_FILE)?;

    let mut body = Vec::new();
    std::io::stdin().read_to_end(&mut body)?;

    let out = invoke(&scorer, &body, Some(content_type), Some(accept))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&out.body)?;
    writeln!(stdout)?;
    Ok(())
}
