mod cli;

use cli::Args;
use oss_attribution::prelude::*;
use std::path::PathBuf;
use std::process;

fn main() {
    // clap handles --help/--version and exits 2 on invalid arguments.
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Create adapters (Dependency Injection)
    let component_source = FileSystemReader::new();
    let config_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case =
        GenerateAttributionUseCase::new(component_source, config_reader, progress_reporter);

    let request = AttributionRequest::new(
        PathBuf::from(args.input),
        PathBuf::from(args.licenses),
        PathBuf::from(args.templates),
        PathBuf::from(args.config),
    );

    // Execute use case; nothing is presented unless every stage succeeds
    let response = use_case.execute(request)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&response.document)?;

    Ok(())
}
