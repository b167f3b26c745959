use std::process::ExitCode;

use clap::Parser;
use f8spacy::{Cli, RunOutcome};

fn main() -> ExitCode {
    let cli = Cli::parse();
    f8spacy::init_logging(cli.debug);

    match cli.run() {
        Ok(RunOutcome::Written(summary)) => {
            println!(
                "Transformation done please see document: {}",
                summary.output.display()
            );
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Empty) => {
            println!("No annotation documents found in the archive; nothing written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let code = e.exit_code();
            eprintln!("f8spacy: {:#}", anyhow::Error::new(e));
            ExitCode::from(code)
        }
    }
}
