use bambam_logsum::{
    app::{aggregate, inputs::InputFiles, query},
    config::LogsumAppConfig,
    model::LogsumError,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct LogsumAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// zone-level accessibility logsums by purpose and traveler segment
    Aggregate {
        #[command(flatten)]
        inputs: InputFiles,
        #[arg(long, help = "path to file with bambam-logsum parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "output path for the aggregate logsum table")]
        output_file: String,
    },
    /// path choice outcomes for a file of travel queries
    Query {
        #[command(flatten)]
        inputs: InputFiles,
        #[arg(long, help = "path to file with bambam-logsum parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "travel queries CSV file")]
        queries_file: String,
        #[arg(long, help = "output path for the query outcomes")]
        output_file: String,
        #[arg(long, default_value_t = 0, help = "seed for stochastic path choices")]
        seed: u64,
        #[arg(long, help = "output path for predicted park-and-ride demand")]
        node_predictions_file: Option<String>,
    },
}

fn read_configuration(configuration_file: &Option<String>) -> Result<LogsumAppConfig, LogsumError> {
    match configuration_file {
        None => Ok(LogsumAppConfig::default()),
        Some(f) => {
            log::info!("reading bambam-logsum configuration from {f}");
            LogsumAppConfig::try_from(f)
        }
    }
}

pub fn run(app: &App) -> Result<(), LogsumError> {
    env_logger::init();
    let start = chrono::Local::now();
    log::info!("bambam-logsum started at {}", start.format("%Y-%m-%d %H:%M:%S"));
    match app {
        App::Aggregate {
            inputs,
            configuration_file,
            output_file,
        } => {
            let conf = read_configuration(configuration_file)?;
            aggregate::run(inputs, &conf, output_file)?;
        }
        App::Query {
            inputs,
            configuration_file,
            queries_file,
            output_file,
            seed,
            node_predictions_file,
        } => {
            let conf = read_configuration(configuration_file)?;
            query::run(
                inputs,
                &conf,
                queries_file,
                output_file,
                *seed,
                node_predictions_file.as_ref(),
            )?;
        }
    }
    let elapsed = chrono::Local::now() - start;
    log::info!("finished in {} seconds", elapsed.num_seconds());
    eprintln!("finished.");
    Ok(())
}

fn main() {
    let args = LogsumAppArguments::parse();
    match run(&args.app) {
        Ok(_) => {}
        Err(e) => {
            println!("{e}");
            panic!("{}", e.to_string())
        }
    }
}
