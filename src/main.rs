use site_network_doc::config::ReportConfig;
use site_network_doc::{generate_site_documentation, logging};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = logging::init(Path::new("log4rs.yml")) {
        eprintln!("WARNING: logging disabled: {e}");
    }
    log::info!("#Start main()");

    let result = ReportConfig::from_env().and_then(|config| generate_site_documentation(&config));
    match result {
        Ok(message) => {
            println!("{message}");
            if message.starts_with("ERROR:") {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
