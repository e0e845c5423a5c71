use schematic_scan::engine::Config;
use schematic_scan::{logging, report};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    // Both passes run before anything reaches stdout
    let output = report::run(&Config::default())?;
    print!("{output}");

    Ok(())
}
