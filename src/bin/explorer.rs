fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let settings = match escape_explorer::parse_settings(std::env::args_os()) {
        Ok(settings) => settings,
        Err(help) => help.exit(),
    };

    escape_explorer::run_gui(settings)?;

    Ok(())
}
