use procwatch::app::App;
use procwatch::cli::parse_args;
use procwatch::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let config = parse_args();
    config.validate()?;

    let _log_guard = init_tracing(config.log_file.as_deref())?;
    tracing::info!(?config, "procwatch v{} starting", env!("CARGO_PKG_VERSION"));

    let mut app = App::new(&config);

    let mut terminal = ratatui::init();

    let app_result = app.run(&mut terminal);

    ratatui::restore();

    app_result?;

    Ok(())
}
