use forum::{logging, App, ForumConfig};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = ForumConfig::load()?;
    logging::init_tracing(&config)?;

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    if let Err(e) = &result {
        tracing::error!(error = %e, "forum exited with an error");
    }
    result
}
