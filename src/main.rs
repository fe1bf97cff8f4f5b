use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use vitals::app::App;
use vitals::config::{Config, load_config, load_config_from_path};
use vitals::event::{Event, EventHandler};
use vitals::ui;

#[derive(Parser)]
#[command(name = "vitals", about = "Tabbed TUI system monitor")]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Metric sampling interval in milliseconds
    #[arg(long)]
    metrics_rate: Option<u64>,

    /// Process listing interval in milliseconds
    #[arg(long)]
    process_rate: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config).await;

    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: Config) -> Result<()> {
    let metrics_rate = Duration::from_millis(config.general.metrics_interval_ms);
    let process_rate = Duration::from_millis(config.general.process_interval_ms);
    let settle_delay = Duration::from_millis(config.general.settle_delay_ms);

    let mut app = App::new(&config);
    let mut events = EventHandler::new(metrics_rate, process_rate);

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        if let Some(event) = events.next().await {
            let mut should_draw = false;
            match event {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        let action = app.map_key(key);
                        app.dispatch(action);
                        if app.take_settle_request() {
                            events.schedule_process_refresh(settle_delay);
                        }
                        should_draw = true;
                    }
                }
                Event::MetricsTick => {
                    app.refresh_metrics();
                    should_draw = true;
                }
                Event::ProcessTick => {
                    app.refresh_processes();
                    should_draw = true;
                }
                Event::Resize => {
                    should_draw = true;
                }
            }
            if should_draw {
                terminal.draw(|frame| ui::draw(frame, &app))?;
            }
        }
    }

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.metrics_rate {
        config.general.metrics_interval_ms = rate;
    }
    if let Some(rate) = cli.process_rate {
        config.general.process_interval_ms = rate;
    }

    config
}
