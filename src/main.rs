use new_year_countdown::{
    ArboardClipboard, Backend, CopyHandler, HttpBackend, POLL_PERIOD, Page, Surface,
    errors::CommandError,
    resolve_base_url,
    settings::{Command, SettingsClient, forward_lines},
    start,
    ui::{AlertBanner, render_view},
};
use std::{
    io::{self, Write},
    sync::Arc,
};
use tokio::{signal, time};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let base_url = resolve_base_url()?;
    info!("polling {base_url}");

    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(base_url));
    let page = Page::new();
    let surface: Arc<dyn Surface> = Arc::new(page.clone());

    let handle = start(Arc::clone(&backend), Arc::clone(&surface));
    let copy = CopyHandler::new(surface, Arc::new(ArboardClipboard::new()));
    let settings = SettingsClient::new(backend);
    let mut banner = AlertBanner::new();

    let mut lines = forward_lines(io::BufReader::new(io::stdin()))?;
    let mut stdin_open = true;
    let mut redraw = time::interval(POLL_PERIOD);
    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => break,
            _ = redraw.tick() => draw(&page, &mut banner)?,
            line = lines.recv(), if stdin_open => {
                let Some(line) = line else {
                    stdin_open = false;
                    continue;
                };
                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(CommandError::Empty) => continue,
                    Err(err) => {
                        warn!("{err}");
                        continue;
                    }
                };
                match command {
                    Command::Copy => {
                        // Failures are already logged by the handler.
                        let _ = copy.on_click();
                    }
                    Command::SetTimeFormat(format) => {
                        settings.spawn_time_format(format);
                    }
                    Command::SetTimeZone(hours) => {
                        settings.spawn_time_zone(hours);
                    }
                    Command::Acknowledge => {
                        banner.acknowledge();
                        draw(&page, &mut banner)?;
                    }
                    Command::Quit => break,
                }
            }
        }
    }

    handle.stop();
    info!("countdown stopped");
    Ok(())
}

fn draw(page: &Page, banner: &mut AlertBanner) -> io::Result<()> {
    let view = banner.compose(&render_view(&page.snapshot()), page.take_alerts());
    let mut stdout = io::stdout().lock();
    write!(stdout, "\x1b[2J\x1b[H{view}")?;
    stdout.flush()
}
