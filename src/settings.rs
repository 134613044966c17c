use crate::backend::Backend;
use crate::errors::{ClientError, CommandError};
use crate::models::TimeFormat;
use std::{io::BufRead, sync::Arc, thread};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{error, info};

pub const SET_TIME_FORMAT: &str = "/set_time_format";
pub const SET_TIME_ZONE: &str = "/set_time_zone";

#[derive(Clone)]
pub struct SettingsClient {
    backend: Arc<dyn Backend>,
}

impl SettingsClient {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub async fn set_time_format(&self, format: TimeFormat) -> Result<(), ClientError> {
        self.backend
            .post_form(SET_TIME_FORMAT, &[("time_format", format.as_str().to_string())])
            .await?;
        info!(time_format = format.as_str(), "time format updated");
        Ok(())
    }

    /// `hours` is the UTC offset the backend should render times in.
    pub async fn set_time_zone(&self, hours: i32) -> Result<(), ClientError> {
        self.backend
            .post_form(SET_TIME_ZONE, &[("time_zone", hours.to_string())])
            .await?;
        info!(time_zone = hours, "time zone updated");
        Ok(())
    }

    /// Posts the time format on its own task; failures are logged there.
    pub fn spawn_time_format(&self, format: TimeFormat) -> JoinHandle<()> {
        let settings = self.clone();
        tokio::spawn(async move {
            if let Err(err) = settings.set_time_format(format).await {
                error!("failed to set time format: {err}");
            }
        })
    }

    pub fn spawn_time_zone(&self, hours: i32) -> JoinHandle<()> {
        let settings = self.clone();
        tokio::spawn(async move {
            if let Err(err) = settings.set_time_zone(hours).await {
                error!("failed to set time zone: {err}");
            }
        })
    }
}

/// Reads lines on a plain OS thread and forwards them to the returned
/// receiver, which closes at end of input. A pending read never holds up
/// runtime shutdown.
pub fn forward_lines<R>(reader: R) -> std::io::Result<mpsc::Receiver<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);
    thread::Builder::new()
        .name("command-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let Ok(line) = line else { break };
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Copy,
    SetTimeFormat(TimeFormat),
    SetTimeZone(i32),
    Acknowledge,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next().unwrap_or("");

        match verb {
            "copy" => Ok(Command::Copy),
            "ok" => Ok(Command::Acknowledge),
            "quit" | "exit" => Ok(Command::Quit),
            "format" => match arg {
                "am" => Ok(Command::SetTimeFormat(TimeFormat::Am)),
                "pm" => Ok(Command::SetTimeFormat(TimeFormat::Pm)),
                other => Err(CommandError::BadTimeFormat(other.to_string())),
            },
            "zone" => arg
                .parse::<i32>()
                .map(Command::SetTimeZone)
                .map_err(|_| CommandError::BadTimeZone(arg.to_string())),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
