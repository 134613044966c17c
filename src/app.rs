use crate::backend::Backend;
use crate::handlers;
use crate::models::{ArrivalState, CountdownData, CurrentTime, UiStyle};
use crate::poller::{PollCounts, Poller, PollerHandle};
use crate::state::Surface;
use std::sync::Arc;

pub const CURRENT_DATETIME: &str = "/api/current_datetime_now";
pub const TIME_OF_YEAR_STYLE: &str = "/api/time_of_year_style";
pub const COUNTDOWN_TIMER: &str = "/api/countdown_timer_until_new_year_data";
pub const NEW_YEAR_ARRIVED: &str = "/api/is_new_year_arrived_state";

/// The four pollers driving the page, in startup order.
pub fn pollers(
    surface: Arc<dyn Surface>,
) -> (
    Poller<CurrentTime>,
    Poller<CountdownData>,
    Poller<UiStyle>,
    Poller<ArrivalState>,
) {
    let time_surface = Arc::clone(&surface);
    let countdown_surface = Arc::clone(&surface);
    let style_surface = Arc::clone(&surface);
    let arrival_surface = surface;

    (
        Poller::new("current datetime", CURRENT_DATETIME, move |record: &CurrentTime| {
            handlers::render_current_time(time_surface.as_ref(), record)
        }),
        Poller::new("countdown timer", COUNTDOWN_TIMER, move |record: &CountdownData| {
            handlers::render_countdown(countdown_surface.as_ref(), record)
        }),
        Poller::new("ui style", TIME_OF_YEAR_STYLE, move |record: &UiStyle| {
            handlers::render_ui_style(style_surface.as_ref(), record)
        }),
        Poller::new("new year arrival", NEW_YEAR_ARRIVED, move |record: &ArrivalState| {
            handlers::render_arrival(arrival_surface.as_ref(), record)
        }),
    )
}

/// Running pollers for one page. Stops them all when dropped.
pub struct PageHandle {
    pollers: Vec<PollerHandle>,
}

impl PageHandle {
    pub fn stop(&self) {
        for poller in &self.pollers {
            poller.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.pollers.iter().any(PollerHandle::is_running)
    }

    pub fn stats(&self) -> Vec<(&'static str, PollCounts)> {
        self.pollers
            .iter()
            .map(|poller| (poller.name(), poller.stats()))
            .collect()
    }
}

pub fn start(backend: Arc<dyn Backend>, surface: Arc<dyn Surface>) -> PageHandle {
    let (time, countdown, style, arrival) = pollers(surface);
    PageHandle {
        pollers: vec![
            time.spawn(Arc::clone(&backend)),
            countdown.spawn(Arc::clone(&backend)),
            style.spawn(Arc::clone(&backend)),
            arrival.spawn(backend),
        ],
    }
}
