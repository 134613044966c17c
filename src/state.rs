use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

/// Alerts kept for the host before the oldest are dropped.
pub const MAX_PENDING_ALERTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    NewYearView,
    TimeLeftUntilNewYearView,
    CurrentTimeView,
    NowDataFrame,
    SettingsFrame,
    OtherDataFrame,
    CopyTimeLeftData,
}

impl ElementId {
    pub const ALL: [ElementId; 7] = [
        ElementId::NewYearView,
        ElementId::TimeLeftUntilNewYearView,
        ElementId::CurrentTimeView,
        ElementId::NowDataFrame,
        ElementId::SettingsFrame,
        ElementId::OtherDataFrame,
        ElementId::CopyTimeLeftData,
    ];

    /// Element id as it appears in the page markup.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::NewYearView => "new_year_view",
            ElementId::TimeLeftUntilNewYearView => "time_left_until_new_year_view",
            ElementId::CurrentTimeView => "current_time_view",
            ElementId::NowDataFrame => "now_data_frame",
            ElementId::SettingsFrame => "settings_frame",
            ElementId::OtherDataFrame => "other_data_frame",
            ElementId::CopyTimeLeftData => "copy_time_left_data",
        }
    }
}

pub trait Surface: Send + Sync {
    fn set_text(&self, element: ElementId, text: &str);

    /// Current text content, read at call time.
    fn text(&self, element: ElementId) -> String;

    fn set_background_color(&self, color: &str);

    fn set_border_color(&self, element: ElementId, color: &str);

    /// Queues a user-facing notification. The host drains the queue; a
    /// surface may drop the oldest entries when nobody does.
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    pub border_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub background_color: Option<String>,
    pub elements: BTreeMap<ElementId, ElementState>,
    pub alerts: Vec<String>,
}

impl PageSnapshot {
    pub fn element(&self, element: ElementId) -> &ElementState {
        &self.elements[&element]
    }
}

#[derive(Clone)]
pub struct Page {
    inner: Arc<Mutex<PageSnapshot>>,
}

impl Page {
    pub fn new() -> Self {
        let mut snapshot = PageSnapshot::default();
        for element in ElementId::ALL {
            snapshot.elements.insert(element, ElementState::default());
        }
        snapshot
            .elements
            .entry(ElementId::CopyTimeLeftData)
            .or_default()
            .text = "Copy".to_string();

        Self {
            inner: Arc::new(Mutex::new(snapshot)),
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.lock().clone()
    }

    /// Removes and returns alerts raised since the last call.
    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.lock().alerts)
    }

    fn lock(&self) -> MutexGuard<'_, PageSnapshot> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Page {
    fn set_text(&self, element: ElementId, text: &str) {
        self.lock().elements.entry(element).or_default().text = text.to_string();
    }

    fn text(&self, element: ElementId) -> String {
        self.lock()
            .elements
            .get(&element)
            .map(|state| state.text.clone())
            .unwrap_or_default()
    }

    fn set_background_color(&self, color: &str) {
        self.lock().background_color = Some(color.to_string());
    }

    fn set_border_color(&self, element: ElementId, color: &str) {
        self.lock().elements.entry(element).or_default().border_color = Some(color.to_string());
    }

    fn alert(&self, message: &str) {
        let mut page = self.lock();
        if page.alerts.len() >= MAX_PENDING_ALERTS {
            let overflow = page.alerts.len() + 1 - MAX_PENDING_ALERTS;
            page.alerts.drain(..overflow);
        }
        page.alerts.push(message.to_string());
    }
}
