use crate::state::{ElementId, PageSnapshot};
use chrono::{Local, NaiveDateTime};

pub fn render_view(snapshot: &PageSnapshot) -> String {
    render_view_at(Local::now().naive_local(), snapshot)
}

pub fn render_view_at(now: NaiveDateTime, snapshot: &PageSnapshot) -> String {
    let text = |element: ElementId| placeholder(&snapshot.element(element).text);
    let border = |element: ElementId| color(snapshot.element(element).border_color.as_deref());

    VIEW_TEMPLATE
        .replace("{{REFRESHED}}", &now.format("%Y-%m-%d %H:%M:%S").to_string())
        .replace("{{BACKGROUND}}", &color(snapshot.background_color.as_deref()))
        .replace("{{NOW_BORDER}}", &border(ElementId::NowDataFrame))
        .replace("{{CURRENT_TIME}}", &text(ElementId::CurrentTimeView))
        .replace("{{OTHER_BORDER}}", &border(ElementId::OtherDataFrame))
        .replace("{{NEW_YEAR}}", &text(ElementId::NewYearView))
        .replace("{{TIME_LEFT}}", &text(ElementId::TimeLeftUntilNewYearView))
        .replace("{{COPY}}", &snapshot.element(ElementId::CopyTimeLeftData).text)
        .replace("{{SETTINGS_BORDER}}", &border(ElementId::SettingsFrame))
}

/// Keeps the most recent alert on screen across redraws until the user
/// acknowledges it.
#[derive(Debug, Default)]
pub struct AlertBanner {
    latest: Option<String>,
    repeats: usize,
}

impl AlertBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compose(&mut self, view: &str, new_alerts: Vec<String>) -> String {
        for alert in new_alerts {
            if self.latest.as_deref() == Some(alert.as_str()) {
                self.repeats += 1;
            } else {
                self.latest = Some(alert);
                self.repeats = 1;
            }
        }

        match &self.latest {
            Some(alert) if self.repeats > 1 => {
                format!("{view}\n!! {alert} (x{})   type 'ok' to dismiss\n", self.repeats)
            }
            Some(alert) => format!("{view}\n!! {alert}   type 'ok' to dismiss\n"),
            None => view.to_string(),
        }
    }

    pub fn acknowledge(&mut self) {
        self.latest = None;
        self.repeats = 0;
    }
}

fn placeholder(text: &str) -> String {
    if text.is_empty() {
        "...".to_string()
    } else {
        text.to_string()
    }
}

fn color(value: Option<&str>) -> String {
    value.unwrap_or("default").to_string()
}

const VIEW_TEMPLATE: &str = "\
New Year countdown                       refreshed {{REFRESHED}}
background {{BACKGROUND}}

[now] border {{NOW_BORDER}}
  {{CURRENT_TIME}}

[countdown] border {{OTHER_BORDER}}
  until {{NEW_YEAR}}: {{TIME_LEFT}}   [{{COPY}}: type 'copy']

[settings] border {{SETTINGS_BORDER}}
  format am|pm   zone <hours>   ok   quit
";
