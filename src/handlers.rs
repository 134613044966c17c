use crate::models::{ArrivalState, CountdownData, CurrentTime, UiStyle};
use crate::state::{ElementId, Surface};

pub const ARRIVAL_MESSAGE: &str = "New year is arrived! 🎉";

const FRAMES: [ElementId; 3] = [
    ElementId::SettingsFrame,
    ElementId::OtherDataFrame,
    ElementId::NowDataFrame,
];

pub fn render_current_time(surface: &dyn Surface, record: &CurrentTime) {
    surface.set_text(ElementId::CurrentTimeView, &current_time_text(record));
}

pub fn render_countdown(surface: &dyn Surface, record: &CountdownData) {
    surface.set_text(ElementId::NewYearView, &record.new_year_label);
    surface.set_text(ElementId::TimeLeftUntilNewYearView, &countdown_text(record));
}

pub fn render_ui_style(surface: &dyn Surface, record: &UiStyle) {
    surface.set_background_color(&record.primary_color);
    for frame in FRAMES {
        surface.set_border_color(frame, &record.secondary_color);
    }
}

/// Alerts on every call where the flag is set; there is no fire-once latch.
pub fn render_arrival(surface: &dyn Surface, record: &ArrivalState) {
    if record.is_arrived() {
        surface.alert(ARRIVAL_MESSAGE);
    }
}

pub fn current_time_text(record: &CurrentTime) -> String {
    format!(
        "{} / {} / {} / {}",
        record.time, record.date, record.month_name, record.day_of_week
    )
}

pub fn countdown_text(record: &CountdownData) -> String {
    format!(
        "{} d: {} h: {} m: {} s",
        record.days_left, record.hours_left, record.minutes_left, record.seconds_left
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Page;

    fn changed_elements(before: &Page, after: &Page) -> Vec<ElementId> {
        let (before, after) = (before.snapshot(), after.snapshot());
        ElementId::ALL
            .into_iter()
            .filter(|id| before.element(*id) != after.element(*id))
            .collect()
    }

    #[test]
    fn current_time_joins_fields() {
        let page = Page::new();
        let pristine = Page::new();
        render_current_time(
            &page,
            &CurrentTime {
                time: "14:05:00".into(),
                date: "2024-12-31".into(),
                month_name: "December".into(),
                day_of_week: "Tuesday".into(),
            },
        );

        assert_eq!(
            page.text(ElementId::CurrentTimeView),
            "14:05:00 / 2024-12-31 / December / Tuesday"
        );
        assert_eq!(changed_elements(&pristine, &page), vec![ElementId::CurrentTimeView]);
        assert!(page.snapshot().background_color.is_none());
    }

    #[test]
    fn countdown_writes_label_and_remaining() {
        let page = Page::new();
        let pristine = Page::new();
        render_countdown(
            &page,
            &CountdownData {
                new_year_label: "2025".into(),
                days_left: 0,
                hours_left: 1,
                minutes_left: 2,
                seconds_left: 3,
            },
        );

        assert_eq!(page.text(ElementId::NewYearView), "2025");
        assert_eq!(page.text(ElementId::TimeLeftUntilNewYearView), "0 d: 1 h: 2 m: 3 s");
        assert_eq!(
            changed_elements(&pristine, &page),
            vec![ElementId::NewYearView, ElementId::TimeLeftUntilNewYearView]
        );
    }

    #[test]
    fn ui_style_colors_body_and_frames() {
        let page = Page::new();
        let pristine = Page::new();
        render_ui_style(
            &page,
            &UiStyle {
                primary_color: "#73d5ff".into(),
                secondary_color: "#67bce0".into(),
            },
        );

        let snapshot = page.snapshot();
        assert_eq!(snapshot.background_color.as_deref(), Some("#73d5ff"));
        for frame in FRAMES {
            assert_eq!(snapshot.element(frame).border_color.as_deref(), Some("#67bce0"));
            assert_eq!(snapshot.element(frame).text, "");
        }
        assert_eq!(
            changed_elements(&pristine, &page),
            vec![
                ElementId::NowDataFrame,
                ElementId::SettingsFrame,
                ElementId::OtherDataFrame
            ]
        );
    }

    #[test]
    fn arrival_alerts_only_when_true() {
        let page = Page::new();
        render_arrival(&page, &ArrivalState { is_new_year_arrived: "false".into() });
        render_arrival(&page, &ArrivalState { is_new_year_arrived: "yes".into() });
        assert!(page.take_alerts().is_empty());

        render_arrival(&page, &ArrivalState { is_new_year_arrived: "true".into() });
        render_arrival(&page, &ArrivalState { is_new_year_arrived: "true".into() });
        assert_eq!(page.take_alerts(), vec![ARRIVAL_MESSAGE, ARRIVAL_MESSAGE]);
        assert_eq!(changed_elements(&Page::new(), &page), Vec::<ElementId>::new());
    }
}
