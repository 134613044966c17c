use serde::{Deserialize, Serialize};

/// `/api/current_datetime_now`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTime {
    #[serde(rename = "time_now")]
    pub time: String,
    #[serde(rename = "date_now")]
    pub date: String,
    #[serde(rename = "month_name_now")]
    pub month_name: String,
    #[serde(rename = "day_of_week_now")]
    pub day_of_week: String,
}

/// `/api/countdown_timer_until_new_year_data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownData {
    #[serde(rename = "new_year")]
    pub new_year_label: String,
    pub days_left: u64,
    pub hours_left: u64,
    pub minutes_left: u64,
    pub seconds_left: u64,
}

/// `/api/time_of_year_style`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiStyle {
    pub primary_color: String,
    pub secondary_color: String,
}

/// `/api/is_new_year_arrived_state`
///
/// The backend sends the flag as the string `"true"` or `"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalState {
    pub is_new_year_arrived: String,
}

impl ArrivalState {
    pub fn is_arrived(&self) -> bool {
        self.is_new_year_arrived == "true"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    Am,
    Pm,
}

impl TimeFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFormat::Am => "am",
            TimeFormat::Pm => "pm",
        }
    }
}
