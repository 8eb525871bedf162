//! Built-in locale data.

/// Locale settings for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub gmt_string: &'static str,
    pub era_names_short: [&'static str; 2],
    pub era_names_full: [&'static str; 2],
    pub quarter_names_full: [&'static str; 4],
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            am_string: "AM",
            pm_string: "PM",
            gmt_string: "GMT",
            era_names_short: ["BC", "AD"],
            era_names_full: ["Before Christ", "Anno Domini"],
            quarter_names_full: ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"],
            month_names_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            month_names_full: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            day_names_full: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
        }
    }
}
