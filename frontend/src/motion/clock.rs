use chrono::{DateTime, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityClock {
    pub city: &'static str,
    pub tz: Tz,
    /// Fixed hand angles of the decorative dial, in degrees from twelve.
    /// They do not track the live reading.
    pub hour_hand_deg: f64,
    pub minute_hand_deg: f64,
}

impl CityClock {
    /// CSS `transform` for a dial hand pivoting on the dial's center.
    pub fn hand_transform(deg: f64) -> String {
        format!("translateX(-50%) rotate({}deg)", deg)
    }
}

/// Studio locations shown in the footer, in display order.
pub const CITY_CLOCKS: [CityClock; 3] = [
    CityClock {
        city: "Bangkok",
        tz: chrono_tz::Asia::Bangkok,
        hour_hand_deg: 30.0,
        minute_hand_deg: 0.0,
    },
    CityClock {
        city: "London",
        tz: chrono_tz::Europe::London,
        hour_hand_deg: 0.0,
        minute_hand_deg: 90.0,
    },
    CityClock {
        city: "Bucharest",
        tz: chrono_tz::Europe::Bucharest,
        hour_hand_deg: 45.0,
        minute_hand_deg: 100.0,
    },
];

/// 12-hour, zero-padded wall clock reading, e.g. `"07:05 PM"`.
pub fn format_local_time(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz).format("%I:%M %p").to_string()
}

pub fn read_all(now: DateTime<Utc>) -> Vec<String> {
    CITY_CLOCKS
        .iter()
        .map(|clock| format_local_time(now, clock.tz))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_each_city() {
        // Winter: London UTC+0, Bucharest UTC+2, Bangkok UTC+7.
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 5, 0).unwrap();
        assert_eq!(read_all(now), vec!["07:05 PM", "12:05 PM", "02:05 PM"]);
    }

    #[test]
    fn follows_daylight_saving() {
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 8, 30, 0).unwrap();
        assert_eq!(format_local_time(now, chrono_tz::Europe::London), "09:30 AM");
        assert_eq!(format_local_time(now, chrono_tz::Europe::Bucharest), "11:30 AM");
    }

    #[test]
    fn dials_keep_their_fixed_hands() {
        let hands: Vec<_> = CITY_CLOCKS
            .iter()
            .map(|c| (c.city, c.hour_hand_deg, c.minute_hand_deg))
            .collect();
        assert_eq!(
            hands,
            vec![
                ("Bangkok", 30.0, 0.0),
                ("London", 0.0, 90.0),
                ("Bucharest", 45.0, 100.0)
            ]
        );
        assert_eq!(
            CityClock::hand_transform(100.0),
            "translateX(-50%) rotate(100deg)"
        );
    }

    #[test]
    fn midnight_is_twelve() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(format_local_time(now, chrono_tz::Europe::London), "12:00 AM");
    }
}
