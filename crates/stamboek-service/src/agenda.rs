//! Upcoming-events agenda for the landing view.
//!
//! Each anniversary is projected onto its next occurrence from today; the
//! landing view shows the occurrences within the next month. Birthdays get
//! age wording that depends on whether the person is alive.

use std::sync::Arc;

use chrono::{Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stamboek_core::result::AppResult;
use stamboek_database::repositories::AnniversaryRepository;
use stamboek_entity::record::AgendaItem;

/// The anniversary type that gets age wording.
const BIRTHDAY_TYPE: &str = "Geboortedag";

/// An upcoming event, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingEvent {
    /// Display name: the person's full name, the description, or "Herdenking".
    pub name: String,
    /// The projected occurrence date.
    pub date: NaiveDate,
    /// The anniversary type name.
    pub event_type: String,
    /// Display description (age wording for birthdays, type name otherwise).
    pub description: String,
}

/// Computes the upcoming events shown on the landing view.
#[derive(Debug, Clone)]
pub struct AgendaService {
    anniversaries: Arc<AnniversaryRepository>,
}

impl AgendaService {
    /// Create a new agenda service.
    pub fn new(anniversaries: Arc<AnniversaryRepository>) -> Self {
        Self { anniversaries }
    }

    /// The events occurring within one month from today.
    pub async fn upcoming(&self) -> AppResult<Vec<UpcomingEvent>> {
        let items = self.anniversaries.agenda_items().await?;
        let today = Utc::now().date_naive();
        let end = today.checked_add_months(Months::new(1)).unwrap_or(today);
        Ok(upcoming_between(items, today, end))
    }
}

/// Project the event date into the given year. Feb 29 falls back to Mar 1
/// in non-leap years.
fn project(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}

/// The event's next occurrence on or after today.
fn next_occurrence(date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = project(date, today.year());
    if this_year < today {
        project(date, today.year() + 1)
    } else {
        this_year
    }
}

/// The events whose next occurrence falls within `[today, end]`, sorted by
/// occurrence date.
pub fn upcoming_between(
    items: Vec<AgendaItem>,
    today: NaiveDate,
    end: NaiveDate,
) -> Vec<UpcomingEvent> {
    let mut events: Vec<UpcomingEvent> = items
        .into_iter()
        .filter_map(|item| {
            let occurrence = next_occurrence(item.event_date, today);
            if occurrence < today || occurrence > end {
                return None;
            }

            let description = match &item.person {
                Some(person) if item.type_name == BIRTHDAY_TYPE => {
                    let age = occurrence.year() - item.event_date.year();
                    if person.alive {
                        format!("wordt {age} jaar")
                    } else {
                        format!("zou {age} jaar zijn geworden.")
                    }
                }
                _ => item.type_name.clone(),
            };

            let name = match &item.person {
                Some(person) => person.full_name(),
                None => item
                    .description
                    .clone()
                    .unwrap_or_else(|| "Herdenking".to_string()),
            };

            Some(UpcomingEvent {
                name,
                date: occurrence,
                event_type: item.type_name,
                description,
            })
        })
        .collect();

    events.sort_by_key(|e| e.date);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamboek_entity::record::AgendaPerson;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn birthday(event_date: NaiveDate, alive: bool) -> AgendaItem {
        AgendaItem {
            event_date,
            description: None,
            type_name: BIRTHDAY_TYPE.to_string(),
            person: Some(AgendaPerson {
                first_name: "Jan".to_string(),
                last_name: "Jansen".to_string(),
                alive,
            }),
        }
    }

    fn commemoration(event_date: NaiveDate, description: Option<&str>) -> AgendaItem {
        AgendaItem {
            event_date,
            description: description.map(String::from),
            type_name: "Sterfdag".to_string(),
            person: None,
        }
    }

    #[test]
    fn test_event_within_window_is_included() {
        let today = date(2024, 6, 1);
        let events = upcoming_between(
            vec![birthday(date(1990, 6, 15), true)],
            today,
            date(2024, 7, 1),
        );

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, date(2024, 6, 15));
        assert_eq!(events[0].name, "Jan Jansen");
        assert_eq!(events[0].description, "wordt 34 jaar");
    }

    #[test]
    fn test_passed_date_rolls_to_next_year() {
        // A January birthday seen in December projects into next year and
        // falls inside the one-month window.
        let today = date(2024, 12, 20);
        let events = upcoming_between(
            vec![birthday(date(2000, 1, 10), true)],
            today,
            date(2025, 1, 20),
        );

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, date(2025, 1, 10));
        assert_eq!(events[0].description, "wordt 25 jaar");
    }

    #[test]
    fn test_event_outside_window_is_excluded() {
        let today = date(2024, 6, 1);
        let events = upcoming_between(
            vec![birthday(date(1990, 8, 15), true)],
            today,
            date(2024, 7, 1),
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_deceased_birthday_wording() {
        let today = date(2024, 6, 1);
        let events = upcoming_between(
            vec![birthday(date(1930, 6, 10), false)],
            today,
            date(2024, 7, 1),
        );
        assert_eq!(events[0].description, "zou 94 jaar zijn geworden.");
    }

    #[test]
    fn test_commemoration_uses_description_then_fallback() {
        let today = date(2024, 6, 1);
        let events = upcoming_between(
            vec![
                commemoration(date(1945, 6, 5), Some("Bevrijdingsfeest")),
                commemoration(date(1945, 6, 6), None),
            ],
            today,
            date(2024, 7, 1),
        );

        assert_eq!(events[0].name, "Bevrijdingsfeest");
        assert_eq!(events[0].description, "Sterfdag");
        assert_eq!(events[1].name, "Herdenking");
    }

    #[test]
    fn test_events_are_sorted_by_occurrence() {
        let today = date(2024, 6, 1);
        let events = upcoming_between(
            vec![
                birthday(date(1990, 6, 20), true),
                birthday(date(1985, 6, 5), true),
            ],
            today,
            date(2024, 7, 1),
        );

        assert_eq!(events[0].date, date(2024, 6, 5));
        assert_eq!(events[1].date, date(2024, 6, 20));
    }

    #[test]
    fn test_leap_day_projects_to_march_first() {
        let today = date(2025, 2, 20);
        let events = upcoming_between(
            vec![birthday(date(2000, 2, 29), true)],
            today,
            date(2025, 3, 20),
        );

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, date(2025, 3, 1));
    }
}
