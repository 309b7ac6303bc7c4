use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use shipboard_core::cruise::{cruise_day_date, CruiseConfig};
use shipboard_core::events::EventRecord;

/// One row of the demo schedule, relative to the cruise start.
struct DemoEvent {
    cruise_day: i64,
    start: (u32, u32),
    end: (u32, u32),
    uid: &'static str,
    title: &'static str,
    event_type: &'static str,
    location: &'static str,
    description: &'static str,
}

const DEMO_SCHEDULE: &[DemoEvent] = &[
    DemoEvent {
        cruise_day: 1,
        start: (17, 0),
        end: (18, 30),
        uid: "sail-away",
        title: "Sail Away Party",
        event_type: "Entertainment",
        location: "Lido Deck, Pool Area",
        description: "Live music and drinks as we leave port.",
    },
    DemoEvent {
        cruise_day: 1,
        start: (19, 30),
        end: (21, 0),
        uid: "welcome-dinner",
        title: "Welcome Dinner",
        event_type: "Dining",
        location: "Main Dining Room",
        description: "Meet your table mates.\nSmart casual dress code.",
    },
    DemoEvent {
        cruise_day: 2,
        start: (10, 0),
        end: (11, 0),
        uid: "port-talk",
        title: "Port Talk: Shore Excursions",
        event_type: "Talks",
        location: "Theater, Deck 4",
        description: "Tips, maps and tender times for our first port of call.",
    },
    DemoEvent {
        cruise_day: 2,
        start: (14, 0),
        end: (15, 0),
        uid: "trivia",
        title: "Trivia Challenge",
        event_type: "Games",
        location: "Sky Lounge",
        description: "Teams of up to six; prizes for the winners.",
    },
    DemoEvent {
        cruise_day: 2,
        start: (22, 0),
        end: (23, 59),
        uid: "deck-party",
        title: "Silent Disco; Under the Stars",
        event_type: "Entertainment",
        location: "Pool Deck",
        description: "Headphones provided.",
    },
    DemoEvent {
        cruise_day: 3,
        start: (19, 0),
        end: (21, 30),
        uid: "captains-dinner",
        title: "Captain's Gala Dinner",
        event_type: "Dining",
        location: "Main Dining Room",
        description: "Formal night, black tie optional.",
    },
    DemoEvent {
        cruise_day: 4,
        start: (9, 0),
        end: (10, 0),
        uid: "bridge-tour",
        title: "Bridge Tour",
        event_type: "Tours",
        location: "Meet at Guest Services, Deck 5",
        description: "Limited to 20 guests, sign up at Guest Services.",
    },
    DemoEvent {
        cruise_day: 5,
        start: (16, 0),
        end: (17, 0),
        uid: "art-auction",
        title: "Art Auction",
        event_type: "Shopping",
        location: "Gallery, Deck 6",
        description: "Complimentary champagne.",
    },
    DemoEvent {
        cruise_day: 7,
        start: (20, 0),
        end: (21, 30),
        uid: "farewell-show",
        title: "Farewell Show",
        event_type: "Entertainment",
        location: "Theater, Deck 4",
        description: "Crew talent show and farewell from the Captain.",
    },
];

/// Generates a demo schedule for the configured sailing.
///
/// Events are attached to cruise days; days beyond the sailing are skipped.
pub fn generate_demo_events(config: &CruiseConfig) -> Vec<EventRecord> {
    DEMO_SCHEDULE
        .iter()
        .filter(|demo| demo.cruise_day <= i64::from(config.length_in_days()))
        .filter_map(|demo| {
            let date = cruise_day_date(config, demo.cruise_day)?;
            Some(
                EventRecord::new(
                    demo.title,
                    demo.event_type,
                    at(date, demo.start),
                    at(date, demo.end),
                )
                .with_uid(format!("{}@shipboard", demo.uid))
                .with_location(demo.location)
                .with_description(demo.description),
            )
        })
        .collect()
}

fn at(date: NaiveDate, (hour, minute): (u32, u32)) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
    date.and_time(time).and_utc()
}
