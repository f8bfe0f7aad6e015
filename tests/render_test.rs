//! Full-frame render tests against ratatui's `TestBackend`.

use std::collections::BTreeMap;

use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

use shopfinder::api::Shop;
use shopfinder::logic::update::update;
use shopfinder::messages::{Command, Msg};
use shopfinder::model::{Location, Model};
use shopfinder::ui;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

/// Render one frame into a fresh test terminal
fn draw_buffer(model: &mut Model) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| ui::render(f, model)).unwrap();
    terminal.backend().buffer().clone()
}

fn rows_of(buffer: &Buffer) -> Vec<String> {
    buffer
        .content()
        .chunks(WIDTH as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

/// Render one frame and return it as text rows
fn draw(model: &mut Model) -> Vec<String> {
    rows_of(&draw_buffer(model))
}

/// Foreground color of the first cell of `needle` on screen
fn fg_of(buffer: &Buffer, needle: &str) -> Color {
    let rows = rows_of(buffer);
    let (y, row) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.contains(needle))
        .unwrap_or_else(|| panic!("{needle:?} not on screen"));
    let byte = row.find(needle).unwrap();
    let x = row[..byte].chars().count();
    buffer[(x as u16, y as u16)].fg
}

fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

fn located_model() -> (Model, u64) {
    let mut model = Model::new(1000, false);
    let commands = update(
        &mut model,
        Msg::LocationResolved(Location { lat: 10.0, lon: 20.0 }),
    );
    let seq = match commands.as_slice() {
        [Command::Fetch(req)] => req.seq,
        other => panic!("expected one fetch, got {:?}", other),
    };
    (model, seq)
}

fn shop(id: u64, lat: f64, lon: f64, tags: &[(&str, &str)]) -> Shop {
    Shop {
        id,
        lat,
        lon,
        tags: tags
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn renders_header_and_radius_field() {
    let mut model = Model::new(1000, false);
    let rows = draw(&mut model);

    assert!(screen_contains(&rows, "Nearby Shops Finder"));
    assert!(screen_contains(&rows, "Enter radius (in meters): "));
    assert!(screen_contains(&rows, "1000"));
    assert!(screen_contains(&rows, "Locating..."));
}

#[test]
fn renders_loading_while_request_outstanding() {
    let (mut model, _) = located_model();
    let rows = draw(&mut model);
    assert!(screen_contains(&rows, "Loading shops..."));
}

#[test]
fn renders_empty_message_for_no_results() {
    let (mut model, seq) = located_model();
    update(&mut model, Msg::FetchSucceeded { seq, shops: vec![] });

    let rows = draw(&mut model);
    assert!(screen_contains(&rows, "No shops found nearby."));
    assert!(!screen_contains(&rows, "Loading shops..."));
}

#[test]
fn renders_one_card_per_shop() {
    let (mut model, seq) = located_model();
    update(
        &mut model,
        Msg::FetchSucceeded {
            seq,
            shops: vec![
                shop(1, 10.12346, 20.67891, &[("shop", "bakery")]),
                shop(2, 10.5, 20.5, &[("name", "Corner Books"), ("shop", "books")]),
            ],
        },
    );

    let rows = draw(&mut model);
    assert!(screen_contains(&rows, "Unnamed Shop"));
    assert!(screen_contains(&rows, "Type: bakery"));
    assert!(screen_contains(&rows, "Coordinates: (10.1235, 20.6789)"));
    assert!(screen_contains(&rows, "Corner Books"));
    assert!(screen_contains(&rows, "Type: books"));
    assert!(screen_contains(&rows, "View on Map"));
    assert!(screen_contains(&rows, "Shops: 2"));
    assert_eq!(model.ui.grid_columns, 3);
}

#[test]
fn renders_error_without_cards() {
    let (mut model, seq) = located_model();
    update(
        &mut model,
        Msg::FetchSucceeded {
            seq,
            shops: vec![shop(1, 10.0, 20.0, &[("name", "Corner Books")])],
        },
    );
    let refetch = update(&mut model, Msg::Refresh);
    let Command::Fetch(req) = &refetch[0] else {
        panic!("expected fetch");
    };
    update(
        &mut model,
        Msg::FetchFailed {
            seq: req.seq,
            message: "HTTP 504".to_string(),
        },
    );

    let rows = draw(&mut model);
    assert!(screen_contains(&rows, "Error fetching data from Overpass API"));
    assert!(!screen_contains(&rows, "Corner Books"));
}

#[test]
fn renders_unsupported_location_message() {
    let mut model = Model::new(1000, false);
    update(&mut model, Msg::LocationUnsupported);

    let rows = draw(&mut model);
    assert!(screen_contains(
        &rows,
        "Geolocation is not supported by this browser."
    ));
    assert!(screen_contains(&rows, "Unsupported"));
}

#[test]
fn renders_selected_map_link() {
    let (mut model, seq) = located_model();
    update(
        &mut model,
        Msg::FetchSucceeded {
            seq,
            shops: vec![shop(1, 10.5, 20.5, &[])],
        },
    );
    model.ui.selected_card = Some(0);

    let rows = draw(&mut model);
    assert!(screen_contains(
        &rows,
        "https://www.openstreetmap.org/?mlat=10.5&mlon=20.5#map=18/10.5/20.5"
    ));
}

#[test]
fn renders_stale_cards_dimmed_while_refreshing() {
    let (mut model, seq) = located_model();
    update(
        &mut model,
        Msg::FetchSucceeded {
            seq,
            shops: vec![shop(1, 10.5, 20.5, &[("name", "Corner Books"), ("shop", "books")])],
        },
    );

    let settled = draw_buffer(&mut model);
    assert_ne!(fg_of(&settled, "(10.5000, 20.5000)"), Color::DarkGray);

    let refresh = update(&mut model, Msg::Refresh);
    assert_eq!(refresh.len(), 1);

    let loading = draw_buffer(&mut model);
    let rows = rows_of(&loading);
    assert!(screen_contains(&rows, "Loading shops..."));
    assert!(screen_contains(&rows, "Corner Books"));
    assert_eq!(fg_of(&loading, "(10.5000, 20.5000)"), Color::DarkGray);
    // The link line belongs to settled results only
    assert!(!screen_contains(&rows, "Map: "));
}
