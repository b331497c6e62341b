use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use viator::controller::Controller;
use viator::entities::GeoPoint;
use viator::external::RoutingService;
use viator::map::{ConsolePanel, HeadlessMap};
use viator::session::{self, Event};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let (sender, receiver) = async_channel::unbounded();

    tokio::spawn(read_events(sender));

    let mut client = Controller::new(
        HeadlessMap::new(),
        ConsolePanel::new(),
        Arc::new(RoutingService::new()),
    );

    session::run(&mut client, receiver).await;
}

/// Turns stdin lines into session events:
/// `click <lat> <lng>`, `route`, `clear`, `quit`.
async fn read_events(sender: async_channel::Sender<Event>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let fields: Vec<&str> = line.split_whitespace().collect();

        let event = match fields.as_slice() {
            ["click", lat, lng] => {
                let (Ok(latitude), Ok(longitude)) = (lat.parse::<f64>(), lng.parse::<f64>())
                else {
                    eprintln!("usage: click <lat> <lng>");
                    continue;
                };

                match GeoPoint::new(latitude, longitude) {
                    Ok(point) => Event::MapClick(point),
                    Err(_) => {
                        eprintln!("coordinates out of range");
                        continue;
                    }
                }
            }
            ["route"] => Event::CalculateRoute,
            ["clear"] => Event::Clear,
            ["quit"] => break,
            [] => continue,
            _ => {
                eprintln!("commands: click <lat> <lng>, route, clear, quit");
                continue;
            }
        };

        if sender.send(event).await.is_err() {
            break;
        }
    }
}
