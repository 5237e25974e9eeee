//! CLI entrypoint: query a local routed daemon from the command line.
//!
//! Arguments are `lat,lon` waypoints. Prints the raw `viaroute` response
//! followed by the raw `distmatrix` response.
#![forbid(unsafe_code)]

use std::env;
use std::process;

use routed_client::geo::GeoPoint;
use routed_client::routed::{RoutedClient, RoutedConfig};

fn main() {
    let points = parse_points(env::args().skip(1));
    if points.is_empty() {
        eprintln!("usage: routed-query LAT,LON [LAT,LON ...]");
        process::exit(2);
    }

    if let Err(err) = run(&points) {
        eprintln!("routed-query: {err}");
        process::exit(1);
    }
}

fn run(points: &[GeoPoint]) -> Result<(), Box<dyn std::error::Error>> {
    let client = RoutedClient::new(RoutedConfig::default())?;
    println!("{}", client.route(points)?.body);
    println!("{}", client.distance_matrix(points)?.body);
    Ok(())
}

/// Parse `lat,lon` tokens. Malformed tokens are skipped with a warning
/// rather than dropped silently.
fn parse_points(args: impl Iterator<Item = String>) -> Vec<GeoPoint> {
    let mut points = Vec::new();
    for arg in args {
        match parse_pair(&arg) {
            Some(point) => points.push(point),
            None => eprintln!("routed-query: skipping malformed waypoint {arg:?}"),
        }
    }
    points
}

fn parse_pair(token: &str) -> Option<GeoPoint> {
    let (lat, lon) = token.split_once(',')?;
    let latitude = lat.trim().parse().ok()?;
    let longitude = lon.trim().parse().ok()?;
    Some(GeoPoint::new(latitude, longitude))
}
