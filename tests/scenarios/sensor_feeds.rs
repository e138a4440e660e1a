//! Scenario: Sensors Drive the Registry
//!
//! Journey: Bay sensors report traffic from several threads while the
//! temperature feed samples in the background.
//!
//! Success Criteria:
//! - Every queued request gets exactly one decision, in queue order per sender
//! - Temperature samples follow the synthetic wave and stop with the feed

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crate::common::*;
use smartpark::domain::ports::SensorListener;
use smartpark::{TemperatureFeed, TemperatureWave, TrafficFeed, TrafficOutcome};

fn wait_until(timeout: Duration, mut done: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if done() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    done()
}

#[test]
fn scenario_traffic_from_many_sensors() {
    let lot = lot(20);
    let outcomes: Arc<Mutex<Vec<TrafficOutcome>>> = Arc::default();
    let recorded = Arc::clone(&outcomes);

    let (sender, handle) = TrafficFeed::new(Arc::clone(&lot.registry))
        .with_observer(move |_request, outcome| recorded.lock().unwrap().push(outcome.clone()))
        .spawn()
        .unwrap();

    let sensors: Vec<_> = (0..4)
        .map(|bay| {
            let sender = sender.clone();
            thread::spawn(move || {
                for n in 0..5 {
                    let plate = format!("BAY{bay}-{n}");
                    assert!(sender.car_arrived(Some(plate.as_str()), Some("Mazda"), None));
                }
                for n in 0..2 {
                    let plate = format!("BAY{bay}-{n}");
                    assert!(sender.car_left(Some(plate.as_str())));
                }
            })
        })
        .collect();
    for sensor in sensors {
        sensor.join().unwrap();
    }
    handle.stop();

    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes.len(), 4 * 7);
    assert_eq!(lot.registry.free_spaces(), 20 - 4 * 3);
    assert_eq!(lot.registry.cars_currently_parked().len(), 12);
    assert!(outcomes.iter().all(|o| o.free_spaces() <= 20));

    // The sender outlives the stopped feed but reports the failure.
    assert!(!sender.car_left(Some("BAY0-4")));
}

#[test]
fn scenario_temperature_feed_follows_wave() {
    let lot = lot(5);
    let listener: Arc<dyn SensorListener> = lot.registry.clone();
    let feed = TemperatureFeed::spawn(listener, TemperatureWave::new(), Duration::from_millis(5))
        .unwrap();

    let log = Arc::clone(&lot.log);
    assert!(
        wait_until(Duration::from_secs(5), || log.len() >= 3),
        "temperature feed produced no samples"
    );
    feed.stop();

    let samples = lot.log.messages();
    assert_eq!(samples[0], "Temperature reading: 20.5");
    assert_eq!(samples[1], "Temperature reading: 21.0");
    assert_eq!(samples[2], "Temperature reading: 21.5");

    let settled = lot.log.len();
    thread::sleep(Duration::from_millis(30));
    assert_eq!(lot.log.len(), settled, "samples arrived after stop");
}
