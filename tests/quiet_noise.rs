// tests/quiet_noise.rs
use log::{Level, LevelFilter, Log, Metadata, Record};
use rover_fleet::Fleet;
use std::sync::Mutex;

struct Recorder {
    levels: Mutex<Vec<Level>>,
}

impl Log for Recorder {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut levels) = self.levels.lock() {
            levels.push(record.level());
        }
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder {
    levels: Mutex::new(Vec::new()),
};

#[test]
fn test_dropped_characters_stay_below_info() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut fleet = Fleet::new(5, 5).unwrap();
    fleet.deploy_rover(0, 0, 0, None).unwrap();
    fleet.command(0, "M M, then M!  ").unwrap();
    assert_eq!(fleet.locate(0).unwrap().as_tuple(), (0, 3, 0));

    let levels = RECORDER.levels.lock().unwrap();
    assert!(levels.contains(&Level::Debug));
    assert!(
        levels.iter().all(|l| *l >= Level::Info),
        "noise in a command string must not warn: {levels:?}"
    );
}
