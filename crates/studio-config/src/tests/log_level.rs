use crate::LogLevel;

use log::LevelFilter;

#[test]
fn given_known_level_names_when_parse_then_maps_to_filter() {
    assert_eq!(LogLevel::parse_lenient("off").0, LevelFilter::Off);
    assert_eq!(LogLevel::parse_lenient("ERROR").0, LevelFilter::Error);
    assert_eq!(LogLevel::parse_lenient(" debug ").0, LevelFilter::Debug);
    assert_eq!(LogLevel::parse_lenient("trace").0, LevelFilter::Trace);
}

#[test]
fn given_unknown_level_when_parse_then_defaults_to_info() {
    let level: LogLevel = "verbose".parse().unwrap();

    assert_eq!(level.0, LevelFilter::Info);
}
