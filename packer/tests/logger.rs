use log::LevelFilter;
use packer::io;

#[test]
fn logger_is_installed_once() {
    assert!(io::init_logger(LevelFilter::Off).is_ok());
    assert!(io::init_logger(LevelFilter::Off).is_err());
}
