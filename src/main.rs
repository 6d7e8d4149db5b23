extern crate env_logger;
extern crate grainbrot;

use grainbrot::Config;

pub fn main() {
    env_logger::init();

    if let Err(e) = grainbrot::run(&Config::default()) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
