extern crate self as speak_people;

use clap::{App, Arg};
use env_logger::Env;
use failure::Error;
use log::{debug, error};

mod locale;
mod request;
mod resources;
mod response;
mod site;
mod skill;

fn main() {
    env_logger::from_env(Env::default().default_filter_or("speak_people=info")).init();

    let matches = App::new("speak-people")
        .about("Self hosted Alexa skill that teaches the terms and acronyms used daily at GSW")
        .arg(
            Arg::with_name("bind")
                .long("bind")
                .takes_value(true)
                .default_value("0.0.0.0:8086")
                .help("Address the skill endpoint listens on"),
        )
        .get_matches();

    let bind = matches.value_of("bind").unwrap();

    // A locale table missing keys is a deploy defect, refuse to serve.
    resources::verify().unwrap();

    speak_people::site::run(bind).unwrap();
}

/// Log an error with its cause chain. Backtrace goes to debug to keep
/// request logs readable.
pub fn log_error(e: &Error) {
    error!("{}", e);
    for cause in e.iter_causes() {
        error!("Caused by: {}", cause);
    }
    debug!("{}", e.backtrace());
}
