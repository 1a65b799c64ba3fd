extern crate civiltime;
use civiltime::{Instant, to_timestamp, DISPLAY_FORMAT};

use std::env;

use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("civiltime=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let now = Instant::now();
    println!("It is {} in UTC", now);
    println!("That’s {} on a twelve-hour clock", now.display("%#h:%M%P on %#d/%#m/%y"));
    println!("Unix timestamp: {}", now.to_unix_timestamp());

    for arg in env::args().skip(1) {
        let then = Instant::from_unix_timestamp(to_timestamp(&arg));
        println!("{} is {}", arg, then.format(DISPLAY_FORMAT));
    }
}
