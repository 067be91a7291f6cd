//! Play the Launchpad X as a 19-EDO instrument.
//!
//! Usage: `cargo run --example play [config.json]`. Press Enter to quit.
//!
//! Prints the note translation table on startup; install it in whatever turns the pad notes
//! into sound, so that each pad id arrives as its tuned pitch.
use std::io::stdin;
use std::sync::mpsc;
use std::time::Duration;

use launchy_edo::{launchpad_x, Config, InputDevice as _, Instrument, OutputDevice as _};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::read(path)?,
        None => Config::default(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let output = launchpad_x::Output::guess_with_keyword(&config.device_keyword)?;
    let input = launchpad_x::Input::guess_polling(&config.device_keyword)?;

    let mut instrument = Instrument::from_config(&config, output)?;

    let table = instrument.input_translation_table();
    println!("note translation table: {:?}", &table.as_array()[..]);

    instrument.start()?;
    let stale = input.drain();
    if stale > 0 {
        log::debug!("dropped {} queued messages", stale);
    }

    let (quit_sender, quit_receiver) = mpsc::channel();
    std::thread::spawn(move || {
        let mut line = String::new();
        let _ = stdin().read_line(&mut line);
        let _ = quit_sender.send(());
    });

    println!("playing, press Enter to quit");
    while quit_receiver.try_recv().is_err() {
        if let Some(message) = input.recv_timeout(Duration::from_millis(10)) {
            instrument.handle_message(&message)?;
        }
    }

    instrument.stop()?;
    Ok(())
}
