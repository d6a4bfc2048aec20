//! Elastic notification badge: a draggable filled circle connected to its
//! anchor point by a stretching tangent-based blob.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

mod badge;
mod gui;
mod render;

const TITLE: &str = "Elastic Badge";

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("Failed to initialize logger");
    gui::show_gui();
}
