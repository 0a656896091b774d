#![windows_subsystem = "windows"]

mod database;
mod dictionary;
mod error;
mod gui;
mod render;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

fn main() {
    gui::run().unwrap();
}
