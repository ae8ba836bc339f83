//! Entry point for the WASM application

pub fn main() {
    graminscore_ui::run()
}
