//! Frontend application entry point.

use frontend::app::App;

fn main() {
    // with the `server` feature this also serves the server functions
    dioxus::launch(App);
}
