//! chipin frontend - Dioxus app.
//! Default: web (dx serve). Desktop: cargo run --features desktop.

#[cfg(any(feature = "web", feature = "desktop"))]
fn main() {
    use chipin_frontend::app::App;
    dioxus::launch(App);
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
fn main() {
    eprintln!("chipin-frontend needs a platform feature: --features web or --features desktop");
    std::process::exit(1);
}
