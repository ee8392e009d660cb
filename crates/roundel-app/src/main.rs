//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting Roundel");

    pollster::block_on(roundel_app::App::run());
}
