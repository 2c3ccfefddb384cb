mod api;
mod dom;
mod mount;

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");

    if let Err(e) = mount::mount() {
        log::error!("Chat widget failed to start: {e}");
    }
}
