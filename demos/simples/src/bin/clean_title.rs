use voat_client::utils::{clean_title, setup_logger};
use tracing::info;

fn main() {
    setup_logger();

    for title in std::env::args().skip(1) {
        info!("{:?} -> {:?}", title, clean_title(&title));
    }
}
