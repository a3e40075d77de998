mod app;
mod config;
mod core;
mod ui;

fn main() -> cosmic::iced::Result {
    env_logger::init();

    // The stored theme preference is read before the app starts so the
    // window never flashes the wrong theme.
    let storage = core::storage::FileStore::open();

    let settings = cosmic::app::Settings::default()
        .theme(config::startup_theme(&storage))
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(900.0)
                .min_height(480.0),
        );

    cosmic::app::run::<app::AppModel>(settings, ())
}
