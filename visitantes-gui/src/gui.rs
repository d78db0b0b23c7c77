use std::sync::Arc;

use iced::{window, Subscription, Task};
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use visitantes_ui::widget::Element;

use crate::{
    app::{self, App},
    dir::VisitantesDirectory,
    logger::setup_logger,
    services::visitantes::VisitantesClient,
    VERSION,
};

pub struct GUI {
    app: App,
    config: Config,
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    App(app::Message),
    CloseRequested(window::Id),
}

impl From<app::Message> for Message {
    fn from(value: app::Message) -> Self {
        Self::App(value)
    }
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Visitantes v{}", VERSION)
    }

    pub fn new((config, log_level): (Config, Option<LevelFilter>)) -> (GUI, Task<Message>) {
        // The file was validated on load, a bad level never reaches here.
        let log_level = log_level.unwrap_or_else(|| {
            config
                .app_config
                .log_level()
                .unwrap_or(LevelFilter::INFO)
        });
        if let Err(e) = setup_logger(log_level, config.visitantes_directory.clone()) {
            warn!("Error while setting up the logger: {}", e);
        }
        info!(
            "Starting visitantes-gui v{} with data directory {}",
            VERSION,
            config.visitantes_directory.path().display()
        );
        if let Some(notice) = config.defaults_notice() {
            info!("{}", notice);
        }

        let api_url = config.app_config.api_url().to_string();
        info!("Using visitors API at {}", api_url);
        let (app, task) = App::new(Arc::new(VisitantesClient::new(api_url)));
        (
            Self { app, config },
            Task::batch(vec![
                task.map(Message::App),
                Task::perform(ctrl_c(), |_| Message::CtrlC),
            ]),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::App(msg) => self.app.update(msg).map(Message::App),
            Message::CloseRequested(id) => {
                self.stop();
                window::close(id)
            }
            Message::CtrlC => {
                self.stop();
                window::get_latest().and_then(window::close)
            }
        }
    }

    fn stop(&mut self) {
        info!(
            "Closing, logs are kept in {}",
            self.config.visitantes_directory.path().display()
        );
        self.app.stop();
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::close_requests().map(Message::CloseRequested)
    }

    pub fn view(&self) -> Element<Message> {
        self.app.view().map(Message::App)
    }

    pub fn scale_factor(&self) -> f64 {
        1.0
    }
}

pub struct Config {
    pub visitantes_directory: VisitantesDirectory,
    app_config: app::Config,
}

impl Config {
    pub fn new(visitantes_directory: VisitantesDirectory, app_config: app::Config) -> Self {
        Self {
            visitantes_directory,
            app_config,
        }
    }

    /// Set when `gui.toml` is absent and the defaults are in use.
    fn defaults_notice(&self) -> Option<String> {
        let path = self.visitantes_directory.config_path();
        (!path.exists()).then(|| {
            format!(
                "No configuration file at {}, using defaults",
                path.display()
            )
        })
    }
}
