#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::error;

use visitantes_ui::{component::text, font, theme};

use visitantes_gui::{
    app,
    dir::VisitantesDirectory,
    gui::{Config, GUI},
    logger::parse_log_level,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(VisitantesDirectory),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: visitantes-gui [OPTIONS]

Options:
    --datadir <PATH>    Path of visitantes datadir
    -v, --version       Display visitantes-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut args = args.iter().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--datadir" {
            if let Some(a) = args.next() {
                res.push(Arg::DatadirPath(VisitantesDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else {
            return Err(format!("unknown argument '{}'", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let datadir = match args.as_slice() {
        [] => VisitantesDirectory::new_default()?,
        [Arg::DatadirPath(datadir_path)] => datadir_path.clone(),
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    if !datadir.exists() {
        datadir.init()?;
    }

    let app_config = app::Config::load(&datadir.config_path())?;
    let log_level = parse_log_level()?;

    setup_panic_hook();

    let config = Config::new(datadir, app_config);

    let settings = Settings {
        id: Some("Visitantes".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        size: Size {
            width: 640.0,
            height: 760.0,
        },
        position: iced::window::Position::Centered,
        min_size: Some(Size {
            width: 420.0,
            height: 520.0,
        }),
        exit_on_close_request: false,
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "Visitantes".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .scale_factor(GUI::scale_factor)
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((config, log_level)))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split(' ').map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(parse_args(args("visitantes-gui --meth")).is_err());
        assert!(parse_args(args("visitantes-gui --datadir")).is_err());
        assert_eq!(Some(vec![]), parse_args(args("visitantes-gui")).ok());
        assert_eq!(
            Some(vec![Arg::DatadirPath(VisitantesDirectory::new(
                PathBuf::from("hello")
            ))]),
            parse_args(args("visitantes-gui --datadir hello")).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::DatadirPath(VisitantesDirectory::new(PathBuf::from("a"))),
                Arg::DatadirPath(VisitantesDirectory::new(PathBuf::from("b"))),
            ]),
            parse_args(args("visitantes-gui --datadir a --datadir b")).ok()
        );
    }
}
