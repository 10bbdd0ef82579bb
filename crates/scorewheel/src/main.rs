use clap::{Parser, Subcommand};
use dial::chart::Chart;
use dial::rotation::RotationValue;
use relm4::prelude::*;
use scorewheel::config;
use scorewheel::gui::app::AppModel;
use scorewheel::gui::wheel::WheelModel;
use scorewheel::sys::runtime;

#[derive(Parser, Debug)]
#[command(name = "scorewheel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print the wheel's pie chart as SVG
    Chart {
        /// Width and height of the image in pixels
        #[arg(short, long, default_value_t = 300.0)]
        size: f64,
    },
    /// Write the default config file if none exists and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Some(Commands::Chart { size }) => {
            println!("{}", Chart::build(size)?.to_svg());
            return Ok(());
        }
        Some(Commands::InitConfig) => {
            println!("{}", config::write_default_config()?.display());
            return Ok(());
        }
        None => {}
    }

    let config = config::load_or_default();
    let wheel = WheelModel::new(&config, RotationValue::default())?;

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.scorewheel.app").with_args(Vec::new());

    app.run::<AppModel>((config, wheel, rx));
    Ok(())
}
