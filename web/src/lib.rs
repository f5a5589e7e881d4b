use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use wasm_bindgen::prelude::*;

mod api;
mod board;

/// Options are read from the page's location hash, e.g. `#-vv&--categories=4&--api=http://localhost:3000`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    #[command(flatten)]
    board: board::BoardProps,
}

impl Args {
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).unwrap_or_else(|err| {
        gloo::console::error!(format!("ignoring location hash: {err}"));
        Args::from_location_hash("").expect("defaults must parse")
    });
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("jeopardy")
        .expect("Could not find id=\"jeopardy\" element");

    log::debug!("App started");
    yew::Renderer::<board::BoardView>::with_root_and_props(root, args.board).render();
}
