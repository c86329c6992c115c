mod cli;
mod commands;

use cli::{DumpParams, SizeParams, build_cli};

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("size", m)) => {
            let params = SizeParams::from_matches(m);
            commands::size::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
