// SPDX-License-Identifier: MPL-2.0
use cat_gallery::app::{self, paths, Flags};

const HELP: &str = "\
Cat Gallery

USAGE:
  cat_gallery [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
  --lang <id>             Interface language (e.g. en-US, fr)
  --config-dir <path>     Directory holding settings.toml
                          (overrides CAT_GALLERY_CONFIG_DIR)

ENVIRONMENT:
  RUST_LOG                Log filter (default: info)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Ignoring {key}: {err}");
            None
        }
    }
}
