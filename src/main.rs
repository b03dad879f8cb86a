// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::toast::PresentationMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Toast gallery

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --config <PATH>      Read toast settings from PATH
  --mode <MODE>        centered | top-drop | banner-slide | banner-pop
  --duration <SECS>    Auto-dismiss delay, 0 disables
  --no-tap-dismiss     Taps do not dismiss toasts
  -h, --help           Print help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toast=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        no_tap_dismiss: args.contains("--no-tap-dismiss"),
        config_path: args.opt_value_from_str("--config").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config");
            None
        }),
        mode: args
            .opt_value_from_str::<_, PresentationMode>("--mode")
            .unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring --mode");
                None
            }),
        duration: args.opt_value_from_str("--duration").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --duration");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}
