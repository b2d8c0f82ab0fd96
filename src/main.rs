// SPDX-License-Identifier: MPL-2.0
use iced_moon::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        image_url: args.opt_value_from_str("--url").unwrap_or(None),
    };

    app::run(flags)
}
