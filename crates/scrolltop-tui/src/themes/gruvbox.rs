//! Gruvbox theme
//! https://github.com/morhetz/gruvbox

use crate::theme::{rgb, Theme};

pub fn dark() -> Theme {
    Theme {
        bg0: rgb(0x282828),
        bg1: rgb(0x32302f),
        bg2: rgb(0x45403d),
        fg0: rgb(0xd4be98),
        fg1: rgb(0xddc7a1),
        grey0: rgb(0x7c6f64),
        grey1: rgb(0xa89984),
        accent: rgb(0x89b482),
        selection: rgb(0x45403d),
        error: rgb(0xea6962),
        success: rgb(0xa9b665),
        warning: rgb(0xe78a4e),
        info: rgb(0x7daea3),
    }
}

pub fn light() -> Theme {
    Theme {
        bg0: rgb(0xfbf1c7),
        bg1: rgb(0xf2e5bc),
        bg2: rgb(0xebdbb2),
        fg0: rgb(0x654735),
        fg1: rgb(0x4f3829),
        grey0: rgb(0xa89984),
        grey1: rgb(0x7c6f64),
        accent: rgb(0x4c7a5d),
        selection: rgb(0xebdbb2),
        error: rgb(0xc14a4a),
        success: rgb(0x6c782e),
        warning: rgb(0xc35e0a),
        info: rgb(0x45707a),
    }
}
