//! Dracula theme
//! https://draculatheme.com/

use crate::theme::{rgb, Theme};

pub fn default() -> Theme {
    Theme {
        bg0: rgb(0x282a36),
        bg1: rgb(0x21222c),
        bg2: rgb(0x44475a),
        fg0: rgb(0xf8f8f2),
        fg1: rgb(0xe9e9ea),
        grey0: rgb(0x6272a4),
        grey1: rgb(0x7a7c8d),
        accent: rgb(0xbd93f9),
        selection: rgb(0x44475a),
        error: rgb(0xff5555),
        success: rgb(0x50fa7b),
        warning: rgb(0xffb86c),
        info: rgb(0x8be9fd),
    }
}
