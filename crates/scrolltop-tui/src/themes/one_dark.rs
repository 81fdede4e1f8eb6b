//! One Dark theme
//! https://github.com/atom/atom/tree/master/packages/one-dark-syntax

use crate::theme::{rgb, Theme};

pub fn default() -> Theme {
    Theme {
        bg0: rgb(0x282c34),
        bg1: rgb(0x21252b),
        bg2: rgb(0x3e4451),
        fg0: rgb(0xabb2bf),
        fg1: rgb(0x9da5b4),
        grey0: rgb(0x5c6370),
        grey1: rgb(0x7f848e),
        accent: rgb(0x56b6c2),
        selection: rgb(0x3e4451),
        error: rgb(0xe06c75),
        success: rgb(0x98c379),
        warning: rgb(0xd19a66),
        info: rgb(0x61afef),
    }
}
