//! Nord theme
//! https://www.nordtheme.com/

use crate::theme::{rgb, Theme};

pub fn default() -> Theme {
    Theme {
        // Polar Night
        bg0: rgb(0x2e3440),
        bg1: rgb(0x3b4252),
        bg2: rgb(0x434c5e),
        // Snow Storm
        fg0: rgb(0xeceff4),
        fg1: rgb(0xe5e9f0),
        grey0: rgb(0x4c566a),
        grey1: rgb(0xd8dee9),
        // Frost and Aurora
        accent: rgb(0x8fbcbb),
        selection: rgb(0x434c5e),
        error: rgb(0xbf616a),
        success: rgb(0xa3be8c),
        warning: rgb(0xd08770),
        info: rgb(0x88c0d0),
    }
}
