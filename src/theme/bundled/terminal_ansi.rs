//! Terminal ANSI - Uses your terminal's native ANSI colors

pub const THEME: &str = r##"# Terminal ANSI theme for typist
# Uses your terminal's native ANSI colors - adapts to your terminal theme!
#
# This theme uses "ansi:X" syntax instead of hex colors:
# - ansi:0-7 = standard colors (black, red, green, yellow, blue, magenta, cyan, white)
# - ansi:8-15 = bright variants
# - ansi:fg = terminal's default foreground
# - ansi:bg = terminal's default background (transparent)

[meta]
name = "Terminal ANSI"
version = 1
author = "typist"

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
title = "ansi:6"
muted = "ansi:8"

[typing]
untyped = "ansi:8"
input = "ansi:2"
error = "ansi:1"
partial_error = "ansi:3"
cursor = "ansi:fg"
"##;
