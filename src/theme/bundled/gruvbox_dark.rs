//! Gruvbox Dark - Retro groove color scheme

pub const THEME: &str = r##"# Gruvbox Dark theme for typist
# Retro groove color scheme

[meta]
name = "Gruvbox Dark"
version = 1
author = "iTerm2-Color-Schemes"

[ui]
background = "#282828"
foreground = "#ebdbb2"
title = "#8ec07c"
muted = "#928374"

[typing]
untyped = "#928374"
input = "#b8bb26"
error = "#fb4934"
partial_error = "#fabd2f"
cursor = "#fbf1c7"
"##;
