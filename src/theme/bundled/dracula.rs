//! Dracula - Dark theme with vivid accents

pub const THEME: &str = r##"# Dracula theme for typist
# Dark theme with vivid accents

[meta]
name = "Dracula"
version = 1
author = "iTerm2-Color-Schemes"

[ui]
background = "#282a36"
foreground = "#f8f8f2"
title = "#bd93f9"
muted = "#6272a4"

[typing]
untyped = "#6272a4"
input = "#50fa7b"
error = "#ff5555"
partial_error = "#f1fa8c"
cursor = "#f8f8f2"
"##;
