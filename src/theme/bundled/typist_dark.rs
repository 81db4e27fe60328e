//! Typist Dark - Default dark theme, warm low-contrast palette

pub const THEME: &str = r##"# Typist Dark theme for typist
# Default dark theme, warm low-contrast palette

[meta]
name = "Typist Dark"
version = 1
author = "typist"

[ui]
background = "#1d2021"
foreground = "#d5c4a1"
title = "#83a598"
muted = "#665c54"

[typing]
untyped = "#665c54"
input = "#b8bb26"
error = "#fb4934"
partial_error = "#fabd2f"
cursor = "#ebdbb2"
"##;
