//! Nord - Arctic, bluish color palette

pub const THEME: &str = r##"# Nord theme for typist
# Arctic, bluish color palette

[meta]
name = "Nord"
version = 1
author = "iTerm2-Color-Schemes"

[ui]
background = "#2e3440"
foreground = "#d8dee9"
title = "#88c0d0"
muted = "#4c566a"

[typing]
untyped = "#4c566a"
input = "#a3be8c"
error = "#bf616a"
partial_error = "#ebcb8b"
cursor = "#eceff4"
"##;
