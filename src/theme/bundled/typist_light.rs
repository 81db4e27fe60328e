//! Typist Light - Default light theme for bright terminals

pub const THEME: &str = r##"# Typist Light theme for typist
# Default light theme for bright terminals

[meta]
name = "Typist Light"
version = 1
author = "typist"

[ui]
background = "#fbf1c7"
foreground = "#3c3836"
title = "#076678"
muted = "#a89984"

[typing]
untyped = "#a89984"
input = "#79740e"
error = "#9d0006"
partial_error = "#b57614"
cursor = "#282828"
"##;
