//! Default semantic palette (Catppuccin Mocha-inspired, matching the
//! terminal theme the renderers were first tuned against).

pub fn string_color() -> [u8; 3] {
    [166, 227, 161] // green
}

pub fn number_color() -> [u8; 3] {
    [249, 226, 175] // warm gold
}

pub fn boolean_color() -> [u8; 3] {
    [203, 166, 247] // mauve
}

pub fn null_color() -> [u8; 3] {
    [108, 112, 134] // overlay0
}

pub fn callable_color() -> [u8; 3] {
    [137, 180, 250] // blue
}

pub fn symbol_color() -> [u8; 3] {
    [245, 194, 231] // pink
}

pub fn date_color() -> [u8; 3] {
    [116, 199, 236] // sapphire
}

pub fn pattern_color() -> [u8; 3] {
    [235, 160, 172] // maroon
}

pub fn error_color() -> [u8; 3] {
    [243, 139, 168] // red
}

pub fn container_color() -> [u8; 3] {
    [205, 214, 244] // text
}

pub fn key_color() -> [u8; 3] {
    [148, 226, 213] // teal
}

pub fn guide_color() -> [u8; 3] {
    [108, 112, 134] // overlay0
}

pub fn marker_color() -> [u8; 3] {
    [147, 153, 178] // overlay2
}

pub fn title_color() -> [u8; 3] {
    [186, 194, 222] // subtext0
}
