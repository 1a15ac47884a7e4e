//! Select Graphic Rendition styling for terminal output.
//!
//! The tour prints plain text interleaved with a handful of styled tokens
//! (the coloured `LEGO` word, the green `ENTER` key, the `[X]` close button).
//! `Sgr` is a read-only lookup table of parameter codes; nothing here holds
//! state.

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Resets every attribute back to the terminal default.
pub const RESET_ALL: &str = "\x1b[0m";

/// SGR parameter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgr {
    ResetAll,
    Bold,
    Italic,
    Underline,
    Invert,
    BlackF,
    RedF,
    GreenF,
    YellowF,
    BlueF,
    MagentaF,
    CyanF,
    WhiteF,
    BrightBlackF,
    BrightRedF,
    BrightGreenF,
    BrightYellowF,
    BrightBlueF,
    BrightMagentaF,
    BrightCyanF,
    BrightWhiteF,
    ResetF,
    BlackB,
    RedB,
    GreenB,
    YellowB,
    BlueB,
    MagentaB,
    CyanB,
    WhiteB,
    BrightBlackB,
    BrightRedB,
    BrightGreenB,
    BrightYellowB,
    BrightBlueB,
    BrightMagentaB,
    BrightCyanB,
    BrightWhiteB,
    ResetB,
}

impl Sgr {
    pub fn code(self) -> &'static str {
        match self {
            Sgr::ResetAll => "0",
            Sgr::Bold => "1",
            Sgr::Italic => "3",
            Sgr::Underline => "4",
            Sgr::Invert => "7",
            Sgr::BlackF => "30",
            Sgr::RedF => "31",
            Sgr::GreenF => "32",
            Sgr::YellowF => "33",
            Sgr::BlueF => "34",
            Sgr::MagentaF => "35",
            Sgr::CyanF => "36",
            Sgr::WhiteF => "37",
            Sgr::BrightBlackF => "90",
            Sgr::BrightRedF => "91",
            Sgr::BrightGreenF => "92",
            Sgr::BrightYellowF => "93",
            Sgr::BrightBlueF => "94",
            Sgr::BrightMagentaF => "95",
            Sgr::BrightCyanF => "96",
            Sgr::BrightWhiteF => "97",
            Sgr::ResetF => "39",
            Sgr::BlackB => "40",
            Sgr::RedB => "41",
            Sgr::GreenB => "42",
            Sgr::YellowB => "43",
            Sgr::BlueB => "44",
            Sgr::MagentaB => "45",
            Sgr::CyanB => "46",
            Sgr::WhiteB => "47",
            Sgr::BrightBlackB => "100",
            Sgr::BrightRedB => "101",
            Sgr::BrightGreenB => "102",
            Sgr::BrightYellowB => "103",
            Sgr::BrightBlueB => "104",
            Sgr::BrightMagentaB => "105",
            Sgr::BrightCyanB => "106",
            Sgr::BrightWhiteB => "107",
            Sgr::ResetB => "49",
        }
    }
}

/// A single escape sequence selecting one attribute.
pub fn sgr(param: Sgr) -> String {
    format!("{CSI}{}m", param.code())
}

/// Wraps `text` in the given attribute and a full reset.
pub fn paint(param: Sgr, text: &str) -> String {
    format!("{}{text}{RESET_ALL}", sgr(param))
}

/// The word LEGO with each letter in a brick colour.
pub fn lego() -> String {
    format!(
        "{}L{}E{}G{}O{RESET_ALL}",
        sgr(Sgr::BrightRedF),
        sgr(Sgr::BrightYellowF),
        sgr(Sgr::BrightGreenF),
        sgr(Sgr::BrightBlueF),
    )
}

/// The ENTER key token shown in prompts.
pub fn enter_key() -> String {
    paint(Sgr::BrightGreenF, "ENTER")
}

/// The window close button token: bright white on bright red.
pub fn x_button() -> String {
    format!(
        "{}{}[X]{RESET_ALL}",
        sgr(Sgr::BrightRedB),
        sgr(Sgr::BrightWhiteF),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_wraps_text_and_resets() {
        assert_eq!(paint(Sgr::RedF, "oops"), "\x1b[31moops\x1b[0m");
    }

    #[test]
    fn lego_colours_each_letter() {
        let token = lego();
        for code in ["\x1b[91mL", "\x1b[93mE", "\x1b[92mG", "\x1b[94mO"] {
            assert!(token.contains(code), "missing {code:?} in {token:?}");
        }
        assert!(token.ends_with(RESET_ALL));
    }

    #[test]
    fn x_button_layers_background_then_foreground() {
        assert_eq!(x_button(), "\x1b[101m\x1b[97m[X]\x1b[0m");
    }
}
