//! The reference document.
//!
//! These are the values a missing config section falls back to: a
//! super-key setup with vi-style navigation, seven icon-labelled groups, a
//! six-color palette and one top bar.  The group and text-box labels are
//! Nerd Font glyphs.

use crate::bar::{Bar, Screen, Widget, WidgetKind};
use crate::command::{Command, Direction};
use crate::group::Group;
use crate::keys::{Key, Modifier};
use crate::layout::{LayoutKind, LayoutSpec};
use crate::mouse::{Button, MouseAction};
use crate::palette::{ColorPair, Palette, PaletteRef};
use crate::params::Params;
use crate::rules::Match;

pub const MODKEY: Modifier = Modifier::Mod4;
pub const TERMINAL: &str = "tilix";

const BLACK: usize = 0;
const WHITE: usize = 1;
const RED: usize = 2;
const YELLOW: usize = 3;

const SEPARATOR: &str = "\u{eb6f}";

/// The hand-written key table (group keys are appended at resolve time).
pub fn keys(modkey: Modifier, terminal: &str) -> Vec<Key> {
    use Direction::{Down, Left, Right, Up};
    use Modifier::{Control, Shift};

    let m = [modkey];
    let ms = [modkey, Shift];
    let mc = [modkey, Control];
    vec![
        // Focus
        Key::new(m, "h", Command::Focus(Left)).desc("Move focus to left"),
        Key::new(m, "l", Command::Focus(Right)).desc("Move focus to right"),
        Key::new(m, "j", Command::Focus(Down)).desc("Move focus down"),
        Key::new(m, "k", Command::Focus(Up)).desc("Move focus up"),
        Key::new(m, "space", Command::FocusNext).desc("Move window focus to other window"),
        // Shuffle
        Key::new(ms, "h", Command::Shuffle(Left)).desc("Move window to the left"),
        Key::new(ms, "l", Command::Shuffle(Right)).desc("Move window to the right"),
        Key::new(ms, "j", Command::Shuffle(Down)).desc("Move window down"),
        Key::new(ms, "k", Command::Shuffle(Up)).desc("Move window up"),
        // Grow
        Key::new(mc, "h", Command::Grow(Left)).desc("Grow window to the left"),
        Key::new(mc, "l", Command::Grow(Right)).desc("Grow window to the right"),
        Key::new(mc, "j", Command::Grow(Down)).desc("Grow window down"),
        Key::new(mc, "k", Command::Grow(Up)).desc("Grow window up"),
        Key::new(m, "n", Command::Normalize).desc("Reset all window sizes"),
        Key::new(ms, "Return", Command::ToggleSplit)
            .desc("Toggle between split and unsplit sides of stack"),
        // Launchers
        Key::new(m, "Return", Command::Spawn(terminal.to_string())).desc("Launch terminal"),
        Key::new(m, "g", Command::Spawn("google-chrome-stable".into())).desc("Launch Google Chrome"),
        Key::new(m, "f", Command::Spawn("firefox".into())).desc("Launch Firefox"),
        Key::new(m, "m", Command::Spawn("rofi -show drun".into())).desc("Launch application menu"),
        // Session
        Key::new(m, "Tab", Command::NextLayout).desc("Toggle between layouts"),
        Key::new(m, "w", Command::KillWindow).desc("Kill focused window"),
        Key::new(mc, "r", Command::Restart).desc("Restart the window manager"),
        Key::new(mc, "q", Command::Shutdown).desc("Shut down the window manager"),
        Key::new(m, "r", Command::SpawnPrompt).desc("Spawn a command using a prompt widget"),
    ]
}

pub fn groups() -> Vec<Group> {
    [
        "\u{f2d0} ", "\u{f268} ", "\u{f269} ", "\u{f17a} ", "\u{f1bc} ", "\u{f11b} ", "\u{f1b6} ",
    ]
    .into_iter()
    .map(Group::new)
    .collect()
}

pub fn palette() -> Palette {
    Palette::new(
        ["#000000", "#ffffff", "#d60000", "#ffc812", "#ff9166", "#ff3d3d"]
            .into_iter()
            .map(ColorPair::solid)
            .collect(),
    )
}

pub fn layouts() -> Vec<LayoutSpec> {
    vec![
        LayoutSpec::with_params(
            LayoutKind::Columns,
            Params::new()
                .int("border_width", 1)
                .int("margin", 20)
                .color("border_focus", PaletteRef::foreground(WHITE)),
        ),
        LayoutSpec::new(LayoutKind::Max),
    ]
}

fn on_black(fg: usize) -> Params {
    Params::new()
        .color("foreground", PaletteRef::pair(fg))
        .color("background", PaletteRef::pair(BLACK))
}

fn separator() -> Widget {
    Widget::new(
        WidgetKind::TextBox,
        on_black(YELLOW).text("text", SEPARATOR).int("padding", 10).int("fontsize", 25),
    )
}

fn top_bar() -> Bar {
    let widgets = vec![
        Widget::new(
            WidgetKind::TextBox,
            on_black(RED).text("text", "\u{e711} ").int("fontsize", 25),
        ),
        Widget::new(
            WidgetKind::GroupBox,
            on_black(WHITE)
                .int("fontsize", 13)
                .int("margin_y", 3)
                .int("margin_x", 20)
                .int("padding_x", 5)
                .int("borderwidth", 3)
                .color("active", PaletteRef::pair(WHITE))
                .color("inactive", PaletteRef::pair(WHITE))
                .flag("rounded", false)
                .text("highlight_method", "line")
                .color("this_current_screen_border", PaletteRef::pair(RED))
                .color("this_screen_border", PaletteRef::pair(BLACK))
                .color("other_current_screen_border", PaletteRef::pair(BLACK))
                .color("other_screen_border", PaletteRef::pair(BLACK)),
        ),
        Widget::new(
            WidgetKind::Spacer,
            Params::new().color("background", PaletteRef::pair(BLACK)),
        ),
        separator(),
        Widget::new(
            WidgetKind::Systray,
            on_black(WHITE).int("padding", 5).int("margin", 0),
        ),
        separator(),
        Widget::new(
            WidgetKind::TextBox,
            on_black(WHITE)
                .text("text", "\u{f027}")
                .int("margin", 0)
                .int("padding", 5)
                .int("fontsize", 25),
        ),
        Widget::new(WidgetKind::Volume, on_black(WHITE).int("padding", 5)),
        separator(),
        Widget::new(
            WidgetKind::Clock,
            on_black(WHITE)
                .int("padding", 10)
                .text("format", "%A, %B %d - %H:%M "),
        ),
    ];
    Bar::new(widgets, 30).opacity(0.9)
}

pub fn screens() -> Vec<Screen> {
    vec![Screen::with_top(top_bar())]
}

pub fn mouse(modkey: Modifier) -> Vec<MouseAction> {
    let m = crate::keys::mods([modkey]);
    vec![
        MouseAction::Drag {
            mods: m.clone(),
            button: Button::LEFT,
            command: Command::SetPositionFloating,
            start: Some(Command::GetPosition),
        },
        MouseAction::Drag {
            mods: m.clone(),
            button: Button::RIGHT,
            command: Command::SetSizeFloating,
            start: Some(Command::GetSize),
        },
        MouseAction::Click {
            mods: m,
            button: Button::MIDDLE,
            command: Command::BringToFront,
        },
    ]
}

/// Extra float rules on top of [`default_float_rules`](crate::rules::default_float_rules).
pub fn float_rules() -> Vec<Match> {
    vec![
        Match::WmClass("confirmreset".into()),
        Match::WmClass("makebranch".into()),
        Match::WmClass("maketag".into()),
        Match::WmClass("ssh-askpass".into()),
        Match::Title("branchdialog".into()),
        Match::Title("pinentry".into()),
    ]
}

pub fn autostart() -> Vec<String> {
    vec![
        "setxkbmap us".into(),
        "picom --no-fading-openclose --no-vsync &".into(),
        "nitrogen --restore".into(),
    ]
}
