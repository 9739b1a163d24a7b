pub use self::{
    board_display::BoardDisplay,
    key_binding_display::{KeyBinding, KeyBindingDisplay},
    text::{render_board, render_status},
};

mod board_display;
mod key_binding_display;
mod text;
