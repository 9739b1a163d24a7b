pub use self::{board::*, layout::*, moves::*, player::*, score::*};

pub(crate) mod board;
pub(crate) mod layout;
pub(crate) mod moves;
pub(crate) mod player;
pub(crate) mod score;
