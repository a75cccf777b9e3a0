use crate::bst::{Link, Tree};

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// Absent links are black.
pub fn is_red<T, U>(tree: &Tree<T, U, Color>, link: Link) -> bool {
    match link {
        Some(handle) => tree.node(handle).tag == Color::Red,
        None => false,
    }
}

pub fn set_color<T, U>(tree: &mut Tree<T, U, Color>, link: Link, color: Color) {
    if let Some(handle) = link {
        tree.node_mut(handle).tag = color;
    }
}
