pub mod components {
    pub use crate::components::*;
}

pub mod contracts {
    pub use crate::contracts::*;
}

pub mod style {
    pub use crate::style::*;
}

pub mod theme {
    pub use crate::theme::*;
}

pub mod tokens {
    pub use crate::tokens::*;
}
