pub mod icons;
pub mod output;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, line, name, warn};
pub use theme::{theme, Theme};
