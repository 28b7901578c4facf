pub mod app;
pub mod copy;
pub mod event;
pub mod input;
pub mod keymap;
pub mod nav;
pub mod pages;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::App;
pub use pages::Page;
pub use themes::load_theme;
