pub mod view;

pub use view::PanelView;
