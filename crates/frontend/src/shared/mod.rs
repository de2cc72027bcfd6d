pub mod bootstrap;
pub mod history;
pub mod icons;
pub mod modal_frame;
