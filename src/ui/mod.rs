pub mod indicators;
pub mod labels;
pub mod slide_frame;
pub mod slideshow;
