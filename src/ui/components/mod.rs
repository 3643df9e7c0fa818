pub mod control_strip;
pub mod wave_view;
