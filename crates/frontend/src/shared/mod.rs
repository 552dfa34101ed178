pub mod crud_panel;
pub mod icons;
