pub mod flashcard;
pub mod home;
pub mod progress_bar;
pub mod quiz;
pub mod stats;
pub mod tab_bar;
pub mod toast;
pub mod weekly_activity;
