pub mod answer;
pub mod entry;
pub mod pick;
pub mod prop;
pub mod settings;
