pub mod kvfile;
pub mod run;
