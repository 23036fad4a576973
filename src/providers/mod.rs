pub mod wise;
