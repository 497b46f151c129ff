pub mod consts;
pub mod payload;
pub mod report;
pub mod runner;
pub mod transport;
