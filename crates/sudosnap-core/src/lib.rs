pub mod board;
pub mod classify;
pub mod consts;
pub mod error;
pub mod frame;
pub mod grid;
pub mod mapper;
pub mod pipeline;
pub mod preprocess;
pub mod replay;
pub mod segment;
pub mod solver;
pub mod source;
