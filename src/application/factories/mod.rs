mod writer_factory;

pub use writer_factory::{SummaryTarget, WriterFactory};
